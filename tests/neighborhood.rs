use orifinder::kmer::matching::{count_matches, find_matches};
use orifinder::kmer::neighborhood::neighborhood;
use orifinder::kmer::reverse_complement;

fn hamming(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).filter(|(x, y)| x != y).count()
}

fn all_kmers(k: usize) -> Vec<Vec<u8>> {
    (0..4usize.pow(k as u32))
        .map(|code| {
            (0..k)
                .map(|i| b"ACGT"[(code >> (2 * (k - 1 - i))) & 3])
                .collect()
        })
        .collect()
}

#[test]
fn test_neighborhood_is_the_hamming_ball() {
    for seed in [&b"ACG"[..], b"TTAT", b"GGGG"] {
        for d in 0..=seed.len() {
            let ball = neighborhood(seed, d).unwrap();
            for kmer in all_kmers(seed.len()) {
                assert_eq!(
                    ball.contains(&kmer),
                    hamming(&kmer, seed) <= d,
                    "seed {:?} d {} kmer {:?}",
                    seed,
                    d,
                    kmer
                );
            }
        }
    }
}

#[test]
fn test_neighborhood_sizes() {
    // sum_{i<=d} C(9, i) * 3^i
    assert_eq!(neighborhood(b"TTATCCACA", 0).unwrap().len(), 1);
    assert_eq!(neighborhood(b"TTATCCACA", 1).unwrap().len(), 28);
    assert_eq!(neighborhood(b"TTATCCACA", 2).unwrap().len(), 352);
}

#[test]
fn test_distance_beyond_length_saturates() {
    assert_eq!(neighborhood(b"AC", 5).unwrap().len(), 16);
}

#[test]
fn test_counts_agree_with_positions() {
    let text = b"AACAAGCTGATAAACATTTAAAGAG";
    for d in 0..=3 {
        let positions = find_matches(text, b"AAAAA", d).unwrap();
        assert_eq!(positions.len(), count_matches(text, b"AAAAA", d).unwrap());
        for &p in &positions {
            assert!(hamming(&text[p..p + 5], b"AAAAA") <= d);
        }
    }
    assert_eq!(count_matches(text, b"AAAAA", 1).unwrap(), 4);
    assert_eq!(count_matches(text, b"AAAAA", 2).unwrap(), 11);
}

#[test]
fn test_long_pattern_simd_path() {
    // patterns of 32+ bases go through the vectorised distance check
    let pattern = b"ACGTACGTACGTACGTACGTACGTACGTACGTAC";
    let mut text = b"TTTT".to_vec();
    text.extend_from_slice(pattern);
    let mut mutated = pattern.to_vec();
    mutated[3] = b'A';
    mutated[20] = b'C';
    text.extend_from_slice(&mutated);

    assert_eq!(find_matches(&text, pattern, 0).unwrap(), vec![4]);
    let two = find_matches(&text, pattern, 2).unwrap();
    assert!(two.contains(&4));
    assert!(two.contains(&(4 + pattern.len())));
}

#[test]
fn test_reverse_complement_of_dnaa_box() {
    assert_eq!(reverse_complement(b"TTATCCACA").unwrap(), b"TGTGGATAA".to_vec());
    assert!(reverse_complement(b"TTAXCCACA").is_err());
}
