use ahash::AHashSet;

use crate::error::Result;
use crate::kmer::alphabet::{self, invalid_symbol, substitutes};

/// All sequences reachable from `seed` with at most `d` single-position
/// substitutions, i.e. everything within Hamming distance `d`.
///
/// Substitutions accumulate across rounds: a position changed in one round
/// may change again in the next. Only the sequences added in the previous
/// round need expanding, and the loop stops early at a fixed point.
pub fn neighborhood(seed: &[u8], d: usize) -> Result<AHashSet<Vec<u8>>> {
    alphabet::validate(seed)?;
    let mut neighbors = AHashSet::new();
    neighbors.insert(seed.to_vec());

    let mut frontier = vec![seed.to_vec()];
    for _ in 0..d {
        let mut next = Vec::new();
        for pattern in &frontier {
            for candidate in one_mismatch(pattern)? {
                if neighbors.insert(candidate.clone()) {
                    next.push(candidate);
                }
            }
        }
        if next.is_empty() {
            break;
        }
        frontier = next;
    }

    Ok(neighbors)
}

/// Every sequence differing from `pattern` at exactly one position
fn one_mismatch(pattern: &[u8]) -> Result<Vec<Vec<u8>>> {
    let mut out = Vec::with_capacity(pattern.len() * 3);
    for (i, &b) in pattern.iter().enumerate() {
        let subs = substitutes(b).ok_or_else(|| invalid_symbol(b, i))?;
        for &s in subs {
            let mut neighbor = pattern.to_vec();
            neighbor[i] = s;
            out.push(neighbor);
        }
    }
    Ok(out)
}
