use std::io::Write;

use orifinder::genome::window::BoundaryPolicy;
use orifinder::io::fasta::{read_genome, FastaWriter};
use orifinder::io::report::{write_report, ReportFormat};
use orifinder::pipeline::{find_origins_in_file, WindowOutcome};
use orifinder::{find_origins, FinderConfig, OriError, Sequence};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tempfile::{Builder, NamedTempFile};

const SMALL_GENOME: &str = "ATGCCGTTAGCCCATGCAGC";

fn small_config() -> FinderConfig {
    FinderConfig {
        k: 3,
        max_mismatches: 0,
        window_length: 8,
        parallel: false,
        ..Default::default()
    }
}

/// C-rich first half, G-rich second half, DnaA boxes planted at the turn
fn synthetic_genome(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    let origin = len / 2;
    let mut genome: Vec<u8> = (0..len)
        .map(|i| {
            let r: f64 = rng.gen();
            let (g, c) = if i < origin { (0.15, 0.35) } else { (0.35, 0.15) };
            if r < 0.25 {
                b'A'
            } else if r < 0.5 {
                b'T'
            } else if r < 0.5 + g {
                b'G'
            } else if r < 0.5 + g + c {
                b'C'
            } else {
                b'A'
            }
        })
        .collect();
    for offset in [40usize, 90, 140] {
        let pos = origin - 100 + offset;
        genome[pos..pos + 9].copy_from_slice(b"TTATCCACA");
    }
    genome
}

#[test]
fn test_find_origins_from_multiline_fasta() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, ">chr1 test").unwrap();
    writeln!(file, "atgccgttag").unwrap();
    writeln!(file, "CCCATGCAGC").unwrap();

    let report = find_origins_in_file(file.path(), &small_config()).unwrap();
    assert_eq!(report.genome_length, 20);
    assert_eq!(report.minimum_skew, -2);
    assert_eq!(report.minimum_skew_locations, vec![12, 16, 19]);
    assert_eq!(report.windows.len(), 3);
    assert!(report
        .windows
        .iter()
        .all(|w| matches!(w.outcome, WindowOutcome::Ranked(_))));
}

#[test]
fn test_gzipped_genome_round_trip() {
    let file = Builder::new().suffix(".fa.gz").tempfile().unwrap();
    let mut writer = FastaWriter::new(file.path()).unwrap();
    writer.write_record("chr1", SMALL_GENOME.as_bytes()).unwrap();
    writer.finish().unwrap();

    let genome = read_genome(file.path()).unwrap();
    assert_eq!(genome.to_string(), SMALL_GENOME);
}

#[test]
fn test_synthetic_origin_recovers_dnaa_box() {
    let genome = Sequence::new(synthetic_genome(4_000, 11)).unwrap();
    let config = FinderConfig {
        k: 9,
        max_mismatches: 0,
        window_length: 500,
        parallel: true,
        ..Default::default()
    };
    let report = find_origins(&genome, &config).unwrap();

    assert!(!report.windows.is_empty());
    for window in &report.windows {
        // the skew minimum lands near the C/G turn
        assert!(window.location > 1_500 && window.location < 2_500, "{}", window.location);
    }
    let found = report.windows.iter().any(|w| match &w.outcome {
        WindowOutcome::Ranked(r) => r.motifs.iter().any(|m| m.to_string() == "TTATCCACA"),
        WindowOutcome::Failed { .. } => false,
    });
    assert!(found);
}

#[test]
fn test_wrap_policy_on_circular_genome() {
    let genome: Sequence = SMALL_GENOME.parse().unwrap();
    let mut config = small_config();
    config.boundary = BoundaryPolicy::Wrap;
    let report = find_origins(&genome, &config).unwrap();
    assert_eq!(report.failed_windows(), 0);
    // location 19 wraps round to offset 15
    assert_eq!(report.windows[2].window_start, Some(15));
}

#[test]
fn test_json_report_is_valid() {
    let genome: Sequence = SMALL_GENOME.parse().unwrap();
    let report = find_origins(&genome, &small_config()).unwrap();

    let mut out = Vec::new();
    write_report(&mut out, &report, ReportFormat::Json).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["minimum_skew"], -2);
    assert_eq!(json["windows"].as_array().unwrap().len(), 3);
    assert_eq!(json["config"]["boundary"], "clamp");
}

#[test]
fn test_config_file_overrides_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"k": 3, "max_mismatches": 0, "window_length": 8, "boundary": "strict"}}"#).unwrap();

    let config = FinderConfig::from_json_file(file.path()).unwrap();
    assert_eq!(config.k, 3);
    assert_eq!(config.boundary, BoundaryPolicy::Strict);
    assert!(config.parallel);

    let genome: Sequence = SMALL_GENOME.parse().unwrap();
    let report = find_origins(&genome, &config).unwrap();
    assert_eq!(report.failed_windows(), 1);
}

#[test]
fn test_invalid_genome_symbol() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, ">bad").unwrap();
    writeln!(file, "ACGTRYACGT").unwrap();
    assert!(matches!(
        read_genome(file.path()),
        Err(OriError::InvalidSymbol { symbol: 'R', position: 4 })
    ));
}

#[test]
fn test_empty_genome() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, ">empty").unwrap();
    assert!(matches!(read_genome(file.path()), Err(OriError::EmptyGenome)));
}
