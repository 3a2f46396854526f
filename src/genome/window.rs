use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{OriError, Result};
use crate::kmer::sequence::Sequence;

/// What to do when a window would run past either end of the genome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryPolicy {
    /// Slide the window back inside the genome, keeping its length
    #[default]
    Clamp,
    /// Treat the genome as circular
    Wrap,
    /// Refuse the window
    Strict,
}

/// A window cut out of the genome around one location
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenomeWindow {
    pub center: usize,
    /// Genome offset of the first symbol (modulo the genome length under `Wrap`)
    pub start: usize,
    pub sequence: Sequence,
}

/// Extract `length` symbols starting at `center - length / 2`.
pub fn window_centered_around(
    genome: &Sequence,
    center: usize,
    length: usize,
    policy: BoundaryPolicy,
) -> Result<GenomeWindow> {
    let genome_len = genome.len();
    if length == 0 {
        return Err(OriError::InvalidParameters(
            "window length must be positive".to_string(),
        ));
    }
    if center >= genome_len {
        return Err(OriError::InvalidParameters(format!(
            "window center {} lies outside the genome (length {})",
            center, genome_len
        )));
    }

    let nominal_start = center as i64 - (length / 2) as i64;
    let nominal_end = nominal_start + length as i64;
    let in_bounds = nominal_start >= 0 && nominal_end <= genome_len as i64;

    if in_bounds {
        let start = nominal_start as usize;
        return Ok(GenomeWindow {
            center,
            start,
            sequence: genome.subsequence(start, start + length),
        });
    }

    match policy {
        BoundaryPolicy::Strict => Err(OriError::WindowOutOfBounds {
            start: nominal_start,
            end: nominal_end,
            genome_len,
        }),
        BoundaryPolicy::Clamp => {
            let length = length.min(genome_len);
            let max_start = (genome_len - length) as i64;
            let start = nominal_start.clamp(0, max_start) as usize;
            Ok(GenomeWindow {
                center,
                start,
                sequence: genome.subsequence(start, start + length),
            })
        }
        BoundaryPolicy::Wrap => {
            if length > genome_len {
                return Err(OriError::InvalidParameters(format!(
                    "window length {} exceeds circular genome length {}",
                    length, genome_len
                )));
            }
            let start = nominal_start.rem_euclid(genome_len as i64) as usize;
            let bytes = genome.as_bytes();
            let wrapped: Vec<u8> = (0..length).map(|i| bytes[(start + i) % genome_len]).collect();
            Ok(GenomeWindow {
                center,
                start,
                sequence: Sequence::new(wrapped)?,
            })
        }
    }
}
