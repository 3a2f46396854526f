use serde::Serialize;

use crate::error::Result;
use crate::kmer::alphabet::{invalid_symbol, skew_delta};

/// Cumulative GC skew of a genome.
///
/// `values[i]` is the skew after reading symbol `i` (G counts +1, C counts -1).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkewProfile {
    pub values: Vec<i64>,
    pub min: i64,
    pub max: i64,
}

impl SkewProfile {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Every offset where the skew reaches its global minimum
    pub fn minimum_positions(&self) -> Vec<usize> {
        self.positions_at(self.min)
    }

    /// Every offset where the skew reaches its global maximum (the terminus side)
    pub fn maximum_positions(&self) -> Vec<usize> {
        self.positions_at(self.max)
    }

    /// Global minima whose own symbol in `genome` is `C`; the rest are dropped
    pub fn minima_on_c(&self, genome: &[u8]) -> Vec<usize> {
        self.minimum_positions()
            .into_iter()
            .filter(|&i| genome.get(i) == Some(&b'C'))
            .collect()
    }

    fn positions_at(&self, target: i64) -> Vec<usize> {
        self.values
            .iter()
            .enumerate()
            .filter(|(_, &v)| v == target)
            .map(|(i, _)| i)
            .collect()
    }
}

/// Compact view of a profile for reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkewSummary {
    pub genome_length: usize,
    pub minimum_skew: i64,
    pub maximum_skew: i64,
    /// Global minima on a `C`, the locations searched for DnaA boxes
    pub minimum_skew_locations: Vec<usize>,
    pub all_minimum_positions: Vec<usize>,
    pub maximum_positions: Vec<usize>,
}

impl SkewSummary {
    pub fn new(profile: &SkewProfile, genome: &[u8]) -> Self {
        Self {
            genome_length: profile.len(),
            minimum_skew: profile.min,
            maximum_skew: profile.max,
            minimum_skew_locations: profile.minima_on_c(genome),
            all_minimum_positions: profile.minimum_positions(),
            maximum_positions: profile.maximum_positions(),
        }
    }
}

pub fn skew_profile(genome: &[u8]) -> Result<SkewProfile> {
    let mut values = Vec::with_capacity(genome.len());
    let mut skew = 0i64;
    let mut min = 0i64;
    let mut max = 0i64;

    for (i, &b) in genome.iter().enumerate() {
        skew += skew_delta(b).ok_or_else(|| invalid_symbol(b, i))?;
        if values.is_empty() || skew < min {
            min = skew;
        }
        if values.is_empty() || skew > max {
            max = skew;
        }
        values.push(skew);
    }

    Ok(SkewProfile { values, min, max })
}

/// Offsets of the global skew minimum whose own symbol is `C`.
pub fn minimum_skew_locations(genome: &[u8]) -> Result<Vec<usize>> {
    Ok(skew_profile(genome)?.minima_on_c(genome))
}
