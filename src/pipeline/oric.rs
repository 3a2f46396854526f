use std::path::Path;
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::accel::{create_backend, estimated_candidates};
use crate::config::FinderConfig;
use crate::error::Result;
use crate::genome::skew::skew_profile;
use crate::genome::window::{window_centered_around, GenomeWindow};
use crate::io::fasta::read_genome;
use crate::kmer::sequence::Sequence;
use crate::motif::rank::{rank_with_backend, MotifRanking};

/// Result of analysing one skew minimum
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum WindowOutcome {
    Ranked(MotifRanking),
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WindowReport {
    /// 0-based genome offset of the skew minimum
    pub location: usize,
    /// First genome offset of the extracted window, if extraction succeeded
    pub window_start: Option<usize>,
    #[serde(flatten)]
    pub outcome: WindowOutcome,
}

/// Everything one oriC search produced
#[derive(Debug, Clone, Serialize)]
pub struct OriReport {
    pub config: FinderConfig,
    pub genome_length: usize,
    pub minimum_skew: i64,
    pub minimum_skew_locations: Vec<usize>,
    pub windows: Vec<WindowReport>,
}

impl OriReport {
    pub fn failed_windows(&self) -> usize {
        self.windows
            .iter()
            .filter(|w| matches!(w.outcome, WindowOutcome::Failed { .. }))
            .count()
    }
}

/// Load a genome and run [`find_origins`] on it
pub fn find_origins_in_file<P: AsRef<Path>>(path: P, config: &FinderConfig) -> Result<OriReport> {
    info!("Loading genome: {}", path.as_ref().display());
    let genome = read_genome(path)?;
    find_origins(&genome, config)
}

/// Rank the most frequent approximate k-mers around every C-anchored global
/// skew minimum of `genome`.
///
/// Failing windows are logged and reported as [`WindowOutcome::Failed`]
/// unless `config.fail_fast` is set, in which case the first error aborts.
pub fn find_origins(genome: &Sequence, config: &FinderConfig) -> Result<OriReport> {
    config.validate()?;
    let start = Instant::now();

    let profile = skew_profile(genome.as_bytes())?;
    let locations = profile.minima_on_c(genome.as_bytes());
    info!(
        "Genome length {} bp, minimum skew {} at {} C-anchored location(s)",
        genome.len(),
        profile.min,
        locations.len()
    );

    let mut windows = Vec::with_capacity(locations.len());
    for &location in &locations {
        info!(
            "Calculating frequent {}-mers around location {}",
            config.k,
            location + 1
        );
        match analyze_window(genome, location, config) {
            Ok((window, ranking)) => {
                debug!(
                    "Location {}: {} motif(s) with {} hits",
                    location + 1,
                    ranking.motifs.len(),
                    ranking.score
                );
                windows.push(WindowReport {
                    location,
                    window_start: Some(window.start),
                    outcome: WindowOutcome::Ranked(ranking),
                });
            }
            Err(e) if config.fail_fast => return Err(e),
            Err(e) => {
                warn!("Skipping window around location {}: {}", location + 1, e);
                windows.push(WindowReport {
                    location,
                    window_start: None,
                    outcome: WindowOutcome::Failed { error: e.to_string() },
                });
            }
        }
    }

    info!(
        "Analysed {} window(s) in {:.2?}",
        windows.len(),
        start.elapsed()
    );

    Ok(OriReport {
        config: config.clone(),
        genome_length: genome.len(),
        minimum_skew: profile.min,
        minimum_skew_locations: locations,
        windows,
    })
}

/// Extract the window around `center` and rank its motifs
pub fn analyze_window(
    genome: &Sequence,
    center: usize,
    config: &FinderConfig,
) -> Result<(GenomeWindow, MotifRanking)> {
    let window = window_centered_around(genome, center, config.window_length, config.boundary)?;
    let estimate = estimated_candidates(window.sequence.len(), config.k, config.max_mismatches);
    let backend = create_backend(config.parallel, estimate);
    let ranking = rank_with_backend(
        window.sequence.as_bytes(),
        config.k,
        config.max_mismatches,
        backend.as_ref(),
    )?;
    Ok((window, ranking))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::window::BoundaryPolicy;

    fn config(k: usize, d: usize, window_length: usize) -> FinderConfig {
        FinderConfig {
            k,
            max_mismatches: d,
            window_length,
            parallel: false,
            ..Default::default()
        }
    }

    #[test]
    fn test_find_origins_small_genome() {
        let genome: Sequence = "ATGCCGTTAGCCCATGCAGC".parse().unwrap();
        let report = find_origins(&genome, &config(3, 0, 8)).unwrap();

        assert_eq!(report.genome_length, 20);
        assert_eq!(report.minimum_skew, -2);
        assert_eq!(report.minimum_skew_locations, vec![12, 16, 19]);
        assert_eq!(report.windows.len(), 3);
        assert_eq!(report.failed_windows(), 0);
        // location 19 sits at the end, clamped back inside the genome
        assert_eq!(report.windows[2].window_start, Some(12));
    }

    #[test]
    fn test_failed_window_is_skipped() {
        let genome: Sequence = "ATGCCGTTAGCCCATGCAGC".parse().unwrap();
        let mut cfg = config(3, 0, 8);
        cfg.boundary = BoundaryPolicy::Strict;

        let report = find_origins(&genome, &cfg).unwrap();
        assert_eq!(report.windows.len(), 3);
        // only the window around location 19 overhangs the end
        assert_eq!(report.failed_windows(), 1);
        assert!(matches!(report.windows[1].outcome, WindowOutcome::Ranked(_)));
        assert!(matches!(report.windows[2].outcome, WindowOutcome::Failed { .. }));
        assert_eq!(report.windows[2].window_start, None);
    }

    #[test]
    fn test_fail_fast_aborts() {
        let genome: Sequence = "ATGCCGTTAGCCCATGCAGC".parse().unwrap();
        let mut cfg = config(3, 0, 8);
        cfg.boundary = BoundaryPolicy::Strict;
        cfg.fail_fast = true;

        assert!(find_origins(&genome, &cfg).is_err());
    }

    #[test]
    fn test_report_serializes_outcomes() {
        let report = WindowReport {
            location: 4,
            window_start: None,
            outcome: WindowOutcome::Failed { error: "boom".into() },
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["error"], "boom");
        assert_eq!(json["location"], 4);
    }
}
