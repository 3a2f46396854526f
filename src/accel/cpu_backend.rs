use crate::accel::backend::{hit_score, ScoringBackend, TopHits};
use crate::error::Result;
use rayon::prelude::*;

/// CPU-based scoring backend using the global Rayon pool
#[derive(Debug, Default, Clone, Copy)]
pub struct CpuBackend;

impl CpuBackend {
    pub fn new() -> Self {
        Self
    }

    /// Threads of the pool the backend runs on
    pub fn num_threads(&self) -> usize {
        rayon::current_num_threads()
    }
}

impl ScoringBackend for CpuBackend {
    fn best_candidates(
        &self,
        window: &[u8],
        candidates: &[Vec<u8>],
        max_mismatches: usize,
    ) -> Result<TopHits> {
        // Thread-local partial maxima, merged in a single reduction
        candidates
            .par_iter()
            .try_fold(TopHits::default, |mut top, motif| -> Result<TopHits> {
                let score = hit_score(window, motif, max_mismatches)?;
                top.offer(motif.clone(), score);
                Ok(top)
            })
            .try_reduce(TopHits::default, |a, b| Ok(a.merge(b)))
    }

    fn name(&self) -> &'static str {
        "cpu-rayon"
    }

    fn is_parallel(&self) -> bool {
        true
    }
}

/// Single-threaded backend; the reference the parallel one must agree with
#[derive(Debug, Default, Clone, Copy)]
pub struct SerialBackend;

impl ScoringBackend for SerialBackend {
    fn best_candidates(
        &self,
        window: &[u8],
        candidates: &[Vec<u8>],
        max_mismatches: usize,
    ) -> Result<TopHits> {
        let mut top = TopHits::default();
        for motif in candidates {
            let score = hit_score(window, motif, max_mismatches)?;
            top.offer(motif.clone(), score);
        }
        Ok(top)
    }

    fn name(&self) -> &'static str {
        "serial"
    }

    fn is_parallel(&self) -> bool {
        false
    }
}
