pub mod backend;
pub mod cpu_backend;
pub mod simd;

pub use backend::{hit_score, ScoringBackend, TopHits, PARALLEL_THRESHOLD_CANDIDATES};
pub use cpu_backend::{CpuBackend, SerialBackend};

/// Create the appropriate backend based on configuration
///
/// # Arguments
/// * `parallel` - Whether to prefer Rayon scoring
/// * `num_candidates` - Size of the candidate set (for threshold check)
///
/// # Returns
/// Box containing the selected backend
pub fn create_backend(parallel: bool, num_candidates: usize) -> Box<dyn ScoringBackend> {
    if parallel && num_candidates >= PARALLEL_THRESHOLD_CANDIDATES {
        return Box::new(CpuBackend::new());
    }
    if parallel {
        tracing::debug!(
            "Candidate set too small ({} < {} threshold), scoring serially",
            num_candidates,
            PARALLEL_THRESHOLD_CANDIDATES
        );
    }
    Box::new(SerialBackend)
}

/// Rough size of a window's candidate set: each k-mer contributes up to
/// `sum_{i<=d} C(k, i) * 3^i` neighbors, capped at the 4^k possible k-mers.
pub fn estimated_candidates(window_len: usize, k: usize, max_mismatches: usize) -> usize {
    if k == 0 || k > window_len {
        return 0;
    }
    let kmers = window_len - k + 1;
    let mut per_kmer = 0usize;
    let mut binomial = 1usize;
    let mut power = 1usize;
    for i in 0..=max_mismatches.min(k) {
        if i > 0 {
            binomial = binomial.saturating_mul(k - i + 1) / i;
            power = power.saturating_mul(3);
        }
        per_kmer = per_kmer.saturating_add(binomial.saturating_mul(power));
    }
    let distinct_kmers = 4usize.checked_pow(k as u32).unwrap_or(usize::MAX);
    kmers.saturating_mul(per_kmer).min(distinct_kmers)
}
