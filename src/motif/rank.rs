use ahash::AHashSet;
use serde::Serialize;
use tracing::debug;

use crate::accel::backend::ScoringBackend;
use crate::accel::cpu_backend::SerialBackend;
use crate::error::{OriError, Result};
use crate::kmer::alphabet;
use crate::kmer::kmer::kmers;
use crate::kmer::neighborhood::neighborhood;
use crate::kmer::sequence::Sequence;

/// Most frequent approximate motifs of one window
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MotifRanking {
    /// Forward plus reverse-complement hits of every winning motif
    pub score: usize,
    /// All motifs reaching `score`, in lexicographic order
    pub motifs: Vec<Sequence>,
    /// Size of the candidate set that was scored
    pub candidates: usize,
}

/// Entry point: rank the approximate k-mers of an already validated window.
pub fn find_top_motifs(window: &Sequence, k: usize, max_mismatches: usize) -> Result<MotifRanking> {
    rank(window.as_bytes(), k, max_mismatches)
}

/// Rank on a single thread. See [`rank_with_backend`].
pub fn rank(window: &[u8], k: usize, max_mismatches: usize) -> Result<MotifRanking> {
    rank_with_backend(window, k, max_mismatches, &SerialBackend)
}

/// Find the k-mers (and their mismatch neighbors) with the most approximate
/// occurrences of themselves plus their reverse complement in `window`.
///
/// Every k-mer of the window contributes its `max_mismatches`-neighborhood to
/// the candidate set; each candidate is scored with the same mismatch budget.
pub fn rank_with_backend(
    window: &[u8],
    k: usize,
    max_mismatches: usize,
    backend: &dyn ScoringBackend,
) -> Result<MotifRanking> {
    alphabet::validate(window)?;
    if k == 0 {
        return Err(OriError::InvalidParameters(
            "k-mer length must be positive".to_string(),
        ));
    }
    if k > window.len() {
        return Err(OriError::InvalidParameters(format!(
            "k-mer length {} exceeds window length {}",
            k,
            window.len()
        )));
    }

    let candidates = candidate_motifs(window, k, max_mismatches)?;
    if candidates.is_empty() {
        return Err(OriError::EmptyCandidateSet);
    }
    debug!(
        "Scoring {} candidate {}-mers (d={}) with {} backend",
        candidates.len(),
        k,
        max_mismatches,
        backend.name()
    );

    let top = backend.best_candidates(window, &candidates, max_mismatches)?;
    if top.is_empty() {
        return Err(OriError::EmptyCandidateSet);
    }

    let mut winners = top.motifs;
    winners.sort_unstable();
    let motifs = winners
        .into_iter()
        .map(Sequence::new)
        .collect::<Result<Vec<_>>>()?;

    Ok(MotifRanking {
        score: top.score,
        motifs,
        candidates: candidates.len(),
    })
}

/// Union of the mismatch neighborhoods of every k-mer in `window`, sorted.
pub fn candidate_motifs(window: &[u8], k: usize, max_mismatches: usize) -> Result<Vec<Vec<u8>>> {
    let mut seen: AHashSet<Vec<u8>> = AHashSet::new();
    let mut expanded: AHashSet<&[u8]> = AHashSet::new();
    for kmer in kmers(window, k) {
        // repeated k-mers have identical neighborhoods
        if !expanded.insert(kmer) {
            continue;
        }
        seen.extend(neighborhood(kmer, max_mismatches)?);
    }

    let mut candidates: Vec<Vec<u8>> = seen.into_iter().collect();
    candidates.sort_unstable();
    Ok(candidates)
}
