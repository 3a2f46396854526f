use crate::error::Result;
use crate::kmer::kmer::reverse_complement;
use crate::kmer::matching::count_matches_unchecked;

/// Best score seen so far and every motif reaching it.
///
/// Partial results from different workers merge with [`TopHits::merge`],
/// which is associative and commutative up to the order of `motifs`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopHits {
    pub score: usize,
    pub motifs: Vec<Vec<u8>>,
}

impl TopHits {
    pub fn is_empty(&self) -> bool {
        self.motifs.is_empty()
    }

    pub fn offer(&mut self, motif: Vec<u8>, score: usize) {
        if self.motifs.is_empty() || score > self.score {
            self.score = score;
            self.motifs.clear();
            self.motifs.push(motif);
        } else if score == self.score {
            self.motifs.push(motif);
        }
    }

    pub fn merge(mut self, other: TopHits) -> TopHits {
        if other.is_empty() {
            return self;
        }
        if self.is_empty() || other.score > self.score {
            return other;
        }
        if other.score == self.score {
            self.motifs.extend(other.motifs);
        }
        self
    }
}

/// Forward plus reverse-complement approximate hits of `motif` in `window`.
///
/// `window` must already be validated.
pub fn hit_score(window: &[u8], motif: &[u8], max_mismatches: usize) -> Result<usize> {
    let rc = reverse_complement(motif)?;
    Ok(count_matches_unchecked(window, motif, max_mismatches)
        + count_matches_unchecked(window, &rc, max_mismatches))
}

/// Trait for candidate scoring backends (serial or Rayon)
///
/// Every backend must return the same score and the same set of motifs for
/// the same input; only the order of `TopHits::motifs` may differ.
pub trait ScoringBackend: Send + Sync {
    /// Score every candidate against the window and keep the maximal ones
    ///
    /// # Arguments
    /// * `window` - Validated window sequence
    /// * `candidates` - Candidate motifs, all of the same length
    /// * `max_mismatches` - Substitution budget per occurrence
    fn best_candidates(
        &self,
        window: &[u8],
        candidates: &[Vec<u8>],
        max_mismatches: usize,
    ) -> Result<TopHits>;

    /// Returns the name of this backend
    fn name(&self) -> &'static str;

    fn is_parallel(&self) -> bool;
}

/// Below this many candidates thread dispatch costs more than it saves
pub const PARALLEL_THRESHOLD_CANDIDATES: usize = 2_048;
