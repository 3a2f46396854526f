//! Approximate motif (DnaA box) discovery within a window

pub mod rank;

pub use rank::{candidate_motifs, find_top_motifs, rank, rank_with_backend, MotifRanking};
