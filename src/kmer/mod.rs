//! Nucleotide sequences, k-mers and approximate matching

pub mod alphabet;
pub mod kmer;
pub mod matching;
pub mod neighborhood;
pub mod sequence;

pub use kmer::{kmers, reverse_complement};
pub use matching::{count_matches, find_matches};
pub use neighborhood::neighborhood;
pub use sequence::Sequence;
