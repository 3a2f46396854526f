//! Genome-level analysis: GC skew and window extraction

pub mod skew;
pub mod window;

pub use skew::{minimum_skew_locations, skew_profile, SkewProfile, SkewSummary};
pub use window::{window_centered_around, BoundaryPolicy, GenomeWindow};
