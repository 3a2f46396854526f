//! Locate bacterial replication origins (oriC).
//!
//! The cumulative GC skew of a genome bottoms out near the origin. Windows
//! around every skew minimum are then searched for the most frequent 9-mers
//! allowing mismatches and counting reverse complements, which surfaces the
//! DnaA boxes the replication initiator binds.

pub mod accel;
pub mod cli;
pub mod config;
pub mod error;
pub mod genome;
pub mod io;
pub mod kmer;
pub mod motif;
pub mod pipeline;

pub use config::FinderConfig;
pub use error::{OriError, Result};
pub use kmer::Sequence;
pub use motif::{find_top_motifs, MotifRanking};
pub use pipeline::{find_origins, OriReport};
