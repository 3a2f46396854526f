//! End-to-end oriC search

pub mod oric;

pub use oric::{analyze_window, find_origins, find_origins_in_file, OriReport, WindowOutcome, WindowReport};
