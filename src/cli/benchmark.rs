use std::path::Path;
use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::accel::cpu_backend::{CpuBackend, SerialBackend};
use crate::error::Result;
use crate::genome::skew::skew_profile;
use crate::genome::window::{window_centered_around, BoundaryPolicy};
use crate::io::fasta::read_genome;
use crate::kmer::sequence::Sequence;
use crate::motif::rank::{candidate_motifs, rank_with_backend, MotifRanking};

#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub center: usize,
    pub window_length: usize,
    pub candidates: usize,
    pub candidate_time: Duration,
    pub serial_time: Duration,
    pub parallel_time: Duration,
    pub threads: usize,
    pub ranking: MotifRanking,
}

impl BenchmarkResult {
    pub fn speedup(&self) -> f64 {
        self.serial_time.as_secs_f64() / self.parallel_time.as_secs_f64().max(f64::EPSILON)
    }
}

pub fn benchmark_ranking_file<P: AsRef<Path>>(
    input: P,
    k: usize,
    max_mismatches: usize,
    window_length: usize,
) -> Result<BenchmarkResult> {
    let genome = read_genome(input)?;
    benchmark_ranking(&genome, k, max_mismatches, window_length)
}

/// Time serial and Rayon scoring of the window around the first C-anchored
/// skew minimum (the genome midpoint if there is none).
pub fn benchmark_ranking(
    genome: &Sequence,
    k: usize,
    max_mismatches: usize,
    window_length: usize,
) -> Result<BenchmarkResult> {
    let profile = skew_profile(genome.as_bytes())?;
    let center = match profile.minima_on_c(genome.as_bytes()).first() {
        Some(&location) => location,
        None => {
            warn!("No C-anchored skew minimum, benchmarking the genome midpoint");
            genome.len() / 2
        }
    };
    let window = window_centered_around(genome, center, window_length, BoundaryPolicy::Clamp)?;
    let bases = window.sequence.as_bytes();

    info!(
        "Starting motif ranking benchmark with k={}, d={}, window of {} bp at location {}",
        k,
        max_mismatches,
        bases.len(),
        center + 1
    );

    let start = Instant::now();
    let candidates = candidate_motifs(bases, k, max_mismatches)?;
    let candidate_time = start.elapsed();

    let start = Instant::now();
    let serial = rank_with_backend(bases, k, max_mismatches, &SerialBackend)?;
    let serial_time = start.elapsed();

    let backend = CpuBackend::new();
    let start = Instant::now();
    let parallel = rank_with_backend(bases, k, max_mismatches, &backend)?;
    let parallel_time = start.elapsed();

    if serial != parallel {
        warn!("Serial and parallel rankings differ");
    }

    Ok(BenchmarkResult {
        center,
        window_length: bases.len(),
        candidates: candidates.len(),
        candidate_time,
        serial_time,
        parallel_time,
        threads: backend.num_threads(),
        ranking: parallel,
    })
}

pub fn print_benchmark(result: &BenchmarkResult) {
    println!(
        "Candidate generation: {} candidates in {:.2?}",
        result.candidates, result.candidate_time
    );
    println!(
        "Serial scoring:   {:.2?} ({:.2} k candidates/sec)",
        result.serial_time,
        result.candidates as f64 / result.serial_time.as_secs_f64().max(f64::EPSILON) / 1_000.0
    );
    println!(
        "Parallel scoring: {:.2?} on {} threads",
        result.parallel_time, result.threads
    );
    println!("Speedup: {:.2}x", result.speedup());
    println!(
        "Top score {} shared by {} motif(s)",
        result.ranking.score,
        result.ranking.motifs.len()
    );
}
