mod cli_main;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process;

use clap::Parser;
use rayon::ThreadPoolBuilder;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use cli_main::{Cli, Commands};
use orifinder::accel::{create_backend, estimated_candidates};
use orifinder::cli::benchmark::{benchmark_ranking_file, print_benchmark};
use orifinder::genome::skew::{skew_profile, SkewSummary};
use orifinder::io::fasta::read_genome;
use orifinder::io::report::{write_ranking, write_report, write_skew_tsv, ReportFormat};
use orifinder::motif::rank::rank_with_backend;
use orifinder::{find_origins, FinderConfig, Result, Sequence};

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Setting tracing default failed");

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Find {
            genome,
            kmer_length,
            mismatches,
            window_length,
            boundary,
            config,
            format,
            output,
            threads,
            serial,
            fail_fast,
        } => {
            init_thread_pool(threads);

            let mut finder_config = match config {
                Some(path) => FinderConfig::from_json_file(path)?,
                None => FinderConfig::default(),
            };
            if let Some(k) = kmer_length {
                finder_config.k = k;
            }
            if let Some(d) = mismatches {
                finder_config.max_mismatches = d;
            }
            if let Some(w) = window_length {
                finder_config.window_length = w;
            }
            if let Some(policy) = boundary {
                finder_config.boundary = policy;
            }
            finder_config.parallel &= !serial;
            finder_config.fail_fast |= fail_fast;

            info!("Loading genome: {}", genome);
            let sequence = read_genome(&genome)?;
            let report = find_origins(&sequence, &finder_config)?;
            if report.failed_windows() > 0 {
                info!("{} window(s) skipped", report.failed_windows());
            }
            write_report(open_output(output.as_deref())?, &report, format)?;
        }

        Commands::Skew {
            genome,
            profile,
            format,
        } => {
            let sequence = read_genome(&genome)?;
            let skew = skew_profile(sequence.as_bytes())?;
            let summary = SkewSummary::new(&skew, sequence.as_bytes());

            if let Some(path) = profile {
                let mut writer = BufWriter::new(File::create(&path)?);
                write_skew_tsv(&mut writer, &skew)?;
                writer.flush()?;
                info!("Skew profile written to {}", path);
            }

            let mut out = open_output(None)?;
            match format {
                ReportFormat::Text => {
                    writeln!(out, "Genome length: {} bp", summary.genome_length)?;
                    writeln!(out, "Minimum skew: {}", summary.minimum_skew)?;
                    writeln!(out, "Maximum skew: {}", summary.maximum_skew)?;
                    writeln!(
                        out,
                        "Minimum skew locations (on C): {}",
                        join_positions(&summary.minimum_skew_locations)
                    )?;
                    writeln!(
                        out,
                        "All minimum positions: {}",
                        join_positions(&summary.all_minimum_positions)
                    )?;
                    writeln!(
                        out,
                        "Maximum positions: {}",
                        join_positions(&summary.maximum_positions)
                    )?;
                }
                ReportFormat::Json => {
                    serde_json::to_writer_pretty(&mut out, &summary)?;
                    writeln!(out)?;
                }
            }
            out.flush()?;
        }

        Commands::Motifs {
            sequence,
            genome,
            kmer_length,
            mismatches,
            format,
            threads,
        } => {
            init_thread_pool(threads);

            let window: Sequence = match (sequence, genome) {
                (Some(text), _) => text.trim().to_ascii_uppercase().parse()?,
                (None, Some(path)) => read_genome(path)?,
                (None, None) => unreachable!("clap requires --sequence or --file"),
            };
            let estimate = estimated_candidates(window.len(), kmer_length, mismatches);
            let backend = create_backend(true, estimate);
            let ranking = rank_with_backend(window.as_bytes(), kmer_length, mismatches, backend.as_ref())?;

            let mut out = open_output(None)?;
            match format {
                ReportFormat::Text => {
                    writeln!(
                        out,
                        "Most frequent {}-mers with up to {} mismatch(es):",
                        kmer_length, mismatches
                    )?;
                    write_ranking(&mut out, &ranking)?;
                }
                ReportFormat::Json => {
                    serde_json::to_writer_pretty(&mut out, &ranking)?;
                    writeln!(out)?;
                }
            }
            out.flush()?;
        }

        Commands::Benchmark {
            genome,
            kmer_length,
            mismatches,
            window_length,
            threads,
        } => {
            init_thread_pool(threads);
            let result = benchmark_ranking_file(&genome, kmer_length, mismatches, window_length)?;
            print_benchmark(&result);
        }
    }
    Ok(())
}

fn init_thread_pool(threads: usize) {
    if let Err(e) = ThreadPoolBuilder::new().num_threads(threads).build_global() {
        tracing::warn!("Could not configure thread pool: {}", e);
    }
}

fn open_output(path: Option<&str>) -> io::Result<Box<dyn Write>> {
    Ok(match path {
        Some(p) => Box::new(BufWriter::new(File::create(p)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}

/// 1-based, comma separated
fn join_positions(positions: &[usize]) -> String {
    positions
        .iter()
        .map(|p| (p + 1).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
