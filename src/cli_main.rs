use clap::{Parser, Subcommand};

use orifinder::genome::window::BoundaryPolicy;
use orifinder::io::report::ReportFormat;

#[derive(Parser, Debug)]
#[command(name = "orifinder", version, about = "Find bacterial replication origins from GC skew and DnaA-box motifs", long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank frequent approximate k-mers around every GC skew minimum
    Find {
        /// Genome FASTA(.gz) file
        #[arg(short = 'f', long = "file")]
        genome: String,

        /// Length of the consensus motif (defaults to 9, or the config file value)
        #[arg(short = 'k', long = "kmer-length")]
        kmer_length: Option<usize>,

        /// Substitutions allowed in each motif occurrence (default 1)
        #[arg(short = 'm', long = "mismatches-allowed")]
        mismatches: Option<usize>,

        /// Window around each skew minimum to search (default 500)
        #[arg(short = 'w', long = "window-length")]
        window_length: Option<usize>,

        /// Behaviour for windows overhanging the genome ends
        #[arg(long, value_enum)]
        boundary: Option<BoundaryPolicy>,

        /// JSON file with search parameters; command-line values override it
        #[arg(long)]
        config: Option<String>,

        /// Report format
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,

        /// Write the report here instead of stdout
        #[arg(short, long)]
        output: Option<String>,

        /// Number of threads
        #[arg(long, default_value_t = num_cpus::get())]
        threads: usize,

        /// Score candidates on a single thread
        #[arg(long)]
        serial: bool,

        /// Abort on the first failing window instead of skipping it
        #[arg(long)]
        fail_fast: bool,
    },

    /// Compute the cumulative GC skew and report its extrema
    Skew {
        /// Genome FASTA(.gz) file
        #[arg(short = 'f', long = "file")]
        genome: String,

        /// Optional path to write the full profile as TSV
        #[arg(long)]
        profile: Option<String>,

        /// Summary format
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },

    /// Rank frequent approximate k-mers of a single sequence
    Motifs {
        /// Sequence to search, given inline
        #[arg(short, long, conflicts_with = "genome", required_unless_present = "genome")]
        sequence: Option<String>,

        /// Or read the sequence from a FASTA(.gz) file
        #[arg(short = 'f', long = "file")]
        genome: Option<String>,

        /// Motif length
        #[arg(short = 'k', long = "kmer-length", default_value_t = 9)]
        kmer_length: usize,

        /// Substitutions allowed in each motif occurrence
        #[arg(short = 'm', long = "mismatches-allowed", default_value_t = 1)]
        mismatches: usize,

        /// Output format
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,

        /// Number of threads
        #[arg(long, default_value_t = num_cpus::get())]
        threads: usize,
    },

    /// Benchmark serial against parallel motif ranking
    Benchmark {
        /// Genome FASTA(.gz) file
        #[arg(short = 'f', long = "file")]
        genome: String,

        /// Motif length
        #[arg(short = 'k', long = "kmer-length", default_value_t = 9)]
        kmer_length: usize,

        /// Substitutions allowed in each motif occurrence
        #[arg(short = 'm', long = "mismatches-allowed", default_value_t = 1)]
        mismatches: usize,

        /// Window length
        #[arg(short = 'w', long = "window-length", default_value_t = 500)]
        window_length: usize,

        /// Threads
        #[arg(long, default_value_t = num_cpus::get())]
        threads: usize,
    },
}
