use clap::Parser;
use rand::distributions::Uniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use orifinder::io::fasta::FastaWriter;
use orifinder::kmer::reverse_complement;

/// Generate a synthetic circular chromosome with a known origin of replication.
///
/// The strand before the origin is C-rich and the strand after it G-rich, so
/// the cumulative GC skew bottoms out at the origin. Mutated copies of a DnaA
/// box and its reverse complement are planted around it.
#[derive(Parser, Debug)]
#[command(name = "generate_genome")]
struct Args {
    /// Output FASTA path (.gz for gzip)
    #[arg(default_value = "synthetic_genome.fa")]
    output: String,

    /// Genome length in bp
    #[arg(short, long, default_value_t = 100_000)]
    length: usize,

    /// 0-based origin position (defaults to a quarter of the genome)
    #[arg(long)]
    origin: Option<usize>,

    /// Probability excess of the favoured base (G or C) over the other
    #[arg(long, default_value_t = 0.06)]
    bias: f64,

    /// DnaA box to plant
    #[arg(long, default_value = "TTATCCACA")]
    dnaa_box: String,

    /// Number of planted copies
    #[arg(long, default_value_t = 6)]
    copies: usize,

    /// Substitutions introduced into each copy (at most)
    #[arg(long, default_value_t = 1)]
    mismatches: usize,

    /// Half-width of the region around the origin holding the copies
    #[arg(long, default_value_t = 200)]
    spread: usize,

    /// RNG seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    let origin = args.origin.unwrap_or(args.length / 4).min(args.length.saturating_sub(1));
    let dnaa_box = args.dnaa_box.to_ascii_uppercase().into_bytes();
    let reverse_box = reverse_complement(&dnaa_box)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    println!(
        "Generating {} bp genome with origin at {} to {}",
        args.length,
        origin + 1,
        args.output
    );

    let unit = Uniform::new(0.0f64, 1.0);
    let mut genome: Vec<u8> = (0..args.length)
        .map(|i| biased_base(&mut rng, unit, args.bias, i >= origin))
        .collect();

    let mut planted = Vec::with_capacity(args.copies);
    if dnaa_box.len() <= args.length {
        let lo = origin.saturating_sub(args.spread);
        let hi = (origin + args.spread).min(args.length - dnaa_box.len());
        for _ in 0..args.copies {
            let pos = if hi > lo { rng.gen_range(lo..=hi) } else { hi };
            let mut copy = if rng.gen_bool(0.5) {
                dnaa_box.clone()
            } else {
                reverse_box.clone()
            };
            mutate(&mut rng, &mut copy, args.mismatches);
            genome[pos..pos + copy.len()].copy_from_slice(&copy);
            planted.push(pos);
        }
    }

    let mut writer = FastaWriter::new(&args.output)?;
    writer.write_record(
        &format!("synthetic_chromosome origin={} length={}", origin + 1, args.length),
        &genome,
    )?;
    writer.finish()?;

    planted.sort_unstable();
    println!(
        "Planted {} DnaA box copies at {:?}",
        planted.len(),
        planted.iter().map(|p| p + 1).collect::<Vec<_>>()
    );
    println!("Genome file generated successfully!");
    Ok(())
}

// A/T share the unbiased half; G/C split the rest with `bias` in favour of
// G after the origin and C before it.
fn biased_base(rng: &mut impl Rng, unit: Uniform<f64>, bias: f64, after_origin: bool) -> u8 {
    let bias = bias.clamp(0.0, 0.5);
    let favoured = 0.25 + bias / 2.0;
    let other = 0.25 - bias / 2.0;
    let r = rng.sample(unit);
    let (g, c) = if after_origin { (favoured, other) } else { (other, favoured) };
    if r < 0.25 {
        b'A'
    } else if r < 0.5 {
        b'T'
    } else if r < 0.5 + g {
        b'G'
    } else if r < 0.5 + g + c {
        b'C'
    } else {
        b'A'
    }
}

fn mutate(rng: &mut impl Rng, kmer: &mut [u8], max_mismatches: usize) {
    if kmer.is_empty() {
        return;
    }
    let substitutions = rng.gen_range(0..=max_mismatches.min(kmer.len()));
    for _ in 0..substitutions {
        let pos = rng.gen_range(0..kmer.len());
        let replacements: Vec<u8> = b"ACGT".iter().copied().filter(|&b| b != kmer[pos]).collect();
        kmer[pos] = replacements[rng.gen_range(0..replacements.len())];
    }
}
