// src/io/fasta.rs
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use tracing::debug;

use crate::error::{OriError, Result};
use crate::kmer::sequence::Sequence;

/// Lines starting with this byte are record headers
pub const HEADER_MARKER: char = '>';

/// Residues per line when writing FASTA
pub const LINE_WIDTH: usize = 70;

pub enum FastaWriter {
    Plain(BufWriter<File>),
    Compressed(BufWriter<GzEncoder<File>>),
}

/// Open a FASTA file for reading, handles gzipped files automatically
pub fn open_fasta<P: AsRef<Path>>(path: P) -> io::Result<Box<dyn BufRead>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        io::Error::new(
            e.kind(),
            format!("Failed to open genome file '{}': {}", path.display(), e),
        )
    })?;
    if is_gzip(path) {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

fn is_gzip(path: &Path) -> bool {
    path.extension().map_or(false, |ext| ext == "gz")
}

/// Load a whole genome file as one sequence.
pub fn read_genome<P: AsRef<Path>>(path: P) -> Result<Sequence> {
    let reader = open_fasta(path.as_ref())?;
    let genome = parse_genome(reader)?;
    debug!("Loaded {} bp from {}", genome.len(), path.as_ref().display());
    Ok(genome)
}

/// Drop header lines, concatenate the remaining lines and upper-case them.
///
/// Every record in the input is merged into the same sequence.
pub fn parse_genome<R: BufRead>(reader: R) -> Result<Sequence> {
    let mut bytes = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.starts_with(HEADER_MARKER) {
            continue;
        }
        bytes.extend(line.trim().bytes().map(|b| b.to_ascii_uppercase()));
    }

    if bytes.is_empty() {
        return Err(OriError::EmptyGenome);
    }
    Sequence::new(bytes)
}

impl FastaWriter {
    pub fn new<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref();
        let file = File::create(path)?;
        if is_gzip(path) {
            let encoder = GzEncoder::new(file, Compression::default());
            Ok(FastaWriter::Compressed(BufWriter::new(encoder)))
        } else {
            Ok(FastaWriter::Plain(BufWriter::new(file)))
        }
    }

    pub fn write_record(&mut self, header: &str, sequence: &[u8]) -> io::Result<()> {
        match self {
            FastaWriter::Plain(writer) => write_wrapped(writer, header, sequence),
            FastaWriter::Compressed(writer) => write_wrapped(writer, header, sequence),
        }
    }

    /// Flush buffers and, for gzip output, write the trailer
    pub fn finish(self) -> io::Result<()> {
        match self {
            FastaWriter::Plain(mut writer) => writer.flush(),
            FastaWriter::Compressed(writer) => {
                let encoder = writer.into_inner().map_err(|e| e.into_error())?;
                encoder.finish()?;
                Ok(())
            }
        }
    }
}

fn write_wrapped<W: Write>(writer: &mut W, header: &str, sequence: &[u8]) -> io::Result<()> {
    writeln!(writer, "{}{}", HEADER_MARKER, header)?;
    for line in sequence.chunks(LINE_WIDTH) {
        writer.write_all(line)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}
