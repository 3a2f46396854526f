pub mod fasta;
pub mod report;
