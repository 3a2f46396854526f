use std::iter::Take;
use std::slice::Windows;

use crate::error::Result;
use crate::kmer::alphabet::{complement, invalid_symbol};

/// Sliding window of width `k`, stride 1, over `seq`.
///
/// Yields `seq.len() - k + 1` k-mers, or nothing when `k` is 0 or exceeds the
/// sequence length.
pub fn kmers(seq: &[u8], k: usize) -> Take<Windows<'_, u8>> {
    let count = if k == 0 || k > seq.len() { 0 } else { seq.len() - k + 1 };
    seq.windows(k.max(1)).take(count)
}

/// Returns the reverse complement of a nucleotide sequence.
///
/// Fails on the first symbol outside {A,C,G,T,N}; the reported position is
/// the offset in the input.
pub fn reverse_complement(seq: &[u8]) -> Result<Vec<u8>> {
    let mut result = Vec::with_capacity(seq.len());
    for i in (0..seq.len()).rev() {
        match complement(seq[i]) {
            Some(c) => result.push(c),
            None => return Err(invalid_symbol(seq[i], i)),
        }
    }
    Ok(result)
}
