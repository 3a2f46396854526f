//! Nucleotide alphabet {A,C,G,T,N} and its lookup tables.
//!
//! All tables are plain `match` expressions, so they are immutable and shared
//! freely between threads.

use crate::error::{OriError, Result};

/// The five symbols a sequence may contain
pub const ALPHABET: [u8; 5] = [b'A', b'C', b'G', b'T', b'N'];

#[inline]
pub fn is_valid(b: u8) -> bool {
    matches!(b, b'A' | b'C' | b'G' | b'T' | b'N')
}

/// Replacement symbols used when expanding a mismatch neighborhood.
///
/// A symbol is never its own substitute; `N` expands to all four bases.
#[inline]
pub fn substitutes(b: u8) -> Option<&'static [u8]> {
    match b {
        b'A' => Some(b"CTG"),
        b'T' => Some(b"ACG"),
        b'G' => Some(b"ATC"),
        b'C' => Some(b"ATG"),
        b'N' => Some(b"CATG"),
        _ => None,
    }
}

#[inline]
pub fn complement(b: u8) -> Option<u8> {
    match b {
        b'A' => Some(b'T'),
        b'T' => Some(b'A'),
        b'C' => Some(b'G'),
        b'G' => Some(b'C'),
        b'N' => Some(b'N'),
        _ => None,
    }
}

/// Contribution of one symbol to the cumulative GC skew
#[inline]
pub fn skew_delta(b: u8) -> Option<i64> {
    match b {
        b'G' => Some(1),
        b'C' => Some(-1),
        b'A' | b'T' | b'N' => Some(0),
        _ => None,
    }
}

/// Check that every byte of `seq` is in the alphabet.
pub fn validate(seq: &[u8]) -> Result<()> {
    match seq.iter().position(|&b| !is_valid(b)) {
        Some(position) => Err(invalid_symbol(seq[position], position)),
        None => Ok(()),
    }
}

pub(crate) fn invalid_symbol(symbol: u8, position: usize) -> OriError {
    OriError::InvalidSymbol {
        symbol: symbol as char,
        position,
    }
}
