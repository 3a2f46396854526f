use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::Result;
use crate::kmer::alphabet::{self, complement};

/// An immutable nucleotide sequence over {A,C,G,T,N}.
///
/// Only the validating constructors can build one, so every `Sequence` is
/// known to be in the alphabet.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sequence(Vec<u8>);

impl Sequence {
    pub fn new(bytes: Vec<u8>) -> Result<Self> {
        alphabet::validate(&bytes)?;
        Ok(Sequence(bytes))
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Self::new(bytes.to_vec())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All `len - k + 1` contiguous k-mers, stride 1. Empty when `k` is 0 or
    /// longer than the sequence.
    pub fn kmers(&self, k: usize) -> impl Iterator<Item = &[u8]> + '_ {
        crate::kmer::kmer::kmers(&self.0, k)
    }

    /// Owned copy of `self[start..end]`
    pub fn subsequence(&self, start: usize, end: usize) -> Sequence {
        Sequence(self.0[start..end].to_vec())
    }

    pub fn reverse_complement(&self) -> Sequence {
        // validated on construction, so every symbol has a complement
        Sequence(
            self.0
                .iter()
                .rev()
                .map(|&b| complement(b).unwrap_or(b'N'))
                .collect(),
        )
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl FromStr for Sequence {
    type Err = crate::error::OriError;

    fn from_str(s: &str) -> Result<Self> {
        Sequence::from_slice(s.as_bytes())
    }
}

impl AsRef<[u8]> for Sequence {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // ASCII by construction
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

impl Serialize for Sequence {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
