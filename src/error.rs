use thiserror::Error;

/// Errors raised while searching for replication origins
#[derive(Error, Debug)]
pub enum OriError {
    /// A byte outside the {A,C,G,T,N} alphabet
    #[error("invalid symbol '{symbol}' at position {position}: expected one of A, C, G, T or N")]
    InvalidSymbol { symbol: char, position: usize },

    /// k, window length or another parameter makes the search impossible
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Nothing to score for this window/k combination
    #[error("invalid window/k combination: no candidate motifs to score")]
    EmptyCandidateSet,

    /// Strict boundary policy refused a window crossing the genome ends
    #[error("window [{start}, {end}) falls outside the genome (length {genome_len})")]
    WindowOutOfBounds {
        start: i64,
        end: i64,
        genome_len: usize,
    },

    /// The genome file contained no sequence lines
    #[error("genome contains no sequence data")]
    EmptyGenome,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl OriError {
    /// True for errors caused by the caller's k / window parameters rather than the data
    pub fn is_parameter_error(&self) -> bool {
        matches!(
            self,
            OriError::InvalidParameters(_) | OriError::EmptyCandidateSet
        )
    }
}

pub type Result<T> = std::result::Result<T, OriError>;
