//! Structured error types for the ribosome crates.

use thiserror::Error;

/// Unified error type for all ribosome operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RibosomeError {
    /// A codon could not be classified against the codon table.
    ///
    /// `position` is the byte offset of the codon in the translated input.
    /// Empty input is reported as an empty codon at position 0.
    #[error("invalid codon {codon:?} at position {position}")]
    InvalidCodon { codon: String, position: usize },

    /// A byte outside the RNA alphabet
    #[error("invalid RNA base {base:?} at position {position}")]
    InvalidBase { base: char, position: usize },

    /// Parse error (unrecognized name or code)
    #[error("parse error: {0}")]
    Parse(String),
}

impl RibosomeError {
    /// Build an [`RibosomeError::InvalidCodon`] from a raw codon slice.
    pub fn invalid_codon(codon: &[u8], position: usize) -> Self {
        RibosomeError::InvalidCodon {
            codon: String::from_utf8_lossy(codon).into_owned(),
            position,
        }
    }
}

/// Convenience alias used throughout the ribosome crates.
pub type Result<T> = std::result::Result<T, RibosomeError>;
