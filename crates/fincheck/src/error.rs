//! Error types

use thiserror::Error;

/// Errors reported by the normalization helpers, the dispatcher,
/// and configuration / CSV loading.
///
/// Checksum validators never produce these: a malformed candidate is
/// simply invalid.
#[derive(Debug, Error)]
pub enum FincheckError {
    #[error("Must include at least one of the following: CUSIP, ISIN, or SEDOL")]
    NoSecurityKinds,

    #[error("Unknown identifier kind: {0}")]
    UnknownKind(String),

    #[error("Invalid character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    #[error("Input must be a payload of {expected} characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Missing or non-numeric check digit in {0:?}")]
    MissingCheckDigit(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, FincheckError>;
