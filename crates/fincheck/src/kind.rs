//! Identifier kinds
//!
//! The closed set of identifiers this crate understands, with the
//! structural facts (length, pattern, validator) attached to each one.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FincheckError;
use crate::validators::{is_aba, is_cusip, is_isin, is_sedol};

/// Types of financial identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IdentifierKind {
    /// Committee on Uniform Securities Identification Procedures number
    Cusip,
    /// International Securities Identification Number
    Isin,
    /// Stock Exchange Daily Official List number
    Sedol,
    /// ABA routing transit number
    Aba,
}

impl IdentifierKind {
    /// Get all identifier kinds
    pub fn all() -> &'static [IdentifierKind] {
        &[
            IdentifierKind::Cusip,
            IdentifierKind::Isin,
            IdentifierKind::Sedol,
            IdentifierKind::Aba,
        ]
    }

    /// Kinds accepted by the multi-type dispatcher. ABA numbers identify
    /// banks, not securities, and are only reachable through `get_abas`.
    pub fn securities() -> &'static [IdentifierKind] {
        &[
            IdentifierKind::Cusip,
            IdentifierKind::Isin,
            IdentifierKind::Sedol,
        ]
    }

    pub fn is_security(self) -> bool {
        !matches!(self, IdentifierKind::Aba)
    }

    /// Upper-case label, as used in result maps and on the command line
    pub fn label(self) -> &'static str {
        match self {
            IdentifierKind::Cusip => "CUSIP",
            IdentifierKind::Isin => "ISIN",
            IdentifierKind::Sedol => "SEDOL",
            IdentifierKind::Aba => "ABA",
        }
    }

    /// Exact length of a candidate, check digit included
    pub fn expected_len(self) -> usize {
        match self {
            IdentifierKind::Cusip => 9,
            IdentifierKind::Isin => 12,
            IdentifierKind::Sedol => 7,
            IdentifierKind::Aba => 9,
        }
    }

    /// Structural pattern body, without boundaries or anchors.
    ///
    /// Every body starts and ends with a word character, so wrapping it in
    /// `\b` gives whole-token matching.
    pub fn structural_pattern(self) -> &'static str {
        match self {
            IdentifierKind::Cusip => r"[A-Za-z0-9]{8}[0-9]",
            IdentifierKind::Isin => r"[A-Za-z]{2}[A-Za-z0-9]{9}[0-9]",
            IdentifierKind::Sedol => r"[0-9BCDFGHJKLMNPQRSTVWXYZ]{6}[0-9]",
            IdentifierKind::Aba => r"[0-9]{9}",
        }
    }

    /// Checksum validator for this kind
    pub fn validator(self) -> fn(&str) -> bool {
        match self {
            IdentifierKind::Cusip => is_cusip,
            IdentifierKind::Isin => is_isin,
            IdentifierKind::Sedol => is_sedol,
            IdentifierKind::Aba => is_aba,
        }
    }

    pub fn validate(self, candidate: &str) -> bool {
        (self.validator())(candidate)
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for IdentifierKind {
    type Err = FincheckError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CUSIP" => Ok(IdentifierKind::Cusip),
            "ISIN" => Ok(IdentifierKind::Isin),
            "SEDOL" => Ok(IdentifierKind::Sedol),
            "ABA" => Ok(IdentifierKind::Aba),
            _ => Err(FincheckError::UnknownKind(s.to_string())),
        }
    }
}
