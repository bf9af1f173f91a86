// Allow manual modulo checks since .is_multiple_of() is nightly-only
#![allow(clippy::manual_is_multiple_of)]

//! Financial identifier extraction and validation
//!
//! This crate finds identifiers in free-form text and confirms them by
//! their check digits:
//! - CUSIP (9 characters, North America)
//! - ISIN (12 characters, country-prefixed, Luhn checked)
//! - SEDOL (7 characters, UK and Ireland)
//! - ABA routing transit numbers (9 digits, US banks)
//!
//! Candidates are located with structural regexes and kept only when
//! their checksum passes.
//!
//! ```
//! use fincheck::{find_securities, get_cusips, is_isin, IdentifierKind};
//!
//! assert!(is_isin("US0378331005"));
//! assert_eq!(get_cusips("Apple Inc. (037833100)"), vec!["037833100"]);
//!
//! let found = find_securities("US0378331005 / 0263494", &["isin", "sedol"]).unwrap();
//! assert_eq!(found[&IdentifierKind::Sedol], vec!["0263494"]);
//! ```

pub mod config;
pub mod csv_input;
pub mod error;
pub mod extractors;
pub mod kind;
pub mod normalize;
pub mod validators;
pub mod windows;

pub use config::{FincheckConfig, OutputFormat, ScanMode};
pub use csv_input::{read_csv, read_csv_cells};
pub use error::{FincheckError, Result};
pub use extractors::*;
pub use kind::IdentifierKind;
pub use validators::*;
pub use windows::{scan_kinds, scan_list, scan_substrings, scan_windows};
