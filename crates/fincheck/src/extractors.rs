//! Identifier extraction from text

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{FincheckError, Result};
use crate::kind::IdentifierKind;
use crate::validators::{is_aba, is_cusip, is_isin, is_sedol};

/// Default kinds for [`find_securities`]
pub const DEFAULT_SECURITIES: [&str; 3] = ["CUSIP", "ISIN", "SEDOL"];

/// Extracted identifier with position information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedIdentifier {
    pub kind: IdentifierKind,
    pub value: String,
    pub start_index: u32,
    pub end_index: u32,
}

lazy_static! {
    // \b on both sides: the neighbour must be a non-word character or the
    // edge of the text, so candidates inside longer alphanumeric runs are skipped.
    static ref CUSIP_REGEX: Regex = bounded(IdentifierKind::Cusip);
    static ref ISIN_REGEX: Regex = bounded(IdentifierKind::Isin);
    static ref SEDOL_REGEX: Regex = bounded(IdentifierKind::Sedol);
    static ref ABA_REGEX: Regex = bounded(IdentifierKind::Aba);
}

fn bounded(kind: IdentifierKind) -> Regex {
    Regex::new(&format!(r"\b{}\b", kind.structural_pattern())).unwrap()
}

/// Whole-token structural pattern for a kind
pub fn kind_regex(kind: IdentifierKind) -> &'static Regex {
    match kind {
        IdentifierKind::Cusip => &CUSIP_REGEX,
        IdentifierKind::Isin => &ISIN_REGEX,
        IdentifierKind::Sedol => &SEDOL_REGEX,
        IdentifierKind::Aba => &ABA_REGEX,
    }
}

/// Find every non-overlapping match of `pattern`, keeping those accepted by
/// `validator` (or all of them when there is none).
///
/// Matches are returned as they appear in the text, left to right.
pub fn find_and_validate(
    text: &str,
    pattern: &Regex,
    validator: Option<fn(&str) -> bool>,
) -> Vec<String> {
    pattern
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|candidate| match validator {
            Some(is_valid) => {
                let keep = is_valid(*candidate);
                if !keep {
                    tracing::trace!("Dropping {:?}: checksum failed", candidate);
                }
                keep
            }
            None => true,
        })
        .map(str::to_string)
        .collect()
}

/// Extract CUSIPs from text
pub fn get_cusips(text: &str) -> Vec<String> {
    find_and_validate(text, &CUSIP_REGEX, Some(is_cusip))
}

/// Extract ISINs from text
pub fn get_isins(text: &str) -> Vec<String> {
    find_and_validate(text, &ISIN_REGEX, Some(is_isin))
}

/// Extract SEDOLs from text
pub fn get_sedols(text: &str) -> Vec<String> {
    find_and_validate(text, &SEDOL_REGEX, Some(is_sedol))
}

/// Extract ABA routing numbers from text
pub fn get_abas(text: &str) -> Vec<String> {
    find_and_validate(text, &ABA_REGEX, Some(is_aba))
}

/// Extract identifiers of a single kind
pub fn get_identifiers(text: &str, kind: IdentifierKind) -> Vec<String> {
    match kind {
        IdentifierKind::Cusip => get_cusips(text),
        IdentifierKind::Isin => get_isins(text),
        IdentifierKind::Sedol => get_sedols(text),
        IdentifierKind::Aba => get_abas(text),
    }
}

/// Resolve dispatcher labels to security kinds.
///
/// Labels are case-insensitive. Unknown labels and ABA are dropped; it is
/// an error for nothing to remain.
pub fn security_kinds<S: AsRef<str>>(include: &[S]) -> Result<Vec<IdentifierKind>> {
    let mut kinds = Vec::new();
    for label in include {
        match label.as_ref().parse::<IdentifierKind>() {
            Ok(kind) if kind.is_security() => {
                if !kinds.contains(&kind) {
                    kinds.push(kind);
                }
            }
            _ => tracing::debug!("Ignoring identifier kind {:?}", label.as_ref()),
        }
    }

    if kinds.is_empty() {
        return Err(FincheckError::NoSecurityKinds);
    }
    Ok(kinds)
}

/// Extract every requested kind of security identifier from text.
///
/// `include` takes CUSIP, ISIN and SEDOL labels in any case. The result has
/// exactly the recognised kinds as keys, each mapped to what the matching
/// `get_*` function returns.
pub fn find_securities<S: AsRef<str>>(
    text: &str,
    include: &[S],
) -> Result<BTreeMap<IdentifierKind, Vec<String>>> {
    let kinds = security_kinds(include)?;
    tracing::debug!("Searching {} bytes for {:?}", text.len(), kinds);

    Ok(kinds
        .into_iter()
        .map(|kind| (kind, get_identifiers(text, kind)))
        .collect())
}

/// [`find_securities`] for CUSIPs, ISINs and SEDOLs
pub fn find_all_securities(text: &str) -> BTreeMap<IdentifierKind, Vec<String>> {
    IdentifierKind::securities()
        .iter()
        .map(|&kind| (kind, get_identifiers(text, kind)))
        .collect()
}

/// Extract all identifiers of the given kinds with their byte offsets,
/// sorted by position. ABA numbers may be requested here.
pub fn extract_all(text: &str, kinds: &[IdentifierKind]) -> Vec<ExtractedIdentifier> {
    let mut results = Vec::new();

    for &kind in kinds {
        for m in kind_regex(kind).find_iter(text) {
            if kind.validate(m.as_str()) {
                results.push(ExtractedIdentifier {
                    kind,
                    value: m.as_str().to_string(),
                    start_index: m.start() as u32,
                    end_index: m.end() as u32,
                });
            }
        }
    }

    // Sort by position
    results.sort_by_key(|r| (r.start_index, r.kind));
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_cusips() {
        let text = "Apple (CUSIP 037833100) and Cisco 17275R102; bogus 037833101";
        assert_eq!(get_cusips(text), vec!["037833100", "17275R102"]);
    }

    #[test]
    fn test_get_cusips_keeps_original_case() {
        assert_eq!(get_cusips("cisco: 17275r102."), vec!["17275r102"]);
    }

    #[test]
    fn test_get_cusips_requires_boundaries() {
        assert!(get_cusips("X037833100").is_empty());
        assert!(get_cusips("037833100X").is_empty());
        assert!(get_cusips("_037833100").is_empty());
        assert_eq!(get_cusips("(037833100)"), vec!["037833100"]);
    }

    #[test]
    fn test_get_isins() {
        let text = "ISINs: US0378331005, GB0002634946 and US0378331004.";
        assert_eq!(get_isins(text), vec!["US0378331005", "GB0002634946"]);
    }

    #[test]
    fn test_isin_does_not_leak_embedded_cusip() {
        // The CUSIP inside an ISIN is not a whole token
        assert!(get_cusips("US0378331005").is_empty());
    }

    #[test]
    fn test_get_sedols() {
        let text = "SEDOL 0263494 / B0YBKJ7 / B0YBKR7";
        assert_eq!(get_sedols(text), vec!["0263494", "B0YBKJ7"]);
    }

    #[test]
    fn test_get_sedols_pattern_excludes_vowels_and_lowercase() {
        assert!(is_sedol("b0ybkj7"));
        assert!(get_sedols("b0ybkj7").is_empty());
        assert!(get_sedols("A0YBKJ7").is_empty());
    }

    #[test]
    fn test_get_abas() {
        let text = "Wire to 021000021, not 011000016 or 130000006.";
        assert_eq!(get_abas(text), vec!["021000021"]);
    }

    #[test]
    fn test_find_and_validate_without_validator() {
        let matches = find_and_validate("037833101 x 037833100", &CUSIP_REGEX, None);
        assert_eq!(matches, vec!["037833101", "037833100"]);
    }

    #[test]
    fn test_find_and_validate_no_match() {
        assert!(find_and_validate("", &ISIN_REGEX, Some(is_isin)).is_empty());
        assert!(find_and_validate("nothing here", &ISIN_REGEX, Some(is_isin)).is_empty());
    }

    #[test]
    fn test_find_securities() {
        let text = "037833100 US0378331005 0263494";
        let found = find_securities(text, &["cusip", "ISIN", "Sedol"]).unwrap();
        assert_eq!(found.len(), 3);
        assert_eq!(found[&IdentifierKind::Cusip], vec!["037833100"]);
        assert_eq!(found[&IdentifierKind::Isin], vec!["US0378331005"]);
        assert_eq!(found[&IdentifierKind::Sedol], vec!["0263494"]);
    }

    #[test]
    fn test_find_securities_subset() {
        let found = find_securities("037833100", &["CUSIP", "bogus"]).unwrap();
        assert_eq!(found.keys().copied().collect::<Vec<_>>(), vec![IdentifierKind::Cusip]);
    }

    #[test]
    fn test_find_securities_rejects_unknown_only() {
        assert!(matches!(
            find_securities("037833100", &["bogus"]),
            Err(FincheckError::NoSecurityKinds)
        ));
        let empty: [&str; 0] = [];
        assert!(find_securities("037833100", &empty).is_err());
    }

    #[test]
    fn test_find_securities_excludes_aba() {
        assert!(find_securities("021000021", &["ABA"]).is_err());
        let found = find_securities("021000021", &["ABA", "CUSIP"]).unwrap();
        assert!(!found.contains_key(&IdentifierKind::Aba));
    }

    #[test]
    fn test_find_all_securities_matches_defaults() {
        let text = "037833100 US0378331005 0263494";
        assert_eq!(
            find_all_securities(text),
            find_securities(text, &DEFAULT_SECURITIES).unwrap()
        );
    }

    #[test]
    fn test_extract_all_reports_overlapping_kinds() {
        // A nine-digit run can satisfy both the CUSIP and ABA checksums
        let ids = extract_all("021000021", IdentifierKind::all());
        let kinds: Vec<_> = ids.iter().map(|id| id.kind).collect();
        assert_eq!(kinds, vec![IdentifierKind::Cusip, IdentifierKind::Aba]);
    }

    #[test]
    fn test_extract_all() {
        let text = "ABA 111000025, ISIN US0378331005";
        let ids = extract_all(text, IdentifierKind::all());
        // 111000025 is also CUSIP-shaped, but its CUSIP checksum fails
        assert_eq!(ids.len(), 2);
        assert_eq!(ids[0].kind, IdentifierKind::Aba);
        assert_eq!(ids[0].start_index, 4);
        assert_eq!(ids[0].end_index, 13);
        assert_eq!(ids[1].kind, IdentifierKind::Isin);
        assert_eq!(&text[ids[1].start_index as usize..ids[1].end_index as usize], "US0378331005");
    }
}
