//! Windowed substring scanning
//!
//! Whole-token extraction misses identifiers that are glued to other
//! characters ("XX037833100Z"). The windowed scan slides a window of the
//! kind's exact length over every character offset instead, so it finds
//! those too, at the cost of reporting overlapping hits.

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::Result;
use crate::extractors::security_kinds;
use crate::kind::IdentifierKind;

lazy_static! {
    static ref CUSIP_ANCHORED: Regex = anchored(IdentifierKind::Cusip);
    static ref ISIN_ANCHORED: Regex = anchored(IdentifierKind::Isin);
    static ref SEDOL_ANCHORED: Regex = anchored(IdentifierKind::Sedol);
    static ref ABA_ANCHORED: Regex = anchored(IdentifierKind::Aba);
}

fn anchored(kind: IdentifierKind) -> Regex {
    Regex::new(&format!("^{}$", kind.structural_pattern())).unwrap()
}

fn anchored_regex(kind: IdentifierKind) -> &'static Regex {
    match kind {
        IdentifierKind::Cusip => &CUSIP_ANCHORED,
        IdentifierKind::Isin => &ISIN_ANCHORED,
        IdentifierKind::Sedol => &SEDOL_ANCHORED,
        IdentifierKind::Aba => &ABA_ANCHORED,
    }
}

/// Every window of `kind`'s length that matches its structural pattern and
/// passes its checksum, in order of start offset.
pub fn scan_windows(text: &str, kind: IdentifierKind) -> Vec<String> {
    let len = kind.expected_len();
    let pattern = anchored_regex(kind);

    text.char_indices()
        .filter_map(|(start, _)| text.get(start..start + len))
        .filter(|window| pattern.is_match(window) && kind.validate(window))
        .map(str::to_string)
        .collect()
}

/// Windowed scan of one text for the requested security kinds.
///
/// `include` follows the same rules as
/// [`find_securities`](crate::find_securities).
pub fn scan_substrings<S: AsRef<str>>(
    text: &str,
    include: &[S],
) -> Result<BTreeMap<IdentifierKind, Vec<String>>> {
    let kinds = security_kinds(include)?;

    Ok(kinds
        .into_iter()
        .map(|kind| (kind, scan_windows(text, kind)))
        .collect())
}

/// Windowed scan over several texts. Hits are appended per kind in input
/// order; every requested kind is present even if nothing was found.
pub fn scan_list<T: AsRef<str>, S: AsRef<str>>(
    texts: &[T],
    include: &[S],
) -> Result<BTreeMap<IdentifierKind, Vec<String>>> {
    let kinds = security_kinds(include)?;
    Ok(scan_kinds(texts, &kinds))
}

/// Windowed scan over several texts for already-resolved kinds, ABA
/// included. Same accumulation rules as [`scan_list`].
pub fn scan_kinds<T: AsRef<str>>(
    texts: &[T],
    kinds: &[IdentifierKind],
) -> BTreeMap<IdentifierKind, Vec<String>> {
    let mut result: BTreeMap<IdentifierKind, Vec<String>> =
        kinds.iter().map(|&kind| (kind, Vec::new())).collect();

    for text in texts {
        for &kind in kinds {
            let hits = scan_windows(text.as_ref(), kind);
            if let Some(found) = result.get_mut(&kind) {
                found.extend(hits);
            }
        }
    }

    tracing::debug!(
        "Scanned {} texts, {} hits",
        texts.len(),
        result.values().map(Vec::len).sum::<usize>()
    );
    result
}
