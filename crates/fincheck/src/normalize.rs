//! Text normalization helpers shared by the checksum validators

use crate::error::{FincheckError, Result};

/// Alphabet used to map characters to numeric values: '0' is 0, 'Z' is 35.
pub const ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Keep only the digit characters of a string, in order.
pub fn keep_numeric(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Value of a single character in [`ALPHABET`], case-insensitive.
pub fn char_value(c: char) -> Option<u32> {
    match c.to_ascii_uppercase() {
        d @ '0'..='9' => Some(d as u32 - '0' as u32),
        l @ 'A'..='Z' => Some(l as u32 - 'A' as u32 + 10),
        _ => None,
    }
}

/// Map every character to its index in [`ALPHABET`].
///
/// Letters are upper-cased first. Fails on the first character outside
/// the alphabet.
pub fn to_digit_values(s: &str) -> Result<Vec<u32>> {
    s.chars()
        .enumerate()
        .map(|(position, character)| {
            char_value(character).ok_or(FincheckError::InvalidCharacter {
                character,
                position,
            })
        })
        .collect()
}

/// Like [`to_digit_values`] but concatenates the values into a digit
/// string, so letters expand to two digits ("US" becomes "3028").
pub fn to_digit_string(s: &str) -> Result<String> {
    Ok(to_digit_values(s)?
        .into_iter()
        .map(|v| v.to_string())
        .collect())
}

/// Remove embedded spaces; optionally require an exact resulting length.
pub fn ensure_format(s: &str, expected_len: Option<usize>) -> Result<String> {
    let cleaned: String = s.chars().filter(|c| *c != ' ').collect();
    if let Some(expected) = expected_len {
        let actual = cleaned.chars().count();
        if actual != expected {
            return Err(FincheckError::InvalidLength { expected, actual });
        }
    }
    Ok(cleaned)
}

/// Split a string into its payload and trailing check digit.
///
/// Without `payload_len` everything but the last character is payload.
/// With it, the first `payload_len` characters are payload and the next
/// one is the check digit; anything after that is ignored.
pub fn split_payload(s: &str, payload_len: Option<usize>) -> Result<(&str, u32)> {
    let payload_len = match payload_len {
        Some(n) => n,
        None => s
            .chars()
            .count()
            .checked_sub(1)
            .ok_or_else(|| FincheckError::MissingCheckDigit(s.to_string()))?,
    };

    let mut chars = s.char_indices().skip(payload_len);
    let (split_at, check) = chars
        .next()
        .ok_or_else(|| FincheckError::MissingCheckDigit(s.to_string()))?;
    let digit = check
        .to_digit(10)
        .ok_or_else(|| FincheckError::MissingCheckDigit(s.to_string()))?;

    Ok((&s[..split_at], digit))
}
