//! Checksum validation for financial identifiers
//!
//! Every validator is a total function: wrong length, characters outside
//! the kind's alphabet, or a non-numeric check digit all simply yield
//! `false`. Letters are upper-cased before they are mapped to numbers.

use crate::normalize::{char_value, split_payload, to_digit_string};

/// Positional weights for the first six SEDOL characters
const SEDOL_WEIGHTS: [u32; 6] = [1, 3, 1, 7, 3, 9];

/// Positional weights for the nine ABA digits
const ABA_WEIGHTS: [u32; 9] = [3, 7, 1, 3, 7, 1, 3, 7, 1];

/// Validate a CUSIP (8-character issue identifier plus check digit).
///
/// Accepts the `*`, `@` and `#` specials that CUSIPs for private
/// placements use, even though text extraction never produces them.
pub fn is_cusip(candidate: &str) -> bool {
    let candidate = candidate.to_ascii_uppercase();
    if candidate.chars().count() != 9 {
        return false;
    }

    match split_payload(&candidate, None) {
        Ok((payload, check)) => cusip_check_digit(payload) == Some(check),
        Err(_) => false,
    }
}

/// Compute the CUSIP check digit for an 8-character payload
pub fn cusip_check_digit(payload: &str) -> Option<u32> {
    let payload = payload.to_ascii_uppercase();
    if payload.chars().count() != 8 {
        return None;
    }

    let mut sum = 0;
    for (i, c) in payload.chars().enumerate() {
        let mut value = cusip_char_value(c)?;
        // Positions are 1-indexed; double the even ones
        if i % 2 == 1 {
            value *= 2;
        }
        sum += value / 10 + value % 10;
    }

    Some((10 - sum % 10) % 10)
}

fn cusip_char_value(c: char) -> Option<u32> {
    match c {
        '*' => Some(36),
        '@' => Some(37),
        '#' => Some(38),
        _ => char_value(c),
    }
}

/// Validate an ISIN (country code, 9-character NSIN, check digit).
///
/// Letters are expanded to their two-digit values and the Luhn checksum
/// is taken over the resulting digit string, check digit included.
pub fn is_isin(candidate: &str) -> bool {
    let candidate = candidate.to_ascii_uppercase();
    if candidate.chars().count() != 12 {
        return false;
    }

    let (payload, check) = match split_payload(&candidate, None) {
        Ok(split) => split,
        Err(_) => return false,
    };

    match to_digit_string(payload) {
        Ok(mut digits) => {
            digits.push_str(&check.to_string());
            luhn_sum(&digits, false) % 10 == 0
        }
        Err(_) => false,
    }
}

/// Compute the ISIN check digit for an 11-character payload
pub fn isin_check_digit(payload: &str) -> Option<u32> {
    let payload = payload.to_ascii_uppercase();
    if payload.chars().count() != 11 {
        return None;
    }

    let digits = to_digit_string(&payload).ok()?;
    // The check digit will take the rightmost slot, so the payload's last
    // digit is the first one doubled.
    let sum = luhn_sum(&digits, true);
    Some((10 - sum % 10) % 10)
}

/// Luhn sum over a string of ASCII digits, walking from the right.
fn luhn_sum(digits: &str, double_rightmost: bool) -> u32 {
    digits
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| {
            let digit = u32::from(b - b'0');
            if (i % 2 == 0) == double_rightmost {
                let doubled = digit * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                digit
            }
        })
        .sum()
}

/// Validate a SEDOL (6 alphanumeric characters plus check digit).
///
/// Vowels never occur in issued SEDOLs, but that is left to the
/// extraction pattern; the arithmetic accepts any alphanumeric payload.
pub fn is_sedol(candidate: &str) -> bool {
    let candidate = candidate.to_ascii_uppercase();
    if candidate.chars().count() != 7 {
        return false;
    }

    match split_payload(&candidate, None) {
        Ok((payload, check)) => sedol_check_digit(payload) == Some(check),
        Err(_) => false,
    }
}

/// Compute the SEDOL check digit for a 6-character payload
pub fn sedol_check_digit(payload: &str) -> Option<u32> {
    if payload.chars().count() != 6 {
        return None;
    }

    let mut sum = 0;
    for (c, weight) in payload.chars().zip(SEDOL_WEIGHTS) {
        sum += char_value(c)? * weight;
    }

    Some((10 - sum % 10) % 10)
}

/// Validate an ABA routing transit number.
///
/// The weighted digit sum must be a multiple of 10, and the first two
/// digits must be a Federal Reserve prefix (00-12, 21-32, 61-72 or 80).
pub fn is_aba(candidate: &str) -> bool {
    let digits = match aba_digits(candidate, 9) {
        Some(digits) => digits,
        None => return false,
    };

    if !is_aba_prefix(digits[0] * 10 + digits[1]) {
        return false;
    }

    let sum: u32 = digits.iter().zip(ABA_WEIGHTS).map(|(d, w)| d * w).sum();
    sum % 10 == 0
}

/// Compute the ABA check digit for the first eight digits.
///
/// Does not check the Federal Reserve prefix.
pub fn aba_check_digit(payload: &str) -> Option<u32> {
    let digits = aba_digits(payload, 8)?;
    let sum: u32 = digits.iter().zip(ABA_WEIGHTS).map(|(d, w)| d * w).sum();
    Some((10 - sum % 10) % 10)
}

fn aba_digits(s: &str, len: usize) -> Option<Vec<u32>> {
    if s.len() != len || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(s.bytes().map(|b| u32::from(b - b'0')).collect())
}

fn is_aba_prefix(prefix: u32) -> bool {
    matches!(prefix, 0..=12 | 21..=32 | 61..=72 | 80)
}
