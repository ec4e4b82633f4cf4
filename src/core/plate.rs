//! License-plate normalization and validation.
//!
//! A canonical plate is `LLL-NNN`: 3 uppercase letters, a hyphen, 3 digits.
//! `normalize` reshapes arbitrary input into the closest canonical prefix;
//! `is_valid` is the final gate before anything is sent to the core service.

use regex::Regex;
use std::sync::LazyLock;

static PLATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{3}-[0-9]{3}$").unwrap());

/// Fixed message shown when a plate fails validation.
pub const PLATE_FORMAT_HINT: &str = "invalid format, use ABC-123";

/// Reshape raw keystroke input into the closest canonical `LLL-NNN` prefix.
///
/// Uppercases and drops every character that is not an ASCII letter or
/// digit, harvests the letters among the first 3 surviving characters, then
/// harvests up to 3 digits from the 4th surviving character onward. The
/// hyphen is inserted as soon as at least one digit exists. Output never
/// exceeds 7 characters, and a fully canonical plate maps to itself.
///
/// Letters interleaved with digits are handled positionally: a digit inside
/// the 3-character letter window is skipped there and can keep the letters
/// segment from ever reaching 3 letters. That is a best-effort prefix, not
/// a rejection; [`is_valid`] decides final acceptance.
pub fn normalize(raw: &str) -> String {
    let cleaned: Vec<char> = raw
        .chars()
        .map(|c| c.to_ascii_uppercase())
        .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        .collect();

    let letters: String = cleaned
        .iter()
        .take(3)
        .filter(|c| c.is_ascii_uppercase())
        .collect();

    let digits: String = cleaned
        .iter()
        .skip(3)
        .filter(|c| c.is_ascii_digit())
        .take(3)
        .collect();

    if digits.is_empty() {
        letters
    } else {
        format!("{}-{}", letters, digits)
    }
}

/// True iff `plate` is a fully formed canonical plate (`^[A-Z]{3}-[0-9]{3}$`).
pub fn is_valid(plate: &str) -> bool {
    PLATE_PATTERN.is_match(plate)
}
