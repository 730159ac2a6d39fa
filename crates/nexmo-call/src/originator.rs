//! Originator ("from" field) checks and formatting.

use crate::error::CallError;

/// Longest sender ID networks accept for alphanumeric originators.
const MAX_ALPHANUMERIC_LEN: usize = 11;

/// Longest international number (E.164) for numeric originators.
const MAX_NUMERIC_LEN: usize = 15;

/// Decode a raw originator, rejecting input that is neither numeric nor UTF-8.
///
/// Numeric input is always ASCII, so the UTF-8 check covers both cases.
pub fn decode_originator(raw: &[u8]) -> Result<&str, CallError> {
    std::str::from_utf8(raw).map_err(|_| CallError::InvalidOriginator)
}

/// Format an originator the way carriers expect it.
///
/// Networks may reject a malformed sender ID and still bill for the attempt,
/// so this never fails: it keeps whatever ASCII letters and digits survive.
///
/// - Input containing any ASCII letter is alphanumeric and capped at 11 characters.
/// - Otherwise it is numeric: one leading `00` is dropped, then it is capped at 15 digits.
pub fn validate_originator(input: &str) -> String {
    let stripped: String = input.chars().filter(char::is_ascii_alphanumeric).collect();

    if input.chars().any(|c| c.is_ascii_alphabetic()) {
        stripped.chars().take(MAX_ALPHANUMERIC_LEN).collect()
    } else {
        let digits = stripped.strip_prefix("00").unwrap_or(&stripped);
        digits.chars().take(MAX_NUMERIC_LEN).collect()
    }
}
