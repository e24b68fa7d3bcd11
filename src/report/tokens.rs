//! Token utilities for report data rows
//!
//! Splits data lines into tokens and converts each token into a numeric
//! value with defined sentinel and failure behavior.

use tracing::debug;

use crate::constants::INFINITY_TOKEN;

/// Split a line on runs of whitespace, discarding empty tokens.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Convert one row token into a numeric value.
///
/// The literal `Infinity` (exact, case-sensitive) is the solver's
/// sentinel for diverged quantities and maps to +∞. Everything else
/// must satisfy the plain decimal grammar (sign, digits, optional
/// fraction, optional exponent); on any failure the value is a quiet
/// NaN, never an error. `f64::from_str` alone is too permissive here:
/// it accepts `inf`, `infinity`, and `nan` in any case, which the
/// report format does not.
pub fn token_to_value(token: &str) -> f64 {
    if token == INFINITY_TOKEN {
        return f64::INFINITY;
    }

    if !is_decimal_token(token) {
        debug!("Invalid token '{}' replaced with NaN", token);
        return f64::NAN;
    }

    match token.parse::<f64>() {
        Ok(value) => value,
        Err(_) => {
            debug!("Invalid token '{}' replaced with NaN", token);
            f64::NAN
        }
    }
}

/// Parse a whole data line into numeric values, one per token.
pub fn parse_row(line: &str) -> Vec<f64> {
    tokenize(line).into_iter().map(token_to_value).collect()
}

/// Whether a token is made only of decimal-grammar characters. A
/// necessary pre-check, not a full validation; `parse` still has the
/// final say (e.g. `3.1.4` passes here and fails there).
fn is_decimal_token(token: &str) -> bool {
    !token.is_empty()
        && token
            .bytes()
            .all(|b| matches!(b, b'0'..=b'9' | b'+' | b'-' | b'.' | b'e' | b'E'))
}
