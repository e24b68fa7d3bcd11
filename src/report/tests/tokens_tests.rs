//! Tests for tokenization and token-to-value conversion.

use crate::report::tokens::{parse_row, token_to_value, tokenize};

#[test]
fn test_tokenize_collapses_whitespace_runs() {
    assert_eq!(tokenize("0.25   0.10\t\t0.05"), vec!["0.25", "0.10", "0.05"]);
    assert_eq!(tokenize("   lead and trail   "), vec!["lead", "and", "trail"]);
    assert!(tokenize("").is_empty());
    assert!(tokenize("   \t  ").is_empty());
}

#[test]
fn test_infinity_sentinel_exact_match() {
    assert_eq!(token_to_value("Infinity"), f64::INFINITY);
}

#[test]
fn test_infinity_sentinel_is_case_sensitive() {
    // Case variants must NOT map to infinity; they are invalid tokens.
    // f64::from_str would happily accept these, hence the grammar gate.
    assert!(token_to_value("infinity").is_nan());
    assert!(token_to_value("INFINITY").is_nan());
    assert!(token_to_value("inf").is_nan());
    assert!(token_to_value("-inf").is_nan());
}

#[test]
fn test_nan_spelling_is_not_a_number_literal() {
    assert!(token_to_value("NaN").is_nan());
    assert!(token_to_value("nan").is_nan());
}

#[test]
fn test_valid_decimal_forms() {
    assert_eq!(token_to_value("42"), 42.0);
    assert_eq!(token_to_value("-2.5"), -2.5);
    assert_eq!(token_to_value("+0.125"), 0.125);
    assert_eq!(token_to_value("1e10"), 1e10);
    assert_eq!(token_to_value("1.8E-05"), 1.8e-5);
    assert_eq!(token_to_value(".5"), 0.5);
    assert_eq!(token_to_value("3."), 3.0);
}

#[test]
fn test_malformed_tokens_become_nan() {
    assert!(token_to_value("3.1.4").is_nan());
    assert!(token_to_value("abc").is_nan());
    assert!(token_to_value("12x").is_nan());
    assert!(token_to_value("-").is_nan());
    assert!(token_to_value("e5").is_nan());
    assert!(token_to_value("1_000").is_nan());
}

#[test]
fn test_parse_row_mixed_content() {
    let row = parse_row("0.25  Infinity  bogus  -1.5");
    assert_eq!(row.len(), 4);
    assert_eq!(row[0], 0.25);
    assert_eq!(row[1], f64::INFINITY);
    assert!(row[2].is_nan());
    assert_eq!(row[3], -1.5);
}
