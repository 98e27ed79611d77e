// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for rejected filter expressions.
//!
//! Every invalid input must produce exactly one typed error and no AST.

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use fexpr::{Expected, ParseError, ScanError};
use yare::parameterized;

fn parse_err(text: &str) -> ParseError {
    match fexpr::parse(text) {
        Ok(groups) => panic!("{text:?} parsed to {groups:?}"),
        Err(err) => err,
    }
}

// =============================================================================
// Grammar errors
// =============================================================================

#[parameterized(
    sign_first = { "> 1" },
    sign_then_operand = { "> a 1" },
    join_instead_of_sign = { "a || 1" },
    join_and_instead_of_sign = { "a && 1" },
    join_first = { "|| test = 1" },
    double_join = { "test = 1 && ||" },
    identifier_after_clause = { "test = 1 a" },
    text_after_clause = { "test = 1 \"a\"" },
    identifier_glued_to_number = { "test = 1@test" },
    doubled_quotes = { "test = \"\"demo\"\"" },
    doubled_single_quotes = { "test = ''demo''" },
    sign_as_right = { "a > >" },
)]
fn unexpected_token(text: &str) {
    assert!(
        matches!(parse_err(text), ParseError::UnexpectedToken { .. }),
        "{text:?}"
    );
}

#[parameterized(
    empty = { "" },
    missing_right = { "a >" },
    trailing_and = { "test > 1 &&" },
    dangling_identifier = { "test = 1 && a" },
    dangling_text = { "test = 1 && \"a\"" },
    empty_group = { "()" },
    nested_empty_group = { "(())" },
)]
fn unexpected_end(text: &str) {
    assert_eq!(parse_err(text), ParseError::UnexpectedEndOfInput, "{text:?}");
}

#[test]
fn unexpected_token_names_what_was_expected() {
    let err = parse_err("a=1 && > 2");
    assert!(matches!(
        err,
        ParseError::UnexpectedToken {
            expected: Expected::LeftOperand,
            ..
        }
    ));
    let msg = err.to_string();
    assert!(msg.contains("left operand"), "{msg}");
    assert!(msg.contains("'>'"), "{msg}");
}

// =============================================================================
// Scan errors
// =============================================================================

#[parameterized(
    percent = { "a > %" },
    plus = { "a + 1" },
    plus_numbers = { "1 + 1" },
    backtick = { "test = `demo`" },
    braces = { "{a=1}" },
    brackets = { "[a=1]" },
    stray_close = { "a=1)" },
    extra_close = { "((a=1 || a=2) && c=1))" },
)]
fn unexpected_character(text: &str) {
    assert!(
        matches!(
            parse_err(text),
            ParseError::Scan(ScanError::UnexpectedCharacter { .. })
        ),
        "{text:?}"
    );
}

#[parameterized(
    bang = { "a ! 1" },
    single_amp = { "a=1 & b=2" },
    arrow = { "a => 1" },
)]
fn invalid_operator(text: &str) {
    assert!(
        matches!(
            parse_err(text),
            ParseError::Scan(ScanError::InvalidOperator { .. })
        ),
        "{text:?}"
    );
}

#[test]
fn lone_minus_is_invalid_number() {
    assert!(matches!(
        parse_err("1 - 1"),
        ParseError::Scan(ScanError::InvalidNumber { .. })
    ));
}

#[test]
fn dot_before_identifier_is_unexpected() {
    assert!(matches!(
        parse_err("test = .@test"),
        ParseError::Scan(ScanError::UnexpectedCharacter { ch: '.', .. })
    ));
}

#[test]
fn trailing_dot_identifier_is_invalid() {
    assert!(matches!(
        parse_err("a. = 1"),
        ParseError::Scan(ScanError::InvalidIdentifier { .. })
    ));
}

#[parameterized(
    double_then_single = { "test = \"demo'" },
    single_then_double = { "test = 'demo\"" },
    extra_double = { "test = 'demo'\"" },
    extra_single = { "test = 'demo''" },
    double_extra_single = { "test = \"demo\"'" },
    double_extra_double = { "test = \"demo\"\"" },
)]
fn unterminated_text(text: &str) {
    assert!(
        matches!(
            parse_err(text),
            ParseError::Scan(ScanError::UnterminatedText { .. })
        ),
        "{text:?}"
    );
}

#[parameterized(
    missing_close = { "(a=1" },
    missing_nested_close = { "((a=1)" },
)]
fn unterminated_group(text: &str) {
    assert!(
        matches!(
            parse_err(text),
            ParseError::Scan(ScanError::UnterminatedGroup { .. })
        ),
        "{text:?}"
    );
}
