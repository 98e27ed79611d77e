// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for nesting limits and configuration.

#![allow(clippy::unwrap_used)]

use fexpr::{ParseError, Parser, ParserConfig};
use yare::parameterized;

fn nested(depth: usize) -> String {
    format!("{}a=1{}", "(".repeat(depth), ")".repeat(depth))
}

#[parameterized(
    one = { 1 },
    ten = { 10 },
    default_limit = { 64 },
)]
fn nesting_within_default_limit(depth: usize) {
    let groups = fexpr::parse(&nested(depth)).unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].depth(), depth);
}

#[test]
fn nesting_past_default_limit() {
    assert_eq!(
        fexpr::parse(&nested(65)).unwrap_err(),
        ParseError::NestingTooDeep { limit: 64 }
    );
}

#[test]
fn deep_input_fails_without_exhausting_stack() {
    let text = "(".repeat(100_000);
    assert!(fexpr::parse(&text).is_err());

    let text = nested(50_000);
    assert_eq!(
        fexpr::parse(&text).unwrap_err(),
        ParseError::NestingTooDeep { limit: 64 }
    );
}

#[test]
fn limit_from_toml() {
    let config = ParserConfig::from_toml_str("max_depth = 2").unwrap();
    let parser = Parser::with_config(config);
    assert!(parser.parse(&nested(2)).is_ok());
    assert_eq!(
        parser.parse(&nested(3)).unwrap_err(),
        ParseError::NestingTooDeep { limit: 2 }
    );
}

#[test]
fn limit_counts_each_parser_call_from_zero() {
    let parser = Parser::with_config(ParserConfig { max_depth: 1 });
    assert!(parser.parse("(a=1) && (b=2) || (c=3)").is_ok());
    assert!(parser.parse("(a=1) && ((b=2))").is_err());
}
