// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! fexpr: scanner and parser for boolean filter expressions.
//!
//! A filter expression combines comparisons with `&&` and `||`, optionally
//! grouped with parentheses:
//!
//! ```text
//! a=1 && (b~"x" || c>2)
//! ```
//!
//! Parsing yields a list of [`ExpressionGroup`]s. Evaluating them against
//! data is left to the caller.
//!
//! # Main Components
//!
//! - [`Scanner`] - turns text into [`Token`]s
//! - [`Parser`] - groups tokens into [`ExpressionGroup`]s, recursing into
//!   parenthesized groups
//! - [`ParserConfig`] - nesting limit, from TOML or the environment
//! - [`ops`] - typed join and sign operators for evaluators
//!
//! ```rust,ignore
//! let groups = fexpr::parse("a=1 || 2!=3")?;
//! assert_eq!(groups[1].join(), Some(fexpr::JoinOperator::Or));
//! ```

pub mod ast;
pub mod config;
mod cursor;
pub mod error;
pub mod ops;
pub mod parser;
pub mod scanner;
pub mod token;

pub use ast::{render, Expression, ExpressionGroup, GroupItem};
pub use config::ParserConfig;
pub use error::{AstError, Error, Expected, ParseError, Result, ScanError};
pub use ops::{Comparison, JoinOperator, SignOperator};
pub use parser::Parser;
pub use scanner::Scanner;
pub use token::{Token, TokenKind};

/// Scans `text` into tokens.
pub fn scan(text: &str) -> std::result::Result<Vec<Token>, ScanError> {
    Scanner::new().scan(text)
}

/// Parses `text` with the default configuration.
pub fn parse(text: &str) -> std::result::Result<Vec<ExpressionGroup>, ParseError> {
    Parser::new().parse(text)
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
