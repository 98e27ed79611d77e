// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for scanning, parsing and configuration.
//!
//! Positions are character offsets into the text passed to the scanner or
//! parser, including for errors raised inside parenthesized groups. A group
//! whose quoted text was re-quoted with different escaping can shift the
//! positions that follow that text within the group.

use std::fmt;

use thiserror::Error;

use crate::ops::{JoinOperator, SignOperator};
use crate::token::{Token, TokenKind};

/// Errors raised by the [`Scanner`](crate::Scanner).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("unexpected character '{ch}' at position {position}")]
    UnexpectedCharacter { ch: char, position: usize },

    #[error("unterminated group '{literal}' at position {position}\n  hint: every '(' needs a matching ')'")]
    UnterminatedGroup { literal: String, position: usize },

    #[error("invalid identifier '{literal}' at position {position}\n  hint: identifiers may start with '@', '#' or '_' and must end in a letter, digit or '_'")]
    InvalidIdentifier { literal: String, position: usize },

    #[error("invalid number '{literal}' at position {position}")]
    InvalidNumber { literal: String, position: usize },

    #[error("unterminated text '{literal}' at position {position}\n  hint: close the text with the same quote it was opened with")]
    UnterminatedText { literal: String, position: usize },

    #[error("invalid operator '{literal}' at position {position}\n  hint: valid operators are: {}; joins: {}", SignOperator::valid_symbols(), JoinOperator::valid_symbols())]
    InvalidOperator { literal: String, position: usize },
}

impl ScanError {
    /// Character offset at which the offending token started.
    pub fn position(&self) -> usize {
        match self {
            ScanError::UnexpectedCharacter { position, .. }
            | ScanError::UnterminatedGroup { position, .. }
            | ScanError::InvalidIdentifier { position, .. }
            | ScanError::InvalidNumber { position, .. }
            | ScanError::UnterminatedText { position, .. }
            | ScanError::InvalidOperator { position, .. } => *position,
        }
    }
}

/// The token category the parser was waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    LeftOperand,
    Sign,
    RightOperand,
    Join,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::LeftOperand => write!(f, "left operand (identifier, text or number)"),
            Expected::Sign => write!(f, "sign"),
            Expected::RightOperand => write!(f, "right operand (identifier, text or number)"),
            Expected::Join => write!(f, "join"),
        }
    }
}

/// Errors raised by the [`Parser`](crate::Parser).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error("expected {expected}, got '{literal}' ({kind}) at position {position}")]
    UnexpectedToken {
        expected: Expected,
        kind: TokenKind,
        literal: String,
        position: usize,
    },

    #[error("unexpected end of expression")]
    UnexpectedEndOfInput,

    #[error("groups nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}

impl ParseError {
    pub(crate) fn unexpected(expected: Expected, token: &Token) -> Self {
        ParseError::UnexpectedToken {
            expected,
            kind: token.kind(),
            literal: token.literal().to_string(),
            position: token.offset(),
        }
    }
}

/// Errors raised when deserializing an AST the parser could not have produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AstError {
    #[error("malformed {kind} token '{literal}'")]
    MalformedToken { kind: TokenKind, literal: String },

    #[error("expected {expected}, got '{literal}' ({kind})")]
    MisplacedToken {
        expected: Expected,
        kind: TokenKind,
        literal: String,
    },

    #[error("a parenthesized group must hold at least one expression")]
    EmptyGroup,
}

impl AstError {
    pub(crate) fn misplaced(expected: Expected, token: &Token) -> Self {
        AstError::MisplacedToken {
            expected,
            kind: token.kind(),
            literal: token.literal().to_string(),
        }
    }
}

/// Crate-level error covering parsing and configuration.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("config parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl From<ScanError> for Error {
    fn from(err: ScanError) -> Self {
        Error::Parse(ParseError::Scan(err))
    }
}

/// A specialized Result type for fexpr operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
