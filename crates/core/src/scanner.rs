// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scanner turning filter text into tokens.
//!
//! The first character of every token decides its kind:
//!
//! ```text
//! whitespace   space, tab, newline
//! group        (
//! identifier   ASCII letter, _, @, #
//! number       ASCII digit, -
//! text         " or '
//! sign         = ? ! > < ~
//! join         & |
//! ```
//!
//! Groups are not tokenized further here. Their contents become the
//! literal of a single [`TokenKind::Group`] token, which the parser scans
//! again as fresh input.

use regex::Regex;
use std::sync::LazyLock;

use tracing::trace;

use crate::cursor::Cursor;
use crate::error::ScanError;
use crate::ops::{JoinOperator, SignOperator};
use crate::token::{quote_text, Token, TokenKind};

static IDENTIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"^[@#_]?[A-Za-z0-9_.:]*[A-Za-z0-9_]$") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });

/// Converts filter text into an ordered sequence of [`Token`]s.
///
/// The scanner keeps no state between calls; every call to [`scan`](Self::scan)
/// works on its own cursor.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scanner;

impl Scanner {
    pub fn new() -> Self {
        Scanner
    }

    /// Scans the whole of `text`, failing on the first malformed token.
    pub fn scan(&self, text: &str) -> Result<Vec<Token>, ScanError> {
        self.scan_from(text, 0)
    }

    /// Scans `text` as if it started at character `base` of a larger input.
    pub(crate) fn scan_from(&self, text: &str, base: usize) -> Result<Vec<Token>, ScanError> {
        let mut cursor = Cursor::with_base(text, base);
        let mut tokens = Vec::new();
        while let Some(token) = next_token(&mut cursor)? {
            trace!(
                kind = %token.kind(),
                literal = token.literal(),
                offset = token.offset(),
                "scanned token"
            );
            tokens.push(token);
        }
        Ok(tokens)
    }
}

/// Scans the next token, or returns `None` once the input is exhausted.
fn next_token(cursor: &mut Cursor) -> Result<Option<Token>, ScanError> {
    if cursor.is_at_end() {
        return Ok(None);
    }
    let position = cursor.position();
    let Some(ch) = cursor.peek() else {
        return Ok(None);
    };

    let token = if is_whitespace(ch) {
        scan_whitespace(cursor)
    } else if is_group_start(ch) {
        scan_group(cursor)?
    } else if is_identifier_start(ch) {
        scan_identifier(cursor)?
    } else if is_number_start(ch) {
        scan_number(cursor)?
    } else if is_text_start(ch) {
        scan_text(cursor)?
    } else if is_sign_start(ch) {
        scan_sign(cursor)?
    } else if is_join_start(ch) {
        scan_join(cursor)?
    } else {
        return Err(ScanError::UnexpectedCharacter { ch, position });
    };
    Ok(Some(token))
}

fn scan_whitespace(cursor: &mut Cursor) -> Token {
    let start = cursor.position();
    let literal = cursor.advance_while(is_whitespace);
    Token::new(TokenKind::Whitespace, literal, start)
}

/// Scans a parenthesized group up to its matching `)`.
///
/// Quoted text inside the group is consumed as a unit so that parentheses
/// and quotes within it do not affect the depth count. It is re-emitted
/// through [`quote_text`], which scans back to the same literal.
fn scan_group(cursor: &mut Cursor) -> Result<Token, ScanError> {
    let start = cursor.position();
    cursor.advance();

    let mut literal = String::new();
    let mut depth = 1usize;
    while let Some(ch) = cursor.advance() {
        if is_group_start(ch) {
            depth += 1;
        } else if is_text_start(ch) {
            cursor.rewind();
            let text = scan_text(cursor)?;
            literal.push_str(&quote_text(text.literal()));
            continue;
        } else if ch == ')' {
            depth -= 1;
            if depth == 0 {
                return Ok(Token::new(TokenKind::Group, literal, start));
            }
        }
        literal.push(ch);
    }

    Err(ScanError::UnterminatedGroup {
        literal: format!("({literal}"),
        position: start,
    })
}

fn scan_identifier(cursor: &mut Cursor) -> Result<Token, ScanError> {
    let start = cursor.position();
    let literal = cursor.advance_while(|c| {
        is_identifier_start(c) || c.is_ascii_digit() || c == '.' || c == ':'
    });

    if !IDENTIFIER_RE.is_match(&literal) {
        return Err(ScanError::InvalidIdentifier {
            literal,
            position: start,
        });
    }
    Ok(Token::new(TokenKind::Identifier, literal, start))
}

fn scan_number(cursor: &mut Cursor) -> Result<Token, ScanError> {
    let start = cursor.position();
    let mut literal = String::new();
    if let Some(first) = cursor.advance() {
        literal.push(first);
    }
    literal.push_str(&cursor.advance_while(|c| c.is_ascii_digit() || c == '.'));

    // Only digits, '.' and a leading '-' reach here, so float parsing
    // accepts exactly the integers and decimals with at most one '.'.
    if literal.parse::<f64>().is_err() {
        return Err(ScanError::InvalidNumber {
            literal,
            position: start,
        });
    }
    Ok(Token::new(TokenKind::Number, literal, start))
}

/// Scans quoted text, closed by the opening quote unless an odd run of
/// backslashes precedes it. Only `\<quote>` is unescaped.
fn scan_text(cursor: &mut Cursor) -> Result<Token, ScanError> {
    let start = cursor.position();
    let Some(quote) = cursor.advance() else {
        return Err(ScanError::UnterminatedText {
            literal: String::new(),
            position: start,
        });
    };

    let mut raw = String::new();
    let mut backslashes = 0usize;
    while let Some(ch) = cursor.advance() {
        if ch == quote && backslashes % 2 == 0 {
            let literal = raw.replace(&format!("\\{quote}"), &quote.to_string());
            return Ok(Token::new(TokenKind::Text, literal, start));
        }
        backslashes = if ch == '\\' { backslashes + 1 } else { 0 };
        raw.push(ch);
    }

    Err(ScanError::UnterminatedText {
        literal: format!("{quote}{raw}"),
        position: start,
    })
}

fn scan_sign(cursor: &mut Cursor) -> Result<Token, ScanError> {
    let start = cursor.position();
    let literal = cursor.advance_while(is_sign_start);
    if !SignOperator::is_valid(&literal) {
        return Err(ScanError::InvalidOperator {
            literal,
            position: start,
        });
    }
    Ok(Token::new(TokenKind::Sign, literal, start))
}

fn scan_join(cursor: &mut Cursor) -> Result<Token, ScanError> {
    let start = cursor.position();
    let literal = cursor.advance_while(is_join_start);
    if literal.parse::<JoinOperator>().is_err() {
        return Err(ScanError::InvalidOperator {
            literal,
            position: start,
        });
    }
    Ok(Token::new(TokenKind::Join, literal, start))
}

fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n')
}

fn is_group_start(ch: char) -> bool {
    ch == '('
}

fn is_identifier_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || matches!(ch, '_' | '@' | '#')
}

fn is_number_start(ch: char) -> bool {
    ch == '-' || ch.is_ascii_digit()
}

fn is_text_start(ch: char) -> bool {
    matches!(ch, '"' | '\'')
}

fn is_sign_start(ch: char) -> bool {
    matches!(ch, '=' | '?' | '!' | '>' | '<' | '~')
}

fn is_join_start(ch: char) -> bool {
    matches!(ch, '&' | '|')
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
