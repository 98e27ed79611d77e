// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lexical tokens produced by the [`Scanner`](crate::Scanner).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::AstError;
use crate::scanner::Scanner;

/// The kind of a scanned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// A run of spaces, tabs and newlines.
    Whitespace,
    /// The raw contents of a parenthesized sub-expression.
    Group,
    /// A field reference such as `name`, `@user.id` or `#tag`.
    Identifier,
    /// An integer or decimal literal, optionally negative.
    Number,
    /// A quoted string with the quotes and escapes removed.
    Text,
    /// A comparison operator such as `=`, `!~` or `?>=`.
    Sign,
    /// A boolean join operator, `&&` or `||`.
    Join,
}

impl TokenKind {
    /// Returns the lowercase name used in the structural projection.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Whitespace => "whitespace",
            TokenKind::Group => "group",
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::Text => "text",
            TokenKind::Sign => "sign",
            TokenKind::Join => "join",
        }
    }

    /// Returns true for kinds that may stand on either side of a comparison.
    pub fn is_operand(&self) -> bool {
        matches!(
            self,
            TokenKind::Identifier | TokenKind::Text | TokenKind::Number
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A `(kind, literal)` pair.
///
/// The `offset` records the character position where the token started in
/// the text it was scanned from. It is diagnostic only and is ignored by
/// equality and by serialization.
///
/// Tokens are created by the [`Scanner`]. A deserialized token is accepted
/// only if its rendered form scans back to the same token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawToken")]
pub struct Token {
    #[serde(rename = "type")]
    kind: TokenKind,
    literal: String,
    #[serde(skip)]
    offset: usize,
}

impl Token {
    /// Creates a token that started at `offset`.
    pub(crate) fn new(kind: TokenKind, literal: impl Into<String>, offset: usize) -> Self {
        Token {
            kind,
            literal: literal.into(),
            offset,
        }
    }

    /// The implicit `&&` that joins the first clause of every expression.
    pub(crate) fn default_join() -> Self {
        Token::new(TokenKind::Join, "&&", 0)
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn literal(&self) -> &str {
        &self.literal
    }

    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.literal == other.literal
    }
}

impl Eq for Token {}

#[derive(Deserialize)]
struct RawToken {
    #[serde(rename = "type")]
    kind: TokenKind,
    literal: String,
}

impl TryFrom<RawToken> for Token {
    type Error = AstError;

    fn try_from(raw: RawToken) -> Result<Self, Self::Error> {
        let token = Token::new(raw.kind, raw.literal, 0);
        let rendered = token.to_string();
        match Scanner::new().scan(&rendered).as_deref() {
            Ok([scanned]) if *scanned == token => Ok(token),
            _ => Err(AstError::MalformedToken {
                kind: token.kind,
                literal: token.literal,
            }),
        }
    }
}

/// Renders the token back into filter syntax.
///
/// Text is re-quoted as by [`quote_text`]; groups are wrapped in parentheses.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Text => f.write_str(&quote_text(&self.literal)),
            TokenKind::Group => write!(f, "({})", self.literal),
            _ => write!(f, "{}", self.literal),
        }
    }
}

/// Wraps a text literal in quotes so that it scans back to itself.
///
/// Double quotes are preferred. Each quote inside the literal gets a
/// backslash, which only works when the backslash run already before it is
/// even; the same holds for a run at the very end. Single quotes are tried
/// when double quotes cannot represent the literal. Every literal the
/// scanner produces fits at least the quote it was scanned with.
pub(crate) fn quote_text(literal: &str) -> String {
    escape_with(literal, '"')
        .or_else(|| escape_with(literal, '\''))
        .unwrap_or_else(|| format!("\"{}\"", literal.replace('"', "\\\"")))
}

fn escape_with(literal: &str, quote: char) -> Option<String> {
    let mut out = String::with_capacity(literal.len() + 2);
    out.push(quote);
    let mut backslashes = 0usize;
    for ch in literal.chars() {
        if ch == quote {
            if backslashes % 2 == 1 {
                return None;
            }
            out.push('\\');
        }
        backslashes = if ch == '\\' { backslashes + 1 } else { 0 };
        out.push(ch);
    }
    if backslashes % 2 == 1 {
        return None;
    }
    out.push(quote);
    Some(out)
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod tests;
