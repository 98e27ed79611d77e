// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parser grouping scanned tokens into [`ExpressionGroup`]s.
//!
//! The parser is a four-state machine over the non-whitespace tokens:
//!
//! ```text
//! Before --operand--> Sign --sign--> After --operand--> Join --join--> Before
//! ```
//!
//! Completing the `After` state emits a group joined by the most recent
//! join operator (`&&` until one is seen). A group token is accepted in any
//! state: its literal is parsed recursively and, when non-empty, emitted as
//! a nested group, after which the machine expects a join. Input must end in
//! the `Join` state.

use tracing::{debug, trace};

use crate::ast::{Expression, ExpressionGroup, GroupItem};
use crate::config::ParserConfig;
use crate::error::{Expected, ParseError};
use crate::scanner::Scanner;
use crate::token::{Token, TokenKind};

#[derive(Debug)]
enum State {
    Before,
    Sign(Token),
    After(Token, Token),
    Join,
}

impl State {
    fn expected(&self) -> Expected {
        match self {
            State::Before => Expected::LeftOperand,
            State::Sign(_) => Expected::Sign,
            State::After(..) => Expected::RightOperand,
            State::Join => Expected::Join,
        }
    }
}

/// Parses filter text into an AST.
///
/// A parser holds only its configuration, so one instance can be shared
/// freely between threads.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    scanner: Scanner,
    config: ParserConfig,
}

impl Parser {
    pub fn new() -> Self {
        Parser::default()
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Parser {
            scanner: Scanner::new(),
            config,
        }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses `text`, failing on the first scan or grammar error.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let groups = Parser::new().parse("a=1 && (b~\"x\" || c>2)")?;
    /// assert_eq!(groups.len(), 2);
    /// ```
    pub fn parse(&self, text: &str) -> Result<Vec<ExpressionGroup>, ParseError> {
        let groups = self.parse_at_depth(text, 0, 0)?;
        debug!(groups = groups.len(), "parsed filter expression");
        Ok(groups)
    }

    /// Parses `text` found `depth` groups down, starting at character `base`
    /// of the caller's input.
    fn parse_at_depth(
        &self,
        text: &str,
        depth: usize,
        base: usize,
    ) -> Result<Vec<ExpressionGroup>, ParseError> {
        let tokens = self.scanner.scan_from(text, base)?;

        let mut groups = Vec::new();
        let mut join = Token::default_join();
        let mut state = State::Before;

        for token in tokens {
            match token.kind() {
                TokenKind::Whitespace => continue,
                TokenKind::Group => {
                    let nested = self.parse_group(&token, depth + 1)?;
                    if !nested.is_empty() {
                        groups.push(ExpressionGroup::new(
                            join.clone(),
                            GroupItem::Groups(nested),
                        ));
                    }
                    state = State::Join;
                    continue;
                }
                _ => {}
            }

            state = match (state, token) {
                (State::Before, left) if left.kind().is_operand() => State::Sign(left),
                (State::Sign(left), operation) if operation.kind() == TokenKind::Sign => {
                    State::After(left, operation)
                }
                (State::After(left, operation), right) if right.kind().is_operand() => {
                    let expression = Expression::new(left, operation, right);
                    trace!(%expression, join = join.literal(), depth, "emitting expression");
                    groups.push(ExpressionGroup::new(
                        join.clone(),
                        GroupItem::Expression(expression),
                    ));
                    State::Join
                }
                (State::Join, next) if next.kind() == TokenKind::Join => {
                    join = next;
                    State::Before
                }
                (state, token) => return Err(ParseError::unexpected(state.expected(), &token)),
            };
        }

        match state {
            State::Join => Ok(groups),
            _ => Err(ParseError::UnexpectedEndOfInput),
        }
    }

    fn parse_group(
        &self,
        token: &Token,
        depth: usize,
    ) -> Result<Vec<ExpressionGroup>, ParseError> {
        if depth > self.config.max_depth {
            return Err(ParseError::NestingTooDeep {
                limit: self.config.max_depth,
            });
        }
        debug!(depth, literal = token.literal(), "entering group");
        // contents start right after the opening '('
        let nested = self.parse_at_depth(token.literal(), depth, token.offset() + 1)?;
        debug!(depth, groups = nested.len(), "leaving group");
        Ok(nested)
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
