// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! AST produced by the [`Parser`](crate::Parser).
//!
//! A parse yields a list of [`ExpressionGroup`]s. Each group carries the join
//! operator that connects it to the previous group and either a single
//! [`Expression`] or the parsed contents of a parenthesized sub-expression.
//!
//! Serializing the AST with serde yields its canonical structural shape:
//!
//! ```text
//! { "operation": { "type": "join", "literal": "&&" },
//!   "item": { "left": {...}, "operation": {...}, "right": {...} } }
//! ```
//!
//! where `item` is an array of groups for parenthesized sub-expressions.
//! Deserializing checks that every token sits where the parser would have
//! put it, so a read-back AST renders to text that parses again.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{AstError, Expected};
use crate::ops::{JoinOperator, SignOperator};
use crate::token::{Token, TokenKind};

/// A single comparison, `left operation right`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawExpression")]
pub struct Expression {
    left: Token,
    operation: Token,
    right: Token,
}

impl Expression {
    pub(crate) fn new(left: Token, operation: Token, right: Token) -> Self {
        Expression {
            left,
            operation,
            right,
        }
    }

    pub fn left(&self) -> &Token {
        &self.left
    }

    pub fn operation(&self) -> &Token {
        &self.operation
    }

    pub fn right(&self) -> &Token {
        &self.right
    }

    /// The typed comparison operator, if the operation is a valid sign.
    pub fn sign(&self) -> Option<SignOperator> {
        self.operation.literal().parse().ok()
    }
}

#[derive(Deserialize)]
struct RawExpression {
    left: Token,
    operation: Token,
    right: Token,
}

impl TryFrom<RawExpression> for Expression {
    type Error = AstError;

    fn try_from(raw: RawExpression) -> Result<Self, Self::Error> {
        if !raw.left.kind().is_operand() {
            return Err(AstError::misplaced(Expected::LeftOperand, &raw.left));
        }
        if raw.operation.kind() != TokenKind::Sign {
            return Err(AstError::misplaced(Expected::Sign, &raw.operation));
        }
        if !raw.right.kind().is_operand() {
            return Err(AstError::misplaced(Expected::RightOperand, &raw.right));
        }
        Ok(Expression::new(raw.left, raw.operation, raw.right))
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.operation, self.right)
    }
}

/// What an [`ExpressionGroup`] holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GroupItem {
    /// A single comparison.
    Expression(Expression),
    /// The contents of a parenthesized sub-expression.
    Groups(Vec<ExpressionGroup>),
}

impl GroupItem {
    pub fn as_expression(&self) -> Option<&Expression> {
        match self {
            GroupItem::Expression(expression) => Some(expression),
            GroupItem::Groups(_) => None,
        }
    }

    pub fn as_groups(&self) -> Option<&[ExpressionGroup]> {
        match self {
            GroupItem::Expression(_) => None,
            GroupItem::Groups(groups) => Some(groups),
        }
    }
}

impl fmt::Display for GroupItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupItem::Expression(expression) => write!(f, "{expression}"),
            GroupItem::Groups(groups) => write!(f, "({})", render(groups)),
        }
    }
}

/// A join operator together with the clause it introduces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawExpressionGroup")]
pub struct ExpressionGroup {
    operation: Token,
    item: GroupItem,
}

#[derive(Deserialize)]
struct RawExpressionGroup {
    operation: Token,
    item: GroupItem,
}

impl TryFrom<RawExpressionGroup> for ExpressionGroup {
    type Error = AstError;

    fn try_from(raw: RawExpressionGroup) -> Result<Self, Self::Error> {
        if raw.operation.kind() != TokenKind::Join {
            return Err(AstError::misplaced(Expected::Join, &raw.operation));
        }
        if raw.item.as_groups().is_some_and(<[_]>::is_empty) {
            return Err(AstError::EmptyGroup);
        }
        Ok(ExpressionGroup::new(raw.operation, raw.item))
    }
}

impl ExpressionGroup {
    pub(crate) fn new(operation: Token, item: GroupItem) -> Self {
        ExpressionGroup { operation, item }
    }

    /// The join token connecting this group to the previous one.
    pub fn operation(&self) -> &Token {
        &self.operation
    }

    pub fn item(&self) -> &GroupItem {
        &self.item
    }

    /// The typed join operator, if the operation is a valid join.
    pub fn join(&self) -> Option<JoinOperator> {
        self.operation.literal().parse().ok()
    }

    /// Number of parenthesized levels below this group.
    ///
    /// A group holding a single expression has depth 0.
    pub fn depth(&self) -> usize {
        match &self.item {
            GroupItem::Expression(_) => 0,
            GroupItem::Groups(groups) => {
                1 + groups.iter().map(ExpressionGroup::depth).max().unwrap_or(0)
            }
        }
    }

    /// Iterates every leaf expression in source order.
    pub fn expressions(&self) -> Expressions<'_> {
        Expressions { stack: vec![self] }
    }
}

/// Renders only the clause. The join is rendered by [`render`], which
/// knows whether the group is first in its list.
impl fmt::Display for ExpressionGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.item)
    }
}

/// Depth-first iterator over the expressions of a group.
#[derive(Debug, Clone)]
pub struct Expressions<'a> {
    stack: Vec<&'a ExpressionGroup>,
}

impl<'a> Iterator for Expressions<'a> {
    type Item = &'a Expression;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(group) = self.stack.pop() {
            match &group.item {
                GroupItem::Expression(expression) => return Some(expression),
                GroupItem::Groups(groups) => self.stack.extend(groups.iter().rev()),
            }
        }
        None
    }
}

/// Renders a parsed AST back into filter text.
///
/// The first group's join is omitted since the parser always reads it back
/// as `&&`.
pub fn render(groups: &[ExpressionGroup]) -> String {
    let mut out = String::new();
    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            out.push(' ');
            out.push_str(group.operation.literal());
            out.push(' ');
        }
        out.push_str(&group.to_string());
    }
    out
}

#[cfg(test)]
#[path = "ast_tests.rs"]
mod tests;
