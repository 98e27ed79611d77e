// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Typed views of the join and sign operator sets.
//!
//! Tokens keep their operators as literals. These types give evaluators a
//! closed set to match on instead of comparing strings.

use std::fmt;
use std::str::FromStr;

/// Boolean operator joining sibling clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinOperator {
    /// `&&`
    And,
    /// `||`
    Or,
}

impl JoinOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            JoinOperator::And => "&&",
            JoinOperator::Or => "||",
        }
    }

    /// Returns valid join symbols for error messages.
    pub fn valid_symbols() -> &'static str {
        "&&, ||"
    }
}

impl fmt::Display for JoinOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for JoinOperator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "&&" => Ok(JoinOperator::And),
            "||" => Ok(JoinOperator::Or),
            _ => Err(UnknownOperator(s.to_string())),
        }
    }
}

/// The comparison performed by a sign operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// `=`
    Eq,
    /// `!=`
    Ne,
    /// `~`
    Match,
    /// `!~`
    NotMatch,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
}

impl Comparison {
    pub fn as_str(&self) -> &'static str {
        match self {
            Comparison::Eq => "=",
            Comparison::Ne => "!=",
            Comparison::Match => "~",
            Comparison::NotMatch => "!~",
            Comparison::Lt => "<",
            Comparison::Le => "<=",
            Comparison::Gt => ">",
            Comparison::Ge => ">=",
        }
    }
}

/// A comparison operator, optionally in its `?`-prefixed any-of form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SignOperator {
    pub comparison: Comparison,
    /// Set for `?=`, `?!~` and the other `?` variants.
    pub any_of: bool,
}

impl SignOperator {
    /// Returns true if `literal` is one of the sixteen sign operators.
    pub fn is_valid(literal: &str) -> bool {
        literal.parse::<SignOperator>().is_ok()
    }

    /// Returns valid sign symbols for error messages.
    pub fn valid_symbols() -> &'static str {
        "=, !=, ~, !~, <, <=, >, >= (each may be prefixed with '?')"
    }
}

impl fmt::Display for SignOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.any_of {
            write!(f, "?")?;
        }
        write!(f, "{}", self.comparison.as_str())
    }
}

impl FromStr for SignOperator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (any_of, rest) = match s.strip_prefix('?') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let comparison = match rest {
            "=" => Comparison::Eq,
            "!=" => Comparison::Ne,
            "~" => Comparison::Match,
            "!~" => Comparison::NotMatch,
            "<" => Comparison::Lt,
            "<=" => Comparison::Le,
            ">" => Comparison::Gt,
            ">=" => Comparison::Ge,
            _ => return Err(UnknownOperator(s.to_string())),
        };
        Ok(SignOperator { comparison, any_of })
    }
}

/// Returned when a literal is not a member of an operator set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown operator '{0}'")]
pub struct UnknownOperator(pub String);

#[cfg(test)]
#[path = "ops_tests.rs"]
mod tests;
