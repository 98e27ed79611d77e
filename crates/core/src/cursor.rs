// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Character cursor used by the scanner.
//!
//! A cursor owns the decoded characters of a single input and the read
//! position within them. Each scan creates its own cursor, so nothing about
//! an in-progress scan is shared between calls.

#[derive(Debug, Clone)]
pub(crate) struct Cursor {
    chars: Vec<char>,
    position: usize,
    base: usize,
}

impl Cursor {
    pub(crate) fn new(text: &str) -> Self {
        Cursor::with_base(text, 0)
    }

    /// Creates a cursor whose reported positions start at `base`.
    ///
    /// Used for text cut out of a larger input, so positions point into
    /// that input.
    pub(crate) fn with_base(text: &str, base: usize) -> Self {
        Cursor {
            chars: text.chars().collect(),
            position: 0,
            base,
        }
    }

    /// Returns the character at the current position without consuming it.
    pub(crate) fn peek(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    /// Consumes and returns the character at the current position.
    pub(crate) fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        Some(ch)
    }

    /// Steps back over the most recently consumed character.
    pub(crate) fn rewind(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    /// Character offset of the next character to be read, counted from
    /// the cursor's base.
    pub(crate) fn position(&self) -> usize {
        self.base + self.position
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.position >= self.chars.len()
    }

    /// Consumes characters while `cond` holds and returns them.
    pub(crate) fn advance_while<F>(&mut self, mut cond: F) -> String
    where
        F: FnMut(char) -> bool,
    {
        let mut buf = String::new();
        while let Some(ch) = self.peek() {
            if !cond(ch) {
                break;
            }
            buf.push(ch);
            self.position += 1;
        }
        buf
    }
}

#[cfg(test)]
#[path = "cursor_tests.rs"]
mod tests;
