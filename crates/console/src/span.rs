// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Source location tracking for console lines.

use serde::{Deserialize, Serialize};

/// A byte-offset range in a raw console line.
///
/// Uses byte offsets so spans can slice UTF-8 input directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start must not exceed end");
        Self { start, end }
    }

    #[inline]
    pub fn empty(pos: usize) -> Self {
        Self { start: pos, end: pos }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns true if `start <= pos < end`.
    #[inline]
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end
    }

    /// Smallest span covering both.
    #[inline]
    pub fn merge(self, other: Span) -> Span {
        Span { start: self.start.min(other.start), end: self.end.max(other.end) }
    }

    /// The spanned text, or `""` when the span does not fall on character
    /// boundaries of `line`.
    #[inline]
    pub fn slice<'a>(&self, line: &'a str) -> &'a str {
        line.get(self.start..self.end).unwrap_or("")
    }
}

/// Render the part of `line` around `span` with a caret underline.
///
/// ```text
/// echo "abc
///      ^^^^
/// ```
///
/// At most `context_chars` characters are shown on either side of the span
/// start. Spans past the end of the line are clamped.
pub fn context_snippet(line: &str, span: Span, context_chars: usize) -> String {
    let anchor = floor_char_boundary(line, span.start.min(line.len()));

    let from = line[..anchor]
        .char_indices()
        .rev()
        .take(context_chars)
        .last()
        .map(|(i, _)| i)
        .unwrap_or(anchor);

    let to = line[anchor..]
        .char_indices()
        .take(context_chars + 1)
        .last()
        .map(|(i, c)| anchor + i + c.len_utf8())
        .unwrap_or(line.len());

    let caret_pos = line[from..anchor].chars().count();
    let caret_end = floor_char_boundary(line, span.end.min(to).max(anchor));
    let caret_len = line[anchor..caret_end].chars().count().max(1);

    format!("{}\n{}{}", &line[from..to], " ".repeat(caret_pos), "^".repeat(caret_len))
}

fn floor_char_boundary(line: &str, mut pos: usize) -> usize {
    while pos > 0 && !line.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}

#[cfg(test)]
#[path = "span_tests.rs"]
mod tests;
