// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Syntax errors that reject a whole console line.

use super::lexer::LexerError;
use super::token::{context_snippet, Span};
use thiserror::Error;

/// A line that cannot be interpreted at all.
///
/// Any `ParseError` aborts the whole line: no invocation from it runs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error(transparent)]
    Lexer(#[from] LexerError),

    /// A `?` argument containing something other than letters.
    #[error("flags must only contain letters: '{flag}' at position {}", span.start)]
    InvalidFlag { flag: String, span: Span },
}

impl ParseError {
    pub fn span(&self) -> Span {
        match self {
            ParseError::Lexer(e) => e.span(),
            ParseError::InvalidFlag { span, .. } => *span,
        }
    }

    /// Snippet of `input` with a caret under the offending text.
    pub fn context(&self, input: &str, context_chars: usize) -> String {
        context_snippet(input, self.span(), context_chars)
    }
}
