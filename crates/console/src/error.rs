// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the console lexer.

use crate::{context_snippet, Span};
use thiserror::Error;

/// Errors that can occur while lexing a console line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexerError {
    /// A `"` was opened but never closed.
    #[error("incomplete string at position {}", span.start)]
    IncompleteString {
        /// From the opening quote to the end of input.
        span: Span,
    },
}

impl LexerError {
    /// Get the span associated with this error.
    pub fn span(&self) -> Span {
        match self {
            Self::IncompleteString { span } => *span,
        }
    }

    /// Get a context snippet around the error position.
    pub fn context(&self, input: &str, context_chars: usize) -> String {
        context_snippet(input, self.span(), context_chars)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
