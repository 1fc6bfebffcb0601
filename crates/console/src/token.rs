// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Token types shared by the chain resolver and the highlighter.

use std::fmt;

pub use crate::span::{context_snippet, Span};

/// Opens and closes a quoted token.
pub const QUOTE: char = '"';
/// Inside quotes, makes the following character literal.
pub const ESCAPE: char = '\\';
/// Runs the next command regardless of the previous outcome.
pub const SEPARATOR_ALWAYS: char = ';';
/// Runs the next command only if the previous one succeeded.
pub const SEPARATOR_ON_SUCCESS: char = '&';
/// Leading character of a flag argument.
pub const FLAG_PREFIX: char = '?';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Unquoted run of characters, taken verbatim.
    Word(String),
    /// Text between a pair of `"`; escapes are kept as written.
    Quoted(String),
    /// Quoted text missing its closing `"`. Only produced by
    /// [`Lexer::tokenize_lossy`](crate::Lexer::tokenize_lossy).
    Unterminated(String),
    /// `;`
    Semi,
    /// `&`
    Ampersand,
}

impl TokenKind {
    /// Text a word-like token contributes to an invocation.
    pub fn text(&self) -> Option<&str> {
        match self {
            TokenKind::Word(s) | TokenKind::Quoted(s) | TokenKind::Unterminated(s) => Some(s),
            TokenKind::Semi | TokenKind::Ampersand => None,
        }
    }

    #[inline]
    pub fn is_separator(&self) -> bool {
        matches!(self, TokenKind::Semi | TokenKind::Ampersand)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Word(s) => write!(f, "word '{}'", s),
            TokenKind::Quoted(s) => write!(f, "string \"{}\"", s),
            TokenKind::Unterminated(s) => write!(f, "incomplete string \"{}", s),
            TokenKind::Semi => write!(f, "';'"),
            TokenKind::Ampersand => write!(f, "'&'"),
        }
    }
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod tests;
