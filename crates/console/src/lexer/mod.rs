// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Console lexer: splits a raw line into words, quoted strings and chain
//! separators.
//!
//! The lexer is a three-state machine:
//!
//! - *await token*: skip whitespace; `;` and `&` become separator tokens,
//!   `"` opens a quoted token, anything else opens a word.
//! - *await whitespace*: inside a word, which ends at whitespace, at a
//!   separator, or at end of input.
//! - *await end of string*: inside quotes, which end at the first `"` not
//!   preceded by `\`.
//!
//! Both the chain resolver and the highlighter consume this token stream, so
//! the grammar lives in exactly one place.

mod quotes;

use std::iter::Peekable;
use std::str::CharIndices;

use crate::token::{Span, Token, TokenKind, QUOTE, SEPARATOR_ALWAYS, SEPARATOR_ON_SUCCESS};

pub use crate::error::LexerError;

pub struct Lexer<'a> {
    /// The line being lexed.
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, chars: input.char_indices().peekable() }
    }

    /// Tokenize the whole line, failing on an unterminated quote.
    pub fn tokenize(input: &str) -> Result<Vec<Token>, LexerError> {
        let mut lexer = Lexer::new(input);
        // ~1 token per 4 characters
        let mut tokens = Vec::with_capacity(input.len() / 4 + 1);

        while let Some(token) = lexer.next_token()? {
            tokens.push(token);
        }

        Ok(tokens)
    }

    /// Tokenize for display: never fails.
    ///
    /// An unterminated quote becomes a final [`TokenKind::Unterminated`]
    /// token running to the end of input.
    pub fn tokenize_lossy(input: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(input);
        let mut tokens = Vec::with_capacity(input.len() / 4 + 1);

        loop {
            match lexer.next_token() {
                Ok(Some(token)) => tokens.push(token),
                Ok(None) => break,
                Err(LexerError::IncompleteString { span }) => {
                    let text = input.get(span.start + 1..span.end).unwrap_or("");
                    tokens.push(Token::new(TokenKind::Unterminated(text.to_string()), span));
                    break;
                }
            }
        }

        tokens
    }

    #[inline]
    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn next_token(&mut self) -> Result<Option<Token>, LexerError> {
        self.skip_whitespace();

        let Some(&(pos, ch)) = self.chars.peek() else {
            return Ok(None);
        };

        match ch {
            SEPARATOR_ALWAYS => {
                self.chars.next();
                Ok(Some(Token::new(TokenKind::Semi, Span::new(pos, pos + 1))))
            }
            SEPARATOR_ON_SUCCESS => {
                self.chars.next();
                Ok(Some(Token::new(TokenKind::Ampersand, Span::new(pos, pos + 1))))
            }
            QUOTE => Ok(Some(self.lex_quoted(pos)?)),
            _ => Ok(Some(self.lex_word(pos))),
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek_char().is_some_and(char::is_whitespace) {
            self.chars.next();
        }
    }

    /// Lex an unquoted word. The text is the exact source substring.
    fn lex_word(&mut self, start: usize) -> Token {
        let mut end = start;

        while let Some(&(pos, ch)) = self.chars.peek() {
            if Self::is_word_boundary(ch) {
                break;
            }
            end = pos + ch.len_utf8();
            self.chars.next();
        }

        Token::new(TokenKind::Word(self.input[start..end].to_string()), Span::new(start, end))
    }

    #[inline]
    fn is_word_boundary(ch: char) -> bool {
        ch.is_whitespace() || ch == SEPARATOR_ALWAYS || ch == SEPARATOR_ON_SUCCESS
    }
}

#[cfg(test)]
#[path = "../lexer_tests/mod.rs"]
mod tests;
