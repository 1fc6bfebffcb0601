// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Double-quoted strings.

use super::{Lexer, LexerError};
use crate::token::{Span, Token, TokenKind, ESCAPE, QUOTE};

impl Lexer<'_> {
    /// Lex a quoted token starting at the opening `"`.
    ///
    /// `\` skips exactly one following character, so `\"` does not close the
    /// string. Escapes are not resolved: the token text is the raw source
    /// between the quotes.
    pub(super) fn lex_quoted(&mut self, start: usize) -> Result<Token, LexerError> {
        self.chars.next();
        let content_start = start + QUOTE.len_utf8();

        while let Some((pos, ch)) = self.chars.next() {
            match ch {
                QUOTE => {
                    let content = self.input[content_start..pos].to_string();
                    return Ok(Token::new(
                        TokenKind::Quoted(content),
                        Span::new(start, pos + QUOTE.len_utf8()),
                    ));
                }
                ESCAPE => {
                    self.chars.next();
                }
                _ => {}
            }
        }

        Err(LexerError::IncompleteString { span: Span::new(start, self.input.len()) })
    }
}
