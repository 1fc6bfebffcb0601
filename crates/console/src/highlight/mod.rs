// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Syntax highlighting for console input.
//!
//! Runs the same lexer as the parser, in lossy mode, and maps each token
//! span to a colour. Text between tokens is copied through unchanged, so
//! removing the markup always yields the original line.

mod markup;
mod theme;

pub use markup::{Ansi, Markup, Plain, RichText};
pub use theme::{HighlightTheme, InvalidColor, Rgb};

use crate::lexer::Lexer;
use crate::registry::CommandLookup;
use crate::token::{Span, TokenKind};

/// Colour `line` for display.
///
/// The first token of each segment is the command name, coloured by whether
/// `lookup` knows it. Never fails: an unterminated quote is coloured as a
/// string up to the end of the line.
pub fn highlight(
    line: &str,
    lookup: &dyn CommandLookup,
    theme: &HighlightTheme,
    markup: &dyn Markup,
) -> String {
    let mut out = String::with_capacity(line.len() * 2);
    let mut cursor = 0;
    let mut at_name = true;

    for token in Lexer::tokenize_lossy(line) {
        out.push_str(Span::new(cursor, token.span.start).slice(line));
        let text = token.span.slice(line);

        let color = match &token.kind {
            TokenKind::Semi | TokenKind::Ampersand => {
                at_name = true;
                None
            }
            TokenKind::Unterminated(_) => Some(theme.string),
            TokenKind::Word(name) | TokenKind::Quoted(name) if at_name => {
                at_name = false;
                if lookup.lookup(name).is_some() {
                    Some(theme.command)
                } else {
                    Some(theme.unknown_command)
                }
            }
            TokenKind::Word(_) => Some(theme.argument),
            TokenKind::Quoted(_) => Some(theme.string),
        };

        match color {
            Some(color) => markup.paint(&mut out, color, text),
            None => out.push_str(text),
        }
        cursor = token.span.end;
    }

    out.push_str(Span::new(cursor, line.len()).slice(line));
    out
}

#[cfg(test)]
#[path = "../highlight_tests.rs"]
mod tests;
