// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Chain resolver: turns a token stream into a [`Chain`] of invocations.

use super::flags::{extract_flags, RawArgument};
use super::invocation::{Chain, Invocation};
use super::lexer::Lexer;
use super::parse_error::ParseError;
use super::registry::CommandLookup;
use super::token::{Span, Token, TokenKind};

pub struct Parser<'a> {
    lookup: &'a dyn CommandLookup,
    invocations: Vec<Invocation>,
    /// Independence for the next invocation, set by the most recent
    /// separator.
    next_independent: bool,
}

impl<'a> Parser<'a> {
    /// Parse a raw line into invocations, resolving names with `lookup`.
    ///
    /// Segments naming unknown commands are dropped. Fails only on syntax
    /// errors, in which case nothing from the line may run.
    pub fn parse(input: &str, lookup: &'a dyn CommandLookup) -> Result<Chain, ParseError> {
        let tokens = Lexer::tokenize(input)?;
        let span = match (tokens.first(), tokens.last()) {
            (Some(first), Some(last)) => first.span.merge(last.span),
            _ => Span::empty(0),
        };

        let mut parser = Parser { lookup, invocations: Vec::new(), next_independent: true };
        let mut segment: Vec<&Token> = Vec::new();

        for token in &tokens {
            match token.kind {
                TokenKind::Semi | TokenKind::Ampersand => {
                    parser.finish_segment(&segment)?;
                    segment.clear();
                    parser.next_independent = matches!(token.kind, TokenKind::Semi);
                }
                _ => segment.push(token),
            }
        }
        parser.finish_segment(&segment)?;

        Ok(Chain { invocations: parser.invocations, span })
    }

    /// Resolve one segment. Empty segments and unknown names emit nothing.
    fn finish_segment(&mut self, segment: &[&Token]) -> Result<(), ParseError> {
        let Some((name_token, rest)) = segment.split_first() else {
            return Ok(());
        };
        let name = word_text(name_token);

        let Some(command) = self.lookup.lookup(name) else {
            tracing::debug!(command = name, "unknown command, segment dropped");
            return Ok(());
        };

        let mut args: Vec<RawArgument> =
            rest.iter().map(|t| RawArgument::new(word_text(t), t.span)).collect();
        let flags = extract_flags(&mut args)?;

        let span = rest.last().map_or(name_token.span, |t| name_token.span.merge(t.span));

        // The first invocation has no predecessor to depend on.
        let independent = self.invocations.is_empty() || self.next_independent;

        self.invocations.push(Invocation {
            command,
            arguments: args.into_iter().map(|a| a.text).collect(),
            flags,
            independent,
            span,
        });
        Ok(())
    }
}

fn word_text(token: &Token) -> &str {
    token.kind.text().unwrap_or_default()
}

#[cfg(test)]
#[path = "parser_tests/mod.rs"]
mod tests;
