// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Syntax errors reject the whole line.

use crate::lexer::LexerError;
use crate::parse_error::ParseError;
use crate::parser::Parser;
use crate::test_support::{registry, CallLog};
use crate::token::Span;

fn parse_err(input: &str) -> ParseError {
    let registry = registry(&CallLog::default());
    match Parser::parse(input, &registry) {
        Ok(chain) => panic!("expected error for {input:?}, got {} invocations", chain.len()),
        Err(e) => e,
    }
}

#[yare::parameterized(
    unterminated            = { "echo \"abc" },
    unterminated_later      = { "ok ; echo \"abc" },
    unterminated_in_unknown = { "nope \"abc" },
    escaped_close           = { "echo \"abc\\\"" },
)]
fn incomplete_string(input: &str) {
    assert!(matches!(parse_err(input), ParseError::Lexer(LexerError::IncompleteString { .. })));
}

#[yare::parameterized(
    digit            = { "echo ?a1" },
    symbol_literal   = { "echo ??no-op" },
    later_segment    = { "ok ; echo x ?9" },
    double_prefix    = { "echo ??" },
)]
fn invalid_flag(input: &str) {
    assert!(matches!(parse_err(input), ParseError::InvalidFlag { .. }));
}

#[test]
fn invalid_flag_on_unknown_command_is_ignored() {
    let registry = registry(&CallLog::default());
    let chain = Parser::parse("nope ?1 ; ok", &registry).unwrap();
    assert_eq!(chain.len(), 1);
}

#[test]
fn error_carries_span_and_context() {
    let input = "echo x ?a1";
    let err = parse_err(input);
    assert_eq!(err.span(), Span::new(7, 10));
    assert_eq!(err.context(input, 20), "echo x ?a1\n       ^^^");
}

#[test]
fn lexer_error_message_passes_through() {
    assert_eq!(parse_err("echo \"x").to_string(), "incomplete string at position 5");
}
