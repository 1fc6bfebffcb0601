// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lexer error tests.

use crate::lexer::{Lexer, LexerError};
use crate::token::Span;

lex_error_tests! {
    lone_quote: "\"" => LexerError::IncompleteString { .. },
    unterminated_argument: "echo \"abc" => LexerError::IncompleteString { .. },
    escaped_closing_quote: "echo \"abc\\\"" => LexerError::IncompleteString { .. },
    trailing_escape: "echo \"abc\\" => LexerError::IncompleteString { .. },
    unterminated_after_chain: "a ; b \"x" => LexerError::IncompleteString { .. },
    unterminated_before_good_segment: "echo \"x ; ok" => LexerError::IncompleteString { .. },
}

#[test]
fn incomplete_string_span_runs_to_end() {
    let err = Lexer::tokenize("echo \"abc").unwrap_err();
    assert_eq!(err.span(), Span::new(5, 9));
}

#[test]
fn incomplete_string_message() {
    let err = Lexer::tokenize("say \"x").unwrap_err();
    assert_eq!(err.to_string(), "incomplete string at position 4");
}
