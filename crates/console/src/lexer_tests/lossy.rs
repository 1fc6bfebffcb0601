// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lossy (display) tokenization tests.

use crate::lexer::Lexer;
use crate::token::{Span, TokenKind};

lossy_tests! {
    lossy_empty: "" => [],
    lossy_matches_strict_on_valid_input: "echo \"a b\" ; x" => [
        TokenKind::Word("echo".into()),
        TokenKind::Quoted("a b".into()),
        TokenKind::Semi,
        TokenKind::Word("x".into()),
    ],
    lossy_open_quote: "say \"hi there" => [
        TokenKind::Word("say".into()),
        TokenKind::Unterminated("hi there".into()),
    ],
    lossy_lone_quote: "\"" => [
        TokenKind::Unterminated("".into()),
    ],
    lossy_swallows_separators_after_open_quote: "say \"a ; b" => [
        TokenKind::Word("say".into()),
        TokenKind::Unterminated("a ; b".into()),
    ],
}

#[test]
fn unterminated_span_runs_to_end() {
    let tokens = Lexer::tokenize_lossy("say \"hi");
    assert_eq!(tokens[1].span, Span::new(4, 7));
}

#[test]
fn lossy_equals_strict_when_strict_succeeds() {
    for input in ["", "a", "a b ; c & d", "x \"y\\\"z\" ?f", "  \"\"  "] {
        let strict = Lexer::tokenize(input).unwrap();
        assert_eq!(Lexer::tokenize_lossy(input), strict, "input: {input:?}");
    }
}
