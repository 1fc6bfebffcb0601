// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Chain separator tests.

use crate::token::TokenKind;

lex_tests! {
    semicolon: "a ; b" => [
        TokenKind::Word("a".into()),
        TokenKind::Semi,
        TokenKind::Word("b".into()),
    ],
    ampersand: "a & b" => [
        TokenKind::Word("a".into()),
        TokenKind::Ampersand,
        TokenKind::Word("b".into()),
    ],
    separators_without_spaces: "a;b&c" => [
        TokenKind::Word("a".into()),
        TokenKind::Semi,
        TokenKind::Word("b".into()),
        TokenKind::Ampersand,
        TokenKind::Word("c".into()),
    ],
    separator_ends_word: "echo hi;" => [
        TokenKind::Word("echo".into()),
        TokenKind::Word("hi".into()),
        TokenKind::Semi,
    ],
    double_ampersand_is_two_separators: "a && b" => [
        TokenKind::Word("a".into()),
        TokenKind::Ampersand,
        TokenKind::Ampersand,
        TokenKind::Word("b".into()),
    ],
    leading_separator: "; a" => [
        TokenKind::Semi,
        TokenKind::Word("a".into()),
    ],
    only_separators: ";;&" => [
        TokenKind::Semi,
        TokenKind::Semi,
        TokenKind::Ampersand,
    ],
    separator_after_quote: "echo \"x\"&echo" => [
        TokenKind::Word("echo".into()),
        TokenKind::Quoted("x".into()),
        TokenKind::Ampersand,
        TokenKind::Word("echo".into()),
    ],
}

span_tests! {
    separator_spans: "a;b & c" => [(0, 1), (1, 2), (2, 3), (4, 5), (6, 7)],
}
