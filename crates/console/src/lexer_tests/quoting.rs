// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Quoted string tests.

use crate::token::TokenKind;

lex_tests! {
    quoted_keeps_spaces: "echo \"a b c\"" => [
        TokenKind::Word("echo".into()),
        TokenKind::Quoted("a b c".into()),
    ],
    empty_quotes: "echo \"\"" => [
        TokenKind::Word("echo".into()),
        TokenKind::Quoted("".into()),
    ],
    escaped_quote_is_kept_verbatim: "echo \"a\\\"b\"" => [
        TokenKind::Word("echo".into()),
        TokenKind::Quoted("a\\\"b".into()),
    ],
    escaped_backslash_does_not_escape_quote: "echo \"a\\\\\" x" => [
        TokenKind::Word("echo".into()),
        TokenKind::Quoted("a\\\\".into()),
        TokenKind::Word("x".into()),
    ],
    escape_of_plain_char_is_kept: "echo \"\\n\"" => [
        TokenKind::Word("echo".into()),
        TokenKind::Quoted("\\n".into()),
    ],
    separators_inside_quotes: "echo \"a;b&c\"" => [
        TokenKind::Word("echo".into()),
        TokenKind::Quoted("a;b&c".into()),
    ],
    quoted_command_name: "\"my cmd\" arg" => [
        TokenKind::Quoted("my cmd".into()),
        TokenKind::Word("arg".into()),
    ],
    closing_quote_ends_token: "echo \"a\"b" => [
        TokenKind::Word("echo".into()),
        TokenKind::Quoted("a".into()),
        TokenKind::Word("b".into()),
    ],
    word_then_quote_is_one_word: "echo x\"y z\"" => [
        TokenKind::Word("echo".into()),
        TokenKind::Word("x\"y".into()),
        TokenKind::Word("z\"".into()),
    ],
    adjacent_quoted_tokens: "\"a\"\"b\"" => [
        TokenKind::Quoted("a".into()),
        TokenKind::Quoted("b".into()),
    ],
    multibyte_in_quotes: "say \"héllo wörld\"" => [
        TokenKind::Word("say".into()),
        TokenKind::Quoted("héllo wörld".into()),
    ],
}

span_tests! {
    quoted_span_includes_quotes: "echo \"a b\"" => [(0, 4), (5, 10)],
    escaped_quote_span: "echo \"a\\\"b\"" => [(0, 4), (5, 11)],
}
