// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Basic lexer tests: words, whitespace, edge cases.

use crate::token::TokenKind;

lex_tests! {
    empty_input: "" => [],
    whitespace_only: "   \t  " => [],
}

lex_tests! {
    single_word: "echo" => [TokenKind::Word("echo".into())],
    simple_words: "echo hello world" => [
        TokenKind::Word("echo".into()),
        TokenKind::Word("hello".into()),
        TokenKind::Word("world".into()),
    ],
    multiple_spaces: "spawn   cube" => [
        TokenKind::Word("spawn".into()),
        TokenKind::Word("cube".into()),
    ],
    tabs_and_spaces: "cmd1\t  cmd2" => [
        TokenKind::Word("cmd1".into()),
        TokenKind::Word("cmd2".into()),
    ],
    leading_and_trailing_whitespace: "  \t echo hi \t " => [
        TokenKind::Word("echo".into()),
        TokenKind::Word("hi".into()),
    ],
    unicode_whitespace_separates: "echo\u{3000}hi" => [
        TokenKind::Word("echo".into()),
        TokenKind::Word("hi".into()),
    ],
    punctuation_is_part_of_word: "load ./levels/one.scene --fast=1" => [
        TokenKind::Word("load".into()),
        TokenKind::Word("./levels/one.scene".into()),
        TokenKind::Word("--fast=1".into()),
    ],
    flag_words_are_plain_words: "give ?ab ??all" => [
        TokenKind::Word("give".into()),
        TokenKind::Word("?ab".into()),
        TokenKind::Word("??all".into()),
    ],
    backslash_outside_quotes_is_literal: "path C:\\temp\\x" => [
        TokenKind::Word("path".into()),
        TokenKind::Word("C:\\temp\\x".into()),
    ],
    quote_inside_word_is_literal: "say ab\"cd" => [
        TokenKind::Word("say".into()),
        TokenKind::Word("ab\"cd".into()),
    ],
    multibyte_word: "say héllo" => [
        TokenKind::Word("say".into()),
        TokenKind::Word("héllo".into()),
    ],
}

span_tests! {
    single_word_span: "echo" => [(0, 4)],
    simple_words_span: "echo hello world" => [(0, 4), (5, 10), (11, 16)],
    padded_words_span: "  echo  hi " => [(2, 6), (8, 10)],
    multibyte_span: "say héllo" => [(0, 3), (4, 10)],
}
