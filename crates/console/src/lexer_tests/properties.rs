// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Property-based lexer invariants.

use crate::lexer::Lexer;
use crate::token::TokenKind;
use proptest::prelude::*;

/// Words with no quotes, separators or whitespace.
fn plain_word() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_./?=:-]{1,12}".prop_map(String::from)
}

fn separator() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(" "), Just("  "), Just("\t"), Just(" \t ")]
}

proptest! {
    /// Invariant: with no special syntax, tokens equal a whitespace split.
    #[test]
    fn plain_words_match_whitespace_split(
        words in prop::collection::vec(plain_word(), 0..8),
        gap in separator(),
        pad in separator(),
    ) {
        let input = format!("{pad}{}{pad}", words.join(gap));
        let tokens = Lexer::tokenize(&input).unwrap();
        let actual: Vec<String> = tokens
            .iter()
            .filter_map(|t| match &t.kind {
                TokenKind::Word(w) => Some(w.clone()),
                _ => None,
            })
            .collect();
        let expected: Vec<String> = input.split_whitespace().map(String::from).collect();
        prop_assert_eq!(tokens.len(), expected.len());
        prop_assert_eq!(actual, expected);
    }

    /// Invariant: every token span slices back to its source text.
    #[test]
    fn spans_slice_back_to_source(input in "[a-z \";&\\\\?]{0,24}") {
        for token in Lexer::tokenize_lossy(&input) {
            let source = token.span.slice(&input);
            match &token.kind {
                TokenKind::Word(w) => prop_assert_eq!(source, w.as_str()),
                TokenKind::Quoted(q) => prop_assert_eq!(source, format!("\"{q}\"")),
                TokenKind::Unterminated(u) => prop_assert_eq!(source, format!("\"{u}")),
                TokenKind::Semi => prop_assert_eq!(source, ";"),
                TokenKind::Ampersand => prop_assert_eq!(source, "&"),
            }
        }
    }

    /// Invariant: lossy tokenization never panics and agrees with strict
    /// tokenization whenever the latter succeeds.
    #[test]
    fn lossy_agrees_with_strict(input in "[a-z \";&\\\\]{0,24}") {
        let lossy = Lexer::tokenize_lossy(&input);
        if let Ok(strict) = Lexer::tokenize(&input) {
            prop_assert_eq!(lossy, strict);
        }
    }
}
