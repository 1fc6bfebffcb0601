// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Table-test generators for the lexer.

use crate::lexer::{Lexer, LexerError};
use crate::token::{Token, TokenKind};

pub(super) fn strict(input: &str) -> Vec<Token> {
    match Lexer::tokenize(input) {
        Ok(tokens) => tokens,
        Err(err) => panic!("failed to tokenize {input:?}: {err}"),
    }
}

pub(super) fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|t| t.kind.clone()).collect()
}

pub(super) fn error(input: &str) -> LexerError {
    match Lexer::tokenize(input) {
        Ok(tokens) => panic!("expected {input:?} to fail, got {:?}", kinds(&tokens)),
        Err(err) => err,
    }
}

/// Token kinds from strict tokenization.
///
/// ```ignore
/// lex_tests! {
///     single_word: "echo" => [TokenKind::Word("echo".into())],
/// }
/// ```
macro_rules! lex_tests {
    ($($name:ident: $input:expr => [$($token:expr),* $(,)?]),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                let expected: Vec<TokenKind> = vec![$($token),*];
                assert_eq!(super::macros::kinds(&super::macros::strict($input)), expected);
            }
        )*
    };
}

/// Token kinds from lossy tokenization.
macro_rules! lossy_tests {
    ($($name:ident: $input:expr => [$($token:expr),* $(,)?]),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                let expected: Vec<TokenKind> = vec![$($token),*];
                assert_eq!(super::macros::kinds(&Lexer::tokenize_lossy($input)), expected);
            }
        )*
    };
}

/// The error a line fails with.
///
/// ```ignore
/// lex_error_tests! {
///     open_quote: "\"" => LexerError::IncompleteString { .. },
/// }
/// ```
macro_rules! lex_error_tests {
    ($($name:ident: $input:expr => $error:pat),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                let err = super::macros::error($input);
                assert!(matches!(err, $error), "{:?} failed with {err:?}", $input);
            }
        )*
    };
}

/// Byte spans of each token, as `(start, end)`.
macro_rules! span_tests {
    ($($name:ident: $input:expr => [$(($start:expr, $end:expr)),* $(,)?]),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                let expected: Vec<(usize, usize)> = vec![$(($start, $end)),*];
                let actual: Vec<_> = super::macros::strict($input)
                    .iter()
                    .map(|t| (t.span.start, t.span.end))
                    .collect();
                assert_eq!(actual, expected);
            }
        )*
    };
}
