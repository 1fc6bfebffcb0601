// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Chain separators and independence flags.

use super::helpers::{independence, names, parse};

#[yare::parameterized(
    single            = { "ok",                 &["ok"],             &[true] },
    semicolon         = { "ok ; bad",           &["ok", "bad"],      &[true, true] },
    ampersand         = { "ok & bad",           &["ok", "bad"],      &[true, false] },
    mixed             = { "bad & ok ; echo",    &["bad", "ok", "echo"], &[true, false, true] },
    no_spaces         = { "ok&bad;echo",        &["ok", "bad", "echo"], &[true, false, true] },
    leading_ampersand = { "& ok",               &["ok"],             &[true] },
    leading_semicolon = { "; ok & bad",         &["ok", "bad"],      &[true, false] },
    trailing_separator = { "ok ;",              &["ok"],             &[true] },
    doubled_semicolon = { "ok ;; bad",          &["ok", "bad"],      &[true, true] },
    latest_separator_wins = { "ok ; & bad",     &["ok", "bad"],      &[true, false] },
    latest_separator_wins_semi = { "ok & ; bad", &["ok", "bad"],     &[true, true] },
    double_ampersand  = { "ok && bad",          &["ok", "bad"],      &[true, false] },
    first_known_is_independent = { "nope & ok & bad", &["ok", "bad"], &[true, false] },
    dropped_segment_keeps_its_separator = { "ok & nope ; bad", &["ok", "bad"], &[true, true] },
    dropped_segment_dependent = { "ok ; nope & bad", &["ok", "bad"], &[true, false] },
)]
fn chain_independence(input: &str, expected_names: &[&str], expected: &[bool]) {
    let chain = parse(input);
    assert_eq!(names(&chain), expected_names, "input: {input:?}");
    assert_eq!(independence(&chain), expected, "input: {input:?}");
}

#[test]
fn only_separators_yield_nothing() {
    assert!(parse(";;&;").is_empty());
}

#[test]
fn separators_inside_quotes_do_not_split() {
    let chain = parse("echo \"a ; b & c\"");
    assert_eq!(chain.len(), 1);
    assert_eq!(chain.invocations[0].arguments, ["a ; b & c"]);
}

#[test]
fn separator_terminates_word() {
    let chain = parse("echo hi;ok");
    assert_eq!(names(&chain), ["echo", "ok"]);
    assert_eq!(chain.invocations[0].arguments, ["hi"]);
}
