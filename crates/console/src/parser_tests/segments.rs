// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Single-segment parsing: names, arguments, quoting, unknown commands.

use super::helpers::{names, parse, shape};
use crate::parser::Parser;
use crate::test_support::{registry, CallLog, CountingLookup};
use crate::token::Span;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn name_only() {
    assert_eq!(shape(&parse("ok")), [("ok".to_string(), args(&[]))]);
}

#[test]
fn name_and_arguments() {
    assert_eq!(shape(&parse("echo a b c")), [("echo".to_string(), args(&["a", "b", "c"]))]);
}

#[test]
fn quoted_argument_is_one_argument() {
    assert_eq!(shape(&parse("echo \"a b c\"")), [("echo".to_string(), args(&["a b c"]))]);
}

#[test]
fn escaped_quote_kept_in_argument() {
    assert_eq!(shape(&parse("echo \"a\\\"b\"")), [("echo".to_string(), args(&["a\\\"b"]))]);
}

#[test]
fn duplicate_arguments_are_kept() {
    assert_eq!(shape(&parse("echo x x x")), [("echo".to_string(), args(&["x", "x", "x"]))]);
}

#[test]
fn quoted_command_name_is_resolved() {
    assert_eq!(names(&parse("\"echo\" hi")), ["echo"]);
}

#[test]
fn surrounding_whitespace_is_ignored() {
    assert_eq!(shape(&parse("   echo   hi   ")), [("echo".to_string(), args(&["hi"]))]);
}

#[test]
fn unknown_command_is_dropped() {
    assert!(parse("frobnicate a b").is_empty());
}

#[test]
fn unknown_command_does_not_stop_chain() {
    assert_eq!(shape(&parse("frobnicate ; echo hi")), [("echo".to_string(), args(&["hi"]))]);
}

#[test]
fn lookup_is_case_sensitive() {
    assert!(parse("ECHO hi").is_empty());
}

#[test]
fn empty_line_yields_empty_chain() {
    assert!(parse("").is_empty());
    assert!(parse("   \t ").is_empty());
}

#[test]
fn blank_line_makes_no_lookups() {
    let registry = registry(&CallLog::default());
    let lookup = CountingLookup::new(&registry);
    let chain = Parser::parse("   ", &lookup).unwrap();
    assert!(chain.is_empty());
    assert_eq!(lookup.count(), 0);
}

#[test]
fn one_lookup_per_segment() {
    let registry = registry(&CallLog::default());
    let lookup = CountingLookup::new(&registry);
    Parser::parse("echo a ; nope b & ok ;; ;", &lookup).unwrap();
    assert_eq!(lookup.count(), 3);
}

#[test]
fn parsing_does_not_run_commands() {
    let log = CallLog::default();
    let registry = registry(&log);
    Parser::parse("echo a ; bad ; crash", &registry).unwrap();
    assert!(log.calls().is_empty());
}

#[test]
fn invocation_span_covers_segment_words() {
    let chain = parse("  echo a \"b c\" ; ok");
    assert_eq!(chain.invocations[0].span, Span::new(2, 14));
    assert_eq!(chain.invocations[1].span, Span::new(17, 19));
    assert_eq!(chain.span, Span::new(2, 19));
}
