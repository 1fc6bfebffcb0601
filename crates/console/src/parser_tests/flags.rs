// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Flags attached to parsed invocations.

use std::collections::BTreeSet;

use super::helpers::parse;

fn set(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn flags_around_positional_argument() {
    let chain = parse("echo ?a x ?b");
    let inv = &chain.invocations[0];
    assert_eq!(inv.arguments, ["x"]);
    assert_eq!(inv.flags, set(&["a", "b"]));
}

#[test]
fn bundle_and_literal_flags() {
    let chain = parse("echo one ?xy two ??verbose");
    let inv = &chain.invocations[0];
    assert_eq!(inv.arguments, ["one", "two"]);
    assert_eq!(inv.flags, set(&["x", "y", "verbose"]));
    assert!(inv.has_flag("verbose"));
    assert!(!inv.has_flag("v"));
}

#[test]
fn flags_are_per_invocation() {
    let chain = parse("echo ?a ; ok ?b");
    assert_eq!(chain.invocations[0].flags, set(&["a"]));
    assert_eq!(chain.invocations[1].flags, set(&["b"]));
}

#[test]
fn quoted_flag_is_still_a_flag() {
    let chain = parse("echo \"?q\" x");
    let inv = &chain.invocations[0];
    assert_eq!(inv.arguments, ["x"]);
    assert_eq!(inv.flags, set(&["q"]));
}

#[test]
fn command_name_is_never_a_flag_source() {
    let chain = parse("echo ?");
    let inv = &chain.invocations[0];
    assert_eq!(inv.arguments, ["?"]);
    assert!(inv.flags.is_empty());
}

#[test]
fn arg_accessor() {
    let chain = parse("echo first ?f second");
    let inv = &chain.invocations[0];
    assert_eq!(inv.arg(0), Some("first"));
    assert_eq!(inv.arg(1), Some("second"));
    assert_eq!(inv.arg(2), None);
}
