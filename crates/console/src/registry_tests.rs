// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn noop(name: &str) -> CommandDescriptor {
    CommandDescriptor::new(name, |_| Ok(true))
}

#[test]
fn register_and_lookup() {
    let mut registry = CommandRegistry::new();
    registry.register(noop("echo").description("print").usage("echo <text>")).unwrap();

    let found = registry.lookup("echo").unwrap();
    assert_eq!(found.name(), "echo");
    assert_eq!(found.get_description(), "print");
    assert_eq!(found.get_usage(), "echo <text>");
    assert!(!found.is_hidden());
}

#[test]
fn lookup_is_case_sensitive() {
    let mut registry = CommandRegistry::new();
    registry.register(noop("echo")).unwrap();
    assert!(registry.lookup("Echo").is_none());
    assert!(registry.lookup("echo").is_some());
}

#[test]
fn duplicate_name_is_rejected() {
    let mut registry = CommandRegistry::new();
    registry.register(noop("echo")).unwrap();
    let err = registry.register(noop("echo")).unwrap_err();
    assert_eq!(err, RegistryError::Duplicate { name: "echo".into() });
    assert_eq!(registry.len(), 1);
}

#[yare::parameterized(
    empty      = { "" },
    space      = { "two words" },
    tab        = { "a\tb" },
    semicolon  = { "a;b" },
    ampersand  = { "a&b" },
    quote      = { "\"q\"" },
)]
fn invalid_names_are_rejected(name: &str) {
    let mut registry = CommandRegistry::new();
    let err = registry.register(noop(name)).unwrap_err();
    assert_eq!(err, RegistryError::InvalidName { name: name.into() });
    assert!(registry.is_empty());
}

#[test]
fn iteration_keeps_registration_order() {
    let mut registry = CommandRegistry::new();
    for name in ["zeta", "alpha", "mid"] {
        registry.register(noop(name)).unwrap();
    }
    let names: Vec<_> = registry.iter().map(|c| c.name().to_string()).collect();
    assert_eq!(names, ["zeta", "alpha", "mid"]);
}

#[test]
fn visible_skips_hidden_commands() {
    let mut registry = CommandRegistry::new();
    registry.register(noop("shown")).unwrap();
    registry.register(noop("secret").hidden(true)).unwrap();

    let names: Vec<_> = registry.visible().map(|c| c.name().to_string()).collect();
    assert_eq!(names, ["shown"]);
    assert!(registry.contains("secret"));
}

#[test]
fn unregister_removes_and_preserves_order() {
    let mut registry = CommandRegistry::new();
    for name in ["a", "b", "c"] {
        registry.register(noop(name)).unwrap();
    }
    assert!(registry.unregister("b").is_some());
    assert!(registry.unregister("b").is_none());
    let names: Vec<_> = registry.iter().map(|c| c.name().to_string()).collect();
    assert_eq!(names, ["a", "c"]);
}

#[test]
fn debug_omits_callback() {
    let debug = format!("{:?}", noop("echo"));
    assert!(debug.contains("\"echo\""));
    assert!(debug.contains(".."));
}
