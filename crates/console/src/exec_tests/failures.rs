// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Callback errors and panics are contained.

use super::{outcomes, run};
use crate::exec::Outcome;
use crate::test_support::captured_logs;

#[test]
fn error_counts_as_failure() {
    let (output, calls) = run("boom");
    assert!(!output.success);
    assert_eq!(calls, ["boom"]);
    assert_eq!(outcomes(&output), [Outcome::Errored("kaboom".into())]);
}

#[test]
fn error_suppresses_dependent() {
    let (output, calls) = run("boom & echo");
    assert_eq!(calls, ["boom"]);
    assert!(!output.success);
}

#[test]
fn error_does_not_stop_independent() {
    let (output, calls) = run("boom ; echo after");
    assert_eq!(calls, ["boom", "echo after"]);
    assert!(output.success);
}

#[test]
fn panic_is_caught() {
    let (output, calls) = run("crash ; echo still here");
    assert_eq!(calls, ["crash", "echo still here"]);
    assert!(output.success);
    assert_eq!(outcomes(&output)[0], Outcome::Panicked("crashed on purpose".into()));
}

#[test]
fn panic_suppresses_dependent() {
    let (output, calls) = run("crash & echo");
    assert_eq!(calls, ["crash"]);
    assert!(!output.success);
}

#[test]
fn errors_are_logged() {
    let logged = captured_logs(tracing::Level::INFO, || {
        run("boom");
    });
    assert!(logged.contains("ERROR"), "log: {logged}");
    assert!(logged.contains("boom"), "log: {logged}");
    assert!(logged.contains("kaboom"), "log: {logged}");
}
