// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dependent invocations and the running result.

use super::{outcomes, run};
use crate::exec::Outcome;

#[yare::parameterized(
    and_after_success   = { "ok & echo",         &["ok", "echo"],         true },
    and_after_failure   = { "bad & echo",        &["bad"],                false },
    semi_after_failure  = { "bad ; echo",        &["bad", "echo"],        true },
    skip_then_independent = { "bad & ok ; echo", &["bad", "echo"],        true },
    skip_then_independent_fail = { "ok & bad ; bad & ok", &["ok", "bad", "bad"], false },
    chain_of_skips      = { "bad & ok & echo",   &["bad"],                false },
    independent_failure_resets_nothing = { "ok ; bad & echo", &["ok", "bad"], false },
    independent_success_reenables = { "bad & ok ; ok & echo", &["bad", "ok", "echo"], true },
)]
fn short_circuit(input: &str, expected_calls: &[&str], expected_success: bool) {
    let (output, calls) = run(input);
    assert_eq!(calls, expected_calls, "input: {input:?}");
    assert_eq!(output.success, expected_success, "input: {input:?}");
}

#[test]
fn result_is_last_invocation_actually_run() {
    // `bad & ok ; echo`: ok is skipped, echo runs; result is echo's.
    let (output, _) = run("bad & ok ; echo");
    assert!(output.success);
    assert_eq!(outcomes(&output), [Outcome::Failed, Outcome::Skipped, Outcome::Succeeded]);
}

#[test]
fn skipped_trailing_invocation_keeps_failure() {
    let (output, _) = run("ok ; bad & ok");
    assert!(!output.success);
    assert_eq!(outcomes(&output), [Outcome::Succeeded, Outcome::Failed, Outcome::Skipped]);
}

#[test]
fn skipped_invocations_take_no_time() {
    let (output, _) = run("bad & ok");
    assert!(output.traces[1].duration.is_zero());
}
