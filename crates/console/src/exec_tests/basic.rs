// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Plain execution: results, argument passing, traces.

use super::{outcomes, run};
use crate::exec::{execute, Outcome};
use crate::invocation::Chain;

#[test]
fn empty_chain_succeeds() {
    let output = execute(&Chain::default());
    assert!(output.success);
    assert!(output.traces.is_empty());
}

#[test]
fn single_success() {
    let (output, calls) = run("ok");
    assert!(output.success);
    assert_eq!(calls, ["ok"]);
    assert_eq!(outcomes(&output), [Outcome::Succeeded]);
}

#[test]
fn single_failure() {
    let (output, calls) = run("bad");
    assert!(!output.success);
    assert_eq!(calls, ["bad"]);
    assert_eq!(outcomes(&output), [Outcome::Failed]);
}

#[test]
fn arguments_reach_callback() {
    let (_, calls) = run("echo \"a b\" c ?f");
    assert_eq!(calls, ["echo a b c"]);
}

#[test]
fn trace_records_invocation() {
    let (output, _) = run("echo x ?v");
    let trace = &output.traces[0];
    assert_eq!(trace.command, "echo");
    assert_eq!(trace.arguments, ["x"]);
    assert!(trace.flags.contains("v"));
    assert_eq!(trace.span.start, 0);
}

#[test]
fn callback_sees_flags() {
    use crate::registry::{CommandDescriptor, CommandRegistry};
    use crate::parser::Parser;

    let mut registry = CommandRegistry::new();
    registry
        .register(CommandDescriptor::new("check", |inv| Ok(inv.has_flag("y"))))
        .unwrap();

    let yes = Parser::parse("check ?y", &registry).unwrap();
    let no = Parser::parse("check ?n", &registry).unwrap();
    assert!(execute(&yes).success);
    assert!(!execute(&no).success);
}

#[test]
fn independent_runs_all_in_order() {
    let (output, calls) = run("echo 1 ; bad ; echo 3");
    assert_eq!(calls, ["echo 1", "bad", "echo 3"]);
    assert!(output.success);
}

#[test]
fn ran_filters_skipped() {
    let (output, _) = run("bad & ok ; echo");
    let ran: Vec<_> = output.ran().map(|t| t.command.as_str()).collect();
    assert_eq!(ran, ["bad", "echo"]);
}
