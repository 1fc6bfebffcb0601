// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for chain execution.

use super::*;
use crate::parser::Parser;
use crate::test_support::{registry, CallLog};

mod basic;
mod failures;
mod short_circuit;

/// Parse and run `input` against the standard test registry.
pub(crate) fn run(input: &str) -> (ExecOutput, Vec<String>) {
    let log = CallLog::default();
    let registry = registry(&log);
    let chain = Parser::parse(input, &registry).unwrap();
    let output = execute(&chain);
    (output, log.calls())
}

pub(crate) fn outcomes(output: &ExecOutput) -> Vec<Outcome> {
    output.traces.iter().map(|t| t.outcome.clone()).collect()
}
