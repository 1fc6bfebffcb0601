// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Structured execution output and per-invocation trace records.

use std::collections::BTreeSet;
use std::time::Duration;

use crate::invocation::Invocation;
use crate::Span;

/// Outcome of executing a [`Chain`](crate::Chain).
#[derive(Debug)]
pub struct ExecOutput {
    /// Result of the last invocation that ran; `true` if none ran.
    pub success: bool,
    /// One trace per invocation, skipped ones included, in chain order.
    pub traces: Vec<InvocationTrace>,
}

impl ExecOutput {
    /// Traces of invocations whose callback was called.
    pub fn ran(&self) -> impl Iterator<Item = &InvocationTrace> {
        self.traces.iter().filter(|t| t.outcome.ran())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Callback returned `Ok(true)`.
    Succeeded,
    /// Callback returned `Ok(false)`.
    Failed,
    /// Callback returned an error.
    Errored(String),
    /// Callback panicked.
    Panicked(String),
    /// Not run: dependent on a failed predecessor.
    Skipped,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Succeeded)
    }

    pub fn ran(&self) -> bool {
        !matches!(self, Outcome::Skipped)
    }
}

/// Record of a single invocation.
#[derive(Debug)]
pub struct InvocationTrace {
    pub command: String,
    pub arguments: Vec<String>,
    pub flags: BTreeSet<String>,
    pub outcome: Outcome,
    /// Wall-clock time spent in the callback (zero when skipped).
    pub duration: Duration,
    pub span: Span,
}

impl InvocationTrace {
    pub(super) fn new(invocation: &Invocation, outcome: Outcome, duration: Duration) -> Self {
        Self {
            command: invocation.name().to_string(),
            arguments: invocation.arguments.clone(),
            flags: invocation.flags.clone(),
            outcome,
            duration,
            span: invocation.span,
        }
    }
}
