// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Walks a chain, calling each eligible command.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

use crate::invocation::{Chain, Invocation};

use super::result::{ExecOutput, InvocationTrace, Outcome};

/// Run every eligible invocation of `chain` in order.
///
/// An invocation runs if it is independent or the last invocation that ran
/// succeeded. Skipped invocations leave the running result untouched.
/// Callback errors and panics are logged and count as failure; they never
/// stop the chain.
pub fn execute(chain: &Chain) -> ExecOutput {
    let mut last_success = true;
    let mut traces = Vec::with_capacity(chain.len());

    for invocation in chain {
        if !invocation.independent && !last_success {
            tracing::debug!(command = invocation.name(), "skipped after failed predecessor");
            traces.push(InvocationTrace::new(invocation, Outcome::Skipped, Duration::ZERO));
            continue;
        }

        let trace = run_invocation(invocation);
        last_success = trace.outcome.is_success();
        traces.push(trace);
    }

    ExecOutput { success: last_success, traces }
}

fn run_invocation(invocation: &Invocation) -> InvocationTrace {
    let start = Instant::now();

    let cmd_span = tracing::info_span!(
        "console.cmd",
        cmd = %invocation.name(),
        args = ?invocation.arguments,
        flags = ?invocation.flags,
        success = tracing::field::Empty,
        duration_ms = tracing::field::Empty,
    );
    let _entered = cmd_span.enter();

    let result = panic::catch_unwind(AssertUnwindSafe(|| invocation.command.invoke(invocation)));
    let outcome = match result {
        Ok(Ok(true)) => Outcome::Succeeded,
        Ok(Ok(false)) => Outcome::Failed,
        Ok(Err(err)) => {
            let command = invocation.name();
            tracing::error!(command, error = %err, "command failed with an error");
            Outcome::Errored(err.to_string())
        }
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            tracing::error!(command = invocation.name(), panic = %message, "command panicked");
            Outcome::Panicked(message)
        }
    };

    let duration = start.elapsed();
    cmd_span.record("success", outcome.is_success());
    cmd_span.record("duration_ms", duration.as_millis() as u64);

    InvocationTrace::new(invocation, outcome, duration)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
