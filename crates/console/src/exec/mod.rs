// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Chain execution with short-circuit semantics.

mod result;
mod run;

pub use result::{ExecOutput, InvocationTrace, Outcome};
pub use run::execute;

#[cfg(test)]
#[path = "../exec_tests/mod.rs"]
mod tests;
