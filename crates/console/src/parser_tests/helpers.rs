// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for parser tests.

use crate::invocation::Chain;
use crate::parser::Parser;
use crate::test_support::{registry, CallLog};

/// Parse against the standard test registry, panicking on syntax errors.
pub fn parse(input: &str) -> Chain {
    let registry = registry(&CallLog::default());
    Parser::parse(input, &registry).unwrap_or_else(|e| panic!("failed to parse {input:?}: {e}"))
}

/// `(name, arguments)` for each invocation.
pub fn shape(chain: &Chain) -> Vec<(String, Vec<String>)> {
    chain.iter().map(|inv| (inv.name().to_string(), inv.arguments.clone())).collect()
}

pub fn names(chain: &Chain) -> Vec<&str> {
    chain.iter().map(|inv| inv.name()).collect()
}

pub fn independence(chain: &Chain) -> Vec<bool> {
    chain.iter().map(|inv| inv.independent).collect()
}
