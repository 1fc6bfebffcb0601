// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resolved command calls produced by the parser.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::registry::CommandDescriptor;
use crate::token::Span;

/// One command call, ready to run.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub command: Arc<CommandDescriptor>,
    /// Positional arguments in source order.
    pub arguments: Vec<String>,
    pub flags: BTreeSet<String>,
    /// Runs even if the previous invocation failed (`;`). When false
    /// (`&`), runs only after a success.
    pub independent: bool,
    /// The segment of the raw line this came from.
    pub span: Span,
}

impl Invocation {
    pub fn name(&self) -> &str {
        self.command.name()
    }

    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags.contains(flag)
    }

    pub fn arg(&self, index: usize) -> Option<&str> {
        self.arguments.get(index).map(String::as_str)
    }
}

/// Invocations parsed from one line, in call order.
#[derive(Debug, Clone, Default)]
pub struct Chain {
    pub invocations: Vec<Invocation>,
    pub span: Span,
}

impl Chain {
    pub fn len(&self) -> usize {
        self.invocations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.invocations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Invocation> {
        self.invocations.iter()
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = &'a Invocation;
    type IntoIter = std::slice::Iter<'a, Invocation>;

    fn into_iter(self) -> Self::IntoIter {
        self.invocations.iter()
    }
}
