// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Entry point for hosts: parse, run and highlight console lines against a
//! shared registry.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::exec::{self, ExecOutput};
use crate::highlight::{self, HighlightTheme, Markup, RichText};
use crate::invocation::Chain;
use crate::parse_error::ParseError;
use crate::parser::Parser;
use crate::registry::{CommandDescriptor, CommandRegistry, RegistryError};

/// Registry handle shared between the console and commands that inspect it.
pub type SharedRegistry = Arc<RwLock<CommandRegistry>>;

#[derive(Debug, Default)]
pub struct Console {
    registry: SharedRegistry,
    theme: HighlightTheme,
}

impl Console {
    pub fn new(registry: CommandRegistry) -> Self {
        Self::with_shared(Arc::new(RwLock::new(registry)))
    }

    pub fn with_shared(registry: SharedRegistry) -> Self {
        Self { registry, theme: HighlightTheme::default() }
    }

    pub fn theme(mut self, theme: HighlightTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn registry(&self) -> &SharedRegistry {
        &self.registry
    }

    pub fn register(&self, command: CommandDescriptor) -> Result<(), RegistryError> {
        self.registry.write().register(command)
    }

    /// Parse a line without running it.
    ///
    /// Blank lines yield an empty chain without consulting the registry. The
    /// registry lock is released before this returns.
    pub fn parse(&self, line: &str) -> Result<Chain, ParseError> {
        if line.trim().is_empty() {
            return Ok(Chain::default());
        }
        let registry = self.registry.read();
        Parser::parse(line, &*registry).map_err(|err| {
            tracing::debug!(line, error = %err, "rejected console line");
            err
        })
    }

    /// Parse and run a line, returning per-invocation traces.
    pub fn execute(&self, line: &str) -> Result<ExecOutput, ParseError> {
        let chain = self.parse(line)?;
        Ok(exec::execute(&chain))
    }

    /// Parse and run a line. `Ok` carries the result of the last invocation
    /// that ran (`true` for a blank line); `Err` means the line was rejected
    /// and nothing ran.
    pub fn parse_and_execute(&self, line: &str) -> Result<bool, ParseError> {
        Ok(self.execute(line)?.success)
    }

    /// Highlight a line as rich-text colour tags.
    pub fn highlight(&self, line: &str) -> String {
        self.highlight_with(line, &RichText)
    }

    pub fn highlight_with(&self, line: &str, markup: &dyn Markup) -> String {
        let registry = self.registry.read();
        highlight::highlight(line, &*registry, &self.theme, markup)
    }
}

#[cfg(test)]
#[path = "console_tests.rs"]
mod tests;
