// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command descriptors and the name → command registry.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use thiserror::Error;

use crate::invocation::Invocation;
use crate::token::{QUOTE, SEPARATOR_ALWAYS, SEPARATOR_ON_SUCCESS};

/// Error a command callback may return. Treated as a failed invocation.
pub type CommandError = Box<dyn std::error::Error + Send + Sync>;

/// Outcome of a command callback: `Ok(true)` on success.
pub type CommandResult = Result<bool, CommandError>;

/// Shared callback run for each invocation of a command.
pub type Callback = Arc<dyn Fn(&Invocation) -> CommandResult + Send + Sync>;

/// A registered console command. Immutable once built.
#[derive(Clone)]
pub struct CommandDescriptor {
    name: String,
    description: String,
    usage: String,
    hidden: bool,
    callback: Callback,
}

impl CommandDescriptor {
    pub fn new<F>(name: impl Into<String>, callback: F) -> Self
    where
        F: Fn(&Invocation) -> CommandResult + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            description: String::new(),
            usage: String::new(),
            hidden: false,
            callback: Arc::new(callback),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }

    /// Hidden commands run normally but are left out of listings.
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get_description(&self) -> &str {
        &self.description
    }

    pub fn get_usage(&self) -> &str {
        &self.usage
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Run the callback for one invocation.
    pub fn invoke(&self, invocation: &Invocation) -> CommandResult {
        (self.callback)(invocation)
    }
}

impl fmt::Debug for CommandDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDescriptor")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("usage", &self.usage)
            .field("hidden", &self.hidden)
            .finish_non_exhaustive()
    }
}

/// Resolve a command by name. The parser and highlighter only need this.
pub trait CommandLookup {
    fn lookup(&self, name: &str) -> Option<Arc<CommandDescriptor>>;
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("command `{name}` is already registered")]
    Duplicate { name: String },

    /// The name could never be typed as a command name.
    #[error("invalid command name {name:?}")]
    InvalidName { name: String },
}

/// Commands keyed by name, kept in registration order.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: IndexMap<String, Arc<CommandDescriptor>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, command: CommandDescriptor) -> Result<(), RegistryError> {
        if !is_valid_name(command.name()) {
            return Err(RegistryError::InvalidName { name: command.name().to_string() });
        }
        if self.commands.contains_key(command.name()) {
            return Err(RegistryError::Duplicate { name: command.name().to_string() });
        }
        tracing::debug!(command = command.name(), "registered console command");
        self.commands.insert(command.name().to_string(), Arc::new(command));
        Ok(())
    }

    /// Remove a command, returning it if it was registered.
    pub fn unregister(&mut self, name: &str) -> Option<Arc<CommandDescriptor>> {
        self.commands.shift_remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// All commands in registration order, hidden ones included.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<CommandDescriptor>> {
        self.commands.values()
    }

    /// Commands meant for listings such as `help`.
    pub fn visible(&self) -> impl Iterator<Item = &Arc<CommandDescriptor>> {
        self.iter().filter(|c| !c.is_hidden())
    }
}

impl CommandLookup for CommandRegistry {
    fn lookup(&self, name: &str) -> Option<Arc<CommandDescriptor>> {
        self.commands.get(name).cloned()
    }
}

/// A name is registrable if the lexer can produce it as one unquoted word.
fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace() || matches!(c, QUOTE | SEPARATOR_ALWAYS | SEPARATOR_ON_SUCCESS)
        })
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
