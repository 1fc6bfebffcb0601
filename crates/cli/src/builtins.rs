// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Commands every devcon session starts with.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use devcon_console::{CommandDescriptor, CommandLookup, Console, RegistryError, SharedRegistry};

use crate::output::Output;

/// Register the builtin commands. `exit` is raised by `exit`/`quit`.
pub fn register(
    console: &Console,
    out: &Output,
    exit: &Arc<AtomicBool>,
) -> Result<(), RegistryError> {
    console.register(help(console.registry().clone(), out.clone()))?;
    console.register(echo(out.clone()))?;
    console.register(
        CommandDescriptor::new("true", |_| Ok(true)).description("Succeed without doing anything"),
    )?;
    console.register(
        CommandDescriptor::new("false", |_| Ok(false)).description("Fail without doing anything"),
    )?;
    console.register(fail())?;
    console.register(exit_command("exit", "End the session", exit.clone()))?;
    console.register(exit_command("quit", "Same as exit", exit.clone()))?;
    console.register(panic_command())?;
    Ok(())
}

fn help(registry: SharedRegistry, out: Output) -> CommandDescriptor {
    CommandDescriptor::new("help", move |inv| {
        let registry = registry.read();
        let Some(name) = inv.arg(0) else {
            let width = registry.visible().map(|c| c.name().len()).max().unwrap_or(0);
            for command in registry.visible() {
                let entry = format!("{:width$}  {}", command.name(), command.get_description());
                out.line(entry.trim_end())?;
            }
            return Ok(true);
        };

        let Some(command) = registry.lookup(name) else {
            out.line(&format!("unknown command: {name}"))?;
            return Ok(false);
        };
        let usage = match command.get_usage() {
            "" => command.name(),
            usage => usage,
        };
        out.line(&format!("usage: {usage}"))?;
        if !command.get_description().is_empty() {
            out.line(command.get_description())?;
        }
        Ok(true)
    })
    .description("List commands, or describe one")
    .usage("help [command]")
}

fn echo(out: Output) -> CommandDescriptor {
    CommandDescriptor::new("echo", move |inv| {
        let mut text = inv.arguments.join(" ");
        if inv.has_flag("upper") {
            text = text.to_uppercase();
        }
        if inv.has_flag("n") {
            out.text(&text)?;
        } else {
            out.line(&text)?;
        }
        Ok(true)
    })
    .description("Print arguments separated by spaces")
    .usage("echo [text...] [?n] [??upper]")
}

fn fail() -> CommandDescriptor {
    CommandDescriptor::new("fail", |inv| {
        let message =
            if inv.arguments.is_empty() { "failed".to_string() } else { inv.arguments.join(" ") };
        Err(message.into())
    })
    .description("Fail with an error message")
    .usage("fail [message...]")
}

fn exit_command(name: &str, description: &str, exit: Arc<AtomicBool>) -> CommandDescriptor {
    CommandDescriptor::new(name, move |_| {
        exit.store(true, Ordering::SeqCst);
        Ok(true)
    })
    .description(description)
}

/// Hidden: exercises panic isolation in callbacks.
#[allow(clippy::panic)]
fn panic_command() -> CommandDescriptor {
    CommandDescriptor::new("panic", |inv| {
        let message = if inv.arguments.is_empty() {
            "panic requested".to_string()
        } else {
            inv.arguments.join(" ")
        };
        panic!("{message}");
    })
    .hidden(true)
}

#[cfg(test)]
#[path = "builtins_tests.rs"]
mod tests;
