// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A console with the builtins registered, plus the bookkeeping the run
//! modes share.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use devcon_console::{Console, HighlightTheme, RegistryError};

use crate::builtins;
use crate::output::Output;

/// How one line ended, as a process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStatus {
    /// The last invocation that ran succeeded, or nothing ran.
    Success,
    /// The last invocation that ran failed.
    Failure,
    /// Syntax error: nothing ran.
    Rejected,
}

impl LineStatus {
    pub fn exit_code(self) -> i32 {
        match self {
            LineStatus::Success => 0,
            LineStatus::Failure => 1,
            LineStatus::Rejected => 2,
        }
    }
}

pub struct Session {
    console: Console,
    exit: Arc<AtomicBool>,
    errors: Output,
}

impl Session {
    pub fn new(theme: HighlightTheme, out: Output, errors: Output) -> Result<Self, RegistryError> {
        let console = Console::default().theme(theme);
        let exit = Arc::new(AtomicBool::new(false));
        builtins::register(&console, &out, &exit)?;
        Ok(Self { console, exit, errors })
    }

    pub fn console(&self) -> &Console {
        &self.console
    }

    /// Set once `exit` or `quit` has run.
    pub fn exit_requested(&self) -> bool {
        self.exit.load(Ordering::SeqCst)
    }

    /// Run one line. Syntax errors are reported with a caret under the
    /// offending text.
    pub fn run_line(&self, line: &str) -> LineStatus {
        match self.console.parse_and_execute(line) {
            Ok(true) => LineStatus::Success,
            Ok(false) => LineStatus::Failure,
            Err(err) => {
                let report = format!("error: {err}\n{}", err.context(line, 40));
                if let Err(io) = self.errors.line(&report) {
                    tracing::warn!(error = %io, "failed to report syntax error");
                }
                LineStatus::Rejected
            }
        }
    }

    /// Run lines in order until one requests exit. Blank lines leave the
    /// status unchanged; the result is the status of the last line that
    /// did something.
    pub fn run_lines<I>(&self, lines: I) -> LineStatus
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut status = LineStatus::Success;
        for line in lines {
            let line = line.as_ref();
            if line.trim().is_empty() {
                continue;
            }
            status = self.run_line(line);
            if self.exit_requested() {
                break;
            }
        }
        status
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
