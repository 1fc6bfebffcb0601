// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Interactive prompt with live highlighting and history.

use std::borrow::Cow;
use std::path::Path;

use devcon_console::highlight::Markup;
use devcon_console::Console;
use rustyline::completion::Completer;
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Editor, Helper};

use crate::config::Config;
use crate::session::Session;

/// Colours the line through the console's own lexer on every edit.
pub struct ConsoleHelper<'a> {
    console: &'a Console,
    markup: Option<&'static dyn Markup>,
}

impl<'a> ConsoleHelper<'a> {
    pub fn new(console: &'a Console, markup: Option<&'static dyn Markup>) -> Self {
        Self { console, markup }
    }
}

impl Highlighter for ConsoleHelper<'_> {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        match self.markup {
            Some(markup) => Cow::Owned(self.console.highlight_with(line, markup)),
            None => Cow::Borrowed(line),
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        self.markup.is_some()
    }
}

impl Completer for ConsoleHelper<'_> {
    type Candidate = String;
}

impl Hinter for ConsoleHelper<'_> {
    type Hint = String;
}

impl Validator for ConsoleHelper<'_> {}

impl Helper for ConsoleHelper<'_> {}

/// Read and run lines until `exit`, EOF or Ctrl-D. Ctrl-C abandons the
/// current line.
pub fn run(
    session: &Session,
    config: &Config,
    markup: Option<&'static dyn Markup>,
) -> anyhow::Result<()> {
    let editor_config = rustyline::Config::builder().max_history_size(config.history_size)?.build();
    let mut editor: Editor<ConsoleHelper<'_>, DefaultHistory> = Editor::with_config(editor_config)?;
    editor.set_helper(Some(ConsoleHelper::new(session.console(), markup)));

    let history = config.history_path();
    if let Some(path) = &history {
        if let Err(err) = editor.load_history(path) {
            tracing::debug!(path = %path.display(), error = %err, "no history loaded");
        }
    }

    loop {
        match editor.readline(&config.prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    editor.add_history_entry(line.as_str())?;
                }
                session.run_line(&line);
                if session.exit_requested() {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    if let Some(path) = &history {
        if let Err(err) = save_history(&mut editor, path) {
            tracing::warn!(path = %path.display(), error = %err, "failed to save history");
        }
    }
    Ok(())
}

fn save_history(
    editor: &mut Editor<ConsoleHelper<'_>, DefaultHistory>,
    path: &Path,
) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    editor.save_history(path)?;
    Ok(())
}

#[cfg(test)]
#[path = "repl_tests.rs"]
mod tests;
