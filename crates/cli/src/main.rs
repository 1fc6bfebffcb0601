// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! devcon: an interactive developer console.

mod builtins;
mod color;
mod config;
mod env;
mod exit_error;
mod logging;
mod output;
mod repl;
mod session;

use std::io::{BufRead, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::config::Config;
use crate::exit_error::ExitError;
use crate::output::Output;
use crate::session::{LineStatus, Session};

#[derive(Parser)]
#[command(
    name = "devcon",
    version = env::VERSION,
    about = "Developer console: run `;`/`&` command chains",
    styles = color::styles()
)]
struct Cli {
    /// Config file [default: $DEVCON_CONFIG or <config dir>/devcon/config.toml]
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Disable colour output
    #[arg(long)]
    no_color: bool,

    /// Run LINE and exit; repeat to run several lines in order
    #[arg(short = 'c', long = "command", value_name = "LINE")]
    commands: Vec<String>,

    /// Print LINE as rich-text highlight markup and exit
    #[arg(long, value_name = "LINE", conflicts_with = "commands")]
    highlight: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        if let Some(exit) = err.downcast_ref::<ExitError>() {
            if !exit.message.is_empty() {
                eprintln!("{}", exit.message);
            }
            std::process::exit(exit.code);
        }
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    logging::init(&config.log_level);
    logging::quiet_panics();

    let session = Session::new(config.highlight.clone(), Output::stdout(), Output::stderr())
        .context("failed to register builtin commands")?;

    if let Some(line) = &cli.highlight {
        println!("{}", session.console().highlight(line));
        return Ok(());
    }

    let status = if !cli.commands.is_empty() {
        session.run_lines(&cli.commands)
    } else if std::io::stdin().is_terminal() {
        let colorize = color::should_colorize(cli.no_color, config.color);
        repl::run(&session, &config, color::markup(colorize))?;
        LineStatus::Success
    } else {
        session.run_lines(std::io::stdin().lock().lines().map_while(std::io::Result::ok))
    };

    match status.exit_code() {
        0 => Ok(()),
        code => Err(ExitError::silent(code).into()),
    }
}
