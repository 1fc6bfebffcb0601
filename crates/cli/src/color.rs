// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::builder::styling::{Ansi256Color, Color, Style, Styles};
use devcon_console::highlight::{Ansi, Markup};
use std::io::IsTerminal;

pub mod codes {
    /// Section headers: pastel cyan / steel blue
    pub const HEADER: u8 = 74;
    /// Commands and literals: light grey
    pub const LITERAL: u8 = 250;
    /// Descriptions and context: medium grey
    pub const CONTEXT: u8 = 245;
}

/// Determine if color output should be enabled.
///
/// Priority: `--no-color` disables → `NO_COLOR=1` disables → `COLOR=1`
/// forces → `color` config key → TTY check.
pub fn should_colorize(disabled_by_flag: bool, configured: Option<bool>) -> bool {
    if disabled_by_flag {
        return false;
    }
    if std::env::var("NO_COLOR").is_ok_and(|v| v == "1") {
        return false;
    }
    if std::env::var("COLOR").is_ok_and(|v| v == "1") {
        return true;
    }
    configured.unwrap_or_else(|| std::io::stdout().is_terminal())
}

/// Markup for live terminal highlighting, if any.
pub fn markup(colorize: bool) -> Option<&'static dyn Markup> {
    colorize.then_some(&Ansi as &'static dyn Markup)
}

/// Build clap `Styles` using the project palette.
pub fn styles() -> Styles {
    if !should_colorize(false, None) {
        return Styles::plain();
    }
    Styles::styled()
        .header(Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(codes::HEADER)))))
        .literal(Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(codes::LITERAL)))))
        .placeholder(Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(codes::CONTEXT)))))
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
