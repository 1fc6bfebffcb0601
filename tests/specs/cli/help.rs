//! CLI help output specs

use crate::prelude::*;

#[test]
fn devcon_help_shows_usage() {
    cli().args(&["--help"]).passes().stdout_has("Usage:").stdout_has("--command");
}

#[test]
fn devcon_version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.1");
}

#[test]
fn highlight_conflicts_with_command() {
    cli().args(&["-c", "echo", "--highlight", "echo"]).exits_with(2).stderr_has("cannot be used");
}

#[test]
fn unknown_flag_is_a_usage_error() {
    cli().args(&["--frobnicate"]).exits_with(2).stderr_has("Usage:");
}
