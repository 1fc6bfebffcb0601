//! Lines with syntax errors run nothing and exit with status 2.

use crate::prelude::*;

#[test]
fn unterminated_quote() {
    cli()
        .line("echo before ; echo \"abc")
        .exits_with(2)
        .stdout_eq("")
        .stderr_has("incomplete string at position 19");
}

#[test]
fn invalid_flag_shows_caret() {
    cli()
        .line("echo ?a1")
        .exits_with(2)
        .stdout_eq("")
        .stderr_has("flags must only contain letters: '?a1' at position 5")
        .stderr_has("echo ?a1\n     ^^^");
}

#[test]
fn syntax_error_is_reported_once() {
    cli()
        .line("echo \"abc")
        .line("echo ?a1")
        .exits_with(2)
        .stderr_has_once("incomplete string at position 5")
        .stderr_has_once("flags must only contain letters")
        .stderr_lacks("rejected console line");
}

#[test]
fn syntax_error_is_logged_at_debug() {
    cli()
        .env("DEVCON_LOG", "debug")
        .line("echo ?a1")
        .exits_with(2)
        .stderr_has("rejected console line")
        .stderr_has("error: flags must only contain letters");
}

#[test]
fn bare_double_prefix_is_rejected() {
    cli().line("echo ??").exits_with(2);
}

#[test]
fn invalid_flag_on_unknown_command_is_ignored() {
    cli().line("nope ?1 ; echo ok").passes().stdout_eq("ok\n");
}
