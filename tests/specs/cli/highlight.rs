//! `--highlight` prints rich-text markup for a line without running it.

use crate::prelude::*;

#[test]
fn known_and_unknown_commands() {
    cli()
        .args(&["--highlight", "echo hi ; nope"])
        .passes()
        .stdout_eq(
            "<color=#4EC9B0>echo</color> <color=#D4D4D4>hi</color> ; \
             <color=#F44747>nope</color>\n",
        );
}

#[test]
fn quoted_and_unterminated_strings() {
    cli()
        .args(&["--highlight", "echo \"a b\" \"open"])
        .passes()
        .stdout_eq(
            "<color=#4EC9B0>echo</color> <color=#CE9178>\"a b\"</color> \
             <color=#CE9178>\"open</color>\n",
        );
}

#[test]
fn highlighting_runs_nothing() {
    cli().args(&["--highlight", "echo ran"]).passes().stdout_lacks("ran\n");
}

#[test]
fn theme_comes_from_config() {
    cli()
        .config("[highlight]\ncommand = \"#010203\"\n")
        .args(&["--highlight", "true"])
        .passes()
        .stdout_eq("<color=#010203>true</color>\n");
}
