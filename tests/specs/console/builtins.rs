//! Builtin commands.

use crate::prelude::*;

#[test]
fn help_lists_commands() {
    cli()
        .line("help")
        .passes()
        .stdout_has("echo")
        .stdout_has("exit")
        .stdout_has("Same as exit")
        .stdout_lacks("panic");
}

#[test]
fn help_for_a_command() {
    cli()
        .line("help fail")
        .passes()
        .stdout_eq("usage: fail [message...]\nFail with an error message\n");
}

#[test]
fn help_for_unknown_command_fails() {
    cli().line("help nope").exits_with(1).stdout_eq("unknown command: nope\n");
}

#[test]
fn true_and_false() {
    cli().line("true").passes();
    cli().line("false").exits_with(1);
}
