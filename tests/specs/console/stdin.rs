//! Without `-c` and with stdin not a terminal, lines are read from stdin.

use crate::prelude::*;

#[test]
fn runs_each_line() {
    cli().stdin("echo one\necho two\n").passes().stdout_eq("one\ntwo\n");
}

#[test]
fn exit_status_of_last_line() {
    cli().stdin("echo one\nfalse\n").exits_with(1);
}

#[test]
fn blank_lines_do_not_reset_status() {
    cli().stdin("false\n\n   \n").exits_with(1);
}

#[test]
fn syntax_error_does_not_stop_later_lines() {
    cli().stdin("echo \"open\necho next\n").passes().stdout_eq("next\n");
}

#[test]
fn quit_stops_reading() {
    cli().stdin("echo a\nquit\necho b\n").passes().stdout_eq("a\n");
}

#[test]
fn empty_stdin_succeeds() {
    cli().stdin("").passes().stdout_eq("");
}
