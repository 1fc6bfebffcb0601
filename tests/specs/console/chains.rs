//! `;` and `&` chains run through `-c`.

use crate::prelude::*;

#[test]
fn single_command() {
    cli().line("echo hello world").passes().stdout_eq("hello world\n");
}

#[test]
fn semicolon_runs_after_failure() {
    cli().line("false ; echo after").passes().stdout_eq("after\n");
}

#[test]
fn ampersand_skips_after_failure() {
    cli().line("false & echo skipped").exits_with(1).stdout_eq("");
}

#[test]
fn failed_prefix_then_independent_command() {
    cli().line("fail oops & echo B ; echo C").passes().stdout_eq("C\n");
}

#[test]
fn ampersand_runs_after_success() {
    cli().line("true & echo yes").passes().stdout_eq("yes\n");
}

#[test]
fn unknown_command_is_skipped() {
    cli().line("frobnicate ; echo hi").passes().stdout_eq("hi\n");
}

#[test]
fn quoted_argument_kept_whole() {
    cli().line("echo \"a   b\" c").passes().stdout_eq("a   b c\n");
}

#[test]
fn flags_are_not_positional() {
    cli().line("echo ??upper quiet ?n").passes().stdout_eq("QUIET");
}

#[test]
fn blank_line_succeeds() {
    cli().line("   ").passes().stdout_eq("");
}

#[test]
fn several_lines_exit_with_last_status() {
    cli().line("echo one").line("false").exits_with(1).stdout_eq("one\n");
    cli().line("false").line("echo two").passes().stdout_eq("two\n");
}

#[test]
fn callback_error_is_logged_and_fails() {
    cli().line("fail disk full").exits_with(1).stderr_has("disk full");
}

#[test]
fn panicking_command_fails_without_crashing() {
    cli().line("panic boom ; echo survived").passes().stdout_eq("survived\n");
}

#[test]
fn panic_is_reported_once_with_its_command() {
    cli()
        .line("panic boom")
        .exits_with(1)
        .stderr_has_once("boom")
        .stderr_has("command panicked")
        .stderr_has("panic=boom")
        .stderr_lacks("panicked at");
}

#[test]
fn exit_stops_later_lines() {
    cli().line("echo a").line("exit").line("echo b").passes().stdout_eq("a\n");
}
