// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use devcon_console::Rgb;
use serial_test::serial;

#[test]
fn empty_file_gives_defaults() {
    assert_eq!(Config::parse("").unwrap(), Config::default());
}

#[test]
fn all_keys() {
    let config = Config::parse(
        r##"
prompt = "dev$ "
history_file = "/tmp/devcon-history"
history_size = 50
log_level = "debug"
color = false

[highlight]
command = "#112233"
unknown_command = "#445566"
"##,
    )
    .unwrap();

    assert_eq!(config.prompt, "dev$ ");
    assert_eq!(config.history_file, Some(PathBuf::from("/tmp/devcon-history")));
    assert_eq!(config.history_size, 50);
    assert_eq!(config.log_level, "debug");
    assert_eq!(config.color, Some(false));
    assert_eq!(config.highlight.command, Rgb::new(0x11, 0x22, 0x33));
    assert_eq!(config.highlight.unknown_command, Rgb::new(0x44, 0x55, 0x66));
    assert_eq!(config.highlight.string, HighlightTheme::default().string);
}

#[yare::parameterized(
    unknown_key   = { "promt = \"> \"" },
    wrong_type    = { "history_size = \"lots\"" },
    bad_colour    = { "[highlight]\ncommand = \"teal\"" },
    unknown_theme = { "[highlight]\nkeyword = \"#000000\"" },
)]
fn rejects_invalid(text: &str) {
    assert!(Config::parse(text).is_err());
}

#[test]
fn history_file_overrides_default() {
    let config = Config { history_file: Some(PathBuf::from("/x/h")), ..Config::default() };
    assert_eq!(config.history_path(), Some(PathBuf::from("/x/h")));
}

#[test]
fn from_file_reads_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "prompt = \"$ \"\n").unwrap();
    assert_eq!(Config::from_file(&path).unwrap().prompt, "$ ");
}

#[test]
fn from_file_reports_path_on_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "prompt = \n").unwrap();
    let err = Config::from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
#[serial]
fn explicit_missing_file_is_an_error() {
    std::env::remove_var("DEVCON_CONFIG");
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
#[serial]
fn env_var_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("from-env.toml");
    std::fs::write(&path, "history_size = 7\n").unwrap();

    std::env::set_var("DEVCON_CONFIG", &path);
    let config = Config::load(None);
    std::env::remove_var("DEVCON_CONFIG");

    assert_eq!(config.unwrap().history_size, 7);
}

#[test]
#[serial]
fn explicit_path_beats_env_var() {
    let dir = tempfile::tempdir().unwrap();
    let explicit = dir.path().join("explicit.toml");
    std::fs::write(&explicit, "history_size = 1\n").unwrap();

    std::env::set_var("DEVCON_CONFIG", dir.path().join("missing.toml"));
    let config = Config::load(Some(&explicit));
    std::env::remove_var("DEVCON_CONFIG");

    assert_eq!(config.unwrap().history_size, 1);
}
