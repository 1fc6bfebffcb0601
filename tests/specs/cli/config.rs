//! Config file resolution and validation.

use crate::prelude::*;

#[test]
fn missing_default_config_is_fine() {
    cli().line("true").passes();
}

#[test]
fn explicit_missing_config_fails() {
    cli()
        .args(&["--config", "/nonexistent/devcon.toml", "-c", "true"])
        .exits_with(1)
        .stderr_has("failed to read config");
}

#[test]
fn env_config_missing_fails() {
    cli()
        .env("DEVCON_CONFIG", "/nonexistent/devcon.toml")
        .line("true")
        .exits_with(1)
        .stderr_has("/nonexistent/devcon.toml");
}

#[test]
fn invalid_config_fails() {
    cli()
        .config("history_size = \"many\"\n")
        .line("true")
        .exits_with(1)
        .stderr_has("invalid config");
}

#[test]
fn unknown_config_key_fails() {
    cli().config("colour = true\n").line("true").exits_with(1).stderr_has("colour");
}

#[test]
#[cfg(target_os = "linux")]
fn default_location_is_read() {
    let builder = cli();
    let dir = builder.home().join("config").join("devcon");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "[highlight]\ncommand = \"#0A0B0C\"\n").unwrap();

    builder.args(&["--highlight", "true"]).passes().stdout_has("#0A0B0C");
}

#[test]
fn log_level_from_config_enables_debug_logs() {
    cli()
        .config("log_level = \"debug\"\n")
        .line("frobnicate")
        .passes()
        .stderr_has("unknown command, segment dropped");
}

#[test]
fn devcon_log_overrides_config() {
    cli()
        .config("log_level = \"off\"\n")
        .env("DEVCON_LOG", "debug")
        .line("frobnicate")
        .passes()
        .stderr_has("unknown command");
}
