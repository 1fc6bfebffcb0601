// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the devcon binary.

use std::path::PathBuf;

/// Version string shown by `--version`.
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "+", env!("BUILD_GIT_HASH"));

/// Config file override from `DEVCON_CONFIG`.
pub fn config_path() -> Option<PathBuf> {
    std::env::var("DEVCON_CONFIG").ok().filter(|s| !s.is_empty()).map(PathBuf::from)
}

/// Default config file: `<config dir>/devcon/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("devcon").join("config.toml"))
}

/// Default history file: `<data dir>/devcon/history.txt`.
pub fn default_history_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("devcon").join("history.txt"))
}

/// Log filter directive from `DEVCON_LOG`, e.g. `debug` or
/// `devcon_console=trace`.
pub fn log_filter() -> Option<String> {
    std::env::var("DEVCON_LOG").ok().filter(|s| !s.is_empty())
}
