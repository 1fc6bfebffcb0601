// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `config.toml` for the devcon binary.
//!
//! Resolution: `--config PATH` > `DEVCON_CONFIG` > `<config dir>/devcon/config.toml`.
//! An explicitly named file must exist; a missing default file means defaults.

use std::path::{Path, PathBuf};

use devcon_console::HighlightTheme;
use serde::Deserialize;
use thiserror::Error;

use crate::env;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// REPL prompt.
    pub prompt: String,
    /// REPL history file. Defaults to `<data dir>/devcon/history.txt`.
    pub history_file: Option<PathBuf>,
    pub history_size: usize,
    /// Filter used when `DEVCON_LOG` is unset.
    pub log_level: String,
    /// Force colour on or off. Unset means "when stdout is a terminal".
    pub color: Option<bool>,
    pub highlight: HighlightTheme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            history_file: None,
            history_size: 1000,
            log_level: "warn".to_string(),
            color: None,
            highlight: HighlightTheme::default(),
        }
    }
}

impl Config {
    /// Load from `explicit`, else `DEVCON_CONFIG`, else the default location.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit.map(Path::to_path_buf).or_else(env::config_path) {
            return Self::from_file(&path);
        }
        match env::default_config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        let config = Self::parse(&text)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn history_path(&self) -> Option<PathBuf> {
        self.history_file.clone().or_else(env::default_history_path)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
