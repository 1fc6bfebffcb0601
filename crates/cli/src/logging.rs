// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging to stderr.

use tracing_subscriber::EnvFilter;

use crate::env;

/// Install the global subscriber. `DEVCON_LOG` takes precedence over the
/// configured level. A second call is a no-op.
pub fn init(configured: &str) {
    let filter = filter(env::log_filter().as_deref(), configured);
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

/// Replace the default panic hook, which prints an unattributed
/// `thread 'main' panicked at` report. Command panics are reported by the
/// executor; the location is kept at debug level.
pub fn quiet_panics() {
    std::panic::set_hook(Box::new(|info| {
        let location = info.location().map(ToString::to_string).unwrap_or_default();
        tracing::debug!(%location, "panic unwound");
    }));
}

/// First directive that parses wins, falling back to `warn`.
fn filter(from_env: Option<&str>, configured: &str) -> EnvFilter {
    from_env
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .or_else(|| EnvFilter::try_new(configured).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
