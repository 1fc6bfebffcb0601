// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared text sinks for builtin commands and error reports.

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// A cloneable, thread-safe writer. Builtins capture one so tests can
/// substitute a buffer for stdout.
#[derive(Clone)]
pub struct Output(Arc<Mutex<dyn Write + Send>>);

impl Output {
    pub fn stdout() -> Self {
        Self(Arc::new(Mutex::new(io::stdout())))
    }

    pub fn stderr() -> Self {
        Self(Arc::new(Mutex::new(io::stderr())))
    }

    pub fn text(&self, text: &str) -> io::Result<()> {
        let mut writer = self.0.lock();
        writer.write_all(text.as_bytes())?;
        writer.flush()
    }

    pub fn line(&self, text: &str) -> io::Result<()> {
        let mut writer = self.0.lock();
        writeln!(writer, "{text}")?;
        writer.flush()
    }
}

/// In-memory `Output` for tests.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct Buffer(Arc<Mutex<Vec<u8>>>);

#[cfg(test)]
impl Buffer {
    pub fn output(&self) -> Output {
        Output(self.0.clone())
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}
