// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Registries with recording commands for tests.

use std::cell::Cell;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing_subscriber::fmt::MakeWriter;

use crate::invocation::Invocation;
use crate::registry::{CommandDescriptor, CommandLookup, CommandRegistry};

/// Every call made to a recording command, as `name arg1 arg2 ...`.
#[derive(Clone, Default)]
pub(crate) struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
    pub(crate) fn calls(&self) -> Vec<String> {
        self.0.lock().clone()
    }

    fn record(&self, invocation: &Invocation) {
        let mut entry = invocation.name().to_string();
        for arg in &invocation.arguments {
            entry.push(' ');
            entry.push_str(arg);
        }
        self.0.lock().push(entry);
    }
}

/// A command that logs its call and returns `result`.
pub(crate) fn recording(name: &str, result: bool, log: &CallLog) -> CommandDescriptor {
    let log = log.clone();
    CommandDescriptor::new(name, move |inv| {
        log.record(inv);
        Ok(result)
    })
}

/// Registry of `ok`/`echo` (succeed), `bad` (fails), `boom` (errors) and
/// `crash` (panics), all recording into `log`.
pub(crate) fn registry(log: &CallLog) -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    registry.register(recording("ok", true, log)).unwrap();
    registry.register(recording("echo", true, log)).unwrap();
    registry.register(recording("bad", false, log)).unwrap();

    let boom_log = log.clone();
    registry
        .register(CommandDescriptor::new("boom", move |inv| {
            boom_log.record(inv);
            Err("kaboom".into())
        }))
        .unwrap();

    let crash_log = log.clone();
    registry
        .register(CommandDescriptor::new("crash", move |inv| {
            crash_log.record(inv);
            panic!("crashed on purpose");
        }))
        .unwrap();

    registry
}

/// Counts lookups made against the wrapped registry.
pub(crate) struct CountingLookup<'a> {
    inner: &'a CommandRegistry,
    count: Cell<usize>,
}

impl<'a> CountingLookup<'a> {
    pub(crate) fn new(inner: &'a CommandRegistry) -> Self {
        Self { inner, count: Cell::new(0) }
    }

    pub(crate) fn count(&self) -> usize {
        self.count.get()
    }
}

impl CommandLookup for CountingLookup<'_> {
    fn lookup(&self, name: &str) -> Option<Arc<CommandDescriptor>> {
        self.count.set(self.count.get() + 1);
        self.inner.lookup(name)
    }
}

/// Log sink shared with a scoped `fmt` subscriber.
#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl std::io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Capture {
    type Writer = Capture;
    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` under a subscriber at `level` and return what it logged.
pub(crate) fn captured_logs(level: tracing::Level, f: impl FnOnce()) -> String {
    let capture = Capture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(capture.clone())
        .with_max_level(level)
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = capture.0.lock().clone();
    String::from_utf8(bytes).unwrap()
}
