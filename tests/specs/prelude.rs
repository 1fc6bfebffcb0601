//! Shared helpers for specs.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::Output;

use assert_cmd::Command;
use tempfile::TempDir;

pub use similar_asserts::assert_eq;

/// A `devcon` invocation isolated from the caller's config, history and
/// log settings.
pub fn cli() -> CliBuilder {
    CliBuilder::new()
}

pub struct CliBuilder {
    home: TempDir,
    args: Vec<String>,
    envs: Vec<(String, String)>,
    stdin: Option<String>,
}

impl CliBuilder {
    fn new() -> Self {
        Self { home: TempDir::new().unwrap(), args: Vec::new(), envs: Vec::new(), stdin: None }
    }

    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|a| a.to_string()));
        self
    }

    /// Shorthand for `-c LINE`.
    pub fn line(self, line: &str) -> Self {
        self.args(&["-c", line])
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    pub fn stdin(mut self, input: &str) -> Self {
        self.stdin = Some(input.to_string());
        self
    }

    /// Write `contents` to a config file and pass it with `--config`.
    pub fn config(self, contents: &str) -> Self {
        let path = self.home.path().join("devcon.toml");
        std::fs::write(&path, contents).unwrap();
        let path = path.display().to_string();
        self.args(&["--config", &path])
    }

    pub fn home(&self) -> PathBuf {
        self.home.path().to_path_buf()
    }

    fn output(self) -> Output {
        let mut cmd = Command::cargo_bin("devcon").unwrap();
        cmd.env_remove("DEVCON_CONFIG")
            .env_remove("DEVCON_LOG")
            .env_remove("COLOR")
            .env("NO_COLOR", "1")
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.home.path().join("config"))
            .env("XDG_DATA_HOME", self.home.path().join("data"))
            .args(&self.args);
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        cmd.write_stdin(self.stdin.unwrap_or_default());
        cmd.output().unwrap()
    }

    pub fn run(self) -> RunAssert {
        RunAssert { output: self.output() }
    }

    pub fn passes(self) -> RunAssert {
        let run = self.run();
        assert!(
            run.output.status.success(),
            "expected success, got {:?}\nstderr:\n{}",
            run.output.status.code(),
            run.stderr()
        );
        run
    }

    pub fn fails(self) -> RunAssert {
        let run = self.run();
        assert!(!run.output.status.success(), "expected failure\nstdout:\n{}", run.stdout());
        run
    }

    pub fn exits_with(self, code: i32) -> RunAssert {
        let run = self.run();
        assert_eq!(run.code(), Some(code), "stdout:\n{}\nstderr:\n{}", run.stdout(), run.stderr());
        run
    }
}

pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    pub fn code(&self) -> Option<i32> {
        self.output.status.code()
    }

    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        assert_eq!(self.stdout(), expected);
        self
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        let stdout = self.stdout();
        assert!(stdout.contains(needle), "stdout lacks {needle:?}:\n{stdout}");
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        let stdout = self.stdout();
        assert!(!stdout.contains(needle), "stdout has {needle:?}:\n{stdout}");
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        let stderr = self.stderr();
        assert!(stderr.contains(needle), "stderr lacks {needle:?}:\n{stderr}");
        self
    }

    pub fn stderr_has_once(self, needle: &str) -> Self {
        let stderr = self.stderr();
        assert_eq!(stderr.matches(needle).count(), 1, "{needle:?} in stderr:\n{stderr}");
        self
    }

    pub fn stderr_lacks(self, needle: &str) -> Self {
        let stderr = self.stderr();
        assert!(!stderr.contains(needle), "stderr has {needle:?}:\n{stderr}");
        self
    }
}
