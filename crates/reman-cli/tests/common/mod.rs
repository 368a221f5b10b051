//! Common test utilities for CLI testing.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Output;

use assert_cmd::Command;
use reman_test_utils::StoreFixture;

/// A store directory plus a `reman` command pointed at it.
pub struct TestContext {
    pub store: StoreFixture,
}

impl TestContext {
    /// Empty directory, no store.
    pub fn new() -> Self {
        Self {
            store: StoreFixture::empty(),
        }
    }

    /// Store with layout and config for `author`.
    pub fn initialized(author: &str) -> Self {
        Self {
            store: StoreFixture::initialized(author),
        }
    }

    pub fn path(&self) -> &Path {
        self.store.root()
    }

    pub fn join(&self, rel: impl AsRef<Path>) -> PathBuf {
        self.store.path(rel)
    }

    /// Command running in the store directory
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("reman").expect("Binary not found");
        cmd.current_dir(self.path())
            .env("NO_COLOR", "1") // predictable output
            .env_remove("REMAN_COLOR")
            .env_remove("REMAN_LOG_LEVEL")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Run `args` feeding `answers` to the prompts, one per line.
    pub fn run(&self, args: &[&str], answers: &[&str]) -> Output {
        let mut stdin = answers.join("\n");
        stdin.push('\n');
        self.command()
            .args(args)
            .write_stdin(stdin)
            .output()
            .expect("Failed to run reman")
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Assert helpers for CLI output
pub trait OutputAssertions {
    fn assert_success(&self);
    fn assert_failure(&self);
    fn assert_stdout_contains(&self, text: &str);
    fn assert_stderr_contains(&self, text: &str);
    fn assert_exit_code(&self, code: i32);
}

impl OutputAssertions for Output {
    fn assert_success(&self) {
        assert!(
            self.status.success(),
            "Command failed with status: {}\nstderr: {}",
            self.status,
            String::from_utf8_lossy(&self.stderr)
        );
    }

    fn assert_failure(&self) {
        assert!(
            !self.status.success(),
            "Command succeeded unexpectedly\nstdout: {}",
            String::from_utf8_lossy(&self.stdout)
        );
    }

    fn assert_stdout_contains(&self, text: &str) {
        let stdout = String::from_utf8_lossy(&self.stdout);
        assert!(
            stdout.contains(text),
            "stdout did not contain '{text}'\nstdout: {stdout}"
        );
    }

    fn assert_stderr_contains(&self, text: &str) {
        let stderr = String::from_utf8_lossy(&self.stderr);
        assert!(
            stderr.contains(text),
            "stderr did not contain '{text}'\nstderr: {stderr}"
        );
    }

    fn assert_exit_code(&self, code: i32) {
        assert_eq!(
            self.status.code(),
            Some(code),
            "Expected exit code {code}, got {:?}",
            self.status.code()
        );
    }
}

/// JSON output assertions
pub mod json {
    use serde_json::Value;

    pub fn parse_output(output: &[u8]) -> Value {
        serde_json::from_slice(output).expect("Failed to parse JSON output")
    }

    pub fn assert_error(json: &Value, code: &str) {
        assert_eq!(
            json.get("success").and_then(|v| v.as_bool()),
            Some(false),
            "Expected success: false in JSON output"
        );
        assert_eq!(
            json.get("error")
                .and_then(|e| e.get("code"))
                .and_then(|c| c.as_str()),
            Some(code),
            "Expected error code: {code}"
        );
    }
}
