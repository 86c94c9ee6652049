//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for testing sutra-hl CLI behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
use std::path::Path;

/// Returns a Command configured to run the sutra-hl binary.
///
/// Color and logging env vars are cleared so output is deterministic.
pub fn sutra_cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("sutra-hl"));
    cmd.env_remove("COLOR")
        .env_remove("SUTRA_HL_CONFIG")
        .env_remove("SUTRA_HL_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// Create a highlight command builder for `keyword`.
pub fn highlight(keyword: &str) -> HighlightBuilder {
    HighlightBuilder {
        args: vec!["highlight".to_string(), keyword.to_string()],
        dir: None,
        stdin: None,
        envs: Vec::new(),
    }
}

/// Fluent builder around `sutra-hl highlight`.
pub struct HighlightBuilder {
    args: Vec<String>,
    dir: Option<std::path::PathBuf>,
    stdin: Option<String>,
    envs: Vec<(String, String)>,
}

#[allow(dead_code)]
impl HighlightBuilder {
    pub fn arg(mut self, arg: &str) -> Self {
        self.args.push(arg.to_string());
        self
    }

    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|a| a.to_string()));
        self
    }

    pub fn pwd(mut self, dir: &Path) -> Self {
        self.dir = Some(dir.to_path_buf());
        self
    }

    pub fn stdin(mut self, input: &str) -> Self {
        self.stdin = Some(input.to_string());
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    fn command(self) -> assert_cmd::Command {
        let mut cmd = sutra_cmd();
        cmd.args(&self.args);
        if let Some(dir) = self.dir {
            cmd.current_dir(dir);
        }
        for (key, value) in self.envs {
            cmd.env(key, value);
        }
        cmd.write_stdin(self.stdin.unwrap_or_default());
        cmd
    }

    /// Expect exit code 0 (at least one match).
    pub fn matches(self) -> RunAssert {
        self.exits(0)
    }

    /// Expect exit code 1 (nothing matched).
    pub fn no_match(self) -> RunAssert {
        self.exits(1)
    }

    pub fn exits(self, code: i32) -> RunAssert {
        let output = self.command().output().expect("command should run");
        assert_eq!(
            output.status.code(),
            Some(code),
            "expected exit code {}, got {:?}\nstdout: {}\nstderr: {}",
            code,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }
}

pub struct RunAssert {
    output: std::process::Output,
}

#[allow(dead_code)]
impl RunAssert {
    /// Get stdout as string
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    /// Get stderr as string
    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Parse stdout as JSON
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.output.stdout).expect("stdout should be JSON")
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout(), expected);
        self
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        let stdout = self.stdout();
        assert!(stdout.contains(needle), "stdout missing {needle:?}:\n{stdout}");
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        let stdout = self.stdout();
        assert!(!stdout.contains(needle), "stdout unexpectedly has {needle:?}:\n{stdout}");
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        let stderr = self.stderr();
        assert!(stderr.contains(needle), "stderr missing {needle:?}:\n{stderr}");
        self
    }
}

/// Creates a temp directory (marked as a git root) with the given files.
pub fn temp_tree(files: &[(&str, &str)]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join(".git")).unwrap();
    for (path, content) in files {
        let full = dir.path().join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full, content).unwrap();
    }
    dir
}
