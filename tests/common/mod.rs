//! Shared testing utilities for reelkit CLI tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Path to the isolated root directory.
    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for invoking the compiled `reelkit` binary with a
    /// clean environment: no inherited config path, purchaser email, or API
    /// key.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("reelkit").expect("Failed to locate reelkit binary");
        cmd.current_dir(self.root())
            .env_remove("REELKIT_CONFIG")
            .env_remove("REELKIT_EMAIL")
            .env_remove("GEMINI_API_KEY");
        cmd
    }

    /// Write a config file into the environment and return its path.
    pub fn write_config(&self, contents: &str) -> PathBuf {
        let path = self.root().join("reelkit.toml");
        fs::write(&path, contents).expect("Failed to write test config");
        path
    }
}
