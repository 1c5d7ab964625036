//! Shared test utilities for integration tests
//!
//! Builds profile trees in temporary directories and runs the binary against
//! them with an isolated environment.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

pub const VALID_PROFILE: &str = r#"{
  "name": "web-dev",
  "description": "Frontend web development tooling",
  "plugins": ["eslint-helper", "prettier"],
  "mcpServers": [
    {"name": "browser", "command": "npx", "args": ["-y", "browser-mcp"], "scope": "project"}
  ],
  "marketplaces": [{"source": "github", "repo": "acme/claude-plugins"}],
  "detect": {"files": ["package.json"], "contains": {"package.json": "react"}}
}"#;

/// A workspace directory holding a `profiles/` tree
pub struct ProfileTree {
    dir: TempDir,
}

impl ProfileTree {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("profiles")).unwrap();
        Self { dir }
    }

    /// Workspace directory (the process working directory for binary runs)
    pub fn workspace(&self) -> &Path {
        self.dir.path()
    }

    pub fn root(&self) -> PathBuf {
        self.dir.path().join("profiles")
    }

    /// Write `contents` to `profiles/<rel>`, creating parent directories.
    pub fn write(&self, rel: &str, contents: &str) -> &Self {
        let path = self.root().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
        self
    }

    /// Run the binary with the workspace as working directory.
    pub fn run(&self, args: &[&str]) -> Output {
        let config_home = self.dir.path().join(".config-home");
        Command::new(env!("CARGO_BIN_EXE_validate-profiles"))
            .current_dir(self.workspace())
            .env("XDG_CONFIG_HOME", &config_home)
            .env_remove("PROFILE_VALIDATOR__ROOT")
            .env_remove("PROFILE_VALIDATOR_LOG")
            .env_remove("PROFILE_VALIDATOR_LOG_FORMAT")
            .env_remove("PROFILE_VALIDATOR_LOG_OUTPUT")
            .args(args)
            .output()
            .unwrap()
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

/// A valid profile with the given name.
pub fn valid_profile_named(name: &str) -> String {
    format!(
        r#"{{"name": "{}", "description": "A profile used in tests",
            "marketplaces": [{{"source": "github", "repo": "acme/plugins"}}]}}"#,
        name
    )
}
