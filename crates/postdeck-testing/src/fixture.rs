use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Isolated environment for CLI invocations.
///
/// Owns a throwaway config dir and pins every spawned command to it and
/// to the given API base URL, so tests never touch the user's real
/// configuration or a real server.
pub struct TestFixture {
    _temp_dir: TempDir,
    config_dir: PathBuf,
    api_url: String,
}

impl TestFixture {
    pub fn new(api_url: impl Into<String>) -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");
        let config_dir = temp_dir.path().join(".postdeck");
        std::fs::create_dir_all(&config_dir).expect("create config dir");

        Self {
            _temp_dir: temp_dir,
            config_dir,
            api_url: api_url.into(),
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// A `postdeck` command pre-wired to this fixture.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("postdeck").expect("postdeck binary");
        cmd.arg("--config-dir")
            .arg(&self.config_dir)
            .arg("--api-url")
            .arg(&self.api_url)
            .env_remove("POSTDECK_PATH")
            .env_remove("POSTDECK_API_URL");
        cmd
    }

    /// A command that resolves the API URL from config/env instead of the
    /// `--api-url` flag, for precedence tests.
    pub fn command_without_url_flag(&self) -> Command {
        let mut cmd = Command::cargo_bin("postdeck").expect("postdeck binary");
        cmd.arg("--config-dir")
            .arg(&self.config_dir)
            .env_remove("POSTDECK_PATH")
            .env_remove("POSTDECK_API_URL");
        cmd
    }

    /// Write a config file pointing at the given API URL.
    pub fn write_config(&self, api_url: &str) -> anyhow::Result<()> {
        let body = format!("api_url = \"{}\"\n", api_url);
        std::fs::write(self.config_dir.join("config.toml"), body)?;
        Ok(())
    }
}
