//! Project configuration.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;

use todo_mirror_core::OwnerId;

const CONFIG_FILE: &str = "todo-mirror.toml";

/// Top-level configuration loaded from `todo-mirror.toml`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ProjectConfig {
    /// Remote collection settings.
    #[serde(default)]
    pub remote: RemoteConfig,
}

impl ProjectConfig {
    /// Load configuration from `dir/todo-mirror.toml`.
    ///
    /// A missing file yields the defaults; an unreadable or malformed file
    /// is an error.
    ///
    /// # Errors
    /// Returns an error when the file exists but cannot be read or parsed.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let path = dir.as_ref().join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(config)
    }
}

/// Remote collection settings.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteConfig {
    /// Base URL of the remote API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Account whose tasks are mirrored.
    #[serde(default = "default_owner")]
    pub owner: OwnerId,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            owner: default_owner(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:3000".to_owned()
}

const fn default_owner() -> OwnerId {
    OwnerId(1353)
}
