//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/rsforge/rsforge.toml`
//! 3. Environment variables: `RSFORGE_*` prefix (e.g. `RSFORGE_AUTHOR__NAME`)

use std::path::PathBuf;

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::errors::{ForgeError, ForgeResult};

/// Author identity interpolated into generated boilerplate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AuthorInfo {
    pub name: String,
    pub email: String,
    pub org: String,
    pub github_user: String,
}

impl Default for AuthorInfo {
    fn default() -> Self {
        Self {
            name: "Project Team".into(),
            email: "team@example.com".into(),
            org: "example".into(),
            github_user: "example".into(),
        }
    }
}

/// Application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Settings {
    pub author: AuthorInfo,
}

impl Settings {
    /// Global config file path, if a home directory can be determined.
    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "rsforge").map(|dirs| dirs.config_dir().join("rsforge.toml"))
    }

    /// Load settings from defaults, the global config file, and environment.
    pub fn load() -> ForgeResult<Self> {
        let mut builder = Config::builder();

        if let Some(path) = Self::global_config_path() {
            builder = builder.add_source(File::from(path).required(false));
        }

        builder = builder.add_source(
            Environment::with_prefix("RSFORGE")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| ForgeError::Config(e.to_string()))?;

        let settings: Settings = config
            .try_deserialize()
            .map_err(|e| ForgeError::Config(e.to_string()))?;

        Ok(settings)
    }
}
