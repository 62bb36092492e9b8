//! Configuration for fiber-gen
//!
//! Loaded from several sources, highest priority first:
//!
//! 1. Environment variables (`FIBER_GEN_` prefix, `__` for nesting)
//! 2. `./fiber-gen.toml`
//! 3. `~/.config/fiber-gen/config.toml` (XDG)
//! 4. Hardcoded defaults
//!
//! # Example Configuration
//!
//! ```toml
//! [init]
//! program = "go"
//! args = ["mod", "init"]
//! enabled = true
//!
//! [log]
//! level = "debug"
//! format = "json"
//! ```

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Name of the project-local configuration file
pub const LOCAL_CONFIG_FILE: &str = "fiber-gen.toml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "FIBER_GEN_";

/// Module initialization command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitSettings {
    /// Program to run
    pub program: String,
    /// Arguments placed before the module name
    pub args: Vec<String>,
    /// Run the command at all; `false` leaves the project without `go.mod`
    pub enabled: bool,
}

impl Default for InitSettings {
    fn default() -> Self {
        Self {
            program: "go".to_string(),
            args: vec!["mod".to_string(), "init".to_string()],
            enabled: true,
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable
    #[default]
    Pretty,
    /// One JSON object per line
    Json,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Filter directive used when `RUST_LOG` is unset
    pub level: String,
    /// Output format
    pub format: LogFormat,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// Complete fiber-gen configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Module initialization command
    pub init: InitSettings,
    /// Logging
    pub log: LogSettings,
}

impl GeneratorConfig {
    /// Load configuration from the standard locations
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file exists but cannot be parsed,
    /// or if a value has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Self::defaults()?;

        let user_config = Self::recommended_path();
        if user_config.exists() {
            figment = figment.merge(Toml::file(&user_config));
        }

        let local_config = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_config.exists() {
            figment = figment.merge(Toml::file(&local_config));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(true));

        Ok(figment.extract()?)
    }

    /// Load configuration from a specific file, environment still applies
    ///
    /// # Errors
    ///
    /// Returns an error if the file contains invalid TOML or values of the
    /// wrong type.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::defaults()?
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(true))
            .extract()?;
        Ok(config)
    }

    /// Recommended user config path (`~/.config/fiber-gen/config.toml`)
    #[must_use]
    pub fn recommended_path() -> PathBuf {
        dirs::config_dir().map_or_else(
            || PathBuf::from(LOCAL_CONFIG_FILE),
            |config_dir| config_dir.join("fiber-gen").join("config.toml"),
        )
    }

    fn defaults() -> Result<Figment, ConfigError> {
        Ok(Figment::new().merge(Toml::string(&toml::to_string(&Self::default())?)))
    }
}
