//! # sysvbanner Configuration
//!
//! Configuration sources (in priority order):
//! 1. CLI arguments
//! 2. Environment variables (`SYSVBANNER_`, `__` between nested keys)
//! 3. User config (`~/.config/sysvbanner/config.toml` on Linux)
//! 4. Built-in defaults

use anyhow::Context;
use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use sysvbanner_core::UnsupportedPolicy;

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "SYSVBANNER_";

/// Get the configuration directory
pub fn config_dir() -> PathBuf {
    ProjectDirs::from("dev", "sysvbanner", "sysvbanner")
        .map(|d| d.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("~/.config/sysvbanner"))
}

/// Default configuration file path
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rendering settings
    pub render: RenderConfig,
}

/// Rendering settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Handling of characters the font cannot draw
    pub unsupported: UnsupportedPolicy,
}

impl Config {
    /// Load from the default location. A missing file means defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Self::figment(None).extract().context("invalid configuration")
        }
    }

    /// Load from an explicit file, which must exist
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        if !path.is_file() {
            anyhow::bail!("config file not found: {}", path.display());
        }

        let config = Self::figment(Some(path))
            .extract()
            .with_context(|| format!("invalid configuration in {}", path.display()))?;
        tracing::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Serialize as TOML
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
