//! Config loading, merging, and validation operations.

use super::model::Config;
use crate::error::{JrunError, Result};
use std::env;
use std::path::{Path, PathBuf};

impl Config {
    /// Load config from a JSON file.
    ///
    /// Unknown fields are silently ignored for forward compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            JrunError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_json(&content)
    }

    /// Parse config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| JrunError::ConfigError(format!("failed to parse config JSON: {}", e)))
    }

    /// Serialize config to a pretty-printed JSON string.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| JrunError::ConfigError(format!("failed to serialize config: {}", e)))
    }

    /// Build a config from `JAVA_HOME` / `MAVEN_HOME` environment variables.
    ///
    /// Used as the last-resort default when no config file exists.
    pub fn from_env() -> Self {
        Config {
            java_home: env::var("JAVA_HOME").unwrap_or_default(),
            maven_home: env::var("MAVEN_HOME").unwrap_or_default(),
            ..Default::default()
        }
    }

    /// Apply command-line overrides on top of this config.
    ///
    /// Returns a new record; the base is never mutated. An explicit value
    /// always wins over the configured one.
    pub fn with_overrides(
        &self,
        java_home: Option<&str>,
        maven_settings: Option<&str>,
    ) -> Config {
        let mut merged = self.clone();
        if let Some(java_home) = java_home {
            merged.java_home = java_home.to_string();
        }
        if let Some(settings) = maven_settings {
            merged.maven_settings = Some(settings.to_string());
        }
        merged
    }

    /// Require a usable `java_home`.
    pub fn ensure_java_home(&self) -> Result<()> {
        if self.java_home.is_empty() {
            return Err(JrunError::ConfigError(
                "java_home is not configured.\n\
                 Fix: pass --java-home, set JAVA_HOME, or add \"java_home\" to the config file."
                    .to_string(),
            ));
        }
        Ok(())
    }

    /// Require a usable `maven_home`.
    pub fn ensure_maven_home(&self) -> Result<()> {
        if self.maven_home.is_empty() {
            return Err(JrunError::ConfigError(
                "maven_home is not configured.\n\
                 Fix: set MAVEN_HOME or add \"maven_home\" to the config file."
                    .to_string(),
            ));
        }
        Ok(())
    }
}

/// Default location of the persisted config: `~/.jrun/config.json`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".jrun").join("config.json"))
}

/// Load the effective configuration.
///
/// Priority:
/// 1. Explicit path (a missing file warns and falls through rather than
///    failing, so a stale `--config` flag does not block the run)
/// 2. The persisted store at `~/.jrun/config.json`
/// 3. `JAVA_HOME` / `MAVEN_HOME` environment variables
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        if path.is_file() {
            return Config::load(path);
        }
        eprintln!(
            "Warning: config file '{}' not found, falling back to defaults",
            path.display()
        );
    }

    if let Some(path) = default_config_path()
        && path.is_file()
    {
        return Config::load(&path);
    }

    Ok(Config::from_env())
}
