// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Configuration management
//!
//! Sources, lowest precedence first: built-in defaults, a TOML file, then
//! `WAYFINDER_*` environment variables.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::naming::ASSET_JOB_PREFIX;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "WAYFINDER";

/// Name of the snapshot file looked up in the data directory
pub const SNAPSHOT_FILE: &str = "workspace.json";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the default workspace snapshot
    pub data_dir: PathBuf,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Prefix under which the host mounts the UI
    pub base_path: String,
    /// Name prefix of implicit asset jobs
    pub hidden_job_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: project_dirs()
                .map(|d| d.data_dir().to_path_buf())
                .unwrap_or_else(|| PathBuf::from(".wayfinder")),
            log_level: "info".to_string(),
            base_path: String::new(),
            hidden_job_prefix: ASSET_JOB_PREFIX.to_string(),
        }
    }
}

impl Config {
    /// Snapshot read when no explicit source is given
    #[must_use]
    pub fn default_snapshot_path(&self) -> PathBuf {
        self.data_dir.join(SNAPSHOT_FILE)
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Value of a single key, rendered as plain text
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        match key {
            "data_dir" => Ok(self.data_dir.display().to_string()),
            "log_level" => Ok(self.log_level.clone()),
            "base_path" => Ok(self.base_path.clone()),
            "hidden_job_prefix" => Ok(self.hidden_job_prefix.clone()),
            other => Err(ConfigError::UnknownKey(other.to_string())),
        }
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("org", "hyperpolymath", "wayfinder")
}

/// Config file read when none is given explicitly
#[must_use]
pub fn default_config_file() -> Option<PathBuf> {
    project_dirs().map(|d| d.config_dir().join("config.toml"))
}

/// Load configuration
///
/// An explicit `path` must exist; the default config file is optional.
pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
    let mut builder = config::Config::builder();

    match path {
        Some(path) => {
            if !path.is_file() {
                return Err(ConfigError::Missing(path.to_path_buf()));
            }
            builder = builder.add_source(
                config::File::from(path.to_path_buf()).format(config::FileFormat::Toml),
            );
        }
        None => {
            if let Some(default) = default_config_file() {
                builder = builder.add_source(
                    config::File::from(default)
                        .format(config::FileFormat::Toml)
                        .required(false),
                );
            }
        }
    }

    let settings = builder
        .add_source(config::Environment::with_prefix(ENV_PREFIX))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.base_path, "");
        assert_eq!(config.hidden_job_prefix, "__ASSET_JOB");
        assert!(config.default_snapshot_path().ends_with("workspace.json"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("wayfinder.toml");
        std::fs::write(&path, "base_path = \"/ui\"\nlog_level = \"debug\"\n").unwrap();

        let config = load(Some(&path)).unwrap();

        assert_eq!(config.base_path, "/ui");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.hidden_job_prefix, "__ASSET_JOB");
    }

    #[test]
    fn test_missing_explicit_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.toml");

        let err = load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Missing(_)));
    }

    #[test]
    fn test_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "base_path = [").unwrap();

        let err = load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_get_keys() {
        let config = Config {
            base_path: "/ui".into(),
            ..Config::default()
        };
        assert_eq!(config.get("base_path").unwrap(), "/ui");
        assert_eq!(config.get("hidden_job_prefix").unwrap(), "__ASSET_JOB");
        assert!(matches!(config.get("colour"), Err(ConfigError::UnknownKey(_))));
    }

    #[test]
    fn test_to_toml() {
        let rendered = Config::default().to_toml().unwrap();
        assert!(rendered.contains("log_level = \"info\""));
        assert!(rendered.contains("hidden_job_prefix = \"__ASSET_JOB\""));
    }
}
