// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Error types for snapshot loading and configuration

use std::path::PathBuf;

/// Failure to obtain a workspace snapshot
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// Snapshot file could not be read
    #[error("failed to read snapshot {}: {source}", .path.display())]
    Read {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Standard input could not be read
    #[error("failed to read snapshot from stdin: {0}")]
    Stdin(#[source] std::io::Error),

    /// Snapshot is not valid JSON in the expected shape
    #[error("malformed snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failure to assemble the effective configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist
    #[error("config file not found: {}", .0.display())]
    Missing(PathBuf),

    /// A source could not be read or merged
    #[error("invalid configuration: {0}")]
    Invalid(#[from] config::ConfigError),

    /// The merged configuration could not be rendered
    #[error("failed to render configuration: {0}")]
    Render(#[from] toml::ser::Error),

    /// No such configuration key
    #[error("unknown configuration key: {0}")]
    UnknownKey(String),
}
