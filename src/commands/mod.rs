// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Command implementations

pub mod completions;
pub mod config;
pub mod resolve;
pub mod summary;

use std::path::Path;

use crate::config::Config;
use crate::snapshot::SnapshotSource;

/// How command output is rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputOptions {
    /// Emit JSON instead of human-readable text
    pub json: bool,
    /// Colour human-readable text
    pub color: bool,
}

/// Snapshot named on the command line, or the one in the data directory
#[must_use]
pub fn snapshot_source(config: &Config, arg: Option<&str>) -> SnapshotSource {
    match arg {
        Some(arg) => SnapshotSource::from_arg(arg),
        None => SnapshotSource::File(config.default_snapshot_path()),
    }
}

/// Print JSON to stdout
pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// `true` when `path` is the default snapshot and does not exist yet
pub(crate) fn is_missing_default(config: &Config, path: &Path) -> bool {
    path == config.default_snapshot_path() && !path.exists()
}
