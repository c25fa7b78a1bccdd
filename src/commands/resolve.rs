// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Resolve command - decides where a fallback route should land

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use tracing::{info, warn};

use super::{is_missing_default, print_json, snapshot_source, OutputOptions};
use crate::config::Config;
use crate::resolver::{Decision, Resolution, Resolver};
use crate::snapshot::{self, SnapshotSource};
use crate::types::LoadStatus;

/// Run the resolve command
pub fn run(config: &Config, snapshot_arg: Option<&str>, explain: bool, output: OutputOptions) -> Result<()> {
    let source = snapshot_source(config, snapshot_arg);
    info!("Resolving fallback route from {}", source);

    let workspace = snapshot::load(&source).with_context(|| match &source {
        SnapshotSource::File(path) if is_missing_default(config, path) => format!(
            "No snapshot at {}. Pass a snapshot path or '-' to read stdin",
            path.display()
        ),
        _ => format!("Failed to load snapshot from {source}"),
    })?;

    let pending = workspace
        .location_entries
        .iter()
        .filter(|e| e.load_status == LoadStatus::Loading)
        .count();
    if !workspace.loading && pending > 0 {
        warn!(
            "Snapshot is marked settled but {} code location(s) still loading; the landing may change",
            pending
        );
    }

    let resolver = Resolver::from(config);
    let resolution = resolver.explain(&workspace);
    render(&resolution, explain, output)
}

/// Print a resolution
pub fn render(resolution: &Resolution, explain: bool, output: OutputOptions) -> Result<()> {
    if output.json {
        return if explain {
            print_json(resolution)
        } else {
            print_json(&resolution.decision)
        };
    }

    let line = match &resolution.decision {
        Decision::ShowLoading if output.color => format!("{}", "loading".yellow()),
        Decision::ShowLoading => "loading".to_string(),
        Decision::RedirectTo(path) if output.color => format!("redirect {}", path.green()),
        Decision::RedirectTo(path) => format!("redirect {path}"),
    };
    println!("{line}");

    if explain {
        if output.color {
            println!("{}", format!("rule: {}", resolution.rule).dimmed());
        } else {
            println!("rule: {}", resolution.rule);
        }
    }

    Ok(())
}
