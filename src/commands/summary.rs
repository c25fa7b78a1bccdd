// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Summary command - counts what a workspace snapshot offers

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use tracing::info;

use super::{print_json, snapshot_source, OutputOptions};
use crate::config::Config;
use crate::snapshot::{self, Summary};

/// Run the summary command
pub fn run(config: &Config, snapshot_arg: Option<&str>, output: OutputOptions) -> Result<()> {
    let source = snapshot_source(config, snapshot_arg);
    info!("Summarising {}", source);

    let workspace = snapshot::load(&source)
        .with_context(|| format!("Failed to load snapshot from {source}"))?;
    let summary = Summary::with_hidden_prefix(&workspace, &config.hidden_job_prefix);

    if output.json {
        return print_json(&summary);
    }

    if summary.loading {
        println!("Snapshot is still loading; counts are not final");
    }

    println!(
        "{} locations ({} failed, {} loading), {} repositories",
        summary.locations,
        summary.failed_locations,
        summary.loading_locations,
        summary.repos.len()
    );

    if summary.repos.is_empty() {
        println!("No repositories loaded");
        return Ok(());
    }

    println!();
    for repo in &summary.repos {
        let name = format!("{}@{}", repo.name, repo.location);
        if output.color {
            println!("  {}", name.bold());
        } else {
            println!("  {name}");
        }
        println!(
            "    jobs: {} visible, {} hidden; asset groups: {}",
            repo.visible_jobs, repo.hidden_jobs, repo.asset_groups
        );
    }

    println!();
    println!(
        "Total: {} visible jobs, {} asset groups",
        summary.visible_jobs(),
        summary.asset_groups()
    );

    Ok(())
}
