// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Workspace snapshot loading and summaries

use serde::Serialize;
use std::fmt;
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::error::SnapshotError;
use crate::naming::{self, ASSET_JOB_PREFIX};
use crate::types::{LoadStatus, WorkspaceSnapshot};

/// Where a snapshot comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotSource {
    /// A JSON file
    File(PathBuf),
    /// JSON on standard input
    Stdin,
}

impl SnapshotSource {
    /// Parse a CLI argument; `-` means stdin
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(arg))
        }
    }
}

impl fmt::Display for SnapshotSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Stdin => write!(f, "<stdin>"),
        }
    }
}

/// Read and parse a snapshot
pub fn load(source: &SnapshotSource) -> Result<WorkspaceSnapshot, SnapshotError> {
    let content = match source {
        SnapshotSource::File(path) => fs::read_to_string(path).map_err(|source| SnapshotError::Read {
            path: path.clone(),
            source,
        })?,
        SnapshotSource::Stdin => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(SnapshotError::Stdin)?;
            buf
        }
    };

    let snapshot = WorkspaceSnapshot::from_json(&content)?;
    debug!(
        %source,
        loading = snapshot.loading,
        locations = snapshot.location_entries.len(),
        repos = snapshot.all_repos.len(),
        "loaded workspace snapshot"
    );

    for entry in &snapshot.location_entries {
        if let Some(error) = &entry.error {
            warn!(location = %entry.name, "code location failed to load: {}", error);
        }
    }

    Ok(snapshot)
}

/// Per-repository counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoSummary {
    /// Repository name
    pub name: String,
    /// Serving location
    pub location: String,
    /// Jobs users can see
    pub visible_jobs: usize,
    /// Implicit asset jobs
    pub hidden_jobs: usize,
    /// Asset groups
    pub asset_groups: usize,
}

/// Counts over a whole snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Snapshot still loading
    pub loading: bool,
    /// Configured locations
    pub locations: usize,
    /// Locations that reported a load error
    pub failed_locations: usize,
    /// Locations still loading
    pub loading_locations: usize,
    /// Per-repository breakdown, in snapshot order
    pub repos: Vec<RepoSummary>,
}

impl Summary {
    /// Summarise a snapshot under the default naming convention
    #[must_use]
    pub fn of(snapshot: &WorkspaceSnapshot) -> Self {
        Self::with_hidden_prefix(snapshot, ASSET_JOB_PREFIX)
    }

    /// Summarise a snapshot, hiding jobs whose name starts with `hidden_prefix`
    #[must_use]
    pub fn with_hidden_prefix(snapshot: &WorkspaceSnapshot, hidden_prefix: &str) -> Self {
        let repos = snapshot
            .all_repos
            .iter()
            .map(|option| {
                let repo = &option.repository;
                let visible_jobs = repo
                    .pipelines
                    .iter()
                    .filter(|job| !naming::is_hidden_with_prefix(&job.name, hidden_prefix))
                    .count();
                RepoSummary {
                    name: repo.name.clone(),
                    location: option.repository_location.name.clone(),
                    visible_jobs,
                    hidden_jobs: repo.pipelines.len() - visible_jobs,
                    asset_groups: repo.asset_groups.len(),
                }
            })
            .collect();

        Self {
            loading: snapshot.loading,
            locations: snapshot.location_entries.len(),
            failed_locations: snapshot.location_entries.iter().filter(|e| e.is_failed()).count(),
            loading_locations: snapshot
                .location_entries
                .iter()
                .filter(|e| e.load_status == LoadStatus::Loading)
                .count(),
            repos,
        }
    }

    /// Visible jobs across all repositories
    #[must_use]
    pub fn visible_jobs(&self) -> usize {
        self.repos.iter().map(|r| r.visible_jobs).sum()
    }

    /// Asset groups across all repositories
    #[must_use]
    pub fn asset_groups(&self) -> usize {
        self.repos.iter().map(|r| r.asset_groups).sum()
    }
}
