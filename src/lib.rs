// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Wayfinder library - fallback landing resolver for orchestration workspaces
//!
//! When no explicit route matches, a workspace UI still has to land the user
//! somewhere useful. This crate holds the pure decision procedure that picks
//! that landing spot from a snapshot of loaded code locations, plus the
//! snapshot loading, path grammar and configuration around it.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod commands;
pub mod config;
pub mod error;
pub mod naming;
pub mod paths;
pub mod resolver;
pub mod snapshot;

pub use resolver::{explain, resolve, Decision, Resolution, Resolver, Rule};

/// Workspace data model as served by the workspace data-fetching layer
pub mod types {
    use serde::{Deserialize, Serialize};

    use crate::naming;

    // =========================================================================
    // Code Locations
    // =========================================================================

    /// Load state of a code location
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    pub enum LoadStatus {
        /// Still being (re)loaded by the host
        Loading,
        /// Load finished, successfully or not
        #[default]
        Loaded,
    }

    /// One configured code location, whether it loaded or not
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct LocationEntry {
        /// Location name
        #[serde(default)]
        pub name: String,
        /// Load state
        #[serde(default)]
        pub load_status: LoadStatus,
        /// Load error message, if the location failed to load
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub error: Option<String>,
    }

    impl LocationEntry {
        /// A successfully loaded location
        #[must_use]
        pub fn loaded(name: &str) -> Self {
            Self {
                name: name.into(),
                load_status: LoadStatus::Loaded,
                error: None,
            }
        }

        /// Did this location fail to load?
        #[must_use]
        pub fn is_failed(&self) -> bool {
            self.error.is_some()
        }
    }

    /// Reference to the code location that served a repository
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct LocationRef {
        /// Location name
        pub name: String,
    }

    // =========================================================================
    // Repositories
    // =========================================================================

    /// A runnable job (or legacy pipeline) inside a repository
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Job {
        /// Job name
        pub name: String,
        /// `true` for jobs, `false` for legacy pipelines
        #[serde(default = "default_is_job")]
        pub is_job: bool,
    }

    fn default_is_job() -> bool {
        true
    }

    impl Job {
        /// Whether this job shows up to users under the default naming convention
        #[must_use]
        pub fn is_visible(&self) -> bool {
            naming::is_visible_job(&self.name)
        }
    }

    /// A named grouping of software-defined assets
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct AssetGroup {
        /// Group name
        pub group_name: String,
    }

    /// A named collection of jobs and asset groups
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Repository {
        /// Repository name
        pub name: String,
        /// Jobs and pipelines, including hidden asset jobs
        #[serde(default)]
        pub pipelines: Vec<Job>,
        /// Asset groups
        #[serde(default)]
        pub asset_groups: Vec<AssetGroup>,
    }

    impl Repository {
        /// Jobs that pass the default visibility predicate, in declaration order
        pub fn visible_jobs(&self) -> impl Iterator<Item = &Job> + '_ {
            self.pipelines.iter().filter(|job| job.is_visible())
        }
    }

    /// A loaded repository bound to the location that served it
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RepoOption {
        /// The repository
        pub repository: Repository,
        /// Where it was loaded from
        pub repository_location: LocationRef,
    }

    impl RepoOption {
        /// Create a repo option for `repo_name` served by `location_name`
        #[must_use]
        pub fn new(repo_name: &str, location_name: &str) -> Self {
            Self {
                repository: Repository {
                    name: repo_name.into(),
                    ..Repository::default()
                },
                repository_location: LocationRef {
                    name: location_name.into(),
                },
            }
        }

        /// Builder: append a job
        #[must_use]
        pub fn with_job(mut self, name: &str, is_job: bool) -> Self {
            self.repository.pipelines.push(Job {
                name: name.into(),
                is_job,
            });
            self
        }

        /// Builder: append an asset group
        #[must_use]
        pub fn with_asset_group(mut self, group_name: &str) -> Self {
            self.repository.asset_groups.push(AssetGroup {
                group_name: group_name.into(),
            });
            self
        }
    }

    // =========================================================================
    // Snapshot
    // =========================================================================

    /// Current known state of every configured code location
    ///
    /// While `loading` is set, the other fields are not final and must not
    /// drive any decision.
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct WorkspaceSnapshot {
        /// Is the snapshot being (re)computed?
        #[serde(default)]
        pub loading: bool,
        /// Every configured code location
        #[serde(default)]
        pub location_entries: Vec<LocationEntry>,
        /// Every loaded repository
        #[serde(default)]
        pub all_repos: Vec<RepoOption>,
    }

    impl WorkspaceSnapshot {
        /// Parse a snapshot from its JSON wire form
        pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
            serde_json::from_str(json)
        }

        /// A settled snapshot with one loaded location per distinct repo location
        #[must_use]
        pub fn loaded(all_repos: Vec<RepoOption>) -> Self {
            let mut location_entries: Vec<LocationEntry> = Vec::new();
            for repo in &all_repos {
                let name = &repo.repository_location.name;
                if !location_entries.iter().any(|e| &e.name == name) {
                    location_entries.push(LocationEntry::loaded(name));
                }
            }
            Self {
                loading: false,
                location_entries,
                all_repos,
            }
        }
    }
}

/// Prelude for common imports
pub mod prelude {
    pub use crate::resolver::{Decision, Resolver};
    pub use crate::types::*;
    pub use anyhow::{Context, Result};
}
