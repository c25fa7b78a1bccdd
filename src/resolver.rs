// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Fallback landing resolver
//!
//! Picks where to send a user when no explicit route matched. Rules are
//! evaluated in a fixed order and the first match wins:
//!
//! 1. snapshot still loading: show a loading state
//! 2. locations configured but no repository loaded: `/locations`
//! 3. no visible jobs anywhere: first asset group found, if any
//! 4. exactly one visible job in exactly one repository: that job
//! 5. any visible job at all: `/overview`
//! 6. nothing usable: `/locations`

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::config::Config;
use crate::naming::{self, ASSET_JOB_PREFIX};
use crate::paths::{self, RepoAddress, LOCATIONS_PATH, OVERVIEW_PATH};
use crate::types::{Job, RepoOption, WorkspaceSnapshot};

/// Navigation decision handed to the host
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "path", rename_all = "snake_case")]
pub enum Decision {
    /// Workspace data is not settled yet
    ShowLoading,
    /// Navigate to this path
    RedirectTo(String),
}

impl Decision {
    /// Redirect target, if any
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::ShowLoading => None,
            Self::RedirectTo(path) => Some(path),
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShowLoading => write!(f, "loading"),
            Self::RedirectTo(path) => write!(f, "redirect {path}"),
        }
    }
}

/// The rule that produced a decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// Snapshot still loading
    StillLoading,
    /// Locations are configured but none produced a repository
    LocationsWithoutRepositories,
    /// No visible jobs, landed on the first asset group
    AssetGroupOnly,
    /// The workspace has exactly one visible job
    SingleVisibleJob,
    /// Several visible jobs or repositories, landed on the overview
    AmbiguousJobs,
    /// No usable target at all
    NothingUsable,
}

impl Rule {
    /// Stable snake_case name
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::StillLoading => "still_loading",
            Self::LocationsWithoutRepositories => "locations_without_repositories",
            Self::AssetGroupOnly => "asset_group_only",
            Self::SingleVisibleJob => "single_visible_job",
            Self::AmbiguousJobs => "ambiguous_jobs",
            Self::NothingUsable => "nothing_usable",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A decision together with the rule that fired
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// What the host should do
    pub decision: Decision,
    /// Why
    pub rule: Rule,
}

/// Resolver settings
///
/// The resolver keeps no state between calls; every evaluation starts from the
/// snapshot it is given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolver {
    /// Prefix under which the host mounts the UI
    pub base_path: String,
    /// Name prefix of implicit asset jobs
    pub hidden_job_prefix: String,
}

impl Default for Resolver {
    fn default() -> Self {
        Self {
            base_path: String::new(),
            hidden_job_prefix: ASSET_JOB_PREFIX.to_string(),
        }
    }
}

impl From<&Config> for Resolver {
    fn from(config: &Config) -> Self {
        Self {
            base_path: config.base_path.clone(),
            hidden_job_prefix: config.hidden_job_prefix.clone(),
        }
    }
}

impl Resolver {
    /// Resolver mounted under `base_path`
    #[must_use]
    pub fn with_base_path(base_path: &str) -> Self {
        Self {
            base_path: base_path.to_string(),
            ..Self::default()
        }
    }

    /// Decide where to land
    #[must_use]
    pub fn resolve(&self, snapshot: &WorkspaceSnapshot) -> Decision {
        self.explain(snapshot).decision
    }

    /// Decide where to land and report the rule that fired
    #[must_use]
    pub fn explain(&self, snapshot: &WorkspaceSnapshot) -> Resolution {
        let resolution = self.evaluate(snapshot);
        debug!(rule = %resolution.rule, decision = %resolution.decision, "resolved fallback route");
        resolution
    }

    fn evaluate(&self, snapshot: &WorkspaceSnapshot) -> Resolution {
        if snapshot.loading {
            return Resolution {
                decision: Decision::ShowLoading,
                rule: Rule::StillLoading,
            };
        }

        let repos_with_visible_jobs: Vec<&RepoOption> = snapshot
            .all_repos
            .iter()
            .filter(|option| self.visible_jobs(option).next().is_some())
            .collect();

        if !snapshot.location_entries.is_empty() && snapshot.all_repos.is_empty() {
            return self.redirect(LOCATIONS_PATH.to_string(), Rule::LocationsWithoutRepositories);
        }

        if repos_with_visible_jobs.is_empty() {
            let first_group = snapshot.all_repos.iter().find_map(|option| {
                option
                    .repository
                    .asset_groups
                    .first()
                    .map(|group| (option, group))
            });
            if let Some((option, group)) = first_group {
                let path = paths::asset_group_path(address_of(option), &group.group_name);
                return self.redirect(path, Rule::AssetGroupOnly);
            }
        }

        if let [option] = repos_with_visible_jobs.as_slice() {
            let visible: Vec<&Job> = self.visible_jobs(option).collect();
            if let [job] = visible.as_slice() {
                let path = paths::job_path(address_of(option), &job.name, job.is_job);
                return self.redirect(path, Rule::SingleVisibleJob);
            }
        }

        if !repos_with_visible_jobs.is_empty() {
            return self.redirect(OVERVIEW_PATH.to_string(), Rule::AmbiguousJobs);
        }

        self.redirect(LOCATIONS_PATH.to_string(), Rule::NothingUsable)
    }

    fn visible_jobs<'a>(&'a self, option: &'a RepoOption) -> impl Iterator<Item = &'a Job> + 'a {
        option
            .repository
            .pipelines
            .iter()
            .filter(move |job| !naming::is_hidden_with_prefix(&job.name, &self.hidden_job_prefix))
    }

    fn redirect(&self, path: String, rule: Rule) -> Resolution {
        Resolution {
            decision: Decision::RedirectTo(paths::with_base_path(&self.base_path, &path)),
            rule,
        }
    }
}

fn address_of(option: &RepoOption) -> RepoAddress<'_> {
    RepoAddress::new(&option.repository.name, &option.repository_location.name)
}

/// Decide where to land using the default resolver
#[must_use]
pub fn resolve(snapshot: &WorkspaceSnapshot) -> Decision {
    Resolver::default().resolve(snapshot)
}

/// [`resolve`], also reporting the rule that fired
#[must_use]
pub fn explain(snapshot: &WorkspaceSnapshot) -> Resolution {
    Resolver::default().explain(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LocationEntry;

    fn snapshot(repos: Vec<RepoOption>) -> WorkspaceSnapshot {
        WorkspaceSnapshot::loaded(repos)
    }

    fn redirect(path: &str) -> Decision {
        Decision::RedirectTo(path.to_string())
    }

    #[test]
    fn test_loading_wins() {
        let mut snap = snapshot(vec![RepoOption::new("repo", "loc").with_job("job1", true)]);
        snap.loading = true;

        let resolution = explain(&snap);
        assert_eq!(resolution.decision, Decision::ShowLoading);
        assert_eq!(resolution.rule, Rule::StillLoading);
    }

    #[test]
    fn test_locations_without_repos() {
        let snap = WorkspaceSnapshot {
            loading: false,
            location_entries: vec![LocationEntry::loaded("broken")],
            all_repos: vec![],
        };

        let resolution = explain(&snap);
        assert_eq!(resolution.decision, redirect("/locations"));
        assert_eq!(resolution.rule, Rule::LocationsWithoutRepositories);
    }

    #[test]
    fn test_empty_workspace() {
        let resolution = explain(&WorkspaceSnapshot::default());
        assert_eq!(resolution.decision, redirect("/locations"));
        assert_eq!(resolution.rule, Rule::NothingUsable);
    }

    #[test]
    fn test_asset_group_only() {
        let snap = snapshot(vec![RepoOption::new("repo", "loc").with_asset_group("g1")]);

        let resolution = explain(&snap);
        assert_eq!(resolution.decision, redirect("/workspace/loc/repo/asset-groups/g1"));
        assert_eq!(resolution.rule, Rule::AssetGroupOnly);
    }

    #[test]
    fn test_first_repo_with_asset_group_is_chosen() {
        let snap = snapshot(vec![
            RepoOption::new("empty", "loc"),
            RepoOption::new("second", "loc").with_asset_group("first").with_asset_group("other"),
            RepoOption::new("third", "loc").with_asset_group("later"),
        ]);

        assert_eq!(resolve(&snap), redirect("/workspace/loc/second/asset-groups/first"));
    }

    #[test]
    fn test_single_visible_job() {
        let snap = snapshot(vec![RepoOption::new("repo", "loc").with_job("job1", true)]);

        let resolution = explain(&snap);
        assert_eq!(resolution.decision, redirect("/workspace/loc/repo/jobs/job1"));
        assert_eq!(resolution.rule, Rule::SingleVisibleJob);
    }

    #[test]
    fn test_single_legacy_pipeline() {
        let snap = snapshot(vec![RepoOption::new("repo", "loc").with_job("pipe", false)]);
        assert_eq!(resolve(&snap), redirect("/workspace/loc/repo/pipelines/pipe"));
    }

    #[test]
    fn test_single_job_beats_asset_groups() {
        let snap = snapshot(vec![
            RepoOption::new("repo", "loc").with_job("job1", true).with_asset_group("g1"),
        ]);
        assert_eq!(resolve(&snap), redirect("/workspace/loc/repo/jobs/job1"));
    }

    #[test]
    fn test_hidden_job_does_not_count() {
        let snap = snapshot(vec![
            RepoOption::new("repo", "loc")
                .with_job("__ASSET_JOB", true)
                .with_job("job1", true),
        ]);
        assert_eq!(resolve(&snap), redirect("/workspace/loc/repo/jobs/job1"));

        let only_hidden = snapshot(vec![
            RepoOption::new("repo", "loc")
                .with_job("__ASSET_JOB", true)
                .with_asset_group("default"),
        ]);
        assert_eq!(resolve(&only_hidden), redirect("/workspace/loc/repo/asset-groups/default"));
    }

    #[test]
    fn test_multiple_jobs_in_one_repo() {
        let snap = snapshot(vec![
            RepoOption::new("repo", "loc").with_job("a", true).with_job("b", true),
        ]);

        let resolution = explain(&snap);
        assert_eq!(resolution.decision, redirect("/overview"));
        assert_eq!(resolution.rule, Rule::AmbiguousJobs);
    }

    #[test]
    fn test_multiple_repos_with_one_job_each() {
        let snap = snapshot(vec![
            RepoOption::new("one", "loc").with_job("a", true),
            RepoOption::new("two", "loc").with_job("b", true),
        ]);
        assert_eq!(resolve(&snap), redirect("/overview"));
    }

    #[test]
    fn test_repos_without_jobs_or_groups() {
        let snap = snapshot(vec![RepoOption::new("bare", "loc"), RepoOption::new("other", "loc")]);

        let resolution = explain(&snap);
        assert_eq!(resolution.decision, redirect("/locations"));
        assert_eq!(resolution.rule, Rule::NothingUsable);
    }

    #[test]
    fn test_base_path_prefixes_redirects_only() {
        let resolver = Resolver::with_base_path("/dagster/");
        let snap = snapshot(vec![RepoOption::new("repo", "loc").with_job("job1", true)]);
        assert_eq!(resolver.resolve(&snap), redirect("/dagster/workspace/loc/repo/jobs/job1"));

        let loading = WorkspaceSnapshot {
            loading: true,
            ..WorkspaceSnapshot::default()
        };
        assert_eq!(resolver.resolve(&loading), Decision::ShowLoading);
    }

    #[test]
    fn test_custom_hidden_prefix() {
        let resolver = Resolver {
            hidden_job_prefix: "_sys".into(),
            ..Resolver::default()
        };
        let snap = snapshot(vec![
            RepoOption::new("repo", "loc")
                .with_job("_sys_sensor", true)
                .with_job("__ASSET_JOB", true),
        ]);
        assert_eq!(resolver.resolve(&snap), redirect("/workspace/loc/repo/jobs/__ASSET_JOB"));
    }

    #[test]
    fn test_decision_display() {
        assert_eq!(Decision::ShowLoading.to_string(), "loading");
        assert_eq!(redirect("/overview").to_string(), "redirect /overview");
        assert_eq!(redirect("/overview").path(), Some("/overview"));
        assert_eq!(Decision::ShowLoading.path(), None);
    }
}
