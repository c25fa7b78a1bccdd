// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Path grammar of the workspace UI
//!
//! Every dynamic segment is percent-encoded, so names containing `/`, `@` or
//! spaces still produce a single path segment.

/// Code location list and load diagnostics
pub const LOCATIONS_PATH: &str = "/locations";

/// Instance-wide overview
pub const OVERVIEW_PATH: &str = "/overview";

/// Address of a repository: its name plus the location that served it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepoAddress<'a> {
    /// Repository name
    pub name: &'a str,
    /// Code location name
    pub location: &'a str,
}

impl<'a> RepoAddress<'a> {
    /// Create an address
    #[must_use]
    pub fn new(name: &'a str, location: &'a str) -> Self {
        Self { name, location }
    }

    /// `/workspace/<location>/<repo>` followed by `tail`
    #[must_use]
    pub fn workspace_path(&self, tail: &str) -> String {
        format!(
            "/workspace/{}/{}{}",
            urlencoding::encode(self.location),
            urlencoding::encode(self.name),
            tail
        )
    }
}

/// Detail page of an asset group
#[must_use]
pub fn asset_group_path(address: RepoAddress<'_>, group_name: &str) -> String {
    address.workspace_path(&format!("/asset-groups/{}", urlencoding::encode(group_name)))
}

/// Detail page of a job, or of a legacy pipeline when `is_job` is false
#[must_use]
pub fn job_path(address: RepoAddress<'_>, job_name: &str, is_job: bool) -> String {
    let kind = if is_job { "jobs" } else { "pipelines" };
    address.workspace_path(&format!("/{}/{}", kind, urlencoding::encode(job_name)))
}

/// Normalise a mount prefix to `/prefix` form; `""` and `"/"` mean no prefix
#[must_use]
pub fn normalize_base_path(base: &str) -> String {
    let trimmed = base.trim_matches(|c: char| c == '/' || c.is_whitespace());
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

/// Mount `path` under `base`
#[must_use]
pub fn with_base_path(base: &str, path: &str) -> String {
    format!("{}{}", normalize_base_path(base), path)
}
