// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Job naming conventions
//!
//! The orchestration framework wraps ungrouped assets in implicit jobs whose
//! names start with a reserved prefix. Those jobs exist for bookkeeping only
//! and are never offered to users as landing targets.

/// Reserved name prefix of implicit asset jobs (`__ASSET_JOB`, `__ASSET_JOB_0`, ...)
pub const ASSET_JOB_PREFIX: &str = "__ASSET_JOB";

/// Is `name` an implicit job generated to host ungrouped assets?
#[must_use]
pub fn is_hidden_asset_group_job(name: &str) -> bool {
    is_hidden_with_prefix(name, ASSET_JOB_PREFIX)
}

/// Is `name` a job users should see?
#[must_use]
pub fn is_visible_job(name: &str) -> bool {
    !is_hidden_asset_group_job(name)
}

/// Same as [`is_hidden_asset_group_job`] with a caller-supplied prefix.
///
/// An empty prefix hides nothing.
#[must_use]
pub fn is_hidden_with_prefix(name: &str, prefix: &str) -> bool {
    !prefix.is_empty() && name.starts_with(prefix)
}
