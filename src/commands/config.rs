// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Config command - prints the effective configuration

use anyhow::Result;

use crate::config::Config;

/// Print the effective configuration, or a single key
pub fn run(config: &Config, key: Option<&str>) -> Result<()> {
    match key {
        Some(key) => {
            tracing::debug!("Getting {}", key);
            println!("{}", config.get(key)?);
        }
        None => print!("{}", config.to_toml()?),
    }
    Ok(())
}
