// SPDX-FileCopyrightText: 2026 Roster Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./roster.toml` > `~/.config/roster/roster.toml` > `/etc/roster/roster.toml`
//! with environment variable overrides via `ROSTER_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::RosterConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/roster/roster.toml`
/// 3. `~/.config/roster/roster.toml`
/// 4. `./roster.toml`
/// 5. `ROSTER_*` environment variables
pub fn load_config() -> Result<RosterConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string over the defaults (no files, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<RosterConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(RosterConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<RosterConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(RosterConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for config loading, before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(RosterConfig::default()))
        .merge(Toml::file("/etc/roster/roster.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("roster/roster.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("roster.toml"))
        .merge(env_provider())
}

/// Environment provider with explicit section mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` because key names contain
/// underscores: `ROSTER_STORAGE_DATABASE_PATH` must become
/// `storage.database_path`, not `storage.database.path`.
fn env_provider() -> Env {
    Env::prefixed("ROSTER_").map(|key| {
        let mapped = key
            .as_str()
            .replacen("server_", "server.", 1)
            .replacen("storage_", "storage.", 1)
            .replacen("pagination_", "pagination.", 1);
        mapped.into()
    })
}
