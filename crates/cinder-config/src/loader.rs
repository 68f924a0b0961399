// SPDX-FileCopyrightText: 2026 Cinder Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./cinder.toml` > `~/.config/cinder/cinder.toml` > `/etc/cinder/cinder.toml`
//! with environment variable overrides via `CINDER_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::CinderConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/cinder/cinder.toml` (system-wide)
/// 3. `~/.config/cinder/cinder.toml` (user XDG config)
/// 4. `./cinder.toml` (local directory)
/// 5. `CINDER_*` environment variables
pub fn load_config() -> Result<CinderConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(CinderConfig::default()))
        .merge(Toml::file("/etc/cinder/cinder.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("cinder/cinder.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("cinder.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<CinderConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(CinderConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<CinderConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(CinderConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names. For example, `CINDER_STORAGE_DATABASE_PATH`
/// must map to `storage.database_path`, not `storage.database.path`.
fn env_provider() -> Env {
    Env::prefixed("CINDER_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: CINDER_REWIND_DAILY_FREE_LIMIT -> "rewind_daily_free_limit"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("app_", "app.", 1)
            .replacen("server_", "server.", 1)
            .replacen("storage_", "storage.", 1)
            .replacen("rewind_", "rewind.", 1);
        mapped.into()
    })
}
