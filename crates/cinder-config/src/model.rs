// SPDX-FileCopyrightText: 2026 Cinder Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Cinder backend.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Cinder configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CinderConfig {
    /// Application identity and logging settings.
    #[serde(default)]
    pub app: AppConfig,

    /// HTTP server bind settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Storage backend settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Rewind engine settings.
    #[serde(default)]
    pub rewind: RewindConfig,
}

/// Application identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Display name of the service instance.
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_app_name() -> String {
    "cinder".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// HTTP server bind configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8700
}

/// Storage backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Enable WAL (Write-Ahead Logging) mode for SQLite.
    #[serde(default = "default_wal_mode")]
    pub wal_mode: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            wal_mode: default_wal_mode(),
        }
    }
}

fn default_database_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("cinder").join("cinder.db"))
        .and_then(|p| p.to_str().map(str::to_string))
        .unwrap_or_else(|| "cinder.db".to_string())
}

fn default_wal_mode() -> bool {
    true
}

/// Rewind engine configuration.
///
/// Quota days are UTC calendar days; the free allowance resets at
/// midnight UTC regardless of the actor's locale.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RewindConfig {
    /// Maximum swipe actions kept per actor in the in-memory history.
    /// Older entries are evicted once the history is full.
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,

    /// How many rewinds a non-premium actor gets per UTC day.
    #[serde(default = "default_daily_free_limit")]
    pub daily_free_limit: u32,
}

impl Default for RewindConfig {
    fn default() -> Self {
        Self {
            history_capacity: default_history_capacity(),
            daily_free_limit: default_daily_free_limit(),
        }
    }
}

fn default_history_capacity() -> usize {
    10
}

fn default_daily_free_limit() -> u32 {
    1
}
