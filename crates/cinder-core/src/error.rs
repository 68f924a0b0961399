// SPDX-FileCopyrightText: 2026 Cinder Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Cinder backend.

use thiserror::Error;

/// The primary error type used across Cinder's storage seam and services.
#[derive(Debug, Error)]
pub enum CinderError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Storage backend errors (database connection, query failure, serialization).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A profile referenced by a request does not exist.
    #[error("profile not found: {id}")]
    ProfileNotFound { id: String },

    /// A request failed validation before reaching any store.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl CinderError {
    /// Whether this error is the caller's fault (maps to a 400-class response).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::ProfileNotFound { .. } | Self::InvalidRequest(_)
        )
    }
}
