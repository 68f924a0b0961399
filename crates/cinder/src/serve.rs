// SPDX-FileCopyrightText: 2026 Cinder Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `cinder serve` command implementation.
//!
//! Wires SQLite storage, the in-memory action history, the rewind engine,
//! and the HTTP gateway together, then serves until interrupted.

use std::sync::Arc;

use cinder_config::model::CinderConfig;
use cinder_core::error::CinderError;
use cinder_gateway::{GatewayState, HealthState, ServerConfig};
use cinder_storage::SqliteStore;
use cinder_swipe::{ActionHistory, CompensationEngine, QuotaTracker, RewindService, SwipeIntake};
use tracing::info;

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the configured `app.log_level`
/// applies to everything.
fn init_tracing(level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Runs the `cinder serve` command.
pub async fn run_serve(config: CinderConfig) -> Result<(), CinderError> {
    init_tracing(&config.app.log_level);

    info!(name = %config.app.name, "starting cinder serve");

    // Initialize storage (opens the database and runs migrations).
    let store = Arc::new(SqliteStore::new(config.storage.clone()));
    store.initialize().await?;

    // The history is process-local and starts empty on every boot; swipes
    // from before this boot are not rewindable. That is accepted scope:
    // rewind is best-effort, recent-session only.
    let history = Arc::new(ActionHistory::new(config.rewind.history_capacity));
    info!(
        capacity = config.rewind.history_capacity,
        daily_free_limit = config.rewind.daily_free_limit,
        "rewind engine initialized"
    );

    let state = GatewayState {
        rewind: Arc::new(RewindService::new(
            history.clone(),
            QuotaTracker::new(store.clone(), config.rewind.daily_free_limit),
            CompensationEngine::new(store.clone()),
        )),
        intake: Arc::new(SwipeIntake::new(store.clone(), history)),
        health: HealthState::new(),
    };

    let server_config = ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
    };
    cinder_gateway::start_server(&server_config, state).await
}
