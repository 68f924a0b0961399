// SPDX-FileCopyrightText: 2026 Cinder Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Daily rewind allowance for non-premium actors.
//!
//! Quota days are UTC calendar days (`%Y-%m-%d`): the free allowance
//! resets at midnight UTC regardless of the actor's locale. The tracker
//! never caches an answer -- every check reads the ledger, so the limit
//! holds even across concurrent requests and process restarts.

use std::sync::Arc;

use cinder_core::SwipeStore;
use tracing::debug;

use crate::rewind::RewindError;

/// Gate on the rewind usage ledger.
pub struct QuotaTracker {
    store: Arc<dyn SwipeStore>,
    daily_limit: u32,
}

impl QuotaTracker {
    /// Create a tracker allowing `daily_limit` rewinds per UTC day for
    /// non-premium actors.
    pub fn new(store: Arc<dyn SwipeStore>, daily_limit: u32) -> Self {
        Self { store, daily_limit }
    }

    /// The configured per-day allowance for non-premium actors.
    pub fn daily_limit(&self) -> u32 {
        self.daily_limit
    }

    /// Whether the actor may rewind right now.
    ///
    /// Premium actors are always allowed, with no store read. Non-premium
    /// actors are allowed while today's ledger count is below the limit.
    /// A store failure fails closed: the caller receives
    /// [`RewindError::QuotaUnavailable`] instead of an allowance.
    pub async fn remaining_today(
        &self,
        actor_id: &str,
        is_premium: bool,
    ) -> Result<bool, RewindError> {
        if is_premium {
            return Ok(true);
        }
        let today = today_utc();
        let used = self
            .store
            .count_rewinds_on(actor_id, &today)
            .await
            .map_err(|source| RewindError::QuotaUnavailable { source })?;
        debug!(actor_id, %today, used, limit = self.daily_limit, "rewind quota checked");
        Ok(used < i64::from(self.daily_limit))
    }

    /// Append one usage row for (actor, today, now).
    ///
    /// Called only after the rest of the rewind has durably committed, so
    /// a failed rewind never consumes quota. Failures propagate; whether
    /// they fail the overall operation is the caller's call.
    pub async fn record_usage(&self, actor_id: &str) -> Result<(), RewindError> {
        let today = today_utc();
        let used_at = chrono::Utc::now()
            .format("%Y-%m-%dT%H:%M:%S%.3fZ")
            .to_string();
        self.store
            .record_rewind(actor_id, &today, &used_at)
            .await
            .map_err(|source| RewindError::QuotaUnavailable { source })
    }
}

/// Today's UTC calendar day as `%Y-%m-%d`.
fn today_utc() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}
