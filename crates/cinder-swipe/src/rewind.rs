// SPDX-FileCopyrightText: 2026 Cinder Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rewind orchestration: validate, gate on quota, compensate, consume.
//!
//! Undo runs per-actor serialized. The in-memory entry is removed only
//! after the compensating deletes commit, so a failure or a dropped
//! request mid-undo leaves the action in the history and a retry simply
//! re-issues idempotent deletes. The price of that ordering -- a
//! concurrent retry could re-compensate the same action -- is absorbed by
//! the per-actor lock and the idempotence of the deletes.

use std::sync::Arc;

use cinder_core::types::Profile;
use cinder_core::CinderError;
use dashmap::DashMap;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

use crate::compensation::CompensationEngine;
use crate::history::ActionHistory;
use crate::quota::QuotaTracker;

/// Why a rewind did not complete.
///
/// The Display strings double as the user-facing response messages, so
/// transport code maps errors without re-wording them. `EmptyHistory` and
/// `QuotaExhausted` are expected rejections; the other two are dependency
/// failures.
#[derive(Debug, Error)]
pub enum RewindError {
    /// The actor has no recorded swipe in the process-local history.
    #[error("no swipes to undo")]
    EmptyHistory,

    /// A non-premium actor has used up today's allowance.
    #[error("Free users get {limit} rewind per day. Upgrade for unlimited!")]
    QuotaExhausted { limit: u32 },

    /// The quota ledger could not be read or written.
    #[error("rewind quota store unavailable")]
    QuotaUnavailable {
        #[source]
        source: CinderError,
    },

    /// The compensating deletes could not be confirmed.
    #[error("undo failed")]
    CompensationFailed {
        #[source]
        source: CinderError,
    },
}

impl RewindError {
    /// Expected, user-facing rejections (400-class). Everything else is a
    /// dependency failure (500-class).
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::EmptyHistory | Self::QuotaExhausted { .. })
    }
}

/// Orchestrates undo across the history cache, the quota tracker, and the
/// compensation engine.
pub struct RewindService {
    history: Arc<ActionHistory>,
    quota: QuotaTracker,
    compensation: CompensationEngine,
    actor_locks: DashMap<String, Arc<Mutex<()>>>,
}

impl RewindService {
    pub fn new(
        history: Arc<ActionHistory>,
        quota: QuotaTracker,
        compensation: CompensationEngine,
    ) -> Self {
        Self {
            history,
            quota,
            compensation,
            actor_locks: DashMap::new(),
        }
    }

    /// Reverse the actor's most recent swipe and return the restored
    /// profile for re-display.
    ///
    /// Steps, under the actor's lock:
    /// 1. peek the most recent action; absent -> `EmptyHistory`;
    /// 2. non-premium: recheck the quota (never cached) ->
    ///    `QuotaExhausted` or, on ledger failure, `QuotaUnavailable`
    ///    (fail closed);
    /// 3. compensate; failure -> `CompensationFailed`, the history entry
    ///    stays so a retry can find it;
    /// 4. remove the compensated entry from the history;
    /// 5. non-premium: append a usage row. A failure here is logged as an
    ///    operator concern but does not fail the undo -- the durable
    ///    deletes already committed.
    pub async fn undo(&self, actor_id: &str, is_premium: bool) -> Result<Profile, RewindError> {
        let lock = self
            .actor_locks
            .entry(actor_id.to_string())
            .or_default()
            .clone();
        let _guard = lock.lock().await;

        let Some(action) = self.history.peek_most_recent(actor_id) else {
            return Err(RewindError::EmptyHistory);
        };

        if !self.quota.remaining_today(actor_id, is_premium).await? {
            return Err(RewindError::QuotaExhausted {
                limit: self.quota.daily_limit(),
            });
        }

        let profile = self.compensation.reverse(&action).await?;

        if !self.history.remove(actor_id, &action) {
            // Capacity pressure evicted the entry while we were
            // compensating. The durable reversal committed, so this is
            // still a successful undo.
            warn!(actor_id, "compensated action was no longer in history");
        }

        if !is_premium {
            if let Err(e) = self.quota.record_usage(actor_id).await {
                error!(
                    actor_id,
                    error = %e,
                    "rewind committed but quota usage was not recorded"
                );
            }
        }

        info!(
            actor_id,
            target_id = %action.target_id,
            kind = %action.kind,
            "swipe undone"
        );
        Ok(profile)
    }
}
