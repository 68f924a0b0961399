// SPDX-FileCopyrightText: 2026 Cinder Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Compensating writes that reverse a swipe's durable effects.
//!
//! No multi-row transaction spans the swipe delete and the match delete;
//! the store only guarantees atomic single-row deletes. Both deletes are
//! idempotent (deleting an absent row is a counted no-op), so a partially
//! completed reversal is safe to retry from the top.

use std::sync::Arc;

use cinder_core::types::{Profile, SwipeAction};
use cinder_core::{CinderError, SwipeStore};
use tracing::debug;

use crate::rewind::RewindError;

/// Reverses a recorded swipe against the durable store.
pub struct CompensationEngine {
    store: Arc<dyn SwipeStore>,
}

impl CompensationEngine {
    pub fn new(store: Arc<dyn SwipeStore>) -> Self {
        Self { store }
    }

    /// Undo the durable effects of `action` and return the target's
    /// profile for re-display.
    ///
    /// The profile is fetched before any delete: if the target has
    /// vanished there is nothing to re-show, and aborting here leaves
    /// durable state untouched. Then the swipe row is deleted, and for
    /// match-forming kinds any match row linking the pair -- in either
    /// stored orientation -- is cleared as well.
    pub async fn reverse(&self, action: &SwipeAction) -> Result<Profile, RewindError> {
        let profile = self
            .store
            .get_profile(&action.target_id)
            .await
            .map_err(compensation_failed)?
            .ok_or_else(|| {
                compensation_failed(CinderError::ProfileNotFound {
                    id: action.target_id.clone(),
                })
            })?;

        let swipe_rows = self
            .store
            .delete_swipe(&action.actor_id, &action.target_id)
            .await
            .map_err(compensation_failed)?;

        if action.kind.forms_match() {
            let match_rows = self
                .store
                .delete_match_between(&action.actor_id, &action.target_id)
                .await
                .map_err(compensation_failed)?;
            debug!(
                actor_id = %action.actor_id,
                target_id = %action.target_id,
                swipe_rows,
                match_rows,
                "swipe and match reversed"
            );
        } else {
            debug!(
                actor_id = %action.actor_id,
                target_id = %action.target_id,
                swipe_rows,
                "swipe reversed"
            );
        }

        Ok(profile)
    }
}

fn compensation_failed(source: CinderError) -> RewindError {
    RewindError::CompensationFailed { source }
}
