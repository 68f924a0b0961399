// SPDX-FileCopyrightText: 2026 Cinder Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Swipe intake: record a swipe, detect a mutual like, feed the history.
//!
//! Every accepted swipe ends with a `record` into the actor's in-memory
//! history; that is the only way entries get there, and the rewind path
//! consumes them from the other end.

use std::sync::Arc;

use cinder_core::types::SwipeAction;
use cinder_core::{CinderError, SwipeKind, SwipeStore};
use tracing::{debug, info};

use crate::history::ActionHistory;

/// What a swipe produced.
#[derive(Debug, Clone)]
pub struct SwipeOutcome {
    /// The recorded action, as appended to the actor's history.
    pub action: SwipeAction,
    /// Whether this swipe formed a match.
    pub matched: bool,
}

/// Accepts swipes from the transport layer.
pub struct SwipeIntake {
    store: Arc<dyn SwipeStore>,
    history: Arc<ActionHistory>,
}

impl SwipeIntake {
    pub fn new(store: Arc<dyn SwipeStore>, history: Arc<ActionHistory>) -> Self {
        Self { store, history }
    }

    /// Validate and record one swipe.
    ///
    /// A match forms when the swipe is a match-forming kind and the target
    /// already has a like recorded on the actor. The durable swipe row is
    /// written first; the history append comes last, so the cache never
    /// holds an action the store rejected.
    pub async fn swipe(
        &self,
        actor_id: &str,
        target_id: &str,
        kind: SwipeKind,
    ) -> Result<SwipeOutcome, CinderError> {
        if actor_id.trim().is_empty() || target_id.trim().is_empty() {
            return Err(CinderError::InvalidRequest(
                "user_id and target_id are required".to_string(),
            ));
        }
        if actor_id == target_id {
            return Err(CinderError::InvalidRequest(
                "cannot swipe on your own profile".to_string(),
            ));
        }
        if self.store.get_profile(target_id).await?.is_none() {
            return Err(CinderError::ProfileNotFound {
                id: target_id.to_string(),
            });
        }

        let action = SwipeAction::new(actor_id, target_id, kind);
        self.store.record_swipe(&action).await?;

        let mut matched = false;
        if kind.forms_match() && self.store.has_like(target_id, actor_id).await? {
            self.store.create_match(actor_id, target_id).await?;
            matched = true;
            info!(actor_id, target_id, "match formed");
        }

        self.history.record(action.clone());
        debug!(actor_id, target_id, kind = %kind, matched, "swipe recorded");

        Ok(SwipeOutcome { action, matched })
    }
}
