// SPDX-FileCopyrightText: 2026 Cinder Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-actor bounded in-memory swipe history.
//!
//! The history is a projection of recent durable swipe rows, kept so the
//! rewind path can find "the last thing this actor did" without a store
//! read. It is never the source of truth: a process restart empties it,
//! which makes earlier swipes non-rewindable by design.
//!
//! All mutation for one actor goes through that actor's DashMap entry, so
//! concurrent poppers cannot both receive the same action: one wins, the
//! other observes an empty or shortened history.

use std::collections::VecDeque;

use dashmap::DashMap;

use cinder_core::SwipeAction;

/// Process-wide map of per-actor swipe histories, bounded per actor.
pub struct ActionHistory {
    capacity: usize,
    entries: DashMap<String, VecDeque<SwipeAction>>,
}

impl ActionHistory {
    /// Create a history that keeps at most `capacity` actions per actor.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: DashMap::new(),
        }
    }

    /// Append an action to its actor's history, evicting the oldest entry
    /// once the history exceeds capacity. Unseen actors get a fresh
    /// history. Never fails.
    pub fn record(&self, action: SwipeAction) {
        let mut history = self.entries.entry(action.actor_id.clone()).or_default();
        history.push_back(action);
        while history.len() > self.capacity {
            history.pop_front();
        }
    }

    /// The most recent action for an actor, without removing it.
    pub fn peek_most_recent(&self, actor_id: &str) -> Option<SwipeAction> {
        self.entries
            .get(actor_id)
            .and_then(|history| history.back().cloned())
    }

    /// Remove and return the most recent action for an actor.
    pub fn pop_most_recent(&self, actor_id: &str) -> Option<SwipeAction> {
        self.entries
            .get_mut(actor_id)
            .and_then(|mut history| history.pop_back())
    }

    /// Remove the newest entry equal to `action` from the actor's history.
    ///
    /// The rewind path uses this instead of a blind pop: if the actor
    /// swiped again while their previous action was being reversed, the
    /// reversed action is no longer at the head and must be removed from
    /// wherever it sits. Returns whether an entry was removed.
    pub fn remove(&self, actor_id: &str, action: &SwipeAction) -> bool {
        match self.entries.get_mut(actor_id) {
            Some(mut history) => match history.iter().rposition(|a| a == action) {
                Some(pos) => {
                    history.remove(pos);
                    true
                }
                None => false,
            },
            None => false,
        }
    }

    /// Number of actions currently held for an actor.
    pub fn len(&self, actor_id: &str) -> usize {
        self.entries.get(actor_id).map_or(0, |history| history.len())
    }

    /// Whether the actor has no recorded actions.
    pub fn is_empty(&self, actor_id: &str) -> bool {
        self.len(actor_id) == 0
    }
}
