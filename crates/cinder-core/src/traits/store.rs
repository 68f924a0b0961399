// SPDX-FileCopyrightText: 2026 Cinder Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Storage seam for the durable relational store.
//!
//! The swipe and rewind services only ever talk to the store through this
//! trait, so tests can substitute an in-memory double and the engine does
//! not care whether the backend is SQLite or something else.

use async_trait::async_trait;

use crate::error::CinderError;
use crate::types::{MatchRecord, Profile, SwipeAction};

/// Durable store operations the swipe/rewind engine requires.
///
/// Delete operations are idempotent: deleting an absent row returns an
/// affected-row count of 0 rather than an error. The rewind compensation
/// protocol relies on this to make partial completions safely retryable.
#[async_trait]
pub trait SwipeStore: Send + Sync {
    // --- Profile operations ---

    /// Insert or replace a profile's public display projection.
    async fn upsert_profile(&self, profile: &Profile) -> Result<(), CinderError>;

    /// Fetch a profile by id. Returns `None` when no such profile exists.
    async fn get_profile(&self, id: &str) -> Result<Option<Profile>, CinderError>;

    // --- Swipe operations ---

    /// Record a swipe. Re-swiping the same target replaces the prior row.
    async fn record_swipe(&self, action: &SwipeAction) -> Result<(), CinderError>;

    /// Delete the swipe row for (actor, target). Returns affected rows.
    async fn delete_swipe(&self, actor_id: &str, target_id: &str) -> Result<u64, CinderError>;

    /// Whether `actor_id` has a match-forming swipe (like or super-like)
    /// recorded on `target_id`.
    async fn has_like(&self, actor_id: &str, target_id: &str) -> Result<bool, CinderError>;

    // --- Match operations ---

    /// Create a match row linking the two users.
    async fn create_match(&self, user_a: &str, user_b: &str) -> Result<(), CinderError>;

    /// Look up a match between two users regardless of stored orientation.
    async fn match_between(
        &self,
        user_a: &str,
        user_b: &str,
    ) -> Result<Option<MatchRecord>, CinderError>;

    /// Delete any match linking the two users, in either stored
    /// orientation. Returns affected rows.
    async fn delete_match_between(
        &self,
        user_a: &str,
        user_b: &str,
    ) -> Result<u64, CinderError>;

    // --- Rewind ledger operations ---

    /// Count rewind-usage rows for an actor on a UTC calendar day
    /// (`%Y-%m-%d`).
    async fn count_rewinds_on(&self, actor_id: &str, day: &str) -> Result<i64, CinderError>;

    /// Append one rewind-usage row. The ledger is append-only; rows are
    /// never updated or deleted.
    async fn record_rewind(
        &self,
        actor_id: &str,
        day: &str,
        used_at: &str,
    ) -> Result<(), CinderError>;
}
