// SPDX-FileCopyrightText: 2026 Cinder Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types shared across the Cinder workspace.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The disposition a swipe expresses.
///
/// `Like` and `SuperLike` are the reciprocal kinds: when the target has
/// already liked the actor back, recording one of these forms a match.
/// `Pass` never forms a match.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SwipeKind {
    Like,
    Pass,
    SuperLike,
}

impl SwipeKind {
    /// Whether this disposition can form a match with a reciprocal like.
    pub fn forms_match(self) -> bool {
        matches!(self, Self::Like | Self::SuperLike)
    }
}

/// One recorded swipe: who swiped, on whom, and how.
///
/// Created the instant a swipe is accepted. `recorded_at` is an ISO 8601
/// UTC timestamp, non-decreasing per actor as actions are appended to
/// their history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwipeAction {
    pub actor_id: String,
    pub target_id: String,
    pub kind: SwipeKind,
    pub recorded_at: String,
}

impl SwipeAction {
    /// Create a new action stamped with the current UTC time.
    pub fn new(actor_id: impl Into<String>, target_id: impl Into<String>, kind: SwipeKind) -> Self {
        Self {
            actor_id: actor_id.into(),
            target_id: target_id.into(),
            kind,
            recorded_at: chrono::Utc::now()
                .format("%Y-%m-%dT%H:%M:%S%.3fZ")
                .to_string(),
        }
    }
}

/// The public display projection of a user profile.
///
/// This is what gets re-presented to an actor after a successful rewind,
/// as if the swipe had never happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub display_name: String,
    pub age: u32,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub photo_url: Option<String>,
    pub created_at: String,
}

/// A match row linking two users.
///
/// The store may hold the pair in either (a, b) or (b, a) orientation;
/// callers must treat the pair as unordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: i64,
    pub user_a: String,
    pub user_b: String,
    pub created_at: String,
}
