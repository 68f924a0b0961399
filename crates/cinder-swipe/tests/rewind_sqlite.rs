// SPDX-FileCopyrightText: 2026 Cinder Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rewind engine against the real SQLite store.
//!
//! Exercises the full path the unit tests cover with stubs: intake forms
//! a match, the rewind reverses it, and the quota ledger gates the next
//! attempt -- all against a temp database file.

use std::sync::Arc;

use cinder_config::model::StorageConfig;
use cinder_core::types::Profile;
use cinder_core::{SwipeKind, SwipeStore};
use cinder_storage::SqliteStore;
use cinder_swipe::{
    ActionHistory, CompensationEngine, QuotaTracker, RewindError, RewindService, SwipeIntake,
};
use tempfile::tempdir;

struct Harness {
    store: Arc<SqliteStore>,
    intake: SwipeIntake,
    rewind: RewindService,
    _dir: tempfile::TempDir,
}

async fn harness(daily_free_limit: u32) -> Harness {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("rewind_it.db");
    let store = Arc::new(SqliteStore::new(StorageConfig {
        database_path: db_path.to_str().unwrap().to_string(),
        wal_mode: true,
    }));
    store.initialize().await.unwrap();

    let history = Arc::new(ActionHistory::new(10));
    let intake = SwipeIntake::new(store.clone(), history.clone());
    let rewind = RewindService::new(
        history,
        QuotaTracker::new(store.clone(), daily_free_limit),
        CompensationEngine::new(store.clone()),
    );

    Harness {
        store,
        intake,
        rewind,
        _dir: dir,
    }
}

fn profile(id: &str) -> Profile {
    Profile {
        id: id.to_string(),
        display_name: format!("user {id}"),
        age: 28,
        bio: String::new(),
        photo_url: None,
        created_at: "2026-01-01T00:00:00.000Z".to_string(),
    }
}

async fn seed_profiles(store: &SqliteStore, ids: &[&str]) {
    for id in ids {
        store.upsert_profile(&profile(id)).await.unwrap();
    }
}

#[tokio::test]
async fn liked_match_is_fully_reversed_and_quota_consumed() {
    let h = harness(1).await;
    seed_profiles(&h.store, &["u1", "u2", "u3"]).await;

    // u1 passes on u3 first (so a second rewind attempt has history left),
    // then the mutual like with u2 forms a match.
    h.intake.swipe("u1", "u3", SwipeKind::Pass).await.unwrap();
    h.intake.swipe("u2", "u1", SwipeKind::Like).await.unwrap();
    let outcome = h.intake.swipe("u1", "u2", SwipeKind::Like).await.unwrap();
    assert!(outcome.matched);
    assert!(h.store.match_between("u1", "u2").await.unwrap().is_some());

    // Rewind reverses the like: profile comes back, match and swipe are gone.
    let restored = h.rewind.undo("u1", false).await.unwrap();
    assert_eq!(restored.id, "u2");
    assert!(h.store.match_between("u1", "u2").await.unwrap().is_none());
    assert_eq!(h.store.delete_swipe("u1", "u2").await.unwrap(), 0);

    // The ledger shows today's usage.
    let today = chrono::Utc::now().format("%Y-%m-%d").to_string();
    assert_eq!(h.store.count_rewinds_on("u1", &today).await.unwrap(), 1);

    // Second attempt the same day: history still has the pass on u3, but
    // the free allowance is spent.
    let err = h.rewind.undo("u1", false).await.unwrap_err();
    assert!(matches!(err, RewindError::QuotaExhausted { .. }));
    assert_eq!(
        err.to_string(),
        "Free users get 1 rewind per day. Upgrade for unlimited!"
    );
}

#[tokio::test]
async fn undoing_a_pass_touches_no_match_rows() {
    let h = harness(1).await;
    seed_profiles(&h.store, &["u1", "u2"]).await;

    h.intake.swipe("u1", "u2", SwipeKind::Pass).await.unwrap();
    let restored = h.rewind.undo("u1", false).await.unwrap();

    assert_eq!(restored.id, "u2");
    assert_eq!(h.store.delete_swipe("u1", "u2").await.unwrap(), 0);
}

#[tokio::test]
async fn premium_actor_rewinds_past_the_free_limit() {
    let h = harness(1).await;
    seed_profiles(&h.store, &["u1", "a", "b", "c"]).await;

    for target in ["a", "b", "c"] {
        h.intake.swipe("u1", target, SwipeKind::Like).await.unwrap();
    }
    for _ in 0..3 {
        h.rewind.undo("u1", true).await.unwrap();
    }

    // No ledger rows were ever written for the premium actor.
    let today = chrono::Utc::now().format("%Y-%m-%d").to_string();
    assert_eq!(h.store.count_rewinds_on("u1", &today).await.unwrap(), 0);

    // Bounded only by history.
    let err = h.rewind.undo("u1", true).await.unwrap_err();
    assert!(matches!(err, RewindError::EmptyHistory));
}

#[tokio::test]
async fn rewound_swipe_can_be_swiped_again() {
    let h = harness(5).await;
    seed_profiles(&h.store, &["u1", "u2"]).await;

    h.intake.swipe("u2", "u1", SwipeKind::Like).await.unwrap();
    let first = h.intake.swipe("u1", "u2", SwipeKind::Pass).await.unwrap();
    assert!(!first.matched);

    // Changed their mind: rewind the pass, then like.
    h.rewind.undo("u1", false).await.unwrap();
    let second = h.intake.swipe("u1", "u2", SwipeKind::Like).await.unwrap();
    assert!(second.matched, "re-swipe after rewind should match");
}
