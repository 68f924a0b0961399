// SPDX-FileCopyrightText: 2026 Cinder Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory `SwipeStore` double shared by this crate's unit tests.
//!
//! Keeps just enough state to observe what the engine did, plus failure
//! toggles so tests can make individual store operations error.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use cinder_core::types::{MatchRecord, Profile, SwipeAction};
use cinder_core::{CinderError, SwipeKind, SwipeStore};

fn stub_failure() -> CinderError {
    CinderError::Storage {
        source: "stub store failure".into(),
    }
}

#[derive(Default)]
pub(crate) struct StubStore {
    pub profiles: Mutex<HashMap<String, Profile>>,
    pub swipes: Mutex<HashMap<(String, String), SwipeKind>>,
    pub matches: Mutex<Vec<(String, String)>>,
    /// (actor_id, day) pairs, one per recorded rewind.
    pub rewinds: Mutex<Vec<(String, String)>>,

    pub fail_count_rewinds: AtomicBool,
    pub fail_record_rewind: AtomicBool,
    pub fail_delete_swipe: AtomicBool,

    pub count_rewind_calls: AtomicUsize,
    pub delete_match_calls: AtomicUsize,
}

impl StubStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(self, id: &str) -> Self {
        self.profiles.lock().unwrap().insert(
            id.to_string(),
            Profile {
                id: id.to_string(),
                display_name: format!("user {id}"),
                age: 30,
                bio: String::new(),
                photo_url: None,
                created_at: "2026-01-01T00:00:00.000Z".to_string(),
            },
        );
        self
    }

    pub fn with_swipe(self, action: &SwipeAction) -> Self {
        self.swipes.lock().unwrap().insert(
            (action.actor_id.clone(), action.target_id.clone()),
            action.kind,
        );
        self
    }

    pub fn with_match(self, user_a: &str, user_b: &str) -> Self {
        self.matches
            .lock()
            .unwrap()
            .push((user_a.to_string(), user_b.to_string()));
        self
    }

    pub fn with_rewind_today(self, actor_id: &str) -> Self {
        let today = chrono::Utc::now().format("%Y-%m-%d").to_string();
        self.rewinds
            .lock()
            .unwrap()
            .push((actor_id.to_string(), today));
        self
    }

    fn pair_links(pair: &(String, String), user_a: &str, user_b: &str) -> bool {
        (pair.0 == user_a && pair.1 == user_b) || (pair.0 == user_b && pair.1 == user_a)
    }
}

#[async_trait]
impl SwipeStore for StubStore {
    async fn upsert_profile(&self, profile: &Profile) -> Result<(), CinderError> {
        self.profiles
            .lock()
            .unwrap()
            .insert(profile.id.clone(), profile.clone());
        Ok(())
    }

    async fn get_profile(&self, id: &str) -> Result<Option<Profile>, CinderError> {
        Ok(self.profiles.lock().unwrap().get(id).cloned())
    }

    async fn record_swipe(&self, action: &SwipeAction) -> Result<(), CinderError> {
        self.swipes.lock().unwrap().insert(
            (action.actor_id.clone(), action.target_id.clone()),
            action.kind,
        );
        Ok(())
    }

    async fn delete_swipe(&self, actor_id: &str, target_id: &str) -> Result<u64, CinderError> {
        if self.fail_delete_swipe.load(Ordering::SeqCst) {
            return Err(stub_failure());
        }
        let removed = self
            .swipes
            .lock()
            .unwrap()
            .remove(&(actor_id.to_string(), target_id.to_string()));
        Ok(u64::from(removed.is_some()))
    }

    async fn has_like(&self, actor_id: &str, target_id: &str) -> Result<bool, CinderError> {
        Ok(self
            .swipes
            .lock()
            .unwrap()
            .get(&(actor_id.to_string(), target_id.to_string()))
            .is_some_and(|kind| kind.forms_match()))
    }

    async fn create_match(&self, user_a: &str, user_b: &str) -> Result<(), CinderError> {
        let mut matches = self.matches.lock().unwrap();
        if !matches.iter().any(|p| Self::pair_links(p, user_a, user_b)) {
            matches.push((user_a.to_string(), user_b.to_string()));
        }
        Ok(())
    }

    async fn match_between(
        &self,
        user_a: &str,
        user_b: &str,
    ) -> Result<Option<MatchRecord>, CinderError> {
        let matches = self.matches.lock().unwrap();
        Ok(matches
            .iter()
            .position(|p| Self::pair_links(p, user_a, user_b))
            .map(|pos| MatchRecord {
                id: pos as i64 + 1,
                user_a: matches[pos].0.clone(),
                user_b: matches[pos].1.clone(),
                created_at: "2026-01-01T00:00:00.000Z".to_string(),
            }))
    }

    async fn delete_match_between(
        &self,
        user_a: &str,
        user_b: &str,
    ) -> Result<u64, CinderError> {
        self.delete_match_calls.fetch_add(1, Ordering::SeqCst);
        let mut matches = self.matches.lock().unwrap();
        let before = matches.len();
        matches.retain(|p| !Self::pair_links(p, user_a, user_b));
        Ok((before - matches.len()) as u64)
    }

    async fn count_rewinds_on(&self, actor_id: &str, day: &str) -> Result<i64, CinderError> {
        self.count_rewind_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_count_rewinds.load(Ordering::SeqCst) {
            return Err(stub_failure());
        }
        Ok(self
            .rewinds
            .lock()
            .unwrap()
            .iter()
            .filter(|(actor, used_on)| actor == actor_id && used_on == day)
            .count() as i64)
    }

    async fn record_rewind(
        &self,
        actor_id: &str,
        day: &str,
        _used_at: &str,
    ) -> Result<(), CinderError> {
        if self.fail_record_rewind.load(Ordering::SeqCst) {
            return Err(stub_failure());
        }
        self.rewinds
            .lock()
            .unwrap()
            .push((actor_id.to_string(), day.to_string()));
        Ok(())
    }
}
