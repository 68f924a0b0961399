// SPDX-FileCopyrightText: 2026 Cinder Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite implementation of the SwipeStore trait.

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::debug;

use cinder_config::model::StorageConfig;
use cinder_core::types::{MatchRecord, Profile, SwipeAction};
use cinder_core::{CinderError, SwipeStore};

use crate::database::Database;
use crate::queries;

/// SQLite-backed swipe store.
///
/// Wraps a [`Database`] handle and delegates all query operations to the
/// typed query modules. The database is lazily initialized on the first
/// call to [`SqliteStore::initialize`].
pub struct SqliteStore {
    config: StorageConfig,
    db: OnceCell<Database>,
}

impl SqliteStore {
    /// Create a new SqliteStore with the given configuration.
    ///
    /// The database connection is not opened until [`initialize`] is called.
    ///
    /// [`initialize`]: SqliteStore::initialize
    pub fn new(config: StorageConfig) -> Self {
        Self {
            config,
            db: OnceCell::new(),
        }
    }

    /// Returns a reference to the underlying Database, or an error if not initialized.
    fn db(&self) -> Result<&Database, CinderError> {
        self.db.get().ok_or_else(|| CinderError::Storage {
            source: "storage not initialized -- call initialize() first".into(),
        })
    }

    /// Open the database at the configured path and run migrations.
    pub async fn initialize(&self) -> Result<(), CinderError> {
        let db = Database::open(&self.config.database_path, self.config.wal_mode).await?;
        self.db.set(db).map_err(|_| CinderError::Storage {
            source: "storage already initialized".into(),
        })?;
        debug!(path = %self.config.database_path, "SQLite storage initialized");
        Ok(())
    }

    /// Verify the database answers a trivial query.
    pub async fn health_check(&self) -> Result<(), CinderError> {
        let db = self.db()?;
        db.connection()
            .call(|conn| -> Result<(), rusqlite::Error> {
                conn.execute_batch("SELECT 1;")?;
                Ok(())
            })
            .await
            .map_err(crate::database::map_tr_err)?;
        Ok(())
    }

    /// Checkpoint the WAL and flush pending writes.
    pub async fn close(&self) -> Result<(), CinderError> {
        self.db()?.close().await
    }
}

#[async_trait]
impl SwipeStore for SqliteStore {
    // --- Profile operations ---

    async fn upsert_profile(&self, profile: &Profile) -> Result<(), CinderError> {
        queries::profiles::upsert_profile(self.db()?, profile).await
    }

    async fn get_profile(&self, id: &str) -> Result<Option<Profile>, CinderError> {
        queries::profiles::get_profile(self.db()?, id).await
    }

    // --- Swipe operations ---

    async fn record_swipe(&self, action: &SwipeAction) -> Result<(), CinderError> {
        queries::swipes::record_swipe(self.db()?, action).await
    }

    async fn delete_swipe(&self, actor_id: &str, target_id: &str) -> Result<u64, CinderError> {
        queries::swipes::delete_swipe(self.db()?, actor_id, target_id).await
    }

    async fn has_like(&self, actor_id: &str, target_id: &str) -> Result<bool, CinderError> {
        queries::swipes::has_like(self.db()?, actor_id, target_id).await
    }

    // --- Match operations ---

    async fn create_match(&self, user_a: &str, user_b: &str) -> Result<(), CinderError> {
        queries::matches::create_match(self.db()?, user_a, user_b).await
    }

    async fn match_between(
        &self,
        user_a: &str,
        user_b: &str,
    ) -> Result<Option<MatchRecord>, CinderError> {
        queries::matches::match_between(self.db()?, user_a, user_b).await
    }

    async fn delete_match_between(
        &self,
        user_a: &str,
        user_b: &str,
    ) -> Result<u64, CinderError> {
        queries::matches::delete_match_between(self.db()?, user_a, user_b).await
    }

    // --- Rewind ledger operations ---

    async fn count_rewinds_on(&self, actor_id: &str, day: &str) -> Result<i64, CinderError> {
        queries::rewinds::count_rewinds_on(self.db()?, actor_id, day).await
    }

    async fn record_rewind(
        &self,
        actor_id: &str,
        day: &str,
        used_at: &str,
    ) -> Result<(), CinderError> {
        queries::rewinds::record_rewind(self.db()?, actor_id, day, used_at).await
    }
}
