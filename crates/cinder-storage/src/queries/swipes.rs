// SPDX-FileCopyrightText: 2026 Cinder Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Swipe row operations.
//!
//! Deletes report the affected-row count so callers can treat deleting an
//! absent row as the no-op it is; the rewind compensation path depends on
//! that idempotence.

use cinder_core::CinderError;
use rusqlite::params;

use crate::database::Database;
use crate::models::SwipeAction;

/// Record a swipe. Re-swiping the same target replaces the prior row.
pub async fn record_swipe(db: &Database, action: &SwipeAction) -> Result<(), CinderError> {
    let action = action.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO swipes (actor_id, target_id, kind, created_at)
                 VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT(actor_id, target_id) DO UPDATE SET
                     kind = excluded.kind,
                     created_at = excluded.created_at",
                params![
                    action.actor_id,
                    action.target_id,
                    action.kind.to_string(),
                    action.recorded_at,
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Delete the swipe row for (actor, target). Returns affected rows.
pub async fn delete_swipe(
    db: &Database,
    actor_id: &str,
    target_id: &str,
) -> Result<u64, CinderError> {
    let actor_id = actor_id.to_string();
    let target_id = target_id.to_string();
    db.connection()
        .call(move |conn| {
            let affected = conn.execute(
                "DELETE FROM swipes WHERE actor_id = ?1 AND target_id = ?2",
                params![actor_id, target_id],
            )?;
            Ok(affected as u64)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Whether `actor_id` has a match-forming swipe recorded on `target_id`.
pub async fn has_like(
    db: &Database,
    actor_id: &str,
    target_id: &str,
) -> Result<bool, CinderError> {
    let actor_id = actor_id.to_string();
    let target_id = target_id.to_string();
    db.connection()
        .call(move |conn| {
            let exists: i64 = conn.query_row(
                "SELECT EXISTS(
                     SELECT 1 FROM swipes
                     WHERE actor_id = ?1 AND target_id = ?2
                       AND kind IN ('like', 'super_like')
                 )",
                params![actor_id, target_id],
                |row| row.get(0),
            )?;
            Ok(exists != 0)
        })
        .await
        .map_err(crate::database::map_tr_err)
}
