// SPDX-FileCopyrightText: 2026 Cinder Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rewind usage ledger operations.
//!
//! The ledger is append-only: one row per consumed rewind, keyed by the
//! UTC calendar day it was used on. Rows are never updated or deleted.

use cinder_core::CinderError;
use rusqlite::params;

use crate::database::Database;

/// Count rewind-usage rows for an actor on a given day (`%Y-%m-%d`).
pub async fn count_rewinds_on(
    db: &Database,
    actor_id: &str,
    day: &str,
) -> Result<i64, CinderError> {
    let actor_id = actor_id.to_string();
    let day = day.to_string();
    db.connection()
        .call(move |conn| {
            let count: i64 = conn.query_row(
                "SELECT COUNT(*) FROM rewind_ledger
                 WHERE actor_id = ?1 AND used_on = ?2",
                params![actor_id, day],
                |row| row.get(0),
            )?;
            Ok(count)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Append one rewind-usage row.
pub async fn record_rewind(
    db: &Database,
    actor_id: &str,
    day: &str,
    used_at: &str,
) -> Result<(), CinderError> {
    let actor_id = actor_id.to_string();
    let day = day.to_string();
    let used_at = used_at.to_string();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO rewind_ledger (actor_id, used_on, used_at)
                 VALUES (?1, ?2, ?3)",
                params![actor_id, day, used_at],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}
