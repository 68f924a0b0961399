// SPDX-FileCopyrightText: 2026 Cinder Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Match row operations.
//!
//! A match links an unordered pair of users, but the row stores the pair
//! in whatever orientation it was created with. Every reader and the
//! delete must therefore check both orientations.

use cinder_core::CinderError;
use rusqlite::params;

use crate::database::Database;
use crate::models::MatchRecord;

/// Create a match linking the two users, unless one already exists in
/// either orientation.
pub async fn create_match(db: &Database, user_a: &str, user_b: &str) -> Result<(), CinderError> {
    let user_a = user_a.to_string();
    let user_b = user_b.to_string();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO matches (user_a, user_b)
                 SELECT ?1, ?2
                 WHERE NOT EXISTS (
                     SELECT 1 FROM matches
                     WHERE (user_a = ?1 AND user_b = ?2)
                        OR (user_a = ?2 AND user_b = ?1)
                 )",
                params![user_a, user_b],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Look up the match between two users regardless of stored orientation.
pub async fn match_between(
    db: &Database,
    user_a: &str,
    user_b: &str,
) -> Result<Option<MatchRecord>, CinderError> {
    let user_a = user_a.to_string();
    let user_b = user_b.to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, user_a, user_b, created_at FROM matches
                 WHERE (user_a = ?1 AND user_b = ?2)
                    OR (user_a = ?2 AND user_b = ?1)",
            )?;
            let result = stmt.query_row(params![user_a, user_b], |row| {
                Ok(MatchRecord {
                    id: row.get(0)?,
                    user_a: row.get(1)?,
                    user_b: row.get(2)?,
                    created_at: row.get(3)?,
                })
            });
            match result {
                Ok(record) => Ok(Some(record)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e),
            }
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Delete any match linking the two users, in either stored orientation.
/// Returns affected rows.
pub async fn delete_match_between(
    db: &Database,
    user_a: &str,
    user_b: &str,
) -> Result<u64, CinderError> {
    let user_a = user_a.to_string();
    let user_b = user_b.to_string();
    db.connection()
        .call(move |conn| {
            let affected = conn.execute(
                "DELETE FROM matches
                 WHERE (user_a = ?1 AND user_b = ?2)
                    OR (user_a = ?2 AND user_b = ?1)",
                params![user_a, user_b],
            )?;
            Ok(affected as u64)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    async fn setup_db() -> (Database, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db = Database::open(db_path.to_str().unwrap(), true).await.unwrap();
        (db, dir)
    }

    #[tokio::test]
    async fn create_and_find_match() {
        let (db, _dir) = setup_db().await;

        create_match(&db, "u1", "u2").await.unwrap();
        let found = match_between(&db, "u1", "u2").await.unwrap();
        assert!(found.is_some());

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn lookup_is_orientation_independent() {
        let (db, _dir) = setup_db().await;

        create_match(&db, "u1", "u2").await.unwrap();
        let reversed = match_between(&db, "u2", "u1").await.unwrap();
        assert!(reversed.is_some());

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn create_is_idempotent_across_orientations() {
        let (db, _dir) = setup_db().await;

        create_match(&db, "u1", "u2").await.unwrap();
        create_match(&db, "u2", "u1").await.unwrap();

        // Only one row exists; deleting clears exactly one.
        let affected = delete_match_between(&db, "u1", "u2").await.unwrap();
        assert_eq!(affected, 1);

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn delete_clears_reversed_orientation() {
        let (db, _dir) = setup_db().await;

        create_match(&db, "u2", "u1").await.unwrap();
        let affected = delete_match_between(&db, "u1", "u2").await.unwrap();
        assert_eq!(affected, 1);
        assert!(match_between(&db, "u1", "u2").await.unwrap().is_none());

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn delete_absent_match_is_a_no_op() {
        let (db, _dir) = setup_db().await;
        let affected = delete_match_between(&db, "u1", "u2").await.unwrap();
        assert_eq!(affected, 0);
        db.close().await.unwrap();
    }
}
