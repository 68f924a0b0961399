// SPDX-FileCopyrightText: 2026 Cinder Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Profile read/write operations.

use cinder_core::CinderError;
use rusqlite::params;

use crate::database::Database;
use crate::models::Profile;

/// Insert or replace a profile's public display projection.
pub async fn upsert_profile(db: &Database, profile: &Profile) -> Result<(), CinderError> {
    let profile = profile.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO profiles (id, display_name, age, bio, photo_url, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                 ON CONFLICT(id) DO UPDATE SET
                     display_name = excluded.display_name,
                     age = excluded.age,
                     bio = excluded.bio,
                     photo_url = excluded.photo_url",
                params![
                    profile.id,
                    profile.display_name,
                    profile.age,
                    profile.bio,
                    profile.photo_url,
                    profile.created_at,
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Fetch a profile by id.
pub async fn get_profile(db: &Database, id: &str) -> Result<Option<Profile>, CinderError> {
    let id = id.to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, display_name, age, bio, photo_url, created_at
                 FROM profiles WHERE id = ?1",
            )?;
            let result = stmt.query_row(params![id], |row| {
                Ok(Profile {
                    id: row.get(0)?,
                    display_name: row.get(1)?,
                    age: row.get(2)?,
                    bio: row.get(3)?,
                    photo_url: row.get(4)?,
                    created_at: row.get(5)?,
                })
            });
            match result {
                Ok(profile) => Ok(Some(profile)),
                Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e),
            }
        })
        .await
        .map_err(crate::database::map_tr_err)
}
