// SPDX-FileCopyrightText: 2026 Cinder Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite persistence layer for the Cinder backend.
//!
//! Implements the `SwipeStore` seam from cinder-core on top of rusqlite
//! behind tokio-rusqlite's single background write thread, with embedded
//! refinery migrations.

pub mod adapter;
pub mod database;
pub mod migrations;
pub mod models;
pub mod queries;

pub use adapter::SqliteStore;
pub use database::Database;
