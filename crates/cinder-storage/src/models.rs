// SPDX-FileCopyrightText: 2026 Cinder Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain model types for storage entities.
//!
//! The canonical types are defined in `cinder-core::types` for use across
//! the storage trait boundary. This module re-exports them for convenience
//! within the storage crate.

pub use cinder_core::types::{MatchRecord, Profile, SwipeAction};
