// SPDX-FileCopyrightText: 2026 Cinder Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Cinder backend.
//!
//! This crate provides the error type, the domain types (swipes, profiles,
//! matches), and the storage trait seam used throughout the Cinder
//! workspace. The storage crate implements the seam; the engine crates
//! consume it.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::CinderError;
pub use traits::SwipeStore;
pub use types::{MatchRecord, Profile, SwipeAction, SwipeKind};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cinder_error_has_all_variants() {
        let _config = CinderError::Config("test".into());
        let _storage = CinderError::Storage {
            source: Box::new(std::io::Error::other("test")),
        };
        let _not_found = CinderError::ProfileNotFound { id: "u1".into() };
        let _invalid = CinderError::InvalidRequest("test".into());
        let _internal = CinderError::Internal("test".into());
    }

    #[test]
    fn client_errors_are_distinguished_from_dependency_errors() {
        assert!(CinderError::ProfileNotFound { id: "u1".into() }.is_client_error());
        assert!(CinderError::InvalidRequest("bad".into()).is_client_error());
        assert!(!CinderError::Storage {
            source: Box::new(std::io::Error::other("down")),
        }
        .is_client_error());
        assert!(!CinderError::Internal("boom".into()).is_client_error());
    }

    #[test]
    fn swipe_store_is_object_safe() {
        // The engine holds the store as Arc<dyn SwipeStore>; this won't
        // compile if the trait stops being object safe.
        fn _assert_object_safe(_: &dyn SwipeStore) {}
    }
}
