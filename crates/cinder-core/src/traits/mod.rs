// SPDX-FileCopyrightText: 2026 Cinder Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait seams between the domain services and their collaborators.

pub mod store;

pub use store::SwipeStore;
