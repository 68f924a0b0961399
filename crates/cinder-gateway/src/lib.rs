// SPDX-FileCopyrightText: 2026 Cinder Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway exposing the Cinder swipe and rewind endpoints.
//!
//! The gateway is a thin adapter over the services in cinder-swipe: it
//! decodes requests, delegates, and maps outcomes onto status codes and
//! the standard `{success, message, ...}` envelope. Rejections (empty
//! history, quota exhausted, malformed input) answer 400 with the
//! engine's own reason string; dependency failures answer 500.

pub mod handlers;
pub mod server;

pub use server::{build_router, start_server, GatewayState, HealthState, ServerConfig};
