// SPDX-FileCopyrightText: 2026 Cinder Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the gateway REST API.
//!
//! Handles POST /swipe, POST /rewind, GET /health.

use axum::{
    extract::rejection::JsonRejection,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use cinder_core::types::Profile;
use cinder_core::SwipeKind;

use crate::server::GatewayState;

/// Request body for POST /rewind.
#[derive(Debug, Deserialize)]
pub struct RewindRequest {
    /// The actor asking to undo their last swipe.
    #[serde(default)]
    pub user_id: Option<String>,
    /// Whether the actor is on the premium tier.
    #[serde(default)]
    pub is_premium: bool,
}

/// Response body for POST /rewind.
#[derive(Debug, Serialize)]
pub struct RewindResponse {
    /// Whether the rewind happened.
    pub success: bool,
    /// Human-readable outcome message.
    pub message: String,
    /// The restored profile, present on success only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
}

/// Request body for POST /swipe.
#[derive(Debug, Deserialize)]
pub struct SwipeRequest {
    /// The swiping actor.
    #[serde(default)]
    pub user_id: Option<String>,
    /// The profile being swiped on.
    #[serde(default)]
    pub target_id: Option<String>,
    /// The disposition: "like", "pass", or "super_like".
    pub kind: SwipeKind,
}

/// Response body for POST /swipe.
#[derive(Debug, Serialize)]
pub struct SwipeResponse {
    /// Whether the swipe was recorded.
    pub success: bool,
    /// Whether this swipe formed a match.
    pub matched: bool,
    /// Human-readable outcome message.
    pub message: String,
}

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Health status string.
    pub status: String,
    /// Binary version.
    pub version: String,
    /// Uptime in seconds.
    pub uptime_secs: u64,
}

fn rewind_rejection(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(RewindResponse {
            success: false,
            message: message.to_string(),
            profile: None,
        }),
    )
        .into_response()
}

/// POST /rewind
///
/// Undo the caller's most recent swipe. Malformed bodies and a missing
/// `user_id` are rejected here, before any core logic runs.
pub async fn post_rewind(
    State(state): State<GatewayState>,
    payload: Result<Json<RewindRequest>, JsonRejection>,
) -> Response {
    let Json(body) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            debug!(%rejection, "rewind request body rejected");
            return rewind_rejection("malformed request body");
        }
    };

    let Some(user_id) = body.user_id.filter(|id| !id.trim().is_empty()) else {
        return rewind_rejection("user_id is required");
    };

    match state.rewind.undo(&user_id, body.is_premium).await {
        Ok(profile) => (
            StatusCode::OK,
            Json(RewindResponse {
                success: true,
                message: "Swipe undone".to_string(),
                profile: Some(profile),
            }),
        )
            .into_response(),
        Err(e) if e.is_rejection() => rewind_rejection(&e.to_string()),
        Err(e) => {
            error!(user_id = %user_id, error = %e, "rewind failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(RewindResponse {
                    success: false,
                    message: e.to_string(),
                    profile: None,
                }),
            )
                .into_response()
        }
    }
}

fn swipe_rejection(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(SwipeResponse {
            success: false,
            matched: false,
            message: message.to_string(),
        }),
    )
        .into_response()
}

/// POST /swipe
///
/// Record a swipe and report whether it formed a match.
pub async fn post_swipe(
    State(state): State<GatewayState>,
    payload: Result<Json<SwipeRequest>, JsonRejection>,
) -> Response {
    let Json(body) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            debug!(%rejection, "swipe request body rejected");
            return swipe_rejection(StatusCode::BAD_REQUEST, "malformed request body");
        }
    };

    let user_id = body.user_id.unwrap_or_default();
    let target_id = body.target_id.unwrap_or_default();

    match state.intake.swipe(&user_id, &target_id, body.kind).await {
        Ok(outcome) => {
            let message = if outcome.matched {
                "It's a match!".to_string()
            } else {
                "Swipe recorded".to_string()
            };
            (
                StatusCode::OK,
                Json(SwipeResponse {
                    success: true,
                    matched: outcome.matched,
                    message,
                }),
            )
                .into_response()
        }
        Err(e) if e.is_client_error() => {
            swipe_rejection(StatusCode::BAD_REQUEST, &e.to_string())
        }
        Err(e) => {
            error!(user_id = %user_id, target_id = %target_id, error = %e, "swipe failed");
            swipe_rejection(StatusCode::INTERNAL_SERVER_ERROR, "swipe failed")
        }
    }
}

/// GET /health
///
/// Returns health status of the gateway. Unauthenticated.
pub async fn get_health(State(state): State<GatewayState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.health.start_time.elapsed().as_secs(),
    })
}
