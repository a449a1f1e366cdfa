// HTTP handlers for host pushes, local taps and frame inspection.

use crate::interface_adapters::protocol::FrameSnapshotDto;
use crate::interface_adapters::state::AppState;
use crate::use_cases::SceneEvent;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use std::sync::Arc;
use tracing::warn;

// Shared HTTP response type for consistent API error payloads.
#[derive(Debug, serde::Serialize)]
pub struct ErrorResponse {
    // Human-readable error string for consistent JSON error responses.
    pub error: String,
}

pub(crate) fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}

// Queues an event for the scene. Command-level validity is never reported back.
pub(crate) async fn forward(state: &AppState, event: SceneEvent) -> Response {
    match state.scene.events_tx.send(event).await {
        Ok(()) => StatusCode::ACCEPTED.into_response(),
        Err(_) => {
            warn!("scene event channel closed");
            error_response(StatusCode::SERVICE_UNAVAILABLE, "scene unavailable")
        }
    }
}

pub async fn update_handler(
    State(state): State<Arc<AppState>>,
    Json(batch): Json<Vec<Value>>,
) -> Response {
    forward(&state, SceneEvent::Update(batch)).await
}

pub async fn tap_sprite_handler(State(state): State<Arc<AppState>>) -> Response {
    forward(&state, SceneEvent::TapSprite).await
}

pub async fn tap_restart_handler(State(state): State<Arc<AppState>>) -> Response {
    forward(&state, SceneEvent::TapRestart).await
}

pub async fn frame_state_handler(State(state): State<Arc<AppState>>) -> Json<FrameSnapshotDto> {
    let snapshot = state.scene.frame_rx.borrow().clone();
    Json(FrameSnapshotDto::from(&snapshot))
}
