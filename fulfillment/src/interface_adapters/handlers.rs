use crate::domain::{ConversationError, Turn};
use crate::interface_adapters::protocol::{ErrorResponse, WebhookRequest, WebhookResponse};
use crate::interface_adapters::state::AppState;
use crate::use_cases::ConversationUseCase;
use axum::{Json, extract::State, http::StatusCode};
use tracing::{info, warn};

// Handler for one conversation webhook call.
pub async fn fulfillment(
    State(state): State<AppState>,
    Json(payload): Json<WebhookRequest>,
) -> Result<Json<WebhookResponse>, (StatusCode, Json<ErrorResponse>)> {
    let session = payload.session.clone();
    let intent = payload
        .intent
        .as_ref()
        .and_then(|intent| intent.name.clone())
        .unwrap_or_default();
    info!(handler = %payload.handler.name, %intent, "conversation turn");

    let use_case = ConversationUseCase {
        canvas_url: &state.canvas_url,
    };
    let reply = use_case
        .execute(Turn::from(payload))
        .map_err(map_conversation_error)?;

    Ok(Json(WebhookResponse::from_reply(reply, session)))
}

// Helper to build a JSON error response.
fn error_response(status: StatusCode, message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            message: message.to_string(),
        }),
    )
}

fn map_conversation_error(err: ConversationError) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        ConversationError::UnknownHandler(name) => {
            warn!(handler = %name, "unknown handler");
            error_response(StatusCode::BAD_REQUEST, "unknown handler")
        }
    }
}
