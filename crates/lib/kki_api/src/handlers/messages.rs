//! Message log handlers.

use axum::Json;
use axum::extract::State;

use crate::AppState;
use crate::models::{MessageResponse, MessagesResponse};

/// `GET /api/messages` — the full log in insertion order.
pub async fn list_messages_handler(State(state): State<AppState>) -> Json<MessagesResponse> {
    Json(MessagesResponse {
        messages: state.gateway.messages().await,
    })
}

/// `DELETE /api/messages` — drop every message. Irreversible.
pub async fn clear_messages_handler(State(state): State<AppState>) -> Json<MessageResponse> {
    state.gateway.clear().await;
    Json(MessageResponse {
        message: "All messages deleted".into(),
    })
}
