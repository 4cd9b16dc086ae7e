//! Chat request handler.

use axum::Json;
use axum::extract::State;
use tracing::info;

use crate::AppState;
use crate::error::AppResult;
use crate::models::{ChatRequest, ChatResponse};

/// `POST /api/chat` — record the message, ask the provider, return its reply.
pub async fn chat_handler(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> AppResult<Json<ChatResponse>> {
    info!(chars = body.message.len(), "chat request");

    let reply = state.gateway.submit(&body.message).await?;

    Ok(Json(ChatResponse {
        response: reply.content().to_string(),
        timestamp: reply.timestamp(),
    }))
}
