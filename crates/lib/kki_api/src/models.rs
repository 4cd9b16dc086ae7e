//! Request and response bodies.

use chrono::{DateTime, Utc};
use kki_core::ChatMessage;
use serde::{Deserialize, Serialize};

/// `GET /` body.
#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
    pub status: String,
}

/// `GET /health` body.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    /// Configured Gemini model.
    pub model: String,
}

/// `POST /api/chat` body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// `POST /api/chat` reply.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub timestamp: DateTime<Utc>,
}

/// `GET /api/messages` body.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessagesResponse {
    pub messages: Vec<ChatMessage>,
}

/// Plain acknowledgement, e.g. `DELETE /api/messages`.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error body returned for every [`crate::error::AppError`].
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
