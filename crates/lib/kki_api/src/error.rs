//! Application error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use kki_core::GatewayError;
use thiserror::Error;

use crate::models::ErrorResponse;

/// Convenience alias for handler return types.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level errors with HTTP status mapping.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("AI request failed: {0}")]
    Service(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message) = match &self {
            AppError::Validation(m) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "validation_error", m.clone())
            }
            AppError::Service(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "service_error",
                self.to_string(),
            ),
        };
        let body = Json(ErrorResponse {
            error: error.to_string(),
            message,
        });
        (status, body).into_response()
    }
}

impl From<GatewayError> for AppError {
    fn from(e: GatewayError) -> Self {
        match e {
            GatewayError::EmptyPrompt => AppError::Validation(e.to_string()),
            GatewayError::ProviderUnavailable(_)
            | GatewayError::EmptyOutput
            | GatewayError::MalformedInput(_)
            | GatewayError::Config(_) => AppError::Service(e.to_string()),
        }
    }
}
