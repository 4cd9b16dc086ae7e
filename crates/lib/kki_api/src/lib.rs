//! # kki_api
//!
//! HTTP API library for KKI.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;

use axum::Router;
use axum::routing::{get, post};
use kki_core::ChatGateway;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{chat, messages, status};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Chat gateway owning the message log and the provider.
    pub gateway: ChatGateway,
    /// API configuration.
    pub config: ApiConfig,
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    // Wide open. Tighten before exposing publicly.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(status::root))
        .route("/health", get(status::health))
        .route("/api/chat", post(chat::chat_handler))
        .route(
            "/api/messages",
            get(messages::list_messages_handler).delete(messages::clear_messages_handler),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
