//! Liveness and health endpoints.

use axum::Json;
use axum::extract::State;
use chrono::Utc;

use crate::AppState;
use crate::models::{HealthResponse, RootResponse};

/// `GET /` — liveness.
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "KKI API is online!".into(),
        status: "healthy".into(),
    })
}

/// `GET /health` — health probe for deployment checks. Reports the configured
/// model but never touches the log or the provider.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        timestamp: Utc::now(),
        version: kki_core::version().into(),
        model: state.config.gemini_model.clone(),
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use kki_core::ChatGateway;
    use kki_core::provider::{GeminiConfig, GeminiProvider};

    use super::*;
    use crate::config::ApiConfig;

    fn state() -> AppState {
        let config = ApiConfig {
            bind_addr: "127.0.0.1:0".into(),
            gemini_api_key: None,
            gemini_model: "gemini-health".into(),
            gemini_base_url: "http://127.0.0.1:9".into(),
            gemini_timeout: None,
        };
        let provider = GeminiProvider::new(GeminiConfig::default()).unwrap();
        AppState {
            gateway: ChatGateway::new(Arc::new(provider)),
            config,
        }
    }

    #[tokio::test]
    async fn health_reports_version_and_model() {
        let Json(body) = health(State(state())).await;
        assert_eq!(body.status, "ok");
        assert_eq!(body.version, kki_core::version());
        assert_eq!(body.model, "gemini-health");
    }

    #[tokio::test]
    async fn root_is_healthy() {
        let Json(body) = root().await;
        assert_eq!(body.status, "healthy");
    }
}
