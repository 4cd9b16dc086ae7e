//! API server configuration.

use std::time::Duration;

use kki_core::provider::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use kki_core::provider::GeminiConfig;

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:8000").
    pub bind_addr: String,
    /// Gemini API key. The server starts without one, but chat calls fail.
    pub gemini_api_key: Option<String>,
    /// Gemini model name.
    pub gemini_model: String,
    /// Gemini API root.
    pub gemini_base_url: String,
    /// Upper bound on a single provider call. `None` waits indefinitely.
    pub gemini_timeout: Option<Duration>,
}

impl ApiConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable              | Default                                      |
    /// |-----------------------|----------------------------------------------|
    /// | `BIND_ADDR`           | `127.0.0.1:8000`                             |
    /// | `GEMINI_API_KEY_FREE` | falls back to `GEMINI_API_KEY`, else unset   |
    /// | `GEMINI_MODEL`        | `gemini-2.0-flash`                           |
    /// | `GEMINI_BASE_URL`     | `https://generativelanguage.googleapis.com`  |
    /// | `GEMINI_TIMEOUT_SECS` | unset (no timeout)                           |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            bind_addr: non_empty("BIND_ADDR").unwrap_or_else(|| "127.0.0.1:8000".into()),
            gemini_api_key: non_empty("GEMINI_API_KEY_FREE")
                .or_else(|| non_empty("GEMINI_API_KEY")),
            gemini_model: non_empty("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.into()),
            gemini_base_url: non_empty("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.into()),
            gemini_timeout: non_empty("GEMINI_TIMEOUT_SECS")
                .and_then(|v| v.trim().parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
        }
    }

    /// Provider settings derived from this configuration.
    pub fn gemini(&self) -> GeminiConfig {
        GeminiConfig {
            api_key: self.gemini_api_key.clone(),
            model: self.gemini_model.clone(),
            base_url: self.gemini_base_url.clone(),
            request_timeout: self.gemini_timeout,
        }
    }
}
