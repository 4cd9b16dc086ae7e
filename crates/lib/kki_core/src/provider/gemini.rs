//! Gemini provider.
//!
//! Calls the Generative Language API (`:generateContent`) with a single user
//! turn. One request per prompt: no retry, no backoff.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::GenerationProvider;
use crate::error::GatewayError;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Settings for [`GeminiProvider`].
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key sent as `x-goog-api-key`. Calls fail with
    /// [`GatewayError::Config`] while unset.
    pub api_key: Option<String>,
    /// Model name, e.g. `gemini-2.0-flash`.
    pub model: String,
    /// API root without trailing slash.
    pub base_url: String,
    /// Per-request timeout. `None` waits indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: None,
        }
    }
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: [TextPart<'a>; 1],
}

#[derive(Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl GenerateContentResponse {
    /// Concatenates the text parts of the first candidate.
    fn into_text(self) -> Result<String, GatewayError> {
        if self.candidates.is_empty()
            && let Some(reason) = self.prompt_feedback.and_then(|f| f.block_reason)
        {
            return Err(GatewayError::MalformedInput(format!(
                "prompt blocked: {reason}"
            )));
        }

        let text = self
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| {
                c.parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        Ok(text)
    }
}

/// Extracts the human-readable message from an error body, falling back to
/// the raw body.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) if body.trim().is_empty() => "<no body>".to_string(),
        Err(_) => body.trim().to_string(),
    }
}

/// Maps a non-success status to a gateway error.
fn classify_failure(status: StatusCode, message: String) -> GatewayError {
    match status {
        StatusCode::BAD_REQUEST => GatewayError::MalformedInput(message),
        _ => GatewayError::ProviderUnavailable(format!("{status}: {message}")),
    }
}

/// Gemini `generateContent` client.
pub struct GeminiProvider {
    client: Client,
    config: GeminiConfig,
}

impl GeminiProvider {
    pub fn new(config: GeminiConfig) -> Result<Self, GatewayError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| GatewayError::Config(format!("HTTP client build failed: {e}")))?;

        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl GenerationProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, prompt: &str) -> Result<String, GatewayError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| GatewayError::Config("GEMINI_API_KEY_FREE is not set".to_string()))?;

        debug!(model = %self.config.model, "calling generateContent");

        let resp = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&GenerateContentRequest {
                contents: [Content {
                    role: "user",
                    parts: [TextPart { text: prompt }],
                }],
            })
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(classify_failure(status, error_message(&body)));
        }

        let data: GenerateContentResponse = resp.json().await.map_err(|e| {
            GatewayError::ProviderUnavailable(format!("Gemini response parse error: {e}"))
        })?;

        data.into_text()
    }
}
