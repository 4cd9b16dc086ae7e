//! Gateway error types.

use thiserror::Error;

/// Errors raised while handling a chat submission.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The caller submitted blank text; nothing was recorded.
    #[error("Message must not be empty")]
    EmptyPrompt,

    /// The provider could not be reached or refused to serve the request.
    #[error("Provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// The provider answered but produced no usable text.
    #[error("No response from provider")]
    EmptyOutput,

    /// The provider rejected the prompt itself.
    #[error("Provider rejected input: {0}")]
    MalformedInput(String),

    /// The provider is not configured (e.g. missing credential).
    #[error("Provider configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for GatewayError {
    fn from(e: reqwest::Error) -> Self {
        GatewayError::ProviderUnavailable(e.to_string())
    }
}
