//! Generation provider seam.
//!
//! A provider turns a prompt into generated text. The gateway only depends on
//! the [`GenerationProvider`] trait; [`gemini::GeminiProvider`] is the
//! production implementation.

pub mod gemini;

use async_trait::async_trait;

use crate::error::GatewayError;

pub use gemini::{GeminiConfig, GeminiProvider};

/// An external text-generation service.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    /// Generates a reply for `prompt`.
    ///
    /// An empty string is a valid return value; the caller decides whether
    /// that counts as a failure.
    async fn generate(&self, prompt: &str) -> Result<String, GatewayError>;
}
