//! Chat gateway — records the exchange and forwards prompts to the provider.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::GatewayError;
use crate::message::ChatMessage;
use crate::message_log::MessageLog;
use crate::provider::GenerationProvider;

/// Mediates between callers and the generation provider.
///
/// Owns the message log; clones share both the log and the provider.
#[derive(Clone)]
pub struct ChatGateway {
    log: MessageLog,
    provider: Arc<dyn GenerationProvider>,
}

impl ChatGateway {
    pub fn new(provider: Arc<dyn GenerationProvider>) -> Self {
        Self {
            log: MessageLog::new(),
            provider,
        }
    }

    /// Records `text` as a user message, asks the provider for a reply and
    /// records the reply.
    ///
    /// The user message stays in the log even when the provider call fails.
    pub async fn submit(&self, text: &str) -> Result<ChatMessage, GatewayError> {
        if text.trim().is_empty() {
            return Err(GatewayError::EmptyPrompt);
        }

        self.log.append(ChatMessage::user(text)).await;

        debug!(provider = self.provider.name(), chars = text.len(), "forwarding prompt");

        let reply = self.provider.generate(text).await.inspect_err(|e| {
            warn!(provider = self.provider.name(), error = %e, "provider call failed");
        })?;

        if reply.trim().is_empty() {
            warn!(provider = self.provider.name(), "provider returned no text");
            return Err(GatewayError::EmptyOutput);
        }

        let message = ChatMessage::ai(reply);
        self.log.append(message.clone()).await;

        info!(
            provider = self.provider.name(),
            reply_chars = message.content().len(),
            "chat exchange recorded"
        );

        Ok(message)
    }

    /// Every recorded message in insertion order.
    pub async fn messages(&self) -> Vec<ChatMessage> {
        self.log.snapshot().await
    }

    /// Empties the log. Returns how many messages were dropped.
    pub async fn clear(&self) -> usize {
        let removed = self.log.clear().await;
        info!(removed, "message log cleared");
        removed
    }

    pub fn log(&self) -> &MessageLog {
        &self.log
    }
}
