//! In-memory, append-only conversation log.
//!
//! The log lives for the lifetime of the process. Each append takes the write
//! lock for the duration of a single push, so concurrent chat calls never lose
//! or duplicate entries, but the user/ai pairs of two calls may interleave.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::message::ChatMessage;

/// Shared handle to the message log. Clones refer to the same log.
#[derive(Clone, Debug, Default)]
pub struct MessageLog {
    entries: Arc<RwLock<Vec<ChatMessage>>>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message at the end of the log.
    pub async fn append(&self, message: ChatMessage) {
        self.entries.write().await.push(message);
    }

    /// Returns a copy of every entry in insertion order.
    pub async fn snapshot(&self) -> Vec<ChatMessage> {
        self.entries.read().await.clone()
    }

    /// Drops every entry. Returns how many were removed.
    pub async fn clear(&self) -> usize {
        let mut entries = self.entries.write().await;
        let removed = entries.len();
        entries.clear();
        removed
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn preserves_insertion_order() {
        let log = MessageLog::new();
        log.append(ChatMessage::user("one")).await;
        log.append(ChatMessage::ai("two")).await;
        log.append(ChatMessage::user("three")).await;

        let contents: Vec<_> = log
            .snapshot()
            .await
            .iter()
            .map(|m| m.content().to_string())
            .collect();
        assert_eq!(contents, ["one", "two", "three"]);
    }

    #[tokio::test]
    async fn clones_share_entries() {
        let log = MessageLog::new();
        let other = log.clone();
        other.append(ChatMessage::user("hi")).await;

        assert_eq!(log.len().await, 1);
    }

    #[tokio::test]
    async fn clear_empties_log() {
        let log = MessageLog::new();
        log.append(ChatMessage::user("a")).await;
        log.append(ChatMessage::ai("b")).await;

        assert_eq!(log.clear().await, 2);
        assert!(log.is_empty().await);
        assert!(log.snapshot().await.is_empty());
    }

    #[tokio::test]
    async fn concurrent_appends_are_not_lost() {
        let log = MessageLog::new();
        let mut handles = Vec::new();
        for i in 0..32 {
            let log = log.clone();
            handles.push(tokio::spawn(async move {
                log.append(ChatMessage::user(format!("m{i}"))).await;
            }));
        }
        for h in handles {
            h.await.unwrap();
        }

        assert_eq!(log.len().await, 32);
    }
}
