//! # kki_core
//!
//! Core chat domain for KKI: the in-memory message log, the generation
//! provider seam, and the gateway tying them together.

pub mod error;
pub mod gateway;
pub mod message;
pub mod message_log;
pub mod provider;

pub use error::GatewayError;
pub use gateway::ChatGateway;
pub use message::{ChatMessage, Sender};
pub use message_log::MessageLog;
pub use provider::GenerationProvider;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
