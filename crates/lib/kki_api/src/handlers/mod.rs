//! Request handlers.

pub mod chat;
pub mod messages;
pub mod status;
