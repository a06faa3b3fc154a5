//! Conversation lifecycle: turn handling, history, and context windowing.
//!
//! - `repository`: the `ConversationRepository` persistence trait
//! - `context`: which stored messages reach the provider
//! - `prompt`: fixed system instruction and fallback reply
//! - `service`: `ChatService`, the turn handler

pub mod context;
pub mod prompt;
pub mod repository;
pub mod service;
