//! Shared domain types for the support chat service.
//!
//! Conversations, messages, provider-neutral completion types, configuration,
//! and the error enums shared by every other crate.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
