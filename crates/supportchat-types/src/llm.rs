//! Provider-neutral completion request/response types.
//!
//! These model what the chat turn handler hands to a completion provider and
//! what it gets back. Provider-specific wire shapes live in supportchat-infra.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::chat::{ChatMessage, MessageRole};

/// Role of a context entry as seen by the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextRole {
    User,
    Model,
}

impl fmt::Display for ContextRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextRole::User => write!(f, "user"),
            ContextRole::Model => write!(f, "model"),
        }
    }
}

impl From<MessageRole> for ContextRole {
    fn from(role: MessageRole) -> Self {
        match role {
            MessageRole::User => ContextRole::User,
            MessageRole::Assistant => ContextRole::Model,
        }
    }
}

/// A single role/content pair of model context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextMessage {
    pub role: ContextRole,
    pub content: String,
}

impl From<&ChatMessage> for ContextMessage {
    fn from(msg: &ChatMessage) -> Self {
        Self {
            role: msg.role.into(),
            content: msg.content.clone(),
        }
    }
}

/// Request to a completion provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub system_instruction: String,
    pub contents: Vec<ContextMessage>,
}

/// Response from a completion provider.
///
/// `text` is empty when the provider returned no usable text; callers decide
/// how to handle that.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub text: String,
}

/// Errors from completion provider operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("provider error: {message}")]
    Provider { message: String },

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("provider misconfigured: {0}")]
    Configuration(String),
}
