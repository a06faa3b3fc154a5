//! CompletionProvider trait definition.
//!
//! The seam between the chat turn handler and the hosted model. Uses RPITIT
//! like the repository traits.

use supportchat_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for completion provider backends (Gemini, test doubles).
///
/// Implementations live in supportchat-infra (e.g., `GeminiProvider`).
pub trait CompletionProvider: Send + Sync {
    /// Human-readable provider name (e.g., "gemini").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
