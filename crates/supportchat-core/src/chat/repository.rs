//! ConversationRepository trait definition.
//!
//! Provides create/read operations for conversations and their messages.
//! Nothing is ever updated or deleted through this trait.

use supportchat_types::chat::{ChatMessage, Conversation, ConversationId};
use supportchat_types::error::RepositoryError;

/// Repository trait for conversation and message persistence.
///
/// Implementations live in supportchat-infra (e.g., `SqliteConversationRepository`).
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
pub trait ConversationRepository: Send + Sync {
    /// Create a new conversation.
    fn create_conversation(
        &self,
        conversation: &Conversation,
    ) -> impl std::future::Future<Output = Result<Conversation, RepositoryError>> + Send;

    /// Get a conversation by id.
    fn get_conversation(
        &self,
        id: &ConversationId,
    ) -> impl std::future::Future<Output = Result<Option<Conversation>, RepositoryError>> + Send;

    /// Save a new message. Fails if the conversation does not exist.
    fn save_message(
        &self,
        message: &ChatMessage,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Get messages for a conversation ordered by created_at ASC, optionally
    /// limited to the first `limit`.
    fn get_messages(
        &self,
        id: &ConversationId,
        limit: Option<i64>,
    ) -> impl std::future::Future<Output = Result<Vec<ChatMessage>, RepositoryError>> + Send;

    /// Get the last `limit` messages of a conversation, ordered by created_at ASC.
    fn get_recent_messages(
        &self,
        id: &ConversationId,
        limit: i64,
    ) -> impl std::future::Future<Output = Result<Vec<ChatMessage>, RepositoryError>> + Send;
}
