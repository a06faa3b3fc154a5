//! Chat service orchestrating one support-chat turn and history reads.
//!
//! ChatService coordinates between the ConversationRepository and the
//! CompletionProvider: it validates the inbound message, resolves or creates
//! the conversation, persists the user turn, windows prior messages into
//! context, asks the provider for a reply, and persists that reply.

use supportchat_types::chat::{
    ChatMessage, Conversation, ConversationId, HistoryEntry, MessageRole, TurnReply,
};
use supportchat_types::config::WindowStrategy;
use supportchat_types::error::ChatError;
use supportchat_types::llm::{CompletionRequest, ContextMessage};
use tracing::{debug, info, instrument, warn};

use crate::chat::context::ContextWindow;
use crate::chat::prompt::{FALLBACK_REPLY, SYSTEM_INSTRUCTION};
use crate::chat::repository::ConversationRepository;
use crate::llm::provider::CompletionProvider;

/// Handles chat turns and history queries.
///
/// Generic over `ConversationRepository` and `CompletionProvider` to keep
/// supportchat-core free of any database or HTTP dependency.
pub struct ChatService<C: ConversationRepository, P: CompletionProvider> {
    repo: C,
    provider: P,
    window: ContextWindow,
}

impl<C: ConversationRepository, P: CompletionProvider> ChatService<C, P> {
    pub fn new(repo: C, provider: P, window: ContextWindow) -> Self {
        Self {
            repo,
            provider,
            window,
        }
    }

    /// Access the conversation repository.
    pub fn repo(&self) -> &C {
        &self.repo
    }

    /// Access the completion provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Run one chat turn.
    ///
    /// An absent (or empty) `session_id` starts a new conversation. A given
    /// id is used as-is without checking that it exists. Errors are not
    /// recovered: if the provider fails after the user message was saved,
    /// that message stays in the conversation unanswered.
    #[instrument(skip_all, fields(conversation_id = tracing::field::Empty))]
    pub async fn handle_turn(
        &self,
        message: &str,
        session_id: Option<ConversationId>,
    ) -> Result<TurnReply, ChatError> {
        if message.trim().is_empty() {
            return Err(ChatError::Validation("Message cannot be empty".to_string()));
        }

        let conversation_id = self.resolve_conversation(session_id).await?;
        tracing::Span::current()
            .record("conversation_id", tracing::field::display(&conversation_id));

        let user_message =
            ChatMessage::new(conversation_id.clone(), MessageRole::User, message.to_string());
        self.repo.save_message(&user_message).await?;

        // Fetched after the save, so the context ends with (or, past the
        // window, at least contains) this turn's user message.
        let contents = self.load_context(&conversation_id).await?;
        let request = CompletionRequest {
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
            contents,
        };

        debug!(
            provider = self.provider.name(),
            context_messages = request.contents.len(),
            "Requesting completion"
        );
        let response = self.provider.complete(&request).await?;

        let reply = if response.text.is_empty() {
            warn!(
                provider = self.provider.name(),
                "Provider returned no text, using fallback reply"
            );
            FALLBACK_REPLY.to_string()
        } else {
            response.text
        };

        let assistant_message =
            ChatMessage::new(conversation_id.clone(), MessageRole::Assistant, reply.clone());
        self.repo.save_message(&assistant_message).await?;

        info!(
            context_messages = request.contents.len(),
            reply_chars = reply.chars().count(),
            "Chat turn completed"
        );

        Ok(TurnReply {
            reply,
            session_id: conversation_id,
        })
    }

    /// All messages of a conversation, oldest-first, in the widget's format.
    ///
    /// An unknown id yields an empty history.
    pub async fn get_history(
        &self,
        session_id: &ConversationId,
    ) -> Result<Vec<HistoryEntry>, ChatError> {
        load_history(&self.repo, session_id).await
    }

    async fn resolve_conversation(
        &self,
        session_id: Option<ConversationId>,
    ) -> Result<ConversationId, ChatError> {
        match session_id.filter(|id| !id.as_str().is_empty()) {
            Some(id) => Ok(id),
            None => {
                let conversation = self.repo.create_conversation(&Conversation::start()).await?;
                info!(conversation_id = %conversation.id, "Conversation created");
                Ok(conversation.id)
            }
        }
    }

    async fn load_context(
        &self,
        conversation_id: &ConversationId,
    ) -> Result<Vec<ContextMessage>, ChatError> {
        let limit = self.window.limit() as i64;
        let messages = match self.window.strategy() {
            WindowStrategy::Oldest => self.repo.get_messages(conversation_id, Some(limit)).await?,
            WindowStrategy::Recent => self.repo.get_recent_messages(conversation_id, limit).await?,
        };
        Ok(self.window.build_context(&messages))
    }
}

/// History of a conversation straight from a repository, for callers that
/// have no completion provider (e.g. the `history` command).
pub async fn load_history<C: ConversationRepository>(
    repo: &C,
    session_id: &ConversationId,
) -> Result<Vec<HistoryEntry>, ChatError> {
    let messages = repo.get_messages(session_id, None).await?;
    Ok(messages.into_iter().map(HistoryEntry::from).collect())
}
