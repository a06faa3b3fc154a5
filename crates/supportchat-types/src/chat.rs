//! Conversation, message, and history types for the support chat service.
//!
//! A conversation is a persisted chat thread; its id doubles as the session
//! id handed to the widget and echoed back on every later turn.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

/// Opaque conversation identifier, also used as the client's session id.
///
/// Any string is accepted: ids coming from clients are never parsed or
/// validated, so a malformed id behaves exactly like an unknown one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationId(pub String);

impl ConversationId {
    /// Generate a fresh, time-sortable id.
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ConversationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ConversationId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ConversationId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Who authored a message.
///
/// Maps to the CHECK constraint in the SQLite schema:
/// `CHECK (role IN ('USER', 'ASSISTANT'))`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageRole {
    User,
    Assistant,
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageRole::User => write!(f, "USER"),
            MessageRole::Assistant => write!(f, "ASSISTANT"),
        }
    }
}

impl FromStr for MessageRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USER" => Ok(MessageRole::User),
            "ASSISTANT" => Ok(MessageRole::Assistant),
            other => Err(format!("invalid message role: '{other}'")),
        }
    }
}

/// A persisted chat thread. Never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub id: ConversationId,
    pub created_at: DateTime<Utc>,
}

impl Conversation {
    /// A new conversation stamped with the current time.
    pub fn start() -> Self {
        Self {
            id: ConversationId::new(),
            created_at: Utc::now(),
        }
    }
}

/// A single message within a conversation.
///
/// Messages are ordered by `created_at` within a conversation and are
/// immutable once saved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub conversation_id: ConversationId,
    pub role: MessageRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(conversation_id: ConversationId, role: MessageRole, content: String) -> Self {
        Self {
            id: Uuid::now_v7(),
            conversation_id,
            role,
            content,
            created_at: Utc::now(),
        }
    }
}

/// Author label as shown by the chat widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

impl From<MessageRole> for Sender {
    fn from(role: MessageRole) -> Self {
        match role {
            MessageRole::User => Sender::User,
            MessageRole::Assistant => Sender::Ai,
        }
    }
}

/// One row of a conversation's history in the widget's format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub text: String,
    pub sender: Sender,
}

impl From<ChatMessage> for HistoryEntry {
    fn from(msg: ChatMessage) -> Self {
        Self {
            id: msg.id.to_string(),
            text: msg.content,
            sender: msg.role.into(),
        }
    }
}

/// Result of a completed chat turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnReply {
    pub reply: String,
    pub session_id: ConversationId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_role_roundtrip() {
        for role in [MessageRole::User, MessageRole::Assistant] {
            let s = role.to_string();
            let parsed: MessageRole = s.parse().unwrap();
            assert_eq!(role, parsed);
        }
        assert_eq!("assistant".parse::<MessageRole>().unwrap(), MessageRole::Assistant);
        assert!("system".parse::<MessageRole>().is_err());
    }

    #[test]
    fn test_message_role_serde() {
        let json = serde_json::to_string(&MessageRole::Assistant).unwrap();
        assert_eq!(json, "\"ASSISTANT\"");
    }

    #[test]
    fn test_conversation_ids_are_distinct() {
        let a = Conversation::start();
        let b = Conversation::start();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_conversation_id_is_opaque() {
        let id = ConversationId::from("not-a-uuid");
        assert_eq!(id.as_str(), "not-a-uuid");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"not-a-uuid\"");
    }

    #[test]
    fn test_history_entry_sender_mapping() {
        let conv = ConversationId::new();
        let user: HistoryEntry =
            ChatMessage::new(conv.clone(), MessageRole::User, "Hello".into()).into();
        let ai: HistoryEntry =
            ChatMessage::new(conv, MessageRole::Assistant, "Hi!".into()).into();

        assert_eq!(user.sender, Sender::User);
        assert_eq!(ai.sender, Sender::Ai);

        let json = serde_json::to_value(&ai).unwrap();
        assert_eq!(json["sender"], "ai");
        assert_eq!(json["text"], "Hi!");
    }

    #[test]
    fn test_turn_reply_uses_camel_case() {
        let reply = TurnReply {
            reply: "Sure".to_string(),
            session_id: ConversationId::from("abc"),
        };
        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json["sessionId"], "abc");
        assert_eq!(json["reply"], "Sure");
    }
}
