//! SQLite conversation repository implementation.
//!
//! Implements `ConversationRepository` from `supportchat-core` using sqlx with
//! split read/write pools: raw queries, private Row structs, writes on the
//! single writer connection, reads on the reader pool.

use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::Row;
use supportchat_core::chat::repository::ConversationRepository;
use supportchat_types::chat::{ChatMessage, Conversation, ConversationId, MessageRole};
use supportchat_types::error::RepositoryError;
use uuid::Uuid;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `ConversationRepository`.
#[derive(Clone)]
pub struct SqliteConversationRepository {
    pool: DatabasePool,
}

impl SqliteConversationRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

// ---------------------------------------------------------------------------
// Private Row types for SQLite-to-domain mapping
// ---------------------------------------------------------------------------

struct ConversationRow {
    id: String,
    created_at: String,
}

impl ConversationRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_conversation(self) -> Result<Conversation, RepositoryError> {
        Ok(Conversation {
            id: ConversationId(self.id),
            created_at: parse_datetime(&self.created_at)?,
        })
    }
}

struct MessageRow {
    id: String,
    conversation_id: String,
    role: String,
    content: String,
    created_at: String,
}

impl MessageRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            conversation_id: row.try_get("conversation_id")?,
            role: row.try_get("role")?,
            content: row.try_get("content")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_message(self) -> Result<ChatMessage, RepositoryError> {
        let id = Uuid::parse_str(&self.id)
            .map_err(|e| RepositoryError::Query(format!("invalid message id: {e}")))?;
        let role: MessageRole = self
            .role
            .parse()
            .map_err(|e: String| RepositoryError::Query(e))?;

        Ok(ChatMessage {
            id,
            conversation_id: ConversationId(self.conversation_id),
            role,
            content: self.content,
            created_at: parse_datetime(&self.created_at)?,
        })
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}

/// Fixed-width so that `ORDER BY created_at` on TEXT is chronological.
fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn rows_into_messages(
    rows: &[sqlx::sqlite::SqliteRow],
) -> Result<Vec<ChatMessage>, RepositoryError> {
    let mut messages = Vec::with_capacity(rows.len());
    for row in rows {
        let msg_row =
            MessageRow::from_row(row).map_err(|e| RepositoryError::Query(e.to_string()))?;
        messages.push(msg_row.into_message()?);
    }
    Ok(messages)
}

// ---------------------------------------------------------------------------
// ConversationRepository implementation
// ---------------------------------------------------------------------------

impl ConversationRepository for SqliteConversationRepository {
    async fn create_conversation(
        &self,
        conversation: &Conversation,
    ) -> Result<Conversation, RepositoryError> {
        sqlx::query("INSERT INTO conversations (id, created_at) VALUES (?, ?)")
            .bind(conversation.id.as_str())
            .bind(format_datetime(&conversation.created_at))
            .execute(&self.pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(conversation.clone())
    }

    async fn get_conversation(
        &self,
        id: &ConversationId,
    ) -> Result<Option<Conversation>, RepositoryError> {
        let row = sqlx::query("SELECT id, created_at FROM conversations WHERE id = ?")
            .bind(id.as_str())
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let conversation_row = ConversationRow::from_row(&row)
                    .map_err(|e| RepositoryError::Query(e.to_string()))?;
                Ok(Some(conversation_row.into_conversation()?))
            }
            None => Ok(None),
        }
    }

    async fn save_message(&self, message: &ChatMessage) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO messages (id, conversation_id, role, content, created_at)
               VALUES (?, ?, ?, ?, ?)"#,
        )
        .bind(message.id.to_string())
        .bind(message.conversation_id.as_str())
        .bind(message.role.to_string())
        .bind(&message.content)
        .bind(format_datetime(&message.created_at))
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(())
    }

    async fn get_messages(
        &self,
        id: &ConversationId,
        limit: Option<i64>,
    ) -> Result<Vec<ChatMessage>, RepositoryError> {
        let mut sql = String::from(
            "SELECT * FROM messages WHERE conversation_id = ? ORDER BY created_at ASC, rowid ASC",
        );

        if let Some(limit) = limit {
            sql.push_str(&format!(" LIMIT {limit}"));
        }

        let rows = sqlx::query(&sql)
            .bind(id.as_str())
            .fetch_all(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        rows_into_messages(&rows)
    }

    async fn get_recent_messages(
        &self,
        id: &ConversationId,
        limit: i64,
    ) -> Result<Vec<ChatMessage>, RepositoryError> {
        let rows = sqlx::query(
            r#"SELECT * FROM (
                   SELECT m.*, m.rowid AS seq FROM messages m
                   WHERE m.conversation_id = ?
                   ORDER BY m.created_at DESC, m.rowid DESC
                   LIMIT ?
               )
               ORDER BY created_at ASC, seq ASC"#,
        )
        .bind(id.as_str())
        .bind(limit)
        .fetch_all(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        rows_into_messages(&rows)
    }
}
