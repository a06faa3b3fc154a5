use thiserror::Error;

use crate::llm::LlmError;

/// Errors from repository operations (used by trait definitions in supportchat-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),
}

/// Errors from a chat turn or history query.
///
/// Nothing here is recovered: every variant propagates to the caller.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("{0}")]
    Validation(String),

    #[error("persistence failure: {0}")]
    Persistence(#[from] RepositoryError),

    #[error("completion provider failure: {0}")]
    Provider(#[from] LlmError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_display() {
        let err = RepositoryError::Query("syntax error".to_string());
        assert_eq!(err.to_string(), "query error: syntax error");
    }

    #[test]
    fn test_validation_message_is_bare() {
        let err = ChatError::Validation("Message cannot be empty".to_string());
        assert_eq!(err.to_string(), "Message cannot be empty");
    }

    #[test]
    fn test_chat_error_from_sources() {
        let err: ChatError = RepositoryError::Connection.into();
        assert!(matches!(err, ChatError::Persistence(_)));

        let err: ChatError = LlmError::AuthenticationFailed.into();
        assert_eq!(
            err.to_string(),
            "completion provider failure: authentication failed"
        );
    }
}
