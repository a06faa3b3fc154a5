//! Application error type mapping to HTTP responses.
//!
//! The widget only distinguishes success from failure, so every error is a
//! `500` with a `{"error": message}` body.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use supportchat_types::error::ChatError;

/// Message returned for any history lookup failure.
pub const HISTORY_ERROR_MESSAGE: &str = "Failed to fetch history";

/// Used when an error renders to an empty message.
const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// A chat turn failed; the error message is returned to the client.
    Chat(ChatError),
    /// A history read failed; the client gets a fixed message.
    History(ChatError),
    /// The request body could not be read as JSON.
    InvalidBody(String),
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        AppError::Chat(e)
    }
}

impl AppError {
    /// The message placed in the response body.
    pub fn message(&self) -> String {
        let message = match self {
            AppError::Chat(e) => e.to_string(),
            AppError::History(_) => HISTORY_ERROR_MESSAGE.to_string(),
            AppError::InvalidBody(msg) => msg.clone(),
        };
        if message.is_empty() {
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Chat(e) => tracing::error!(error = %e, "Chat error"),
            AppError::History(e) => tracing::error!(error = %e, "History error"),
            AppError::InvalidBody(msg) => tracing::error!(error = %msg, "Invalid request body"),
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.message() })),
        )
            .into_response()
    }
}
