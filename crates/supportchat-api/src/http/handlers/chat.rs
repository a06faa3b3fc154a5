//! Chat endpoints consumed by the widget.
//!
//! - `POST /api/chat/message` runs one turn and returns `{reply, sessionId}`.
//! - `GET /api/chat/history/{sessionId}` returns `[{id, text, sender}]`.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use serde::Deserialize;

use supportchat_types::chat::{ConversationId, HistoryEntry, TurnReply};

use crate::http::error::AppError;
use crate::state::AppState;

/// Request body for `POST /api/chat/message`.
#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    /// Missing is treated like empty and fails validation.
    #[serde(default)]
    pub message: String,
    #[serde(default, rename = "sessionId")]
    pub session_id: Option<String>,
}

/// POST /api/chat/message
pub async fn send_message(
    State(state): State<AppState>,
    payload: Result<Json<SendMessageRequest>, JsonRejection>,
) -> Result<Json<TurnReply>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::InvalidBody(e.body_text()))?;

    let reply = state
        .chat_service
        .handle_turn(&request.message, request.session_id.map(ConversationId::from))
        .await?;

    Ok(Json(reply))
}

/// GET /api/chat/history/{sessionId}
pub async fn get_history(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<Vec<HistoryEntry>>, AppError> {
    let history = state
        .chat_service
        .get_history(&ConversationId::from(session_id))
        .await
        .map_err(AppError::History)?;

    Ok(Json(history))
}
