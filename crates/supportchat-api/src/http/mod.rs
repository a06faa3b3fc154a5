//! HTTP/REST API layer for the support chat service.
//!
//! Axum-based JSON API under `/api/chat/` with permissive CORS, consumed by
//! the chat widget.

pub mod error;
pub mod handlers;
pub mod router;
