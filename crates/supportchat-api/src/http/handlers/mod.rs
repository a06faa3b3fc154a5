//! REST API endpoint handlers.

pub mod chat;
