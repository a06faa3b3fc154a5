//! Infrastructure layer for the support chat service.
//!
//! Contains implementations of the traits defined in `supportchat-core`:
//! SQLite persistence for conversations and messages, the Google Gemini
//! completion provider, and the configuration loader.

pub mod config;
pub mod llm;
pub mod sqlite;
