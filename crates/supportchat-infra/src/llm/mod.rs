//! Completion provider implementations.
//!
//! Contains the concrete implementation of the
//! [`CompletionProvider`](supportchat_core::llm::provider::CompletionProvider)
//! trait defined in `supportchat-core`.

pub mod gemini;
