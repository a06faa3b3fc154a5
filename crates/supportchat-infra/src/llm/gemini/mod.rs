//! Google Gemini completion provider.
//!
//! This module provides the [`GeminiProvider`] which implements the
//! [`CompletionProvider`](supportchat_core::llm::provider::CompletionProvider)
//! trait for the `generateContent` REST endpoint.

pub mod client;
pub mod types;

pub use client::GeminiProvider;
