//! Business logic and trait definitions for the support chat service.
//!
//! This crate defines the "ports" (repository and completion provider traits)
//! that the infrastructure layer implements, plus the chat turn handler that
//! drives them. It depends only on `supportchat-types` -- never on
//! `supportchat-infra` or any database/IO crate.

pub mod chat;
pub mod llm;
