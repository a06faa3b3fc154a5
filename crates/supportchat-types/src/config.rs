//! Configuration types for the support chat service.
//!
//! `AppConfig` represents the optional `supportchat.toml` file plus the
//! environment overrides applied on top of it. All fields have defaults, so
//! an empty file (or no file at all) is a valid configuration. The provider
//! API key is deliberately absent: it is read from the environment and kept
//! out of anything serializable.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Database connection string. `None` means the default SQLite file
    /// under the data directory.
    #[serde(default)]
    pub database_url: Option<String>,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub provider: ProviderConfig,

    #[serde(default)]
    pub chat: ChatConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Completion provider settings (Gemini).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout. `None` leaves provider calls unbounded.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: default_base_url(),
            request_timeout_secs: None,
        }
    }
}

/// How prior messages are windowed into model context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowStrategy {
    /// The first `limit` messages of the conversation.
    #[default]
    Oldest,
    /// The last `limit` messages, still ordered oldest-first.
    Recent,
}

impl fmt::Display for WindowStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowStrategy::Oldest => write!(f, "oldest"),
            WindowStrategy::Recent => write!(f, "recent"),
        }
    }
}

/// Chat turn settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Maximum number of messages sent to the provider per turn.
    #[serde(default = "default_context_limit")]
    pub context_limit: usize,
    #[serde(default)]
    pub context_strategy: WindowStrategy,
}

fn default_context_limit() -> usize {
    10
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            context_limit: default_context_limit(),
            context_strategy: WindowStrategy::default(),
        }
    }
}
