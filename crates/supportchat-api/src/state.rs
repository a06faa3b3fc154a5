//! Application state wiring all services together.
//!
//! AppState holds the concrete service instances used by both the CLI and
//! the REST API. `ChatService` is generic over repository/provider traits;
//! AppState pins it to the SQLite repository and the Gemini provider.

use std::sync::Arc;

use anyhow::Context;
use secrecy::SecretString;

use supportchat_core::chat::context::ContextWindow;
use supportchat_core::chat::service::ChatService;
use supportchat_infra::config::{resolve_data_dir, resolve_database_url};
use supportchat_infra::llm::gemini::GeminiProvider;
use supportchat_infra::sqlite::conversation::SqliteConversationRepository;
use supportchat_infra::sqlite::pool::DatabasePool;
use supportchat_types::config::AppConfig;

/// Environment variable holding the Gemini API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Concrete type alias for the service generics pinned to infra implementations.
pub type ConcreteChatService = ChatService<SqliteConversationRepository, GeminiProvider>;

/// Shared application state.
///
/// Used by both CLI commands and REST API handlers.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ConcreteChatService>,
}

impl AppState {
    /// Initialize the application state: open the database, build the
    /// provider from `GEMINI_API_KEY`, wire the chat service.
    pub async fn init(config: &AppConfig) -> anyhow::Result<Self> {
        let repo = open_repository(config).await?;
        let provider = GeminiProvider::from_config(gemini_api_key()?, &config.provider)
            .context("failed to create Gemini provider")?;

        tracing::info!(
            model = provider.model(),
            context_limit = config.chat.context_limit,
            context_strategy = %config.chat.context_strategy,
            "Chat service ready"
        );

        Ok(Self::new(repo, provider, config))
    }

    /// Wire state from already-constructed parts.
    pub fn new(
        repo: SqliteConversationRepository,
        provider: GeminiProvider,
        config: &AppConfig,
    ) -> Self {
        let window = ContextWindow::from_config(&config.chat);
        Self {
            chat_service: Arc::new(ChatService::new(repo, provider, window)),
        }
    }
}

/// Open (and migrate) the configured database.
///
/// The data directory is created only when the default SQLite location is used.
pub async fn open_repository(config: &AppConfig) -> anyhow::Result<SqliteConversationRepository> {
    let data_dir = resolve_data_dir();
    if config.database_url.is_none() {
        tokio::fs::create_dir_all(&data_dir)
            .await
            .with_context(|| format!("failed to create data directory {}", data_dir.display()))?;
    }

    let db_url = resolve_database_url(config, &data_dir);
    let pool = DatabasePool::new(&db_url)
        .await
        .context("failed to open database")?;

    Ok(SqliteConversationRepository::new(pool))
}

/// Read the Gemini API key from the environment.
pub fn gemini_api_key() -> anyhow::Result<SecretString> {
    match std::env::var(API_KEY_ENV) {
        Ok(key) if !key.trim().is_empty() => Ok(SecretString::from(key)),
        _ => anyhow::bail!("{API_KEY_ENV} is not set"),
    }
}
