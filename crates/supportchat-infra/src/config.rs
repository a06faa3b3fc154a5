//! Configuration loader for the support chat service.
//!
//! Reads an optional `supportchat.toml` and deserializes it into
//! [`AppConfig`], then layers environment overrides on top. Falls back to
//! defaults when the file is missing or malformed.

use std::path::{Path, PathBuf};

use supportchat_types::config::AppConfig;

use crate::sqlite::pool::default_database_url;

/// File name looked up in the data directory when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = "supportchat.toml";

/// Resolve the data directory.
///
/// Checks `SUPPORTCHAT_DATA_DIR` first, then falls back to `~/.supportchat`.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("SUPPORTCHAT_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".supportchat");
    }

    PathBuf::from(".supportchat")
}

/// Load configuration from `path`, or `{data_dir}/supportchat.toml` when
/// `path` is `None`, then apply environment overrides.
///
/// - Missing file: defaults.
/// - Unreadable or unparsable file: warning, then defaults.
pub async fn load_config(path: Option<&Path>) -> AppConfig {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => resolve_data_dir().join(CONFIG_FILE_NAME),
    };

    let config = read_config_file(&config_path).await;
    apply_env_overrides(config, |key| std::env::var(key).ok())
}

async fn read_config_file(config_path: &Path) -> AppConfig {
    let content = match tokio::fs::read_to_string(config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config found at {}, using defaults", config_path.display());
            return AppConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return AppConfig::default();
        }
    };

    match toml::from_str::<AppConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            AppConfig::default()
        }
    }
}

/// Apply `DATABASE_URL`, `PORT`, `GEMINI_MODEL` and `GEMINI_BASE_URL`.
///
/// Empty values are ignored. An unparsable `PORT` keeps the configured port.
pub fn apply_env_overrides<F>(mut config: AppConfig, lookup: F) -> AppConfig
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(url) = get("DATABASE_URL") {
        config.database_url = Some(url);
    }
    if let Some(port) = get("PORT") {
        match port.trim().parse::<u16>() {
            Ok(port) => config.server.port = port,
            Err(_) => tracing::warn!(%port, "Ignoring invalid PORT"),
        }
    }
    if let Some(model) = get("GEMINI_MODEL") {
        config.provider.model = model;
    }
    if let Some(base_url) = get("GEMINI_BASE_URL") {
        config.provider.base_url = base_url;
    }

    config
}

/// The configured database URL, or the default SQLite file in `data_dir`.
pub fn resolve_database_url(config: &AppConfig, data_dir: &Path) -> String {
    config
        .database_url
        .clone()
        .unwrap_or_else(|| default_database_url(data_dir))
}
