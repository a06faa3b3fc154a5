//! GeminiProvider -- concrete [`CompletionProvider`] for Google Gemini.
//!
//! Sends requests to the Generative Language API
//! (`/v1beta/models/{model}:generateContent`) with the API key in the
//! `x-goog-api-key` header.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never logged
//! or included in `Debug` output.

use std::time::Duration;

use reqwest::header::HeaderMap;
use secrecy::{ExposeSecret, SecretString};

use supportchat_core::llm::provider::CompletionProvider;
use supportchat_types::config::ProviderConfig;
use supportchat_types::llm::{CompletionRequest, CompletionResponse, LlmError};

use super::types::{
    GeminiContent, GeminiErrorEnvelope, GenerateContentRequest, GenerateContentResponse,
};

/// Google Gemini completion provider.
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
}

impl GeminiProvider {
    pub const DEFAULT_BASE_URL: &'static str = "https://generativelanguage.googleapis.com";

    /// Create a provider for `model` with no request timeout.
    pub fn new(api_key: SecretString, model: String) -> Result<Self, LlmError> {
        Self::build(api_key, model, None)
    }

    /// Create a provider from the `[provider]` config section.
    pub fn from_config(api_key: SecretString, config: &ProviderConfig) -> Result<Self, LlmError> {
        let provider = Self::build(
            api_key,
            config.model.clone(),
            config.request_timeout_secs.map(Duration::from_secs),
        )?;
        Ok(provider.with_base_url(config.base_url.clone()))
    }

    fn build(
        api_key: SecretString,
        model: String,
        timeout: Option<Duration>,
    ) -> Result<Self, LlmError> {
        if api_key.expose_secret().trim().is_empty() {
            return Err(LlmError::Configuration("API key is empty".to_string()));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| LlmError::Configuration(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            model,
        })
    }

    /// The model requests are sent to.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    /// Convert a generic [`CompletionRequest`] into a Gemini request body.
    fn to_gemini_request(request: &CompletionRequest) -> GenerateContentRequest {
        let contents = request
            .contents
            .iter()
            .map(|m| GeminiContent::text(Some(m.role.to_string().as_str()), &m.content))
            .collect();

        GenerateContentRequest {
            system_instruction: Some(GeminiContent::text(None, &request.system_instruction)),
            contents,
        }
    }
}

// No Debug derive: the struct holds the API key.

impl CompletionProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let body = Self::to_gemini_request(request);

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Provider {
                message: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let retry_after_ms = parse_retry_after_ms(response.headers());
            let error_body = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 | 403 => LlmError::AuthenticationFailed,
                429 => LlmError::RateLimited { retry_after_ms },
                _ => LlmError::Provider {
                    message: format!("HTTP {status}: {}", error_message(&error_body)),
                },
            });
        }

        let gemini_resp: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Deserialization(format!("failed to parse response: {e}")))?;

        if let Some(usage) = &gemini_resp.usage_metadata {
            tracing::debug!(
                model = %self.model,
                prompt_tokens = usage.prompt_token_count,
                output_tokens = usage.candidates_token_count,
                "Gemini completion received"
            );
        }

        Ok(CompletionResponse {
            text: gemini_resp.text(),
        })
    }
}

/// Human-readable message from a Google error envelope, or the raw body.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<GeminiErrorEnvelope>(body) {
        Ok(envelope) => {
            let message = envelope.error.message.unwrap_or_else(|| body.to_string());
            match envelope.error.status {
                Some(status) if !status.is_empty() => format!("{status}: {message}"),
                _ => message,
            }
        }
        Err(_) => body.to_string(),
    }
}

/// `Retry-After` in whole seconds, converted to milliseconds. Values too
/// large to represent in milliseconds are treated as absent.
fn parse_retry_after_ms(headers: &HeaderMap) -> Option<u64> {
    let value = headers.get(reqwest::header::RETRY_AFTER)?.to_str().ok()?;
    let secs = value.trim().parse::<u64>().ok()?;
    secs.checked_mul(1000)
}
