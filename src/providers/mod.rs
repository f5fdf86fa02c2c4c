mod anthropic;
mod factory;
mod google;
mod open_ai;

pub use anthropic::AnthropicProvider;
pub use factory::ProviderFactory;
pub use google::GoogleProvider;
pub use open_ai::OpenAIProvider;

use async_trait::async_trait;
use reqwest::{Client, Response};
use std::error::Error;
use std::time::Duration;

pub type ProviderResult<T> = Result<T, Box<dyn Error + Send + Sync>>;

/// Unified trait for all text-generation providers
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Get the provider name (e.g., "google", "openai")
    fn provider_name(&self) -> &str;

    /// Send a single prompt and return the model's text reply
    async fn generate(&self, prompt: &str) -> ProviderResult<String>;
}

pub(crate) fn http_client(timeout: Duration) -> ProviderResult<Client> {
    Ok(Client::builder().timeout(timeout).build()?)
}

/// Pass successful responses through, turn anything else into an error carrying the body
pub(crate) async fn ensure_success(provider: &str, response: Response) -> ProviderResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(format!("{} request failed with status {}: {}", provider, status, body).into())
}

pub(crate) fn require_api_key(
    provider: &str,
    api_key: Option<&String>,
) -> Result<String, String> {
    api_key
        .filter(|key| !key.is_empty())
        .cloned()
        .ok_or_else(|| format!("API key for '{}' not found in configuration", provider))
}
