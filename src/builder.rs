use std::time::Duration;

use crate::config::{default_google_model, AppConfig, ProviderConfig};
use crate::providers::ProviderFactory;
use crate::{RecipeError, RecipeService};

/// Supported text-generation providers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProviderKind {
    #[default]
    Google,
    OpenAI,
    Anthropic,
}

impl ProviderKind {
    /// Convert to provider name string used by the factory
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Google => "google",
            ProviderKind::OpenAI => "openai",
            ProviderKind::Anthropic => "anthropic",
        }
    }

    fn default_model(&self) -> String {
        match self {
            ProviderKind::Google => default_google_model(),
            ProviderKind::OpenAI => "gpt-4o-mini".to_string(),
            ProviderKind::Anthropic => "claude-sonnet-4-5".to_string(),
        }
    }
}

/// Builder for a [`RecipeService`] with explicit credentials.
///
/// Nothing is read from the environment unless [`RecipeServiceBuilder::config`]
/// is given a loaded [`AppConfig`].
#[derive(Debug, Default)]
pub struct RecipeServiceBuilder {
    config: Option<AppConfig>,
    provider: Option<ProviderKind>,
    api_key: Option<String>,
    model: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl RecipeServiceBuilder {
    /// Start from a loaded configuration; explicit builder settings override it
    ///
    /// # Example
    /// ```no_run
    /// use recipe_generator::{AppConfig, RecipeService};
    ///
    /// let config = AppConfig::load().unwrap();
    /// let service = RecipeService::builder().config(config).build();
    /// ```
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the LLM provider
    ///
    /// # Example
    /// ```
    /// use recipe_generator::{ProviderKind, RecipeService};
    ///
    /// let builder = RecipeService::builder()
    ///     .provider(ProviderKind::Anthropic);
    /// ```
    pub fn provider(mut self, provider: ProviderKind) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Set the API key for the LLM provider
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the model name for the LLM provider
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Point the provider at a different endpoint (proxies, tests)
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set a timeout for provider requests
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Build the service
    ///
    /// # Example
    /// ```
    /// use recipe_generator::{ProviderKind, RecipeService};
    ///
    /// let service = RecipeService::builder()
    ///     .provider(ProviderKind::Google)
    ///     .api_key("your-api-key")
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(service.provider_name(), "google");
    /// ```
    pub fn build(self) -> Result<RecipeService, RecipeError> {
        let config = self.config.unwrap_or_default();

        let provider_name = match self.provider {
            Some(kind) => kind.as_str().to_string(),
            None => config.default_provider.clone(),
        };

        let mut provider_config = match config.providers.get(&provider_name) {
            Some(existing) => existing.clone(),
            None => {
                let model = match self.provider {
                    Some(kind) => kind.default_model(),
                    None => {
                        return Err(RecipeError::ProviderError(format!(
                            "Default provider '{}' not found in configuration",
                            provider_name
                        )))
                    }
                };
                ProviderConfig::new(model)
            }
        };

        if let Some(api_key) = self.api_key {
            provider_config.api_key = Some(api_key);
        }
        if let Some(model) = self.model {
            provider_config.model = model;
        }
        if let Some(base_url) = self.base_url {
            provider_config.base_url = Some(base_url);
        }

        let timeout = self.timeout.unwrap_or_else(|| config.request_timeout());
        let provider = ProviderFactory::create(&provider_name, &provider_config, timeout)?;

        Ok(RecipeService::new(provider))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_kind_names() {
        assert_eq!(ProviderKind::default(), ProviderKind::Google);
        assert_eq!(ProviderKind::Google.as_str(), "google");
        assert_eq!(ProviderKind::OpenAI.as_str(), "openai");
        assert_eq!(ProviderKind::Anthropic.as_str(), "anthropic");
    }

    #[test]
    fn test_build_with_explicit_provider() {
        let service = RecipeService::builder()
            .provider(ProviderKind::OpenAI)
            .api_key("key")
            .model("gpt-4o")
            .timeout(Duration::from_secs(3))
            .build()
            .unwrap();
        assert_eq!(service.provider_name(), "openai");
    }

    #[test]
    fn test_build_defaults_to_google() {
        let service = RecipeService::builder().api_key("key").build().unwrap();
        assert_eq!(service.provider_name(), "google");
    }

    #[test]
    fn test_build_without_api_key_fails() {
        let result = RecipeService::builder()
            .provider(ProviderKind::Anthropic)
            .build();
        assert!(matches!(result, Err(RecipeError::ProviderError(_))));
    }

    #[test]
    fn test_build_uses_config_credentials() {
        let mut config = AppConfig::from_toml_str(
            r#"
            default_provider = "anthropic"

            [providers.anthropic]
            model = "claude-sonnet-4-5"
            api_key = "from-config"
            "#,
        )
        .unwrap();
        config.timeout = 5;

        let service = RecipeService::builder()
            .config(config)
            .build()
            .unwrap();
        assert_eq!(service.provider_name(), "anthropic");
    }

    #[test]
    fn test_build_unknown_default_provider() {
        let config = AppConfig {
            default_provider: "mistral".to_string(),
            ..AppConfig::default()
        };
        let result = RecipeService::builder()
            .config(config)
            .api_key("key")
            .build();
        assert!(result.is_err());
    }
}
