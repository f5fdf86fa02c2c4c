use crate::config::AppConfig;
use crate::error::RecipeError;
use crate::model::{RecipeRecord, RecipeRequest};
use crate::normalizer::normalize;
use crate::prompt::build_recipe_prompt;
use crate::providers::{LlmProvider, ProviderFactory};
use crate::validation;
use log::{error, info};

/// Validates requests, calls the provider once, and normalizes its reply.
///
/// Holds no per-request state, so one instance can serve concurrent requests.
pub struct RecipeService {
    provider: Box<dyn LlmProvider>,
}

impl RecipeService {
    pub fn new(provider: Box<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    /// Build a service around the configured default provider
    pub fn from_config(config: &AppConfig) -> Result<Self, RecipeError> {
        Ok(Self::new(ProviderFactory::get_default_provider(config)?))
    }

    pub fn builder() -> crate::builder::RecipeServiceBuilder {
        crate::builder::RecipeServiceBuilder::default()
    }

    pub fn provider_name(&self) -> &str {
        self.provider.provider_name()
    }

    /// Validate a request without generating anything
    pub fn validate(&self, request: &RecipeRequest) -> Vec<String> {
        validation::validate(request)
    }

    /// Generate a recipe.
    ///
    /// Fails with [`RecipeError::Validation`] when the request is invalid and
    /// with [`RecipeError::Generation`] when the provider call fails or returns
    /// no text. An unusable reply is not an error: it yields the fallback record.
    pub async fn generate(&self, request: &RecipeRequest) -> Result<RecipeRecord, RecipeError> {
        let validated = validation::check(request).map_err(RecipeError::Validation)?;
        let prompt = build_recipe_prompt(&validated);

        info!(
            "Generating recipe with {} for {} ingredient(s)",
            self.provider.provider_name(),
            validated.ingredients.len()
        );

        let text = self.provider.generate(&prompt).await.map_err(|e| {
            error!("{} request failed: {}", self.provider.provider_name(), e);
            RecipeError::Generation(e.to_string())
        })?;

        if text.trim().is_empty() {
            error!("{} returned an empty reply", self.provider.provider_name());
            return Err(RecipeError::Generation(
                "provider returned an empty response".to_string(),
            ));
        }

        let record = normalize(&text);
        info!(
            "Generated recipe '{}' (fallback: {})",
            record.title(),
            record.is_fallback()
        );
        Ok(record)
    }
}
