pub mod builder;
pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod normalizer;
pub mod prompt;
pub mod providers;
pub mod server;
pub mod service;
pub mod validation;

pub use builder::{ProviderKind, RecipeServiceBuilder};
pub use config::AppConfig;
pub use error::RecipeError;
pub use model::{
    Difficulty, Ingredient, Instruction, NutritionInfo, Recipe, RecipeRecord, RecipeRequest,
    RequestedDifficulty, ValidatedRequest,
};
pub use normalizer::{fallback_recipe, normalize};
pub use service::RecipeService;
pub use validation::validate;

/// Generate a recipe using `config.toml` and the environment for provider settings.
///
/// # Example
/// ```no_run
/// use recipe_generator::{generate_recipe, RecipeRequest};
///
/// # async fn run() -> Result<(), recipe_generator::RecipeError> {
/// let request = RecipeRequest {
///     ingredients: Some(vec!["chicken".to_string(), "rice".to_string()]),
///     cooking_time: Some(30),
///     servings: Some(4),
///     ..Default::default()
/// };
/// let recipe = generate_recipe(&request).await?;
/// println!("{}", recipe.title());
/// # Ok(())
/// # }
/// ```
pub async fn generate_recipe(request: &RecipeRequest) -> Result<RecipeRecord, RecipeError> {
    let config = AppConfig::load()?;
    RecipeService::from_config(&config)?
        .generate(request)
        .await
}
