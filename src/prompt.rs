use crate::model::ValidatedRequest;

/// Output format the model is asked to follow.
///
/// Loaded from `prompt.txt` at compile time so the JSON skeleton can be
/// edited without dealing with Rust string escaping.
pub const RECIPE_FORMAT_PROMPT: &str = include_str!("prompt.txt");

const DEFAULT_DIETARY_RESTRICTIONS: &str = "None";
const DEFAULT_ANY: &str = "Any";
const DEFAULT_EQUIPMENT: &str = "Basic kitchen equipment";

/// Build the generation prompt for a validated request.
pub fn build_recipe_prompt(request: &ValidatedRequest) -> String {
    let equipment = if request.equipment.is_empty() {
        DEFAULT_EQUIPMENT.to_string()
    } else {
        request.equipment.join(", ")
    };

    format!(
        "Create a detailed recipe with the following specifications:\n\n\
         INGREDIENTS: {}\n\
         COOKING TIME: {} minutes\n\
         DIFFICULTY LEVEL: {}\n\
         SERVINGS: {}\n\
         DIETARY RESTRICTIONS: {}\n\
         CUISINE TYPE: {}\n\
         MEAL TYPE: {}\n\
         AVAILABLE EQUIPMENT: {}\n\n\
         {}",
        request.ingredients.join(", "),
        request.cooking_time,
        request
            .difficulty
            .map(|d| d.as_str())
            .unwrap_or(DEFAULT_ANY),
        request.servings,
        request
            .dietary_restrictions
            .as_deref()
            .unwrap_or(DEFAULT_DIETARY_RESTRICTIONS),
        request.cuisine.as_deref().unwrap_or(DEFAULT_ANY),
        request.meal_type.as_deref().unwrap_or(DEFAULT_ANY),
        equipment,
        RECIPE_FORMAT_PROMPT
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Difficulty;

    fn request() -> ValidatedRequest {
        ValidatedRequest {
            ingredients: vec!["chicken".to_string(), "rice".to_string()],
            cooking_time: 30,
            servings: 4,
            difficulty: None,
            dietary_restrictions: None,
            cuisine: None,
            meal_type: None,
            equipment: vec![],
        }
    }

    #[test]
    fn test_format_prompt_is_embedded() {
        assert!(RECIPE_FORMAT_PROMPT.contains("\"nutritionInfo\""));
        assert!(RECIPE_FORMAT_PROMPT.contains("\"instructions\""));
        assert!(RECIPE_FORMAT_PROMPT.contains("JSON format"));
    }

    #[test]
    fn test_prompt_uses_defaults_for_absent_fields() {
        let prompt = build_recipe_prompt(&request());

        assert!(prompt.contains("INGREDIENTS: chicken, rice\n"));
        assert!(prompt.contains("COOKING TIME: 30 minutes\n"));
        assert!(prompt.contains("DIFFICULTY LEVEL: Any\n"));
        assert!(prompt.contains("SERVINGS: 4\n"));
        assert!(prompt.contains("DIETARY RESTRICTIONS: None\n"));
        assert!(prompt.contains("CUISINE TYPE: Any\n"));
        assert!(prompt.contains("MEAL TYPE: Any\n"));
        assert!(prompt.contains("AVAILABLE EQUIPMENT: Basic kitchen equipment\n"));
        assert!(prompt.ends_with(RECIPE_FORMAT_PROMPT));
    }

    #[test]
    fn test_prompt_includes_provided_fields() {
        let prompt = build_recipe_prompt(&ValidatedRequest {
            difficulty: Some(Difficulty::Hard),
            dietary_restrictions: Some("Gluten-Free".to_string()),
            cuisine: Some("Thai".to_string()),
            meal_type: Some("Dinner".to_string()),
            equipment: vec!["Wok".to_string(), "Rice Cooker".to_string()],
            ..request()
        });

        assert!(prompt.contains("DIFFICULTY LEVEL: Hard\n"));
        assert!(prompt.contains("DIETARY RESTRICTIONS: Gluten-Free\n"));
        assert!(prompt.contains("CUISINE TYPE: Thai\n"));
        assert!(prompt.contains("MEAL TYPE: Dinner\n"));
        assert!(prompt.contains("AVAILABLE EQUIPMENT: Wok, Rice Cooker\n"));
    }
}
