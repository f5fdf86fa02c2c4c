//! Turns free-form model output into a [`RecipeRecord`].
//!
//! The model is asked for JSON but routinely wraps it in prose or markdown
//! fences, truncates it, or ignores the request entirely. [`normalize`] takes
//! the span from the first `{` to the last `}` in the reply, decodes it, and
//! checks that `title`, `ingredients` and `instructions` are present. Any
//! failure yields [`fallback_recipe`] instead of an error.
//!
//! The span is deliberately greedy rather than brace-balanced: two separate
//! JSON fragments, or prose with stray braces around the object, produce a
//! span that fails to decode and therefore falls back.

use crate::model::{Ingredient, Instruction, NutritionInfo, Recipe, RecipeRecord};
use log::{debug, warn};
use serde_json::{Map, Value};
use thiserror::Error;

/// Keys a decoded reply must carry with a non-empty value
pub const REQUIRED_FIELDS: [&str; 3] = ["title", "ingredients", "instructions"];

pub const FALLBACK_INSTRUCTION: &str = "Follow the cooking instructions based on your ingredients.";

#[derive(Error, Debug)]
enum ParseFailure {
    #[error("no JSON object found in response")]
    NoJsonFound,
    #[error("malformed JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("decoded JSON is not an object")]
    NotAnObject,
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// Normalize a raw model reply. Never fails: unusable replies produce the fallback record.
pub fn normalize(raw_text: &str) -> RecipeRecord {
    match parse_recipe_object(raw_text) {
        Ok(object) => {
            debug!("Parsed recipe object with {} fields", object.len());
            RecipeRecord::Generated(object)
        }
        Err(failure) => {
            warn!("Using fallback recipe: {}", failure);
            RecipeRecord::Fallback(fallback_recipe(raw_text))
        }
    }
}

/// The span from the first `{` to the last `}` in `text`, if the last comes after the first.
pub fn extract_json_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

/// True when a field is absent or holds an empty value.
///
/// Empty means `null`, `false`, numeric zero, the empty string, or the empty
/// array. Objects always count as present.
pub fn is_missing_or_empty(field: Option<&Value>) -> bool {
    match field {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !b,
        Some(Value::Number(n)) => n.as_f64().map_or(false, |f| f == 0.0),
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        Some(Value::Object(_)) => false,
    }
}

fn parse_recipe_object(raw_text: &str) -> Result<Map<String, Value>, ParseFailure> {
    let span = extract_json_span(raw_text).ok_or(ParseFailure::NoJsonFound)?;

    let object = match serde_json::from_str::<Value>(span)? {
        Value::Object(object) => object,
        _ => return Err(ParseFailure::NotAnObject),
    };

    if let Some(field) = REQUIRED_FIELDS
        .into_iter()
        .find(|field| is_missing_or_empty(object.get(*field)))
    {
        return Err(ParseFailure::MissingField(field));
    }

    Ok(object)
}

/// The fixed record returned when a reply cannot be used.
///
/// The raw reply is kept verbatim as the single instruction so the user still
/// sees whatever the model wrote.
pub fn fallback_recipe(raw_text: &str) -> Recipe {
    let instruction = if raw_text.is_empty() {
        FALLBACK_INSTRUCTION.to_string()
    } else {
        raw_text.to_string()
    };

    Recipe {
        title: "Custom Recipe".to_string(),
        description: "Generated recipe based on your ingredients".to_string(),
        prep_time: "15".to_string(),
        cook_time: "30".to_string(),
        total_time: "45".to_string(),
        servings: "4".to_string(),
        difficulty: "Medium".to_string(),
        cuisine: "Mixed".to_string(),
        ingredients: Vec::<Ingredient>::new(),
        equipment: vec!["Basic kitchen equipment".to_string()],
        instructions: vec![Instruction {
            step: 1,
            instruction,
            time: String::new(),
            temperature: String::new(),
        }],
        tips: vec![
            "Adjust seasoning to taste".to_string(),
            "Cook until done".to_string(),
        ],
        nutrition_info: NutritionInfo {
            calories: "Varies".to_string(),
            protein: "Varies".to_string(),
            carbs: "Varies".to_string(),
            fat: "Varies".to_string(),
        },
        storage: "Store in refrigerator for up to 3 days".to_string(),
        variations: vec![
            "Add your favorite spices".to_string(),
            "Substitute ingredients as needed".to_string(),
        ],
    }
}
