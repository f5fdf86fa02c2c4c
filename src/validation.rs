//! Request validation.
//!
//! Rules are checked independently and every violation is reported; a
//! request with several problems gets one message per problem, in a fixed
//! order (ingredients, cooking time, servings, difficulty).

use crate::model::{Difficulty, RecipeRequest, RequestedDifficulty, ValidatedRequest};
use std::ops::RangeInclusive;

pub const COOKING_TIME_RANGE: RangeInclusive<i64> = 5..=480;
pub const SERVINGS_RANGE: RangeInclusive<i64> = 1..=20;

pub const INGREDIENTS_REQUIRED: &str = "At least one ingredient is required";
pub const COOKING_TIME_OUT_OF_RANGE: &str = "Cooking time must be between 5 and 480 minutes";
pub const SERVINGS_OUT_OF_RANGE: &str = "Servings must be between 1 and 20";
pub const INVALID_DIFFICULTY: &str = "Difficulty must be Easy, Medium, or Hard";

/// Validate a request, returning every violation found. An empty list means valid.
pub fn validate(request: &RecipeRequest) -> Vec<String> {
    check(request).err().unwrap_or_default()
}

/// Validate a request and produce its validated form.
pub fn check(request: &RecipeRequest) -> Result<ValidatedRequest, Vec<String>> {
    let ingredients = check_ingredients(request.ingredients.as_deref());
    let cooking_time = check_range(
        request.cooking_time,
        &COOKING_TIME_RANGE,
        COOKING_TIME_OUT_OF_RANGE,
    );
    let servings = check_range(request.servings, &SERVINGS_RANGE, SERVINGS_OUT_OF_RANGE);
    let difficulty = check_difficulty(request.difficulty.as_ref());

    match (ingredients, cooking_time, servings, difficulty) {
        (Ok(ingredients), Ok(cooking_time), Ok(servings), Ok(difficulty)) => {
            Ok(ValidatedRequest {
                ingredients,
                cooking_time,
                servings,
                difficulty,
                dietary_restrictions: non_blank(request.dietary_restrictions.as_deref()),
                cuisine: non_blank(request.cuisine.as_deref()),
                meal_type: non_blank(request.meal_type.as_deref()),
                equipment: request
                    .equipment
                    .iter()
                    .flatten()
                    .filter_map(|item| non_blank(Some(item.as_str())))
                    .collect(),
            })
        }
        (ingredients, cooking_time, servings, difficulty) => Err([
            ingredients.err(),
            cooking_time.err(),
            servings.err(),
            difficulty.err(),
        ]
        .into_iter()
        .flatten()
        .map(str::to_string)
        .collect()),
    }
}

fn check_ingredients(ingredients: Option<&[String]>) -> Result<Vec<String>, &'static str> {
    let cleaned: Vec<String> = ingredients
        .unwrap_or_default()
        .iter()
        .filter_map(|item| non_blank(Some(item.as_str())))
        .collect();

    if cleaned.is_empty() {
        Err(INGREDIENTS_REQUIRED)
    } else {
        Ok(cleaned)
    }
}

fn check_range(
    value: Option<i64>,
    range: &RangeInclusive<i64>,
    message: &'static str,
) -> Result<u32, &'static str> {
    value
        .filter(|v| range.contains(v))
        .and_then(|v| u32::try_from(v).ok())
        .ok_or(message)
}

fn check_difficulty(
    difficulty: Option<&RequestedDifficulty>,
) -> Result<Option<Difficulty>, &'static str> {
    match difficulty {
        None => Ok(None),
        Some(RequestedDifficulty::Text(value)) if value.is_empty() => Ok(None),
        Some(RequestedDifficulty::Text(value)) => value
            .parse::<Difficulty>()
            .map(Some)
            .map_err(|_| INVALID_DIFFICULTY),
        Some(RequestedDifficulty::Other(_)) => Err(INVALID_DIFFICULTY),
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
