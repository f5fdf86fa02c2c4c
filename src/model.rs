use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// A recipe request as submitted by a client.
///
/// Every field is optional at this level: a missing field, or one with the
/// wrong JSON type, decodes as `None` so the validator can report it instead
/// of the decoder rejecting the whole document. `difficulty` is the exception:
/// absence is valid there, so a value of any other type is kept for the
/// validator to reject.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRequest {
    #[serde(default, deserialize_with = "lenient")]
    pub ingredients: Option<Vec<String>>,
    #[serde(
        default,
        rename = "cookingTime",
        alias = "cookingTimeMinutes",
        deserialize_with = "lenient"
    )]
    pub cooking_time: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub servings: Option<i64>,
    #[serde(default)]
    pub difficulty: Option<RequestedDifficulty>,
    #[serde(default, deserialize_with = "lenient")]
    pub dietary_restrictions: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub cuisine: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub meal_type: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub equipment: Option<Vec<String>>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Difficulty as submitted, before validation
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RequestedDifficulty {
    Text(String),
    Other(Value),
}

impl From<&str> for RequestedDifficulty {
    fn from(value: &str) -> Self {
        RequestedDifficulty::Text(value.to_string())
    }
}

/// Requested difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Easy" => Ok(Difficulty::Easy),
            "Medium" => Ok(Difficulty::Medium),
            "Hard" => Ok(Difficulty::Hard),
            other => Err(format!("Unknown difficulty: {}", other)),
        }
    }
}

/// A request that passed validation. Only this type reaches the prompt builder.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest {
    pub ingredients: Vec<String>,
    pub cooking_time: u32,
    pub servings: u32,
    pub difficulty: Option<Difficulty>,
    pub dietary_restrictions: Option<String>,
    pub cuisine: Option<String>,
    pub meal_type: Option<String>,
    pub equipment: Vec<String>,
}

/// The documented recipe shape. The fallback record is always built as one of these.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Recipe {
    pub title: String,
    pub description: String,
    pub prep_time: String,
    pub cook_time: String,
    pub total_time: String,
    pub servings: String,
    pub difficulty: String,
    pub cuisine: String,
    pub ingredients: Vec<Ingredient>,
    pub equipment: Vec<String>,
    pub instructions: Vec<Instruction>,
    pub tips: Vec<String>,
    pub nutrition_info: NutritionInfo,
    pub storage: String,
    pub variations: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ingredient {
    pub item: String,
    pub amount: String,
    pub unit: String,
    pub notes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Instruction {
    pub step: u32,
    pub instruction: String,
    pub time: String,
    pub temperature: String,
}

/// Descriptive nutrition estimates, not parsed numbers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NutritionInfo {
    pub calories: String,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
}

/// A generated recipe as returned to callers.
///
/// `Generated` holds the object decoded from the model reply exactly as the
/// model wrote it; no shape checks beyond the required keys are applied.
/// Both variants serialize to the same JSON shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RecipeRecord {
    Generated(Map<String, Value>),
    Fallback(Recipe),
}

impl RecipeRecord {
    pub fn title(&self) -> &str {
        match self {
            RecipeRecord::Generated(object) => {
                object.get("title").and_then(Value::as_str).unwrap_or("")
            }
            RecipeRecord::Fallback(recipe) => &recipe.title,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, RecipeRecord::Fallback(_))
    }

    /// JSON representation of the record
    pub fn to_value(&self) -> Value {
        match self {
            RecipeRecord::Generated(object) => Value::Object(object.clone()),
            RecipeRecord::Fallback(recipe) => serde_json::to_value(recipe).unwrap_or(Value::Null),
        }
    }
}
