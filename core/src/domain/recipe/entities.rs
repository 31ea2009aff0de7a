use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MacrosEstimate {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// One generated recipe.
///
/// `missing_ingredients` lists main ingredients required by the recipe but
/// absent from the supplied images — the auto-completion contract. Pantry
/// staples never appear there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub name: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub missing_ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub health_benefits: String,
    pub macros_estimate: MacrosEstimate,
}

/// The chef operation's full answer: what was recognized in the images and
/// one recipe per meal of the day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChefResponse {
    pub identified_ingredients: Vec<String>,
    pub breakfast: Recipe,
    pub lunch: Recipe,
    pub dinner: Recipe,
}
