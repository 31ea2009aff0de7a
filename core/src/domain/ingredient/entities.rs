use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::catalogue::entities::Bilingual;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum IngredientCategory {
    Grain,
    Protein,
    Vegetable,
    Fruit,
    Dairy,
    Other,
}

/// Macronutrients per 100 g.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct MacroBreakdown {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// One entry of the ingredient guide.
///
/// `beneficial_for` and `harmful_for` reference catalogued condition ids and
/// are disjoint for any single ingredient.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Ingredient {
    pub id: String,
    pub name: Bilingual,
    pub category: IngredientCategory,
    /// kcal per 100 g.
    pub calories: f64,
    pub nutrients: MacroBreakdown,
    pub beneficial_for: Vec<String>,
    pub harmful_for: Vec<String>,
    pub description: Bilingual,
}
