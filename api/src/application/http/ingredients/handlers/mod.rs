pub mod get_ingredient_matches;
pub mod get_ingredients;
