use crate::domain::ingredient::{
    data::INGREDIENTS,
    entities::{Ingredient, IngredientCategory},
};

/// Read-only view over the ingredient guide, process-wide like the
/// clinical catalogue.
#[derive(Debug, Clone, Default)]
pub struct IngredientStore;

impl IngredientStore {
    pub fn new() -> Self {
        Self
    }

    /// Every ingredient, in guide order.
    pub fn all(&self) -> &'static [Ingredient] {
        &INGREDIENTS
    }

    pub fn by_id(&self, id: &str) -> Option<&'static Ingredient> {
        INGREDIENTS.iter().find(|ingredient| ingredient.id == id)
    }

    pub fn by_category(&self, category: IngredientCategory) -> Vec<&'static Ingredient> {
        INGREDIENTS
            .iter()
            .filter(|ingredient| ingredient.category == category)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalogue::store::CatalogueStore;

    #[test]
    fn guide_is_populated_and_indexed() {
        let store = IngredientStore::new();
        assert!(store.all().len() > 50);
        assert!(store.by_id("oats").is_some());
        assert!(store.by_id("unobtainium").is_none());
    }

    #[test]
    fn category_filter_only_returns_that_category() {
        let store = IngredientStore::new();
        let grains = store.by_category(IngredientCategory::Grain);
        assert!(!grains.is_empty());
        assert!(grains.iter().all(|i| i.category == IngredientCategory::Grain));
    }

    #[test]
    fn condition_references_resolve_against_the_catalogue() {
        let ingredients = IngredientStore::new();
        let catalogue = CatalogueStore::new();

        for ingredient in ingredients.all() {
            for id in ingredient.beneficial_for.iter().chain(ingredient.harmful_for.iter()) {
                assert!(
                    catalogue.find_condition(id).is_some(),
                    "{} references unknown condition {}",
                    ingredient.id,
                    id
                );
            }
        }
    }

    #[test]
    fn no_condition_appears_in_both_lists_of_one_ingredient() {
        let store = IngredientStore::new();
        for ingredient in store.all() {
            for id in &ingredient.beneficial_for {
                assert!(
                    !ingredient.harmful_for.contains(id),
                    "{} declares {} as both beneficial and harmful",
                    ingredient.id,
                    id
                );
            }
        }
    }
}
