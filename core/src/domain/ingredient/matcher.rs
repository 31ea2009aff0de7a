use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::ingredient::entities::Ingredient;

/// The subset of a user's conditions that an ingredient helps or harms.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, ToSchema)]
pub struct ConditionMatches {
    pub beneficial: Vec<String>,
    pub harmful: Vec<String>,
}

impl ConditionMatches {
    pub fn is_empty(&self) -> bool {
        self.beneficial.is_empty() && self.harmful.is_empty()
    }
}

/// Intersects an ingredient's declared condition lists with a user's
/// condition set.
///
/// Pure and order-preserving: the output follows the ingredient's own list
/// order, not the order of the condition set.
pub fn match_conditions(ingredient: &Ingredient, condition_ids: &[String]) -> ConditionMatches {
    let in_set = |id: &String| condition_ids.iter().any(|c| c == id);

    ConditionMatches {
        beneficial: ingredient.beneficial_for.iter().filter(|id| in_set(id)).cloned().collect(),
        harmful: ingredient.harmful_for.iter().filter(|id| in_set(id)).cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ingredient::store::IngredientStore;

    fn ids(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn matcher_intersects_both_lists() {
        let store = IngredientStore::new();
        let oats = store.by_id("oats").unwrap();

        let matches = match_conditions(oats, &ids(&["diabetes_t2", "gout", "pregnancy"]));
        assert_eq!(matches.beneficial, ids(&["diabetes_t2"]));
        assert_eq!(matches.harmful, ids(&["gout"]));
    }

    #[test]
    fn matcher_is_empty_for_disjoint_condition_set() {
        let store = IngredientStore::new();
        let cucumber = store.by_id("cucumber").unwrap();

        let matches = match_conditions(cucumber, &ids(&["celiac"]));
        assert!(matches.is_empty());
    }

    #[test]
    fn matcher_preserves_ingredient_declared_order() {
        let store = IngredientStore::new();
        let spinach = store.by_id("spinach").unwrap();

        // Conditions supplied in reverse of the ingredient's declaration.
        let matches = match_conditions(spinach, &ids(&["hyperkalemia", "ckd_3_5", "gout"]));
        assert_eq!(matches.harmful, ids(&["gout", "ckd_3_5", "hyperkalemia"]));
    }

    #[test]
    fn no_ingredient_matches_a_condition_as_both_beneficial_and_harmful() {
        let store = IngredientStore::new();
        let all_conditions: Vec<String> = store
            .all()
            .iter()
            .flat_map(|i| i.beneficial_for.iter().chain(i.harmful_for.iter()))
            .cloned()
            .collect();

        for ingredient in store.all() {
            let matches = match_conditions(ingredient, &all_conditions);
            for id in &matches.beneficial {
                assert!(
                    !matches.harmful.contains(id),
                    "{} lists {} on both sides",
                    ingredient.id,
                    id
                );
            }
        }
    }
}
