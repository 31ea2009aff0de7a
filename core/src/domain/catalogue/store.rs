use std::collections::HashMap;
use std::sync::LazyLock;

use crate::domain::catalogue::{
    data::{DIET_RULES, DISEASE_INFO, HEALTH_CATEGORIES},
    entities::{ConditionRef, DietRule, DiseaseInfo, HealthCategory, HealthCondition},
};

/// Guidance emitted when no condition resolves to a dietary rule.
pub const GENERAL_GUIDANCE: &str =
    "No specific medical conditions provided. Follow general healthy eating guidelines.";

static CONDITION_INDEX: LazyLock<HashMap<&'static str, &'static HealthCondition>> =
    LazyLock::new(|| {
        HEALTH_CATEGORIES
            .iter()
            .flat_map(|category| category.groups.iter())
            .flat_map(|group| group.conditions.iter())
            .map(|condition| (condition.id.as_str(), condition))
            .collect()
    });

/// Read-only view over the clinical reference tables.
///
/// There is no mutation API; the underlying tables are process-wide statics
/// and safe for unbounded concurrent reads.
#[derive(Debug, Clone, Default)]
pub struct CatalogueStore;

impl CatalogueStore {
    pub fn new() -> Self {
        Self
    }

    /// The full category tree, in canonical display order.
    pub fn categories(&self) -> &'static [HealthCategory] {
        &HEALTH_CATEGORIES
    }

    /// All catalogued conditions, flattened in catalogue order.
    pub fn all_conditions(&self) -> impl Iterator<Item = &'static HealthCondition> {
        HEALTH_CATEGORIES
            .iter()
            .flat_map(|category| category.groups.iter())
            .flat_map(|group| group.conditions.iter())
    }

    pub fn find_condition(&self, id: &str) -> Option<&'static HealthCondition> {
        CONDITION_INDEX.get(id).copied()
    }

    pub fn lookup_rule(&self, id: &str) -> Option<&'static DietRule> {
        DIET_RULES.get(id)
    }

    pub fn lookup_disease_info(&self, id: &str) -> Option<&'static DiseaseInfo> {
        DISEASE_INFO.get(id)
    }

    /// Classifies a raw identifier at the boundary where it first enters the
    /// pipeline. Anything outside the catalogue is carried verbatim.
    pub fn classify(&self, raw: &str) -> ConditionRef {
        match self.find_condition(raw) {
            Some(condition) => ConditionRef::Catalogued(condition),
            None => ConditionRef::FreeText(raw.to_string()),
        }
    }

    /// Human-readable names for a condition set, comma-joined in input
    /// order. Free-text identifiers appear as-is.
    pub fn display_names(&self, ids: &[String]) -> String {
        ids.iter()
            .map(|id| self.classify(id).display_name().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Consolidates the dietary rules of a condition set into one guidance
    /// text block per resolved condition, in input order.
    ///
    /// Identifiers without a rule are skipped. Duplicate identifiers produce
    /// duplicate blocks. When nothing resolves the fixed generic sentence is
    /// returned, never an empty string.
    pub fn clinical_guidance(&self, ids: &[String]) -> String {
        let blocks: Vec<String> = ids
            .iter()
            .filter_map(|id| self.lookup_rule(id))
            .map(|rule| {
                format!(
                    "Condition: {}\n- STRICTLY AVOID: {}\n- LIMIT: {}\n- BENEFICIAL: {}\n- CLINICAL ADVICE: {}",
                    rule.name,
                    rule.avoid.join(", "),
                    rule.limit.join(", "),
                    rule.recommend.join(", "),
                    rule.general_advice,
                )
            })
            .collect();

        if blocks.is_empty() {
            return GENERAL_GUIDANCE.to_string();
        }

        blocks.join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn catalogue_is_populated_in_declared_order() {
        let store = CatalogueStore::new();
        let categories = store.categories();

        assert_eq!(categories.first().unwrap().id, "A");
        assert_eq!(categories.last().unwrap().id, "I");

        let first = store.all_conditions().next().unwrap();
        assert_eq!(first.id, "diabetes_t1");
    }

    #[test]
    fn every_rule_belongs_to_a_catalogued_condition() {
        let store = CatalogueStore::new();
        for id in DIET_RULES.keys() {
            assert!(
                store.find_condition(id).is_some(),
                "rule {id} has no catalogue entry"
            );
        }
    }

    #[test]
    fn lookup_rule_is_absent_for_unknown_and_free_text_ids() {
        let store = CatalogueStore::new();
        assert!(store.lookup_rule("no_such_condition").is_none());
        assert!(store.lookup_rule("my custom illness").is_none());
    }

    #[test]
    fn disease_info_absence_is_not_an_error() {
        let store = CatalogueStore::new();
        assert!(store.lookup_disease_info("gout").is_some());
        assert!(store.lookup_disease_info("made_up").is_none());
    }

    #[test]
    fn classify_round_trips_free_text_verbatim() {
        let store = CatalogueStore::new();
        let free = store.classify("rare tropical fever");
        assert!(!free.is_catalogued());
        assert_eq!(free.display_name(), "rare tropical fever");

        let known = store.classify("gout");
        assert!(known.is_catalogued());
        assert_eq!(known.display_name(), "Gout (痛风)");
    }

    #[test]
    fn guidance_for_empty_set_is_the_generic_sentence() {
        let store = CatalogueStore::new();
        assert_eq!(store.clinical_guidance(&[]), GENERAL_GUIDANCE);
    }

    #[test]
    fn guidance_for_only_unresolved_ids_matches_empty_set() {
        let store = CatalogueStore::new();
        let unresolved = store.clinical_guidance(&ids(&["bogus", "my custom illness"]));
        assert_eq!(unresolved, store.clinical_guidance(&[]));
        assert!(!unresolved.is_empty());
    }

    #[test]
    fn gout_guidance_contains_rule_entries_in_store_order() {
        let store = CatalogueStore::new();
        let guidance = store.clinical_guidance(&ids(&["gout"]));

        assert!(guidance.contains("Condition: Gout (痛风)"));
        assert!(guidance.contains(
            "STRICTLY AVOID: Organ meats (内脏), Shellfish (贝类), Beer (啤酒), HFCS soda (果葡糖浆)"
        ));
        assert!(guidance.contains(
            "LIMIT: Red meat (红肉), Oatmeal (燕麦), Spinach (菠菜), Asparagus (芦笋)"
        ));
        assert!(guidance.contains(
            "BENEFICIAL: Cherries (樱桃), Vitamin C (维C), Low-fat dairy (低脂奶), Coffee (咖啡)"
        ));
        assert!(guidance.contains("Low-purine diet. Stay hydrated."));
    }

    #[test]
    fn guidance_preserves_input_order_and_duplicates() {
        let store = CatalogueStore::new();
        let guidance = store.clinical_guidance(&ids(&["hypertension", "gout", "hypertension"]));

        let first = guidance.find("Condition: Hypertension (高血压)").unwrap();
        let gout = guidance.find("Condition: Gout (痛风)").unwrap();
        let second = guidance.rfind("Condition: Hypertension (高血压)").unwrap();

        assert!(first < gout && gout < second, "blocks must follow input order");
        assert_eq!(guidance.matches("Condition: Hypertension").count(), 2);
    }

    #[test]
    fn guidance_skips_unresolved_ids_between_resolved_ones() {
        let store = CatalogueStore::new();
        let guidance = store.clinical_guidance(&ids(&["gout", "not_in_catalogue", "gerd"]));
        assert!(guidance.contains("Condition: Gout"));
        assert!(guidance.contains("Condition: GERD"));
        assert!(!guidance.contains("not_in_catalogue"));
    }

    #[test]
    fn display_names_join_in_input_order_regardless_of_tree_position() {
        let store = CatalogueStore::new();
        let names = store.display_names(&ids(&["gout", "hypertension"]));
        assert_eq!(names, "Gout (痛风), Hypertension (高血压)");

        let reversed = store.display_names(&ids(&["hypertension", "gout"]));
        assert_eq!(reversed, "Hypertension (高血压), Gout (痛风)");
    }

    #[test]
    fn display_names_keep_free_text_entries() {
        let store = CatalogueStore::new();
        let names = store.display_names(&ids(&["gout", "chronic migraines"]));
        assert_eq!(names, "Gout (痛风), chronic migraines");
    }
}
