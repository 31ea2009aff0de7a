use crate::domain::{
    catalogue::{entities::Language, store::CatalogueStore},
    common::{entities::app_errors::CoreError, services::Service},
    food_analysis::ports::ScanHistoryRepository,
    inference::ports::InferenceClient,
    recipe::{
        entities::ChefResponse, ports::RecipeService, schema::chef_response_schema,
        value_objects::GenerateRecipesInput,
    },
};

fn build_recipe_instruction(
    catalogue: &CatalogueStore,
    conditions: &[String],
    language: Language,
) -> String {
    let condition_names = catalogue.display_names(conditions);
    let guidance = catalogue.clinical_guidance(conditions);

    format!(
        "You are an expert Chef and Clinical Dietitian.\n\
         Analyze the provided image(s) to identify ALL ingredients present across all photos.\n\
         \n\
         Based on these identified ingredients, generate THREE distinct recipe options:\n\
         1. A Breakfast option\n\
         2. A Lunch option\n\
         3. A Dinner option\n\
         \n\
         CRITICAL INSTRUCTION FOR MISSING INGREDIENTS:\n\
         If the detected ingredients are not enough to make a complete, delicious, and balanced meal (e.g., user only has carrots), YOU MUST Auto-Complete the recipe by suggesting necessary MAIN ingredients (like proteins, grains, or key vegetables) that the user needs to add.\n\
         \n\
         The user has these conditions: {condition_names}.\n\
         STRICTLY ADHERE TO THESE MEDICAL GUIDELINES:\n\
         {guidance}\n\
         \n\
         If the image contains unsafe ingredients (e.g. high sugar for diabetic), DO NOT USE THEM in the recipes.\n\
         \n\
         Task:\n\
         1. List the ingredients identified from the images.\n\
         2. For EACH meal option (Breakfast, Lunch, Dinner), provide:\n\
            - Recipe Name\n\
            - Appetizing Description\n\
            - Full Ingredients List (detected + missing items)\n\
            - Missing Ingredients: Specifically list main ingredients that were NOT in the photo but are required for this recipe. Do not list basic pantry staples like oil/salt/pepper here.\n\
            - Step-by-step Instructions\n\
            - Health Benefits specific to the user's conditions\n\
            - Estimated Macros\n\
         \n\
         {directive}",
        directive = language.output_directive(),
    )
}

impl<LLM, SH> RecipeService for Service<LLM, SH>
where
    LLM: InferenceClient,
    SH: ScanHistoryRepository,
{
    async fn generate_recipes(
        &self,
        input: GenerateRecipesInput,
    ) -> Result<ChefResponse, CoreError> {
        if input.images.is_empty() {
            return Err(CoreError::Invalid("at least one image is required".to_string()));
        }

        let instruction =
            build_recipe_instruction(&self.catalogue, &input.conditions, input.language);

        let raw = self
            .llm_client
            .generate_with_images(instruction, input.images, chef_response_schema())
            .await?;

        if raw.trim().is_empty() {
            return Err(CoreError::EmptyResponse);
        }

        serde_json::from_str(&raw).map_err(|e| {
            tracing::error!("chef payload did not match the schema: {e}");
            CoreError::MalformedResponse(e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::domain::inference::ports::MockInferenceClient;
    use crate::infrastructure::history::in_memory::InMemoryScanHistory;

    fn ids(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn recipe_json(name: &str, missing: &[&str]) -> serde_json::Value {
        json!({
            "name": name,
            "description": "Simple and balanced.",
            "ingredients": ["carrots", "chicken breast", "brown rice"],
            "missingIngredients": missing,
            "instructions": ["Chop the carrots.", "Cook everything."],
            "healthBenefits": "Low glycemic load, safe for diabetes.",
            "macrosEstimate": { "calories": 420.0, "protein": 30.0, "carbs": 45.0, "fat": 12.0 }
        })
    }

    fn chef_payload() -> String {
        json!({
            "identifiedIngredients": ["carrots"],
            "breakfast": recipe_json("Carrot Oat Bowl", &["oats", "greek yogurt"]),
            "lunch": recipe_json("Chicken Carrot Stir-fry", &["chicken breast", "brown rice"]),
            "dinner": recipe_json("Carrot Lentil Stew", &["lentils", "onion"])
        })
        .to_string()
    }

    fn input(images: usize) -> GenerateRecipesInput {
        GenerateRecipesInput {
            conditions: ids(&["diabetes_t2"]),
            images: vec![vec![0u8; 4]; images],
            language: Language::En,
        }
    }

    fn service_with(
        llm: MockInferenceClient,
    ) -> Service<MockInferenceClient, InMemoryScanHistory> {
        Service::new(
            Arc::new(CatalogueStore::new()),
            llm,
            InMemoryScanHistory::new(20),
        )
    }

    #[tokio::test]
    async fn sparse_detection_yields_auto_completed_meals() {
        let mut llm = MockInferenceClient::new();
        llm.expect_generate_with_images()
            .withf(|prompt, images, _| {
                prompt.contains("Auto-Complete") && images.len() == 2
            })
            .returning(|_, _, _| Box::pin(std::future::ready(Ok(chef_payload()))));

        let service = service_with(llm);
        let chef = service.generate_recipes(input(2)).await.unwrap();

        assert_eq!(chef.identified_ingredients, vec!["carrots".to_string()]);
        for recipe in [&chef.breakfast, &chef.lunch, &chef.dinner] {
            assert!(
                !recipe.missing_ingredients.is_empty(),
                "{} must name the main ingredients to add",
                recipe.name
            );
        }
        assert_eq!(chef.lunch.macros_estimate.calories, 420.0);
    }

    #[tokio::test]
    async fn no_images_is_rejected_before_calling_the_boundary() {
        let llm = MockInferenceClient::new();
        let service = service_with(llm);

        let outcome = service.generate_recipes(input(0)).await;
        assert!(matches!(outcome, Err(CoreError::Invalid(_))));
    }

    #[tokio::test]
    async fn boundary_error_propagates_without_fallback() {
        let mut llm = MockInferenceClient::new();
        llm.expect_generate_with_images().returning(|_, _, _| {
            Box::pin(std::future::ready(Err(CoreError::EmptyResponse)))
        });

        let service = service_with(llm);
        let outcome = service.generate_recipes(input(1)).await;

        assert!(matches!(outcome, Err(CoreError::EmptyResponse)));
    }

    #[tokio::test]
    async fn malformed_payload_propagates_as_error() {
        let mut llm = MockInferenceClient::new();
        llm.expect_generate_with_images().returning(|_, _, _| {
            Box::pin(std::future::ready(Ok(
                json!({ "identifiedIngredients": [] }).to_string()
            )))
        });

        let service = service_with(llm);
        let outcome = service.generate_recipes(input(1)).await;

        assert!(matches!(outcome, Err(CoreError::MalformedResponse(_))));
    }

    #[test]
    fn instruction_embeds_exclusion_and_auto_completion_directives() {
        let catalogue = CatalogueStore::new();
        let instruction =
            build_recipe_instruction(&catalogue, &ids(&["diabetes_t2"]), Language::En);

        assert!(instruction.contains("identify ALL ingredients present across all photos"));
        assert!(instruction.contains("YOU MUST Auto-Complete the recipe"));
        assert!(instruction.contains("DO NOT USE THEM in the recipes"));
        assert!(instruction.contains("Do not list basic pantry staples"));
        assert!(instruction.contains("Condition: Type 2 Diabetes (2型糖尿病)"));
        assert!(instruction.contains("OUTPUT MUST BE IN ENGLISH."));
    }
}
