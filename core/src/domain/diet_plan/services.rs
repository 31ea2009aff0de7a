use serde::Deserialize;

use crate::domain::{
    catalogue::{entities::Language, store::CatalogueStore},
    common::{entities::app_errors::CoreError, generate_timestamp, services::Service},
    diet_plan::{
        entities::{AiDietPlan, DailyMealPlan, WorkoutPlan},
        ports::DietPlanService,
        schema::diet_plan_response_schema,
        value_objects::GenerateDietPlanInput,
    },
    food_analysis::ports::ScanHistoryRepository,
    inference::ports::InferenceClient,
};

/// Wire shape of the plan payload. The generation timestamp is not part of
/// the contract; the pipeline stamps it.
#[derive(Debug, Deserialize)]
struct DietPlanPayload {
    summary: String,
    meals: DailyMealPlan,
    workout: WorkoutPlan,
    guidelines: Vec<String>,
    lifestyle: Vec<String>,
}

fn build_plan_instruction(
    catalogue: &CatalogueStore,
    conditions: &[String],
    language: Language,
) -> String {
    let condition_names = catalogue.display_names(conditions);
    let guidance = catalogue.clinical_guidance(conditions);

    format!(
        "You are an expert Clinical Dietitian and Personal Trainer.\n\
         Create a personalized \"Care Plan\" for a user with the following conditions: {condition_names}.\n\
         \n\
         The plan must be holistic, safe, and address all the conditions simultaneously.\n\
         \n\
         STRICTLY APPLY THE FOLLOWING CLINICAL GUIDELINES FOR THE USER'S CONDITIONS:\n\
         {guidance}\n\
         \n\
         CRITICAL INSTRUCTION FOR INGREDIENTS:\n\
         - Use only COMMON, EASILY ACCESSIBLE ingredients found in standard local grocery stores.\n\
         - Avoid rare, exotic, or expensive ingredients.\n\
         \n\
         Your Output must include:\n\
         1. A summary strategy (2 sentences).\n\
         2. A sample 1-day meal plan (Breakfast, Lunch, Dinner, 1 Snack).\n\
         3. A specialized Workout/Exercise Routine that is SAFE for their conditions.\n\
            - Include Frequency, Duration, Focus Area, 3-4 Specific Exercises, and Safety Precautions.\n\
         4. 4-5 Key Dietary Guidelines (Do's and Don'ts mixed).\n\
         5. 3 Lifestyle tips (sleep, hydration, etc).\n\
         \n\
         {directive}",
        directive = language.output_directive(),
    )
}

impl<LLM, SH> DietPlanService for Service<LLM, SH>
where
    LLM: InferenceClient,
    SH: ScanHistoryRepository,
{
    async fn generate_diet_plan(
        &self,
        input: GenerateDietPlanInput,
    ) -> Result<AiDietPlan, CoreError> {
        let instruction = build_plan_instruction(&self.catalogue, &input.conditions, input.language);

        let raw = self
            .llm_client
            .generate_with_text(instruction, diet_plan_response_schema())
            .await?;

        if raw.trim().is_empty() {
            return Err(CoreError::EmptyResponse);
        }

        let payload: DietPlanPayload = serde_json::from_str(&raw).map_err(|e| {
            tracing::error!("care-plan payload did not match the schema: {e}");
            CoreError::MalformedResponse(e.to_string())
        })?;

        let (generated_at, _) = generate_timestamp();

        Ok(AiDietPlan {
            summary: payload.summary,
            meals: payload.meals,
            workout: payload.workout,
            guidelines: payload.guidelines,
            lifestyle: payload.lifestyle,
            generated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Utc;
    use serde_json::json;

    use super::*;
    use crate::domain::inference::ports::MockInferenceClient;
    use crate::infrastructure::history::in_memory::InMemoryScanHistory;

    fn ids(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn plan_payload() -> String {
        json!({
            "summary": "Stabilize blood sugar while protecting the joints.",
            "meals": {
                "breakfast": "Oatmeal with blueberries",
                "lunch": "Grilled chicken salad",
                "dinner": "Steamed fish with brown rice",
                "snacks": "A handful of almonds"
            },
            "workout": {
                "frequency": "3-4 times/week",
                "avgDuration": "30 mins",
                "focus": "Low Impact Cardio",
                "exercises": [
                    { "name": "Brisk walking", "durationOrReps": "20 mins", "benefit": "Improves insulin sensitivity" },
                    { "name": "Swimming", "durationOrReps": "15 mins", "benefit": "Joint friendly cardio" }
                ],
                "precautions": ["Stop if joint pain flares"]
            },
            "guidelines": ["Avoid sugary drinks", "Stay hydrated"],
            "lifestyle": ["Sleep 7-8 hours", "Drink 2L of water daily"]
        })
        .to_string()
    }

    fn input(conditions: &[&str]) -> GenerateDietPlanInput {
        GenerateDietPlanInput {
            conditions: ids(conditions),
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
    async fn plan_is_mapped_and_timestamped_by_the_pipeline() {
        let before = Utc::now();

        let mut llm = MockInferenceClient::new();
        llm.expect_generate_with_text()
            .withf(|prompt, _| prompt.contains("Care Plan"))
            .returning(|_, _| Box::pin(std::future::ready(Ok(plan_payload()))));

        let service = service_with(llm);
        let plan = service
            .generate_diet_plan(input(&["diabetes_t2", "gout"]))
            .await
            .unwrap();

        assert_eq!(plan.meals.breakfast, "Oatmeal with blueberries");
        assert_eq!(plan.workout.exercises.len(), 2);
        assert_eq!(plan.guidelines.len(), 2);
        assert!(plan.generated_at >= before);
    }

    #[tokio::test]
    async fn boundary_error_propagates_without_fallback() {
        let mut llm = MockInferenceClient::new();
        llm.expect_generate_with_text().returning(|_, _| {
            Box::pin(std::future::ready(Err(CoreError::ExternalServiceError(
                "upstream 500".to_string(),
            ))))
        });

        let service = service_with(llm);
        let outcome = service.generate_diet_plan(input(&["gout"])).await;

        assert!(matches!(outcome, Err(CoreError::ExternalServiceError(_))));
    }

    #[tokio::test]
    async fn empty_payload_is_an_error() {
        let mut llm = MockInferenceClient::new();
        llm.expect_generate_with_text()
            .returning(|_, _| Box::pin(std::future::ready(Ok(String::new()))));

        let service = service_with(llm);
        let outcome = service.generate_diet_plan(input(&["gout"])).await;

        assert!(matches!(outcome, Err(CoreError::EmptyResponse)));
    }

    #[tokio::test]
    async fn malformed_payload_is_an_error() {
        let mut llm = MockInferenceClient::new();
        llm.expect_generate_with_text()
            .returning(|_, _| Box::pin(std::future::ready(Ok("{\"summary\": 1}".to_string()))));

        let service = service_with(llm);
        let outcome = service.generate_diet_plan(input(&["gout"])).await;

        assert!(matches!(outcome, Err(CoreError::MalformedResponse(_))));
    }

    #[test]
    fn instruction_demands_common_ingredients_and_safe_workout() {
        let catalogue = CatalogueStore::new();
        let instruction =
            build_plan_instruction(&catalogue, &ids(&["diabetes_t2"]), Language::Zh);

        assert!(instruction.contains("Type 2 Diabetes (2型糖尿病)"));
        assert!(instruction.contains("Condition: Type 2 Diabetes (2型糖尿病)"));
        assert!(instruction.contains("COMMON, EASILY ACCESSIBLE ingredients"));
        assert!(instruction.contains("SAFE for their conditions"));
        assert!(instruction.contains("OUTPUT MUST BE IN SIMPLIFIED CHINESE (中文)."));
    }
}
