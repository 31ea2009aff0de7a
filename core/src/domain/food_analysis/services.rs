use serde::Deserialize;

use crate::domain::{
    catalogue::{entities::Language, store::CatalogueStore},
    common::{entities::app_errors::CoreError, services::Service},
    food_analysis::{
        entities::{AlternativeFood, AnalysisResult, NutrientInfo, RiskLevel, ScanRecord},
        ports::{FoodAnalysisService, ScanHistoryRepository},
        schema::analysis_response_schema,
        value_objects::AnalyzeFoodInput,
    },
    inference::ports::InferenceClient,
};

/// Wire shape of the risk-analysis payload. The risk level arrives as a
/// plain string and is mapped through the exact-match table afterwards.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnalysisPayload {
    food_name: String,
    risk_level: String,
    risk_reason: String,
    triggered_conditions: Vec<String>,
    detailed_analysis: String,
    portion_recommendation: String,
    #[serde(default)]
    alternatives: Option<Vec<AlternativeFood>>,
    nutrients: NutrientInfo,
}

fn build_analysis_instruction(
    catalogue: &CatalogueStore,
    conditions: &[String],
    language: Language,
) -> String {
    let condition_names = catalogue.display_names(conditions);
    let guidance = catalogue.clinical_guidance(conditions);

    format!(
        "You are an expert Clinical Dietitian and AI Nutritionist.\n\
         Analyze the provided food image.\n\
         The user has the following medical conditions: {condition_names}.\n\
         \n\
         STRICTLY APPLY THE FOLLOWING CLINICAL GUIDELINES FOR THE USER'S CONDITIONS:\n\
         {guidance}\n\
         \n\
         Your task:\n\
         1. Identify the food.\n\
         2. Assess the risk level (SAFE, MODERATE, RISKY) specifically for their conditions.\n\
         3. Identify EXACTLY which of the user's conditions caused the risk (if any).\n\
         4. Estimate nutritional content for a standard serving.\n\
         5. Provide specific eating advice (portion control, what to pair it with).\n\
         6. Suggest 2-3 SPECIFIC healthier food alternatives/swaps.\n\
            - If RISKY/MODERATE: Suggest foods that are safer replacements.\n\
            - If SAFE: Suggest ways to make it even healthier or similar healthy options.\n\
            - IMPORTANT: Suggested alternatives MUST be common, affordable, and easily accessible ingredients found in standard grocery stores. Avoid rare or exotic foods.\n\
         \n\
         Be conservative with health advice. If the image is unclear or not food, mark as UNKNOWN.\n\
         {directive}",
        directive = language.output_directive(),
    )
}

fn parse_analysis_payload(raw: &str) -> Result<AnalysisResult, CoreError> {
    if raw.trim().is_empty() {
        return Err(CoreError::EmptyResponse);
    }

    let payload: AnalysisPayload =
        serde_json::from_str(raw).map_err(|e| CoreError::MalformedResponse(e.to_string()))?;

    Ok(AnalysisResult {
        food_name: payload.food_name,
        risk_level: RiskLevel::from_wire(&payload.risk_level),
        risk_reason: payload.risk_reason,
        triggered_conditions: payload.triggered_conditions,
        detailed_analysis: payload.detailed_analysis,
        portion_recommendation: payload.portion_recommendation,
        alternatives: payload.alternatives,
        nutrients: payload.nutrients,
    })
}

impl<LLM, SH> FoodAnalysisService for Service<LLM, SH>
where
    LLM: InferenceClient,
    SH: ScanHistoryRepository,
{
    async fn analyze_food(&self, input: AnalyzeFoodInput) -> Result<AnalysisResult, CoreError> {
        let instruction =
            build_analysis_instruction(&self.catalogue, &input.conditions, input.language);

        let outcome = self
            .llm_client
            .generate_with_images(instruction, vec![input.image], analysis_response_schema())
            .await
            .and_then(|raw| parse_analysis_payload(&raw));

        let result = match outcome {
            Ok(result) => result,
            // An unconfigured boundary is unusable; the fallback covers
            // failures of the attempted call, not this.
            Err(CoreError::MissingCredential) => return Err(CoreError::MissingCredential),
            Err(err) => {
                tracing::error!("food analysis failed, returning fallback result: {err}");
                AnalysisResult::fallback(input.language)
            }
        };

        let record = ScanRecord::new(input.image_ref, result.clone());
        self.history.append(record).await?;

        Ok(result)
    }

    async fn scan_history(&self) -> Result<Vec<ScanRecord>, CoreError> {
        self.history.list().await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::domain::catalogue::store::GENERAL_GUIDANCE;
    use crate::domain::inference::ports::MockInferenceClient;
    use crate::infrastructure::history::in_memory::InMemoryScanHistory;

    fn ids(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn sample_payload(risk_level: &str) -> String {
        json!({
            "foodName": "Braised Pork",
            "riskLevel": risk_level,
            "riskReason": "High in purines and saturated fat.",
            "triggeredConditions": ["Gout (痛风)"],
            "detailedAnalysis": "Red meat is rich in purines which raise uric acid.",
            "portionRecommendation": "Limit to 50g",
            "alternatives": [
                { "name": "Steamed chicken breast", "reason": "Lean and low purine." }
            ],
            "nutrients": {
                "calories": 450.0, "carbs": 8.0, "protein": 25.0,
                "fat": 35.0, "sugar": 6.0, "sodium": 890.0
            }
        })
        .to_string()
    }

    fn analyze_input(conditions: &[&str], language: Language) -> AnalyzeFoodInput {
        AnalyzeFoodInput {
            conditions: ids(conditions),
            image: vec![0xFF, 0xD8, 0xFF],
            image_ref: Some("scan-1.jpg".to_string()),
            language,
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
    async fn analyze_maps_payload_and_appends_scan_record() {
        let mut llm = MockInferenceClient::new();
        llm.expect_generate_with_images()
            .withf(|prompt, images, _schema| {
                prompt.contains("Condition: Gout (痛风)") && images.len() == 1
            })
            .returning(|_, _, _| Box::pin(std::future::ready(Ok(sample_payload("RISKY")))));

        let service = service_with(llm);
        let result = service
            .analyze_food(analyze_input(&["gout"], Language::En))
            .await
            .unwrap();

        assert_eq!(result.food_name, "Braised Pork");
        assert_eq!(result.risk_level, RiskLevel::Risky);
        assert_eq!(result.triggered_conditions, vec!["Gout (痛风)".to_string()]);
        assert_eq!(result.alternatives.as_ref().unwrap().len(), 1);
        assert_eq!(result.nutrients.sodium, 890.0);

        let history = service.scan_history().await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].image_ref.as_deref(), Some("scan-1.jpg"));
        assert_eq!(history[0].result, result);
    }

    #[tokio::test]
    async fn empty_condition_set_grounds_on_the_generic_sentence() {
        let mut llm = MockInferenceClient::new();
        llm.expect_generate_with_images()
            .withf(|prompt, _, _| prompt.contains(GENERAL_GUIDANCE))
            .returning(|_, _, _| Box::pin(std::future::ready(Ok(sample_payload("SAFE")))));

        let service = service_with(llm);
        let result = service
            .analyze_food(analyze_input(&[], Language::En))
            .await
            .unwrap();

        assert_eq!(result.risk_level, RiskLevel::Safe);
    }

    #[tokio::test]
    async fn unrecognized_risk_string_normalizes_to_unknown() {
        let mut llm = MockInferenceClient::new();
        llm.expect_generate_with_images()
            .returning(|_, _, _| Box::pin(std::future::ready(Ok(sample_payload("risky")))));

        let service = service_with(llm);
        let result = service
            .analyze_food(analyze_input(&["gout"], Language::En))
            .await
            .unwrap();

        assert_eq!(result.risk_level, RiskLevel::Unknown);
    }

    #[tokio::test]
    async fn boundary_error_degrades_to_locale_matched_fallback() {
        for language in [Language::En, Language::Zh] {
            let mut llm = MockInferenceClient::new();
            llm.expect_generate_with_images().returning(|_, _, _| {
                Box::pin(std::future::ready(Err(CoreError::ExternalServiceError(
                    "timeout".to_string(),
                ))))
            });

            let service = service_with(llm);
            let result = service
                .analyze_food(analyze_input(&["gout"], language))
                .await
                .unwrap();

            assert_eq!(result, AnalysisResult::fallback(language));
            // The placeholder is still recorded in history.
            assert_eq!(service.scan_history().await.unwrap().len(), 1);
        }
    }

    #[tokio::test]
    async fn malformed_payload_degrades_to_fallback() {
        let mut llm = MockInferenceClient::new();
        llm.expect_generate_with_images().returning(|_, _, _| {
            Box::pin(std::future::ready(Ok("not json at all".to_string())))
        });

        let service = service_with(llm);
        let result = service
            .analyze_food(analyze_input(&["gout"], Language::Zh))
            .await
            .unwrap();

        assert_eq!(result, AnalysisResult::fallback(Language::Zh));
    }

    #[tokio::test]
    async fn payload_missing_required_field_degrades_to_fallback() {
        let mut llm = MockInferenceClient::new();
        llm.expect_generate_with_images().returning(|_, _, _| {
            Box::pin(std::future::ready(Ok(
                json!({ "foodName": "Apple" }).to_string()
            )))
        });

        let service = service_with(llm);
        let result = service
            .analyze_food(analyze_input(&[], Language::En))
            .await
            .unwrap();

        assert_eq!(result.risk_level, RiskLevel::Unknown);
        assert_eq!(result, AnalysisResult::fallback(Language::En));
    }

    #[tokio::test]
    async fn missing_credential_fails_fast_without_fallback() {
        let mut llm = MockInferenceClient::new();
        llm.expect_generate_with_images()
            .returning(|_, _, _| Box::pin(std::future::ready(Err(CoreError::MissingCredential))));

        let service = service_with(llm);
        let outcome = service.analyze_food(analyze_input(&[], Language::En)).await;

        assert!(matches!(outcome, Err(CoreError::MissingCredential)));
        assert!(service.scan_history().await.unwrap().is_empty());
    }

    #[test]
    fn instruction_embeds_names_guidance_and_locale_directive() {
        let catalogue = CatalogueStore::new();
        let instruction = build_analysis_instruction(
            &catalogue,
            &ids(&["gout", "hypertension"]),
            Language::En,
        );

        assert!(instruction
            .contains("medical conditions: Gout (痛风), Hypertension (高血压)."));
        assert!(instruction.contains("Condition: Gout (痛风)"));
        assert!(instruction.contains("Condition: Hypertension (高血压)"));
        assert!(instruction.contains("If the image is unclear or not food, mark as UNKNOWN."));
        assert!(instruction.contains("OUTPUT MUST BE IN ENGLISH."));

        let zh = build_analysis_instruction(&catalogue, &[], Language::Zh);
        assert!(zh.contains(GENERAL_GUIDANCE));
        assert!(zh.contains("OUTPUT MUST BE IN SIMPLIFIED CHINESE (中文)."));
    }
}
