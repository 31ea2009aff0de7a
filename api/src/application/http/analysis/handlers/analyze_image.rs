use axum::extract::{Multipart, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    analysis::validators::{parse_language, split_conditions},
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use nutriguard_core::domain::food_analysis::{
    entities::AnalysisResult, ports::FoodAnalysisService, value_objects::AnalyzeFoodInput,
};

const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeImageResponse {
    pub data: AnalysisResult,
}

#[utoipa::path(
    post,
    path = "/analysis/image",
    tag = "analysis",
    summary = "Analyze a food photo",
    description = "Runs a condition-aware risk analysis of one food image. Degrades to a locale-matched placeholder result when the inference call fails.",
    responses(
        (status = 200, body = AnalyzeImageResponse)
    ),
)]
pub async fn analyze_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<AnalyzeImageResponse>, ApiError> {
    let mut image: Option<Vec<u8>> = None;
    let mut image_ref: Option<String> = None;
    let mut conditions: Vec<String> = Vec::new();
    let mut language_raw: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "image" => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

                if data.len() > MAX_IMAGE_SIZE {
                    return Err(ApiError::BadRequest(format!(
                        "Image too large. Max size is {} bytes",
                        MAX_IMAGE_SIZE
                    )));
                }

                image = Some(data.to_vec());
            }
            "image_ref" => {
                let value = field.text().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed to read image_ref: {}", e))
                })?;
                image_ref = Some(value);
            }
            "conditions" => {
                let value = field.text().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed to read conditions: {}", e))
                })?;
                conditions = split_conditions(&value);
            }
            "language" => {
                let value = field.text().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed to read language: {}", e))
                })?;
                language_raw = Some(value);
            }
            _ => {}
        }
    }

    let image = image.ok_or_else(|| ApiError::BadRequest("Missing image field".to_string()))?;
    let language = parse_language(language_raw.as_deref())?;

    let result = state
        .service
        .analyze_food(AnalyzeFoodInput {
            conditions,
            image,
            image_ref,
            language,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalyzeImageResponse { data: result }))
}
