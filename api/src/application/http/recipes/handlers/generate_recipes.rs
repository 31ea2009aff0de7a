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
use nutriguard_core::domain::recipe::{
    entities::ChefResponse, ports::RecipeService, value_objects::GenerateRecipesInput,
};

const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB
const MAX_IMAGES: usize = 5;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GenerateRecipesResponse {
    pub data: ChefResponse,
}

#[utoipa::path(
    post,
    path = "/recipes",
    tag = "recipes",
    summary = "Generate recipes from ingredient photos",
    description = "Identifies ingredients across all supplied images and generates breakfast, lunch and dinner recipes, auto-completing missing main ingredients. Inference failures surface as errors.",
    responses(
        (status = 200, body = GenerateRecipesResponse)
    ),
)]
pub async fn generate_recipes(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<GenerateRecipesResponse>, ApiError> {
    let mut images: Vec<Vec<u8>> = Vec::new();
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
                if images.len() == MAX_IMAGES {
                    return Err(ApiError::BadRequest(format!(
                        "Too many images. Max is {}",
                        MAX_IMAGES
                    )));
                }

                images.push(data.to_vec());
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

    if images.is_empty() {
        return Err(ApiError::BadRequest("At least one image field is required".to_string()));
    }

    let language = parse_language(language_raw.as_deref())?;

    let chef = state
        .service
        .generate_recipes(GenerateRecipesInput {
            conditions,
            images,
            language,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GenerateRecipesResponse { data: chef }))
}
