use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::{
    care_plan::validators::GenerateCarePlanRequest,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use nutriguard_core::domain::diet_plan::{
    entities::AiDietPlan, ports::DietPlanService, value_objects::GenerateDietPlanInput,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GenerateCarePlanResponse {
    pub data: AiDietPlan,
}

#[utoipa::path(
    post,
    path = "/care-plan",
    tag = "care-plan",
    summary = "Generate a care plan",
    description = "Generates a one-day meal plan, a condition-safe workout routine, dietary guidelines and lifestyle tips. Inference failures surface as errors.",
    request_body = GenerateCarePlanRequest,
    responses(
        (status = 200, body = GenerateCarePlanResponse)
    ),
)]
pub async fn generate_care_plan(
    State(state): State<AppState>,
    Json(payload): Json<GenerateCarePlanRequest>,
) -> Result<Response<GenerateCarePlanResponse>, ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let plan = state
        .service
        .generate_diet_plan(GenerateDietPlanInput {
            conditions: payload.conditions,
            language: payload.language,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GenerateCarePlanResponse { data: plan }))
}
