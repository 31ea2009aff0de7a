use axum::extract::{Path, State};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use nutriguard_core::domain::catalogue::entities::DietRule;

#[derive(Debug, Serialize, ToSchema)]
pub struct GetDietRuleResponse {
    pub data: DietRule,
}

#[utoipa::path(
    get,
    path = "/catalogue/{condition_id}/rule",
    tag = "catalogue",
    summary = "Get the dietary rule of a condition",
    responses(
        (status = 200, body = GetDietRuleResponse),
        (status = 404, description = "No rule exists for this condition")
    ),
    params(
        ("condition_id" = String, Path, description = "Catalogued condition identifier"),
    ),
)]
pub async fn get_diet_rule(
    State(state): State<AppState>,
    Path(condition_id): Path<String>,
) -> Result<Response<GetDietRuleResponse>, ApiError> {
    let rule = state
        .service
        .catalogue()
        .lookup_rule(&condition_id)
        .ok_or_else(|| ApiError::NotFound(format!("no dietary rule for '{condition_id}'")))?;

    Ok(Response::OK(GetDietRuleResponse { data: rule.clone() }))
}
