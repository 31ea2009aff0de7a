use axum::extract::{Path, State};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use nutriguard_core::domain::catalogue::entities::DiseaseInfo;

#[derive(Debug, Serialize, ToSchema)]
pub struct GetDiseaseInfoResponse {
    pub data: DiseaseInfo,
}

#[utoipa::path(
    get,
    path = "/catalogue/{condition_id}/info",
    tag = "catalogue",
    summary = "Get reference prose about a condition",
    responses(
        (status = 200, body = GetDiseaseInfoResponse),
        (status = 404, description = "No detail available for this condition")
    ),
    params(
        ("condition_id" = String, Path, description = "Catalogued condition identifier"),
    ),
)]
pub async fn get_disease_info(
    State(state): State<AppState>,
    Path(condition_id): Path<String>,
) -> Result<Response<GetDiseaseInfoResponse>, ApiError> {
    let info = state
        .service
        .catalogue()
        .lookup_disease_info(&condition_id)
        .ok_or_else(|| ApiError::NotFound(format!("no detail available for '{condition_id}'")))?;

    Ok(Response::OK(GetDiseaseInfoResponse { data: info.clone() }))
}
