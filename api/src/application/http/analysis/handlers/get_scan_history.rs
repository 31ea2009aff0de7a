use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use nutriguard_core::domain::food_analysis::{entities::ScanRecord, ports::FoodAnalysisService};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GetScanHistoryResponse {
    pub data: Vec<ScanRecord>,
}

#[utoipa::path(
    get,
    path = "/analysis/history",
    tag = "analysis",
    summary = "Get scan history",
    description = "Returns the bounded scan history, most recent first.",
    responses(
        (status = 200, body = GetScanHistoryResponse)
    ),
)]
pub async fn get_scan_history(
    State(state): State<AppState>,
) -> Result<Response<GetScanHistoryResponse>, ApiError> {
    let records = state.service.scan_history().await.map_err(ApiError::from)?;

    Ok(Response::OK(GetScanHistoryResponse { data: records }))
}
