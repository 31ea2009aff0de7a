use axum::extract::State;
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use nutriguard_core::domain::catalogue::entities::HealthCategory;

#[derive(Debug, Serialize, ToSchema)]
pub struct GetCatalogueResponse {
    pub data: Vec<HealthCategory>,
}

#[utoipa::path(
    get,
    path = "/catalogue",
    tag = "catalogue",
    summary = "Get the condition catalogue",
    description = "Returns the full category/group/condition tree in canonical display order.",
    responses(
        (status = 200, body = GetCatalogueResponse)
    ),
)]
pub async fn get_catalogue(
    State(state): State<AppState>,
) -> Result<Response<GetCatalogueResponse>, ApiError> {
    let categories = state.service.catalogue().categories().to_vec();

    Ok(Response::OK(GetCatalogueResponse { data: categories }))
}
