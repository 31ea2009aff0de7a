use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use nutriguard_core::domain::ingredient::entities::{Ingredient, IngredientCategory};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetIngredientsParams {
    /// Optional category filter: grain, protein, vegetable, fruit, dairy or
    /// other.
    pub category: Option<IngredientCategory>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GetIngredientsResponse {
    pub data: Vec<Ingredient>,
}

#[utoipa::path(
    get,
    path = "/ingredients",
    tag = "ingredients",
    summary = "List the ingredient guide",
    responses(
        (status = 200, body = GetIngredientsResponse)
    ),
    params(GetIngredientsParams),
)]
pub async fn get_ingredients(
    State(state): State<AppState>,
    Query(params): Query<GetIngredientsParams>,
) -> Result<Response<GetIngredientsResponse>, ApiError> {
    let data = match params.category {
        Some(category) => state
            .ingredients
            .by_category(category)
            .into_iter()
            .cloned()
            .collect(),
        None => state.ingredients.all().to_vec(),
    };

    Ok(Response::OK(GetIngredientsResponse { data }))
}
