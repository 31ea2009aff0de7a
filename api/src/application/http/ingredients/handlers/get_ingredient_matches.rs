use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::http::{
    analysis::validators::split_conditions,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};
use nutriguard_core::domain::ingredient::{ConditionMatches, match_conditions};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetIngredientMatchesParams {
    /// Comma-separated condition identifiers.
    pub conditions: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GetIngredientMatchesResponse {
    pub data: ConditionMatches,
}

#[utoipa::path(
    get,
    path = "/ingredients/{ingredient_id}/matches",
    tag = "ingredients",
    summary = "Match an ingredient against a condition set",
    description = "Returns which of the supplied conditions the ingredient is declared beneficial or harmful for, in the ingredient's own list order.",
    responses(
        (status = 200, body = GetIngredientMatchesResponse),
        (status = 404, description = "Unknown ingredient")
    ),
    params(
        ("ingredient_id" = String, Path, description = "Ingredient identifier"),
        GetIngredientMatchesParams
    ),
)]
pub async fn get_ingredient_matches(
    State(state): State<AppState>,
    Path(ingredient_id): Path<String>,
    Query(params): Query<GetIngredientMatchesParams>,
) -> Result<Response<GetIngredientMatchesResponse>, ApiError> {
    let ingredient = state
        .ingredients
        .by_id(&ingredient_id)
        .ok_or_else(|| ApiError::NotFound(format!("unknown ingredient '{ingredient_id}'")))?;

    let conditions = params
        .conditions
        .as_deref()
        .map(split_conditions)
        .unwrap_or_default();

    let matches = match_conditions(ingredient, &conditions);

    Ok(Response::OK(GetIngredientMatchesResponse { data: matches }))
}
