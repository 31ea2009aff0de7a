use super::handlers::{
    get_ingredient_matches::{__path_get_ingredient_matches, get_ingredient_matches},
    get_ingredients::{__path_get_ingredients, get_ingredients},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_ingredients, get_ingredient_matches))]
pub struct IngredientsApiDoc;

pub fn ingredients_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/ingredients", state.args.server.root_path),
            get(get_ingredients),
        )
        .route(
            &format!(
                "{}/ingredients/{{ingredient_id}}/matches",
                state.args.server.root_path
            ),
            get(get_ingredient_matches),
        )
}
