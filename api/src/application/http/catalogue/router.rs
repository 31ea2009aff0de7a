use super::handlers::{
    get_catalogue::{__path_get_catalogue, get_catalogue},
    get_diet_rule::{__path_get_diet_rule, get_diet_rule},
    get_disease_info::{__path_get_disease_info, get_disease_info},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_catalogue, get_diet_rule, get_disease_info))]
pub struct CatalogueApiDoc;

pub fn catalogue_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/catalogue", state.args.server.root_path),
            get(get_catalogue),
        )
        .route(
            &format!(
                "{}/catalogue/{{condition_id}}/rule",
                state.args.server.root_path
            ),
            get(get_diet_rule),
        )
        .route(
            &format!(
                "{}/catalogue/{{condition_id}}/info",
                state.args.server.root_path
            ),
            get(get_disease_info),
        )
}
