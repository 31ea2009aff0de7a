use super::handlers::generate_care_plan::{__path_generate_care_plan, generate_care_plan};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(generate_care_plan))]
pub struct CarePlanApiDoc;

pub fn care_plan_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/care-plan", state.args.server.root_path),
        post(generate_care_plan),
    )
}
