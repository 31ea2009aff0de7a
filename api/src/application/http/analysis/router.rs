use super::handlers::{
    analyze_image::{__path_analyze_image, analyze_image},
    get_scan_history::{__path_get_scan_history, get_scan_history},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(analyze_image, get_scan_history))]
pub struct AnalysisApiDoc;

pub fn analysis_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/analysis/image", state.args.server.root_path),
            post(analyze_image),
        )
        .route(
            &format!("{}/analysis/history", state.args.server.root_path),
            get(get_scan_history),
        )
}
