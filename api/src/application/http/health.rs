use axum::{Json, Router, routing::get};
use serde_json::json;

use crate::application::http::server::app_state::AppState;

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new().route(
        &format!("{root_path}/health"),
        get(|| async { Json(json!({ "status": "ok" })) }),
    )
}
