use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

/// Typed success response wrapper used by every handler.
pub struct Response<T: Serialize>(StatusCode, T);

impl<T: Serialize> Response<T> {
    #[allow(non_snake_case)]
    pub fn OK(body: T) -> Self {
        Self(StatusCode::OK, body)
    }
}

impl<T: Serialize> IntoResponse for Response<T> {
    fn into_response(self) -> axum::response::Response {
        (self.0, Json(self.1)).into_response()
    }
}
