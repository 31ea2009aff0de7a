use std::future::Future;

use crate::domain::common::entities::app_errors::CoreError;

/// The external structured-generation boundary.
///
/// One invocation means exactly one request carrying the instruction text,
/// any image parts, and the output-schema descriptor. The returned payload
/// is the raw text expected to parse as data conforming to that schema.
/// No streaming, no session state, no internal retries.
#[cfg_attr(test, mockall::automock)]
pub trait InferenceClient: Send + Sync {
    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn generate_with_images(
        &self,
        prompt: String,
        images: Vec<Vec<u8>>,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}
