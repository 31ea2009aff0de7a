use thiserror::Error;

/// Error taxonomy for the decision pipeline.
///
/// `MissingCredential` is raised before any network I/O when the inference
/// boundary has no API key configured. `EmptyResponse` and
/// `MalformedResponse` describe a completed call whose payload is unusable;
/// whether they reach the caller depends on the operation (risk analysis
/// absorbs them into its fallback result, care-plan and recipe generation
/// propagate them unchanged).
#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("inference credential is not configured")]
    MissingCredential,

    #[error("inference service returned an empty response")]
    EmptyResponse,

    #[error("malformed inference response: {0}")]
    MalformedResponse(String),

    #[error("external service error: {0}")]
    ExternalServiceError(String),

    #[error("not found")]
    NotFound,

    #[error("invalid input: {0}")]
    Invalid(String),

    #[error("internal server error")]
    InternalServerError,
}
