use crate::domain::catalogue::entities::Language;

/// Input for one risk analysis: the user's condition set, one encoded image
/// and the output locale.
#[derive(Debug, Clone)]
pub struct AnalyzeFoodInput {
    pub conditions: Vec<String>,
    pub image: Vec<u8>,
    /// Opaque reference to the captured image (object key, data URI, ...),
    /// carried into the scan record for the history collaborator.
    pub image_ref: Option<String>,
    pub language: Language,
}
