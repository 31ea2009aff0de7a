use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use nutriguard_core::domain::catalogue::entities::Language;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct GenerateCarePlanRequest {
    /// Condition identifiers, catalogued or free text.
    #[validate(length(max = 32, message = "too many conditions"))]
    pub conditions: Vec<String>,

    #[serde(default)]
    pub language: Language,
}
