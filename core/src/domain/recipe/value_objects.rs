use crate::domain::catalogue::entities::Language;

/// Input for recipe generation: one or more ingredient photos.
#[derive(Debug, Clone)]
pub struct GenerateRecipesInput {
    pub conditions: Vec<String>,
    pub images: Vec<Vec<u8>>,
    pub language: Language,
}
