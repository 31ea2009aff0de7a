use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The two output locales supported by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Zh,
}

impl Default for Language {
    fn default() -> Self {
        Language::Zh
    }
}

impl Language {
    /// The directive appended to every inference instruction to pin the
    /// output language.
    pub fn output_directive(&self) -> &'static str {
        match self {
            Language::En => "OUTPUT MUST BE IN ENGLISH.",
            Language::Zh => "OUTPUT MUST BE IN SIMPLIFIED CHINESE (中文).",
        }
    }
}

/// A piece of prose available in both supported locales.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Bilingual {
    pub en: String,
    pub zh: String,
}

impl Bilingual {
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::En => &self.en,
            Language::Zh => &self.zh,
        }
    }
}

/// A condition identifier as first accepted at the boundary.
///
/// Identifiers arrive as plain strings; only some resolve against the
/// catalogue. Free-text entries round-trip verbatim — they are displayed
/// as-is and never contribute clinical guidance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConditionRef {
    Catalogued(&'static HealthCondition),
    FreeText(String),
}

impl ConditionRef {
    pub fn display_name(&self) -> &str {
        match self {
            ConditionRef::Catalogued(condition) => &condition.name,
            ConditionRef::FreeText(raw) => raw,
        }
    }

    pub fn is_catalogued(&self) -> bool {
        matches!(self, ConditionRef::Catalogued(_))
    }
}

/// Leaf of the catalogue tree. The display name carries both locales in one
/// string, matching how the catalogue is shown everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct HealthCondition {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct HealthGroup {
    pub id: String,
    pub name: String,
    pub conditions: Vec<HealthCondition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct HealthCategory {
    pub id: String,
    pub name: String,
    pub groups: Vec<HealthGroup>,
}

/// Per-condition dietary rule. List order is display order and is preserved
/// verbatim into guidance text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DietRule {
    pub id: String,
    pub name: String,
    pub avoid: Vec<String>,
    pub limit: Vec<String>,
    pub recommend: Vec<String>,
    pub general_advice: String,
}

/// Reference prose about a condition. Optional per condition — absence means
/// "no detail available", not an error.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DiseaseInfo {
    pub id: String,
    pub overview: Bilingual,
    pub severity: Bilingual,
    pub dietary_habits: Bilingual,
    pub advice: Bilingual,
}
