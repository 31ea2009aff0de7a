use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::catalogue::entities::Language;
use crate::domain::common::generate_timestamp;

/// Suitability classification of a scanned food item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Safe,
    Moderate,
    Risky,
    Unknown,
}

impl RiskLevel {
    /// Maps the wire string returned by the inference service.
    ///
    /// Exact match only. Near-matches, case variants and unknown tokens all
    /// collapse to `Unknown` — a conservative default, not an error.
    pub fn from_wire(value: &str) -> Self {
        match value {
            "SAFE" => RiskLevel::Safe,
            "MODERATE" => RiskLevel::Moderate,
            "RISKY" => RiskLevel::Risky,
            _ => RiskLevel::Unknown,
        }
    }
}

/// Estimated nutrients for a standard serving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutrientInfo {
    pub calories: f64,
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
    pub sugar: f64,
    pub sodium: f64,
}

impl NutrientInfo {
    pub fn zeroed() -> Self {
        Self {
            calories: 0.0,
            carbs: 0.0,
            protein: 0.0,
            fat: 0.0,
            sugar: 0.0,
            sodium: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AlternativeFood {
    pub name: String,
    pub reason: String,
}

/// Outcome of one risk analysis.
///
/// `triggered_conditions` and alternative names are produced by the
/// inference service and kept as display-only text; they are never resolved
/// back into catalogue identifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub food_name: String,
    pub risk_level: RiskLevel,
    pub risk_reason: String,
    pub triggered_conditions: Vec<String>,
    pub detailed_analysis: String,
    pub portion_recommendation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternatives: Option<Vec<AlternativeFood>>,
    pub nutrients: NutrientInfo,
}

impl AnalysisResult {
    /// The fixed placeholder returned when the analysis cannot complete.
    pub fn fallback(language: Language) -> Self {
        let (food_name, risk_reason, detailed_analysis) = match language {
            Language::En => (
                "Analysis Failed",
                "Could not process image.",
                "Please try again with a clearer photo. Ensure you have internet connection.",
            ),
            Language::Zh => ("分析失败", "无法处理图片", "请重试清晰的照片。确保网络连接正常。"),
        };

        Self {
            food_name: food_name.to_string(),
            risk_level: RiskLevel::Unknown,
            risk_reason: risk_reason.to_string(),
            triggered_conditions: Vec::new(),
            detailed_analysis: detailed_analysis.to_string(),
            portion_recommendation: "N/A".to_string(),
            alternatives: None,
            nutrients: NutrientInfo::zeroed(),
        }
    }
}

/// One completed scan, immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScanRecord {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub image_ref: Option<String>,
    pub result: AnalysisResult,
}

impl ScanRecord {
    pub fn new(image_ref: Option<String>, result: AnalysisResult) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            timestamp: now,
            image_ref,
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_level_mapping_is_exact_match_only() {
        assert_eq!(RiskLevel::from_wire("SAFE"), RiskLevel::Safe);
        assert_eq!(RiskLevel::from_wire("MODERATE"), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_wire("RISKY"), RiskLevel::Risky);

        assert_eq!(RiskLevel::from_wire("UNKNOWN"), RiskLevel::Unknown);
        assert_eq!(RiskLevel::from_wire("risky"), RiskLevel::Unknown);
        assert_eq!(RiskLevel::from_wire("Safe"), RiskLevel::Unknown);
        assert_eq!(RiskLevel::from_wire("N/A"), RiskLevel::Unknown);
        assert_eq!(RiskLevel::from_wire(""), RiskLevel::Unknown);
        assert_eq!(RiskLevel::from_wire(" SAFE"), RiskLevel::Unknown);
    }

    #[test]
    fn fallback_is_locale_matched_and_neutral() {
        let en = AnalysisResult::fallback(Language::En);
        let zh = AnalysisResult::fallback(Language::Zh);

        for result in [&en, &zh] {
            assert_eq!(result.risk_level, RiskLevel::Unknown);
            assert!(result.triggered_conditions.is_empty());
            assert!(result.alternatives.is_none());
            assert_eq!(result.nutrients, NutrientInfo::zeroed());
            assert!(!result.food_name.is_empty());
            assert!(!result.risk_reason.is_empty());
            assert!(!result.detailed_analysis.is_empty());
        }

        assert_ne!(en.food_name, zh.food_name);
        assert_ne!(en.risk_reason, zh.risk_reason);
        assert_ne!(en.detailed_analysis, zh.detailed_analysis);
    }

    #[test]
    fn analysis_result_serializes_with_wire_field_names() {
        let value = serde_json::to_value(AnalysisResult::fallback(Language::En)).unwrap();
        assert!(value.get("foodName").is_some());
        assert!(value.get("riskLevel").is_some());
        assert_eq!(value["riskLevel"], "UNKNOWN");
        assert!(value.get("portionRecommendation").is_some());
    }
}
