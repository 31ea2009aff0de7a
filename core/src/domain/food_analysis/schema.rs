use serde_json::json;

/// Strict output schema for the risk-analysis operation.
///
/// Field names and the closed risk-level enumeration are the wire contract;
/// the response validator relies on every required field being present.
pub fn analysis_response_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "foodName": { "type": "string" },
            "riskLevel": {
                "type": "string",
                "enum": ["SAFE", "MODERATE", "RISKY", "UNKNOWN"]
            },
            "riskReason": {
                "type": "string",
                "description": "A short concise sentence explaining the main risk or benefit."
            },
            "triggeredConditions": {
                "type": "array",
                "items": { "type": "string" },
                "description": "List of the specific condition names from the user's profile that make this food risky. Empty if SAFE."
            },
            "detailedAnalysis": {
                "type": "string",
                "description": "A helpful paragraph explaining why this is good or bad given the specific diseases."
            },
            "portionRecommendation": {
                "type": "string",
                "description": "Specific quantity advice e.g. '1/2 cup max'."
            },
            "alternatives": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string", "description": "Name of the alternative food." },
                        "reason": { "type": "string", "description": "Why this is a better choice for the user's conditions." }
                    },
                    "required": ["name", "reason"]
                },
                "description": "List of 2-3 specific healthier alternative food options."
            },
            "nutrients": {
                "type": "object",
                "properties": {
                    "calories": { "type": "number" },
                    "carbs": { "type": "number" },
                    "protein": { "type": "number" },
                    "fat": { "type": "number" },
                    "sugar": { "type": "number" },
                    "sodium": { "type": "number" }
                },
                "required": ["calories", "carbs", "protein", "fat", "sugar", "sodium"]
            }
        },
        "required": [
            "foodName", "riskLevel", "riskReason", "triggeredConditions",
            "detailedAnalysis", "portionRecommendation", "alternatives", "nutrients"
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_declares_required_fields_and_closed_risk_enum() {
        let schema = analysis_response_schema();

        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert!(required.contains(&"foodName"));
        assert!(required.contains(&"riskLevel"));
        assert!(required.contains(&"nutrients"));

        let levels = schema["properties"]["riskLevel"]["enum"].as_array().unwrap();
        assert_eq!(levels.len(), 4);
        assert!(levels.iter().any(|v| v == "UNKNOWN"));
    }
}
