use serde_json::json;

/// Strict output schema for care-plan generation.
pub fn diet_plan_response_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "summary": { "type": "string" },
            "meals": {
                "type": "object",
                "properties": {
                    "breakfast": { "type": "string" },
                    "lunch": { "type": "string" },
                    "dinner": { "type": "string" },
                    "snacks": { "type": "string" }
                },
                "required": ["breakfast", "lunch", "dinner", "snacks"]
            },
            "workout": {
                "type": "object",
                "properties": {
                    "frequency": { "type": "string", "description": "e.g. 3-4 times/week" },
                    "avgDuration": { "type": "string", "description": "e.g. 30 mins" },
                    "focus": { "type": "string", "description": "e.g. Low Impact Cardio" },
                    "exercises": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "name": { "type": "string" },
                                "durationOrReps": { "type": "string" },
                                "benefit": { "type": "string" }
                            },
                            "required": ["name", "durationOrReps", "benefit"]
                        }
                    },
                    "precautions": { "type": "array", "items": { "type": "string" } }
                },
                "required": ["frequency", "avgDuration", "focus", "exercises", "precautions"]
            },
            "guidelines": {
                "type": "array",
                "items": { "type": "string" }
            },
            "lifestyle": {
                "type": "array",
                "items": { "type": "string" }
            }
        },
        "required": ["summary", "meals", "workout", "guidelines", "lifestyle"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_requires_the_full_plan_shape() {
        let schema = diet_plan_response_schema();
        let required = schema["required"].as_array().unwrap();
        for field in ["summary", "meals", "workout", "guidelines", "lifestyle"] {
            assert!(required.iter().any(|v| v == field), "missing {field}");
        }

        let workout_required = schema["properties"]["workout"]["required"].as_array().unwrap();
        assert!(workout_required.iter().any(|v| v == "precautions"));
    }
}
