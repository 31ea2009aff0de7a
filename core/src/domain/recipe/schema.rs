use serde_json::json;

/// Schema fragment for a single recipe, reused for each meal slot.
fn recipe_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "name": { "type": "string" },
            "description": { "type": "string" },
            "ingredients": { "type": "array", "items": { "type": "string" } },
            "missingIngredients": {
                "type": "array",
                "items": { "type": "string" },
                "description": "List of MAIN ingredients required for this recipe that were NOT found in the user's photos."
            },
            "instructions": { "type": "array", "items": { "type": "string" } },
            "healthBenefits": { "type": "string" },
            "macrosEstimate": {
                "type": "object",
                "properties": {
                    "calories": { "type": "number" },
                    "protein": { "type": "number" },
                    "carbs": { "type": "number" },
                    "fat": { "type": "number" }
                },
                "required": ["calories", "protein", "carbs", "fat"]
            }
        },
        "required": [
            "name", "description", "ingredients", "missingIngredients",
            "instructions", "healthBenefits", "macrosEstimate"
        ]
    })
}

/// Strict output schema for the chef operation: identified ingredients plus
/// exactly three meal recipes.
pub fn chef_response_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "identifiedIngredients": {
                "type": "array",
                "items": { "type": "string" },
                "description": "List of ingredients recognized from the image"
            },
            "breakfast": recipe_schema(),
            "lunch": recipe_schema(),
            "dinner": recipe_schema()
        },
        "required": ["identifiedIngredients", "breakfast", "lunch", "dinner"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chef_schema_requires_three_meals_and_missing_ingredients() {
        let schema = chef_response_schema();
        let required = schema["required"].as_array().unwrap();
        for field in ["identifiedIngredients", "breakfast", "lunch", "dinner"] {
            assert!(required.iter().any(|v| v == field), "missing {field}");
        }

        for meal in ["breakfast", "lunch", "dinner"] {
            let meal_required = schema["properties"][meal]["required"].as_array().unwrap();
            assert!(meal_required.iter().any(|v| v == "missingIngredients"));
        }
    }
}
