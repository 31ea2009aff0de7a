use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One sample day of meals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DailyMealPlan {
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
    pub snacks: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub name: String,
    pub duration_or_reps: String,
    pub benefit: String,
}

/// Exercise routine sized to be safe for the stated conditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    pub frequency: String,
    pub avg_duration: String,
    pub focus: String,
    pub exercises: Vec<Exercise>,
    pub precautions: Vec<String>,
}

/// A generated care plan. `generated_at` is stamped by the pipeline, never
/// taken from the inference service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AiDietPlan {
    pub summary: String,
    pub meals: DailyMealPlan,
    pub workout: WorkoutPlan,
    pub guidelines: Vec<String>,
    pub lifestyle: Vec<String>,
    pub generated_at: DateTime<Utc>,
}
