use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    diet_plan::{entities::AiDietPlan, value_objects::GenerateDietPlanInput},
};

/// Service trait for care-plan generation.
///
/// Unlike risk analysis there is no fallback result: boundary and parse
/// errors propagate to the caller, which decides how to present failure.
#[cfg_attr(test, mockall::automock)]
pub trait DietPlanService: Send + Sync {
    fn generate_diet_plan(
        &self,
        input: GenerateDietPlanInput,
    ) -> impl Future<Output = Result<AiDietPlan, CoreError>> + Send;
}
