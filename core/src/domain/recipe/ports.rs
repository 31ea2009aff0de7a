use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{entities::ChefResponse, value_objects::GenerateRecipesInput},
};

/// Service trait for recipe generation. Errors propagate to the caller;
/// there is no fallback object.
#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    fn generate_recipes(
        &self,
        input: GenerateRecipesInput,
    ) -> impl Future<Output = Result<ChefResponse, CoreError>> + Send;
}
