use std::sync::Arc;

use nutriguard_core::application::NutriGuardService;
use nutriguard_core::domain::ingredient::IngredientStore;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: NutriGuardService,
    pub ingredients: IngredientStore,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: NutriGuardService) -> Self {
        Self {
            args,
            service,
            ingredients: IngredientStore::new(),
        }
    }
}
