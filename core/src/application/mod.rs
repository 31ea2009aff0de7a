use std::sync::Arc;

use crate::domain::catalogue::store::CatalogueStore;
use crate::domain::common::{NutriguardConfig, services::Service};
use crate::infrastructure::{history::InMemoryScanHistory, llm::GeminiInferenceClient};

/// Production wiring of the pipeline: Gemini behind the inference port and
/// the in-memory bounded history.
pub type NutriGuardService = Service<GeminiInferenceClient, InMemoryScanHistory>;

pub fn create_service(config: NutriguardConfig) -> NutriGuardService {
    let llm_client = GeminiInferenceClient::new(
        config.llm.gemini_api_key.clone(),
        config.llm.gemini_model.clone(),
    );
    let history = InMemoryScanHistory::new(config.history.max_entries);

    Service::new(Arc::new(CatalogueStore::new()), llm_client, history)
}
