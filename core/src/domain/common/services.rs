use std::sync::Arc;

use crate::domain::{
    catalogue::store::CatalogueStore, food_analysis::ports::ScanHistoryRepository,
    inference::ports::InferenceClient,
};

/// The one service object behind every pipeline operation.
///
/// Generic over the two ports with side effects: the inference boundary and
/// the scan-history collaborator. The catalogue is process-wide, read-only
/// state and is shared by reference.
#[derive(Clone)]
pub struct Service<LLM, SH>
where
    LLM: InferenceClient,
    SH: ScanHistoryRepository,
{
    pub(crate) catalogue: Arc<CatalogueStore>,
    pub(crate) llm_client: LLM,
    pub(crate) history: SH,
}

impl<LLM, SH> Service<LLM, SH>
where
    LLM: InferenceClient,
    SH: ScanHistoryRepository,
{
    pub fn new(catalogue: Arc<CatalogueStore>, llm_client: LLM, history: SH) -> Self {
        Self {
            catalogue,
            llm_client,
            history,
        }
    }

    pub fn catalogue(&self) -> &CatalogueStore {
        &self.catalogue
    }
}
