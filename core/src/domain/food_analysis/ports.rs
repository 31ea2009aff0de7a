use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_analysis::{
        entities::{AnalysisResult, ScanRecord},
        value_objects::AnalyzeFoodInput,
    },
};

/// History collaborator owning the bounded scan list.
///
/// `append` keeps the most recent entries first and drops the oldest once
/// the configured cap is reached. This is the pipeline's only observable
/// write side effect.
#[cfg_attr(test, mockall::automock)]
pub trait ScanHistoryRepository: Send + Sync {
    fn append(&self, record: ScanRecord) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn list(&self) -> impl Future<Output = Result<Vec<ScanRecord>, CoreError>> + Send;

    fn clear(&self) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Service trait for the risk-analysis operation.
#[cfg_attr(test, mockall::automock)]
pub trait FoodAnalysisService: Send + Sync {
    fn analyze_food(
        &self,
        input: AnalyzeFoodInput,
    ) -> impl Future<Output = Result<AnalysisResult, CoreError>> + Send;

    fn scan_history(&self) -> impl Future<Output = Result<Vec<ScanRecord>, CoreError>> + Send;
}
