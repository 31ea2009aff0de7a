use std::collections::VecDeque;
use std::sync::{Arc, RwLock};

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_analysis::{entities::ScanRecord, ports::ScanHistoryRepository},
};

/// Bounded, most-recent-first scan history.
///
/// Appending beyond the cap drops the oldest entry. The lock is held only
/// for the copy in/out; records themselves are immutable.
#[derive(Debug, Clone)]
pub struct InMemoryScanHistory {
    max_entries: usize,
    records: Arc<RwLock<VecDeque<ScanRecord>>>,
}

impl InMemoryScanHistory {
    pub fn new(max_entries: usize) -> Self {
        Self {
            max_entries,
            records: Arc::new(RwLock::new(VecDeque::new())),
        }
    }
}

impl ScanHistoryRepository for InMemoryScanHistory {
    async fn append(&self, record: ScanRecord) -> Result<(), CoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| CoreError::InternalServerError)?;

        records.push_front(record);
        records.truncate(self.max_entries);

        Ok(())
    }

    async fn list(&self) -> Result<Vec<ScanRecord>, CoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| CoreError::InternalServerError)?;

        Ok(records.iter().cloned().collect())
    }

    async fn clear(&self) -> Result<(), CoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| CoreError::InternalServerError)?;

        records.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalogue::entities::Language;
    use crate::domain::food_analysis::entities::AnalysisResult;

    fn record(tag: &str) -> ScanRecord {
        ScanRecord::new(Some(tag.to_string()), AnalysisResult::fallback(Language::En))
    }

    #[tokio::test]
    async fn history_is_most_recent_first() {
        let history = InMemoryScanHistory::new(20);
        history.append(record("first")).await.unwrap();
        history.append(record("second")).await.unwrap();

        let records = history.list().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].image_ref.as_deref(), Some("second"));
        assert_eq!(records[1].image_ref.as_deref(), Some("first"));
    }

    #[tokio::test]
    async fn append_caps_the_list_and_drops_the_oldest() {
        let history = InMemoryScanHistory::new(3);
        for i in 0..5 {
            history.append(record(&format!("scan-{i}"))).await.unwrap();
        }

        let records = history.list().await.unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].image_ref.as_deref(), Some("scan-4"));
        assert_eq!(records[2].image_ref.as_deref(), Some("scan-2"));
    }

    #[tokio::test]
    async fn clear_empties_the_history() {
        let history = InMemoryScanHistory::new(20);
        history.append(record("only")).await.unwrap();
        history.clear().await.unwrap();

        assert!(history.list().await.unwrap().is_empty());
    }
}
