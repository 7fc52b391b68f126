use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

use super::{NewTrendRecord, TrendRecord, TrendStore};
use crate::error::TrendStoreError;

/// In-process trend store. Records are kept in creation order so a stable
/// sort by count yields oldest-first ties.
#[derive(Debug, Default)]
pub struct MemoryTrendStore {
    records: Mutex<Vec<TrendRecord>>,
    next_id: AtomicU64,
}

impl MemoryTrendStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<TrendRecord>>, TrendStoreError> {
        self.records
            .lock()
            .map_err(|_| TrendStoreError::Unavailable("memory store lock poisoned".to_string()))
    }
}

#[async_trait]
impl TrendStore for MemoryTrendStore {
    async fn find(&self, term: &str) -> Result<Option<TrendRecord>, TrendStoreError> {
        let records = self.lock()?;
        Ok(records.iter().find(|r| r.search_term == term).cloned())
    }

    async fn create(&self, record: NewTrendRecord) -> Result<TrendRecord, TrendStoreError> {
        let mut records = self.lock()?;
        if records.iter().any(|r| r.search_term == record.search_term) {
            return Err(TrendStoreError::Duplicate(record.search_term));
        }

        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let created = TrendRecord {
            id: format!("mem-{}", id),
            search_term: record.search_term,
            count: record.count,
            movie_id: record.movie_id,
            title: record.title,
            poster_url: record.poster_url,
        };
        records.push(created.clone());
        Ok(created)
    }

    async fn increment(&self, record_id: &str) -> Result<TrendRecord, TrendStoreError> {
        let mut records = self.lock()?;
        let record = records
            .iter_mut()
            .find(|r| r.id == record_id)
            .ok_or_else(|| TrendStoreError::Unavailable(format!("no record {}", record_id)))?;

        record.count = record.count.saturating_add(1);
        Ok(record.clone())
    }

    async fn top(&self, limit: usize) -> Result<Vec<TrendRecord>, TrendStoreError> {
        let mut records = self.lock()?.clone();
        records.sort_by(|a, b| b.count.cmp(&a.count));
        records.truncate(limit);
        Ok(records)
    }
}
