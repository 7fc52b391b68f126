//! Trend Store
//!
//! Tracks how often each search term is looked up:
//! - appwrite: hosted document store over the Appwrite REST API
//! - memory: process-local store (session only, also used by tests)
//!
//! `TrendTracker` is what the rest of the app talks to. It never returns
//! errors: failed writes are logged and failed reads yield an empty list.

pub mod appwrite;
pub mod memory;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::api::MovieSummary;
use crate::error::TrendStoreError;

pub use appwrite::AppwriteTrendStore;
pub use memory::MemoryTrendStore;

/// Default number of entries shown in the trending panel
pub const DEFAULT_TRENDING_LIMIT: usize = 5;

/// One counter document, keyed by search term
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TrendRecord {
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(rename = "searchTerm")]
    pub search_term: String,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub movie_id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub poster_url: Option<String>,
}

/// Fields stored when a term is searched for the first time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTrendRecord {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
    pub count: u64,
    pub movie_id: u64,
    pub title: String,
    pub poster_url: Option<String>,
}

impl NewTrendRecord {
    pub fn new(term: &str, top_result: &MovieSummary) -> Self {
        Self {
            search_term: term.to_string(),
            count: 1,
            movie_id: top_result.id,
            title: top_result.title.clone(),
            poster_url: top_result.poster_url(),
        }
    }
}

/// Backend operations of a trend store.
///
/// `increment` is the only way a count changes once a record exists.
#[async_trait]
pub trait TrendStore: Send + Sync {
    async fn find(&self, term: &str) -> Result<Option<TrendRecord>, TrendStoreError>;

    async fn create(&self, record: NewTrendRecord) -> Result<TrendRecord, TrendStoreError>;

    async fn increment(&self, record_id: &str) -> Result<TrendRecord, TrendStoreError>;

    /// Records by count descending, equal counts oldest first
    async fn top(&self, limit: usize) -> Result<Vec<TrendRecord>, TrendStoreError>;

    /// Create-or-increment the record for `term`.
    ///
    /// When another writer creates the record between `find` and `create`,
    /// the store reports `Duplicate` and the existing record is incremented
    /// instead, so neither search is lost.
    async fn record_search(
        &self,
        term: &str,
        top_result: &MovieSummary,
    ) -> Result<TrendRecord, TrendStoreError> {
        if let Some(existing) = self.find(term).await? {
            return self.increment(&existing.id).await;
        }

        match self.create(NewTrendRecord::new(term, top_result)).await {
            Err(TrendStoreError::Duplicate(dup)) => match self.find(term).await? {
                Some(existing) => {
                    tracing::debug!(term, "record created concurrently, incrementing");
                    self.increment(&existing.id).await
                }
                None => Err(TrendStoreError::Duplicate(dup)),
            },
            result => result,
        }
    }
}

/// Error-swallowing facade over a `TrendStore`.
///
/// Clones share one lock, so recordings from this process run one at a time
/// and never race each other's find-then-create.
#[derive(Clone)]
pub struct TrendTracker {
    store: Arc<dyn TrendStore>,
    record_lock: Arc<Mutex<()>>,
}

impl TrendTracker {
    pub fn new(store: Arc<dyn TrendStore>) -> Self {
        Self {
            store,
            record_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Record a successful search. Returns the new count, or None if the
    /// store failed (the failure is logged).
    pub async fn record_search(&self, term: &str, top_result: &MovieSummary) -> Option<u64> {
        let _guard = self.record_lock.lock().await;
        match self.store.record_search(term, top_result).await {
            Ok(record) => {
                tracing::debug!(term, count = record.count, "recorded search");
                Some(record.count)
            }
            Err(e) => {
                tracing::warn!(term, error = %e, "failed to record search");
                None
            }
        }
    }

    /// Top trending records; empty on any backend failure
    pub async fn list_top_trending(&self, limit: usize) -> Vec<TrendRecord> {
        match self.store.top(limit).await {
            Ok(mut records) => {
                records.truncate(limit);
                records
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load trending searches");
                Vec::new()
            }
        }
    }
}
