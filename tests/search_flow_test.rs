//! End-to-end search cycle against a mock catalog
//!
//! Drives the model and handlers exactly like the main loop does:
//! start_search → search service → handle_search_response, with the
//! catalog served by mockito and trends kept in memory.

use async_trait::async_trait;
use mockito::{Matcher, Server, ServerGuard};
use popcine::api::{MovieSummary, TmdbClient};
use popcine::error::TrendStoreError;
use popcine::handlers::{handle_search_response, start_search};
use popcine::logic::errors::FALLBACK_ERROR_MESSAGE;
use popcine::model::{ErrorNotice, Model, SearchPhase};
use popcine::services::{spawn_search_service, SearchRequest, SearchResponse};
use popcine::trends::{MemoryTrendStore, NewTrendRecord, TrendRecord, TrendStore, TrendTracker};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

const API_KEY: &str = "test-token";

/// Memory store that counts write attempts
#[derive(Default)]
struct CountingStore {
    inner: MemoryTrendStore,
    creates: AtomicUsize,
    increments: AtomicUsize,
}

impl CountingStore {
    fn mutations(&self) -> usize {
        self.creates.load(Ordering::SeqCst) + self.increments.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TrendStore for CountingStore {
    async fn find(&self, term: &str) -> Result<Option<TrendRecord>, TrendStoreError> {
        self.inner.find(term).await
    }

    async fn create(&self, record: NewTrendRecord) -> Result<TrendRecord, TrendStoreError> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        self.inner.create(record).await
    }

    async fn increment(&self, record_id: &str) -> Result<TrendRecord, TrendStoreError> {
        self.increments.fetch_add(1, Ordering::SeqCst);
        self.inner.increment(record_id).await
    }

    async fn top(&self, limit: usize) -> Result<Vec<TrendRecord>, TrendStoreError> {
        self.inner.top(limit).await
    }
}

struct Harness {
    model: Model,
    store: Arc<CountingStore>,
    request_tx: UnboundedSender<SearchRequest>,
    response_rx: UnboundedReceiver<SearchResponse>,
}

impl Harness {
    fn new(server: &ServerGuard) -> Self {
        let store = Arc::new(CountingStore::default());
        let client = TmdbClient::new(server.url(), API_KEY.to_string());
        let tracker = TrendTracker::new(store.clone());
        let (request_tx, response_rx) = spawn_search_service(client, tracker, 5);

        Self {
            model: Model::new(Duration::from_millis(500), false),
            store,
            request_tx,
            response_rx,
        }
    }

    async fn next_response(&mut self) -> SearchResponse {
        tokio::time::timeout(Duration::from_secs(5), self.response_rx.recv())
            .await
            .expect("timed out waiting for search service")
            .expect("search service stopped")
    }

    /// Run one search and apply the movie response
    async fn search(&mut self, term: &str) {
        let request = start_search(&mut self.model, term.to_string());
        self.request_tx.send(request).unwrap();

        let response = self.next_response().await;
        assert!(matches!(response, SearchResponse::Movies { .. }));
        handle_search_response(&mut self.model, response);
    }

    /// Wait for the trending refresh that follows a successful search
    async fn await_trending(&mut self) {
        let response = self.next_response().await;
        assert!(matches!(response, SearchResponse::Trending { .. }));
        handle_search_response(&mut self.model, response);
    }
}

fn page(movies: serde_json::Value) -> String {
    json!({ "page": 1, "results": movies, "total_pages": 1, "total_results": 1 }).to_string()
}

fn batman() -> serde_json::Value {
    json!([
        {
            "id": 268,
            "title": "Batman",
            "poster_path": "/batman.jpg",
            "popularity": 45.2,
            "vote_average": 7.2,
            "release_date": "1989-06-23",
            "original_language": "en"
        },
        {
            "id": 272,
            "title": "Batman Begins",
            "poster_path": null,
            "popularity": 40.0,
            "vote_average": 7.7,
            "release_date": "2005-06-10",
            "original_language": "en"
        }
    ])
}

#[tokio::test]
async fn test_empty_term_uses_discover_and_records_nothing() {
    let mut server = Server::new_async().await;
    let discover = server
        .mock("GET", "/discover/movie")
        .match_query(Matcher::UrlEncoded(
            "sort_by".into(),
            "popularity.desc".into(),
        ))
        .match_header("authorization", "Bearer test-token")
        .match_header("accept", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(page(batman()))
        .expect(1)
        .create_async()
        .await;

    let mut harness = Harness::new(&server);
    harness.search("").await;
    harness.await_trending().await;

    discover.assert_async().await;
    assert_eq!(harness.model.search.phase, SearchPhase::Success);
    assert_eq!(harness.model.search.results.len(), 2);
    assert!(!harness.model.search.loading);
    assert_eq!(harness.store.mutations(), 0);
    assert!(harness.model.trending.is_empty());
}

#[tokio::test]
async fn test_term_is_percent_encoded_and_recorded_once() {
    let mut server = Server::new_async().await;
    let search = server
        .mock("GET", "/search/movie")
        .match_query(Matcher::UrlEncoded("query".into(), "the dark knight".into()))
        .with_status(200)
        .with_body(page(batman()))
        .expect(1)
        .create_async()
        .await;

    let mut harness = Harness::new(&server);
    harness.search("the dark knight").await;
    harness.await_trending().await;

    search.assert_async().await;
    assert_eq!(harness.store.mutations(), 1);
    assert_eq!(harness.model.trending.len(), 1);
    let record = &harness.model.trending[0];
    assert_eq!(record.search_term, "the dark knight");
    assert_eq!(record.count, 1);
    assert_eq!(record.movie_id, 268);
    assert_eq!(record.title, "Batman");
    assert_eq!(
        record.poster_url.as_deref(),
        Some("https://image.tmdb.org/t/p/w500/batman.jpg")
    );
}

#[tokio::test]
async fn test_empty_results_record_nothing() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/search/movie")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(page(json!([])))
        .create_async()
        .await;

    let mut harness = Harness::new(&server);
    harness.search("zzzzqx").await;
    harness.await_trending().await;

    assert_eq!(harness.model.search.phase, SearchPhase::Success);
    assert!(harness.model.search.results.is_empty());
    assert_eq!(harness.store.mutations(), 0);
}

#[tokio::test]
async fn test_null_results_are_empty() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/search/movie")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"page":1,"results":null}"#)
        .create_async()
        .await;

    let mut harness = Harness::new(&server);
    harness.search("heat").await;

    assert_eq!(harness.model.search.phase, SearchPhase::Success);
    assert!(harness.model.search.results.is_empty());
}

#[tokio::test]
async fn test_server_error_shows_connectivity_panel() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/discover/movie")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(page(batman()))
        .create_async()
        .await;
    server
        .mock("GET", "/search/movie")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("upstream exploded")
        .create_async()
        .await;

    let mut harness = Harness::new(&server);
    harness.search("").await;
    harness.await_trending().await;
    assert_eq!(harness.model.search.results.len(), 2);

    harness.search("heat").await;

    assert_eq!(harness.model.search.phase, SearchPhase::HttpError);
    assert!(harness.model.search.results.is_empty());
    assert!(!harness.model.search.loading);
    let error = harness.model.search.error.clone().expect("error panel");
    assert!(matches!(error, ErrorNotice::Connectivity { .. }));
    assert_eq!(error.headline(), FALLBACK_ERROR_MESSAGE);
    assert_eq!(harness.store.mutations(), 0);
}

#[tokio::test]
async fn test_malformed_body_shows_connectivity_panel() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/search/movie")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>captive portal</html>")
        .create_async()
        .await;

    let mut harness = Harness::new(&server);
    harness.search("heat").await;

    assert_eq!(harness.model.search.phase, SearchPhase::HttpError);
    assert!(!harness.model.search.loading);
}

#[tokio::test]
async fn test_failure_payload_shows_status_message() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/search/movie")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            json!({
                "success": false,
                "status_code": 7,
                "status_message": "Invalid API key: You must be granted a valid key."
            })
            .to_string(),
        )
        .create_async()
        .await;

    let mut harness = Harness::new(&server);
    harness.search("heat").await;

    assert_eq!(harness.model.search.phase, SearchPhase::ApiError);
    assert!(harness.model.search.results.is_empty());
    assert_eq!(
        harness.model.search.error,
        Some(ErrorNotice::Message(
            "Invalid API key: You must be granted a valid key.".to_string()
        ))
    );
}

#[tokio::test]
async fn test_failure_payload_without_message_uses_fallback() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/search/movie")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"success":false}"#)
        .create_async()
        .await;

    let mut harness = Harness::new(&server);
    harness.search("heat").await;

    assert_eq!(
        harness.model.search.error,
        Some(ErrorNotice::Message(FALLBACK_ERROR_MESSAGE.to_string()))
    );
}

#[tokio::test]
async fn test_batman_twice_counts_two() {
    let mut server = Server::new_async().await;
    let search = server
        .mock("GET", "/search/movie")
        .match_query(Matcher::UrlEncoded("query".into(), "batman".into()))
        .with_status(200)
        .with_body(page(batman()))
        .expect(2)
        .create_async()
        .await;

    let mut harness = Harness::new(&server);
    harness.search("batman").await;
    harness.await_trending().await;
    assert_eq!(harness.model.trending[0].count, 1);

    harness.search("batman").await;
    harness.await_trending().await;

    search.assert_async().await;
    assert_eq!(harness.model.trending.len(), 1);
    assert_eq!(harness.model.trending[0].search_term, "batman");
    assert_eq!(harness.model.trending[0].count, 2);
    assert_eq!(harness.store.creates.load(Ordering::SeqCst), 1);
    assert_eq!(harness.store.increments.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_trend_key_is_trimmed() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/search/movie")
        .match_query(Matcher::UrlEncoded("query".into(), "batman".into()))
        .with_status(200)
        .with_body(page(batman()))
        .create_async()
        .await;

    let mut harness = Harness::new(&server);
    harness.search("  batman ").await;
    harness.await_trending().await;
    harness.search("batman").await;
    harness.await_trending().await;

    assert_eq!(harness.model.trending.len(), 1);
    assert_eq!(harness.model.trending[0].count, 2);
}

#[tokio::test]
async fn test_load_trending_on_mount() {
    let server = Server::new_async().await;
    let mut harness = Harness::new(&server);

    let first = MovieSummary {
        id: 603,
        title: "The Matrix".to_string(),
        poster_path: None,
        popularity: 1.0,
        vote_average: None,
        release_date: None,
        original_language: None,
    };
    harness.store.record_search("matrix", &first).await.unwrap();

    harness.request_tx.send(SearchRequest::LoadTrending).unwrap();
    harness.await_trending().await;

    assert_eq!(harness.model.trending.len(), 1);
    assert_eq!(harness.model.trending[0].title, "The Matrix");
}
