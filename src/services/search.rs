use tokio::sync::mpsc;

use crate::api::{MovieSummary, TmdbClient};
use crate::error::CatalogError;
use crate::logic;
use crate::trends::{TrendRecord, TrendTracker};

/// Requests sent from the UI loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchRequest {
    /// Run a catalog search for a settled term (blank = discover)
    Search { generation: u64, term: String },

    /// Reload the trending list
    LoadTrending,
}

/// Responses sent back to the UI loop
#[derive(Debug)]
pub enum SearchResponse {
    Movies {
        generation: u64,
        term: String,
        result: Result<Vec<MovieSummary>, CatalogError>,
    },
    Trending {
        records: Vec<TrendRecord>,
    },
}

/// Owns the clients; every request runs in its own task so a slow search
/// never holds up a newer one.
#[derive(Clone)]
pub struct SearchService {
    client: TmdbClient,
    tracker: TrendTracker,
    trending_limit: usize,
    response_tx: mpsc::UnboundedSender<SearchResponse>,
}

impl SearchService {
    pub fn new(
        client: TmdbClient,
        tracker: TrendTracker,
        trending_limit: usize,
        response_tx: mpsc::UnboundedSender<SearchResponse>,
    ) -> Self {
        Self {
            client,
            tracker,
            trending_limit,
            response_tx,
        }
    }

    fn dispatch(&self, request: SearchRequest) {
        let service = self.clone();
        tokio::spawn(async move {
            match request {
                SearchRequest::Search { generation, term } => {
                    service.search(generation, term).await;
                }
                SearchRequest::LoadTrending => {
                    service.send_trending().await;
                }
            }
        });
    }

    async fn search(&self, generation: u64, term: String) {
        tracing::debug!(generation, term = %term, "searching catalog");
        let result = self.client.fetch_movies(&term).await;

        let candidate = match &result {
            Ok(movies) => {
                tracing::debug!(generation, count = movies.len(), "catalog answered");
                logic::search::trend_key(&term)
                    .zip(logic::search::trend_candidate(&term, movies))
                    .map(|(key, movie)| (key.to_string(), movie.clone()))
            }
            Err(e) => {
                tracing::error!(generation, term = %term, error = %e, "catalog search failed");
                None
            }
        };
        let succeeded = result.is_ok();

        // Results go out before any trend bookkeeping
        let _ = self.response_tx.send(SearchResponse::Movies {
            generation,
            term,
            result,
        });

        if !succeeded {
            return;
        }

        match candidate {
            Some((key, movie)) => {
                // Detached so a stuck trend store never delays the next search
                let service = self.clone();
                tokio::spawn(async move {
                    service.tracker.record_search(&key, &movie).await;
                    service.send_trending().await;
                });
            }
            None => self.send_trending().await,
        }
    }

    async fn send_trending(&self) {
        let records = self.tracker.list_top_trending(self.trending_limit).await;
        let _ = self.response_tx.send(SearchResponse::Trending { records });
    }
}

/// Spawn the search service task.
///
/// Returns the request sender and the response receiver. The task ends when
/// every request sender has been dropped.
pub fn spawn_search_service(
    client: TmdbClient,
    tracker: TrendTracker,
    trending_limit: usize,
) -> (
    mpsc::UnboundedSender<SearchRequest>,
    mpsc::UnboundedReceiver<SearchResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<SearchRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<SearchResponse>();

    let service = SearchService::new(client, tracker, trending_limit, response_tx);
    tokio::spawn(async move {
        while let Some(request) = request_rx.recv().await {
            service.dispatch(request);
        }
        tracing::debug!("search service stopped");
    });

    (request_tx, response_rx)
}
