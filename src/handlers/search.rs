//! Search Response Handler
//!
//! Turns settled terms into search requests and applies responses from the
//! background search service to the model.

use std::time::Instant;

use crate::model::Model;
use crate::services::search::{SearchRequest, SearchResponse};

/// Begin a search cycle for `term` and build the request for it
pub fn start_search(model: &mut Model, term: String) -> SearchRequest {
    let generation = model.search.begin(term.clone());
    SearchRequest::Search { generation, term }
}

/// Start a search if the debounced term has settled on a new value
pub fn poll_debounced(model: &mut Model, now: Instant) -> Option<SearchRequest> {
    let term = model.search.poll_debounced(now)?;
    Some(start_search(model, term))
}

/// Handle a response from the search service
///
/// - Movies: applied only when it belongs to the latest search
/// - Trending: replaces the trending list
pub fn handle_search_response(model: &mut Model, response: SearchResponse) {
    match response {
        SearchResponse::Movies {
            generation,
            term,
            result,
        } => {
            if !model.search.apply_result(generation, &result) {
                tracing::debug!(
                    generation,
                    latest = model.search.generation,
                    term = %term,
                    "dropping superseded search response"
                );
            }
        }
        SearchResponse::Trending { records } => {
            model.trending = records;
        }
    }
}
