//! External Services
//!
//! - search: background catalog searches and trend bookkeeping

pub mod search;

pub use search::{spawn_search_service, SearchRequest, SearchResponse};
