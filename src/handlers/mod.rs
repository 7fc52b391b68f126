//! Event Handlers
//!
//! - search: settled terms and responses from the search service
//! - keyboard: user keyboard input
//!
//! Handlers are pure functions over the Model; the ones that need I/O return
//! a request for the main loop to send.

pub mod keyboard;
pub mod search;

pub use keyboard::handle_key;
pub use search::{handle_search_response, poll_debounced, start_search};
