//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - errors: Catalog failure classification and user-facing messages
//! - formatting: Card text (rating, year, language, truncation)
//! - navigation: Result list selection calculations
//! - search: What a settled search term triggers
//! - ui: Spinner frames and paging

pub mod errors;
pub mod formatting;
pub mod navigation;
pub mod search;
pub mod ui;
