//! Pure Application Model - Elm Architecture
//!
//! This module defines the cloneable state for the application:
//!
//! - **SearchModel**: input, debounced term, latest search results/errors
//! - **UiModel**: dialogs and visual state
//! - trending records loaded from the trend store
//!
//! No I/O happens here. Services send responses, handlers apply them.

pub mod search;
pub mod types;
pub mod ui;

use std::time::Duration;

pub use search::SearchModel;
pub use types::*;
pub use ui::UiModel;

use crate::trends::TrendRecord;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    pub search: SearchModel,

    /// Most searched terms, best first
    pub trending: Vec<TrendRecord>,

    pub ui: UiModel,
}

impl Model {
    pub fn new(debounce: Duration, show_welcome: bool) -> Self {
        Self {
            search: SearchModel::new(debounce),
            trending: Vec::new(),
            ui: UiModel::new(show_welcome),
        }
    }

    pub fn has_modal(&self) -> bool {
        self.ui.has_modal()
    }
}
