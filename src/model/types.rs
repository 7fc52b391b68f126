//! Shared types for the Model

/// Where the current search cycle stands.
///
/// Every settled term restarts the cycle at `Loading`; a blank term is just
/// another search (the discover listing), not a separate state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    Loading,
    Success,
    HttpError,
    ApiError,
}

/// Error shown in place of the result list
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorNotice {
    /// Catalog unreachable or answered garbage; rendered with DNS advice
    Connectivity { detail: String },
    /// Message reported by the catalog itself
    Message(String),
}

impl ErrorNotice {
    /// The line shown first in the error panel
    pub fn headline(&self) -> &str {
        match self {
            ErrorNotice::Connectivity { .. } => crate::logic::errors::FALLBACK_ERROR_MESSAGE,
            ErrorNotice::Message(message) => message,
        }
    }
}
