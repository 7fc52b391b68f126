//! Search Logic
//!
//! Pure rules deciding what a settled search term triggers.

use crate::api::MovieSummary;

/// Key under which a term is counted in the trend store
pub fn trend_key(term: &str) -> Option<&str> {
    let term = term.trim();
    if term.is_empty() {
        None
    } else {
        Some(term)
    }
}

/// The movie to record against `term`, if this search should be counted.
///
/// Only successful searches for a non-blank term that returned at least
/// one movie are counted; the first (best-ranked) result is stored.
///
/// # Examples
/// ```
/// use popcine::logic::search::trend_candidate;
///
/// assert!(trend_candidate("", &[]).is_none());
/// assert!(trend_candidate("batman", &[]).is_none());
/// ```
pub fn trend_candidate<'a>(term: &str, results: &'a [MovieSummary]) -> Option<&'a MovieSummary> {
    trend_key(term)?;
    results.first()
}
