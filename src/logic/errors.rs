use crate::error::CatalogError;
use crate::model::{ErrorNotice, SearchPhase};

/// Shown whenever the catalog gives us nothing better to say
pub const FALLBACK_ERROR_MESSAGE: &str = "Failed to fetch movies";

/// Connectivity advice shown under the fallback headline.
///
/// The catalog is unreachable from some resolvers, so the panel suggests
/// switching DNS before anything else.
pub const CONNECTIVITY_ADVICE: &[&str] = &[
    "Movies may not load due to DNS settings.",
    "Recommended fix: change DNS to 8.8.8.8 (preferred) / 8.8.4.4 (alternate)",
    "or use Cloudflare DNS: 1.1.1.1 / 1.0.0.1",
    "Still not working? Try a mobile hotspot or a VPN, then restart popcine.",
];

/// Map a catalog failure onto the search state machine
pub fn classify_error(error: &CatalogError) -> SearchPhase {
    match error {
        CatalogError::Api { .. } => SearchPhase::ApiError,
        CatalogError::Status { .. } | CatalogError::Network(_) | CatalogError::Decode(_) => {
            SearchPhase::HttpError
        }
    }
}

/// Build the user-facing error for a failed search
pub fn error_notice(error: &CatalogError) -> ErrorNotice {
    match error {
        CatalogError::Api { message } => ErrorNotice::Message(
            message
                .clone()
                .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string()),
        ),
        _ => ErrorNotice::Connectivity {
            detail: format_error_message(error),
        },
    }
}

/// Root cause of an error chain, for the detail line and logs
pub fn format_error_message(error: &(dyn std::error::Error + 'static)) -> String {
    let mut deepest = error.to_string();
    let mut source = error.source();

    while let Some(err) = source {
        deepest = err.to_string();
        source = err.source();
    }

    deepest
}
