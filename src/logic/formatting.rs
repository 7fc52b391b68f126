//! Formatting and display logic
//!
//! Pure functions for turning catalog and trend data into card text.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::api::MovieSummary;

/// Format a vote average with one decimal, `N/A` when the catalog has none
///
/// # Examples
/// ```
/// use popcine::logic::formatting::format_rating;
///
/// assert_eq!(format_rating(Some(7.26)), "7.3");
/// assert_eq!(format_rating(Some(0.0)), "N/A");
/// assert_eq!(format_rating(None), "N/A");
/// ```
pub fn format_rating(vote_average: Option<f64>) -> String {
    match vote_average {
        Some(v) if v > 0.0 => format!("{:.1}", v),
        _ => "N/A".to_string(),
    }
}

pub fn format_year(year: Option<i32>) -> String {
    year.map(|y| y.to_string()).unwrap_or_else(|| "N/A".to_string())
}

pub fn format_language(language: Option<&str>) -> String {
    match language {
        Some(l) if !l.trim().is_empty() => l.trim().to_uppercase(),
        _ => "N/A".to_string(),
    }
}

/// Secondary card line: "★ 7.8 • EN • 1999"
pub fn card_details(movie: &MovieSummary) -> String {
    format!(
        "★ {} • {} • {}",
        format_rating(movie.vote_average),
        format_language(movie.original_language.as_deref()),
        format_year(movie.release_year()),
    )
}

/// Poster line for a card
pub fn poster_label(movie: &MovieSummary) -> String {
    poster_url_label(movie.poster_url().as_deref())
}

/// Poster reference as stored with a trend record, or a placeholder
pub fn poster_url_label(url: Option<&str>) -> String {
    match url.map(str::trim) {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => "(no poster)".to_string(),
    }
}

/// Truncate to a display width, appending an ellipsis when cut.
/// Width is measured in terminal columns, so wide glyphs count double.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > max_width - 1 {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push('…');
    out
}
