//! Result list selection logic
//!
//! Pure functions for moving the highlighted card. Single steps wrap around,
//! page jumps clamp at the ends.

/// Highlight the card after `current`, wrapping from the last card back to
/// the first. No highlight, or one left past the end of a shorter result
/// list, starts at the first card.
///
/// # Examples
/// ```
/// use popcine::logic::navigation::next_selection;
///
/// assert_eq!(next_selection(None, 0), None);
/// assert_eq!(next_selection(None, 3), Some(0));
/// assert_eq!(next_selection(Some(1), 3), Some(2));
/// assert_eq!(next_selection(Some(2), 3), Some(0));
/// assert_eq!(next_selection(Some(9), 3), Some(0));
/// ```
pub fn next_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(i) if i + 1 < list_len => i + 1,
        _ => 0,
    })
}

/// Highlight the card before `current`, wrapping from the first card to the
/// last. No highlight, or a stale one past the end, lands on the last card.
///
/// # Examples
/// ```
/// use popcine::logic::navigation::prev_selection;
///
/// assert_eq!(prev_selection(None, 0), None);
/// assert_eq!(prev_selection(Some(1), 3), Some(0));
/// assert_eq!(prev_selection(Some(0), 3), Some(2));
/// assert_eq!(prev_selection(None, 3), Some(2));
/// assert_eq!(prev_selection(Some(9), 3), Some(2));
/// ```
pub fn prev_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(i) if i > 0 && i < list_len => i - 1,
        _ => list_len - 1,
    })
}

/// Move down by a page, stopping at the last item
pub fn page_down(current: Option<usize>, list_len: usize, page_size: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }
    let start = current.unwrap_or(0);
    Some((start + page_size.max(1)).min(list_len - 1))
}

/// Move up by a page, stopping at the first item
pub fn page_up(current: Option<usize>, list_len: usize, page_size: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }
    let start = current.unwrap_or(0).min(list_len - 1);
    Some(start.saturating_sub(page_size.max(1)))
}

/// Keep a selection valid after the list was replaced
pub fn clamp_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }
    Some(current.unwrap_or(0).min(list_len - 1))
}
