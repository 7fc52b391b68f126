//! UI state transition logic
//!
//! Pure functions for small animated and timed UI bits.

use std::time::{Duration, Instant};

/// Braille spinner shown while a search is in flight
pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner glyph for a frame counter
///
/// # Examples
/// ```
/// use popcine::logic::ui::spinner_frame;
///
/// assert_eq!(spinner_frame(0), "⠋");
/// assert_eq!(spinner_frame(10), "⠋");
/// assert_eq!(spinner_frame(11), "⠙");
/// ```
pub fn spinner_frame(tick: usize) -> &'static str {
    SPINNER_FRAMES[tick % SPINNER_FRAMES.len()]
}

/// How long the main loop may block waiting for input.
///
/// Idle frames wait up to `IDLE_POLL`; while the spinner runs they wait one
/// `SPINNER_POLL`. A pending debounce deadline cuts either short so the
/// search starts as soon as the term settles.
pub const IDLE_POLL: Duration = Duration::from_millis(250);
pub const SPINNER_POLL: Duration = Duration::from_millis(80);

pub fn poll_timeout(now: Instant, deadline: Option<Instant>, animating: bool) -> Duration {
    let frame = if animating { SPINNER_POLL } else { IDLE_POLL };
    match deadline {
        Some(deadline) => frame.min(deadline.saturating_duration_since(now)),
        None => frame,
    }
}

/// Number of result cards that fit in a list area of `height` rows.
/// Each card takes three rows (title, details, poster).
pub fn cards_per_page(height: u16) -> usize {
    (height.saturating_sub(2) as usize / 3).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_cycles() {
        let frames: Vec<&str> = (0..SPINNER_FRAMES.len()).map(spinner_frame).collect();
        assert_eq!(frames, SPINNER_FRAMES);
    }

    #[test]
    fn test_poll_timeout_idle() {
        let now = Instant::now();
        assert_eq!(poll_timeout(now, None, false), IDLE_POLL);
        assert_eq!(poll_timeout(now, None, true), SPINNER_POLL);
    }

    #[test]
    fn test_poll_timeout_wakes_for_debounce_deadline() {
        let now = Instant::now();
        let soon = now + Duration::from_millis(30);
        assert_eq!(poll_timeout(now, Some(soon), false), Duration::from_millis(30));

        let later = now + Duration::from_secs(2);
        assert_eq!(poll_timeout(now, Some(later), false), IDLE_POLL);
    }

    #[test]
    fn test_poll_timeout_deadline_passed() {
        let deadline = Instant::now();
        let now = deadline + Duration::from_millis(10);
        assert_eq!(poll_timeout(now, Some(deadline), true), Duration::ZERO);
    }

    #[test]
    fn test_cards_per_page() {
        assert_eq!(cards_per_page(0), 1);
        assert_eq!(cards_per_page(5), 1);
        assert_eq!(cards_per_page(32), 10);
    }
}
