//! Keyboard Input Handler
//!
//! Edits the search term and moves the result selection. Term edits only
//! re-arm the debouncer; searches are started by the main loop when the
//! term settles.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

use crate::model::Model;

/// Handle keyboard input
pub fn handle_key(model: &mut Model, key: KeyEvent, now: Instant) {
    // Ctrl-C always quits, even over the welcome notice
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        model.ui.should_quit = true;
        return;
    }

    // Any key dismisses the welcome notice and does nothing else
    if model.has_modal() {
        model.ui.dismiss_welcome();
        return;
    }

    let page_size = model.ui.page_size;
    match key.code {
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            model.search.clear_term(now);
        }
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            model.search.push_char(c, now);
        }
        KeyCode::Backspace => model.search.pop_char(now),
        KeyCode::Esc => {
            if model.search.term.is_empty() {
                model.ui.should_quit = true;
            } else {
                model.search.clear_term(now);
            }
        }
        KeyCode::Down => model.search.select_next(),
        KeyCode::Up => model.search.select_prev(),
        KeyCode::PageDown => model.search.select_page_down(page_size),
        KeyCode::PageUp => model.search.select_page_up(page_size),
        KeyCode::Home => model.search.select_first(),
        KeyCode::End => model.search.select_last(),
        _ => {}
    }
}
