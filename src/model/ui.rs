//! UI Model
//!
//! Dialogs and visual state that are not part of any search.

#[derive(Clone, Debug)]
pub struct UiModel {
    /// Welcome notice with the DNS caveat, shown once on start
    pub show_welcome: bool,

    /// Frame counter driving the spinner
    pub spinner_tick: usize,

    /// Cards that fit in the result list, for PageUp/PageDown
    pub page_size: usize,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new(show_welcome: bool) -> Self {
        Self {
            show_welcome,
            spinner_tick: 0,
            page_size: 1,
            should_quit: false,
        }
    }

    pub fn has_modal(&self) -> bool {
        self.show_welcome
    }

    pub fn dismiss_welcome(&mut self) {
        self.show_welcome = false;
    }

    pub fn tick(&mut self) {
        self.spinner_tick = self.spinner_tick.wrapping_add(1);
    }
}
