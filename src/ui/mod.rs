// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (header, search, trending, results, status)
// - render: Main orchestration function that coordinates all rendering
// - search: Renders the header and search input box
// - trending: Renders the ranked trending searches
// - movie_list: Renders spinner, error panel, or movie cards
// - status_bar: Renders bottom status bar with key hints
// - dialogs: Renders the welcome notice

pub mod dialogs;
pub mod layout;
pub mod movie_list;
pub mod render;
pub mod search;
pub mod status_bar;
pub mod trending;

// Re-export main render function for convenience
pub use render::render;
