//! Search Input UI
//!
//! Renders the header and the search input box with a blinking cursor.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const TAGLINE: &str = "Find Movies you'll Enjoy Without the Hassle";

/// Render the title bar
pub fn render_header(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "popcine",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(TAGLINE, Style::default().fg(Color::Gray))),
    ];

    let header = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(header, area);
}

/// Render search input box
///
/// # Arguments
/// - `f`: Ratatui frame
/// - `area`: Rectangular area to render in
/// - `term`: What the user has typed
/// - `loading`: Whether a search for the settled term is in flight
pub fn render_search_input(f: &mut Frame, area: Rect, term: &str, loading: bool) {
    let title = if term.is_empty() {
        " Search (showing popular movies) ".to_string()
    } else {
        " Search - Esc to clear ".to_string()
    };

    let border_color = if loading { Color::Yellow } else { Color::Cyan };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().fg(border_color));

    let cursor_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::SLOW_BLINK);

    let input_line = if term.is_empty() {
        Line::from(vec![
            Span::styled("█", cursor_style),
            Span::styled(
                " Search through thousands of movies",
                Style::default().fg(Color::DarkGray),
            ),
        ])
    } else {
        Line::from(vec![
            Span::styled(term, Style::default().fg(Color::White)),
            Span::styled("█", cursor_style),
        ])
    };

    let paragraph = Paragraph::new(vec![input_line]).block(block);

    f.render_widget(paragraph, area);
}
