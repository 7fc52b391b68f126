use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::logic;
use crate::model::{SearchModel, SearchPhase};

const KEY_HINTS: &str = "type to search │ ↑↓ PgUp/PgDn select │ Esc clear/quit │ Ctrl-C quit";

fn phase_label(search: &SearchModel) -> String {
    match search.phase {
        SearchPhase::Idle => "Starting".to_string(),
        SearchPhase::Loading => "Searching...".to_string(),
        SearchPhase::Success => match search.selected.zip(search.selected_movie()) {
            Some((idx, movie)) => format!(
                "{}/{} {}",
                idx + 1,
                search.results.len(),
                logic::formatting::truncate_to_width(&movie.title, 30)
            ),
            None => format!("{} movies", search.results.len()),
        },
        SearchPhase::HttpError => "Offline".to_string(),
        SearchPhase::ApiError => "Catalog error".to_string(),
    }
}

/// Render the bottom status bar
pub fn render_status_bar(f: &mut Frame, area: Rect, search: &SearchModel) {
    let color = match search.phase {
        SearchPhase::HttpError | SearchPhase::ApiError => Color::Red,
        SearchPhase::Loading => Color::Yellow,
        _ => Color::Green,
    };

    let line = Line::from(vec![
        Span::styled(format!(" {} ", phase_label(search)), Style::default().fg(color)),
        Span::styled("│ ", Style::default().fg(Color::DarkGray)),
        Span::styled(KEY_HINTS, Style::default().fg(Color::Gray)),
    ]);

    f.render_widget(Paragraph::new(line), area);
}
