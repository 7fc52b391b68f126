//! Result list UI
//!
//! The results area shows exactly one of: the spinner, the error panel, or
//! the movie cards.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::api::MovieSummary;
use crate::logic;
use crate::model::{ErrorNotice, SearchModel};

fn results_title(search: &SearchModel) -> String {
    match search.active_term.as_deref().map(str::trim) {
        Some(term) if !term.is_empty() => format!(" Results for \"{}\" ", term),
        _ => " Popular Movies ".to_string(),
    }
}

/// Render whichever of spinner, error panel, or cards applies
pub fn render_results(f: &mut Frame, area: Rect, search: &SearchModel, spinner_tick: usize) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(results_title(search));

    if search.loading {
        render_spinner(f, area, block, spinner_tick);
    } else if let Some(error) = &search.error {
        render_error_panel(f, area, block, error);
    } else if search.results.is_empty() {
        let empty = Paragraph::new("No movies found")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray))
            .block(block);
        f.render_widget(empty, area);
    } else {
        render_movie_cards(f, area, block, &search.results, search.selected);
    }
}

fn render_spinner(f: &mut Frame, area: Rect, block: Block, tick: usize) {
    let line = Line::from(vec![
        Span::styled(
            logic::ui::spinner_frame(tick),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw(" Loading movies..."),
    ]);
    let spinner = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(spinner, area);
}

/// Error panel: headline, then connectivity advice when the catalog could
/// not be reached
fn render_error_panel(f: &mut Frame, area: Rect, block: Block, error: &ErrorNotice) {
    let mut lines = vec![Line::from(Span::styled(
        error.headline().to_string(),
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    ))];

    if let ErrorNotice::Connectivity { detail } = error {
        lines.push(Line::raw(""));
        for advice in logic::errors::CONNECTIVITY_ADVICE {
            lines.push(Line::from(Span::styled(
                *advice,
                Style::default().fg(Color::Yellow),
            )));
        }
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            format!("({})", detail),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let panel = Paragraph::new(lines)
        .block(block.border_style(Style::default().fg(Color::Red)))
        .wrap(Wrap { trim: false });
    f.render_widget(panel, area);
}

fn movie_card(movie: &MovieSummary, width: usize) -> ListItem<'static> {
    // Room for the highlight symbol
    let width = width.saturating_sub(2);
    ListItem::new(vec![
        Line::from(Span::styled(
            logic::formatting::truncate_to_width(&movie.title, width),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            logic::formatting::truncate_to_width(&logic::formatting::card_details(movie), width),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(Span::styled(
            logic::formatting::truncate_to_width(&logic::formatting::poster_label(movie), width),
            Style::default().fg(Color::DarkGray),
        )),
    ])
}

fn render_movie_cards(
    f: &mut Frame,
    area: Rect,
    block: Block,
    movies: &[MovieSummary],
    selected: Option<usize>,
) {
    let inner_width = area.width.saturating_sub(2) as usize;
    let items: Vec<ListItem> = movies
        .iter()
        .map(|movie| movie_card(movie, inner_width))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(selected);
    f.render_stateful_widget(list, area, &mut state);
}
