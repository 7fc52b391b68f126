use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::logic;
use crate::trends::TrendRecord;

/// Render the trending list, numbered by rank, with the poster of each
/// term's top result
pub fn render_trending(f: &mut Frame, area: Rect, records: &[TrendRecord]) {
    let width = area.width.saturating_sub(2) as usize;

    let lines: Vec<Line> = records
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            let rank = format!("{:>2}. ", idx + 1);
            let rest = format!(
                "{} → {} ({}) • {}",
                record.search_term,
                record.title,
                record.count,
                logic::formatting::poster_url_label(record.poster_url.as_deref())
            );
            Line::from(vec![
                Span::styled(
                    rank.clone(),
                    Style::default()
                        .fg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(logic::formatting::truncate_to_width(
                    &rest,
                    width.saturating_sub(rank.len()),
                )),
            ])
        })
        .collect();

    let trending = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Trending Searches ")
            .border_style(Style::default().fg(Color::Magenta)),
    );

    f.render_widget(trending, area);
}
