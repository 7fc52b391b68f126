use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::layout::centered_rect;

const WELCOME_TEXT: &str = "Welcome to popcine!\n\n\
    Movies may not load on some networks because of DNS settings.\n\
    If nothing shows up, switch your DNS to 8.8.8.8 / 8.8.4.4 \
    (or Cloudflare 1.1.1.1 / 1.0.0.1), or try a VPN.\n\n\
    Press any key to continue";

/// Render the welcome notice shown once on start
pub fn render_welcome(f: &mut Frame) {
    let area = centered_rect(f.area(), 60, 11);

    let notice = Paragraph::new(WELCOME_TEXT)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Heads up")
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, area);
    f.render_widget(notice, area);
}
