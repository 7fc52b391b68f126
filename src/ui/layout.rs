use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for rendering
pub struct LayoutInfo {
    /// Title and tagline
    pub header_area: Rect,
    /// Search input box
    pub search_area: Rect,
    /// Trending list (only when there is something trending)
    pub trending_area: Option<Rect>,
    /// Result cards, spinner or error panel
    pub results_area: Rect,
    /// Bottom status bar
    pub status_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(terminal_size: Rect, trending_len: usize) -> LayoutInfo {
    // One row per trending entry plus the borders
    let trending_height = if trending_len == 0 {
        0
    } else {
        trending_len as u16 + 2
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),               // Header (borders, title, tagline)
            Constraint::Length(3),               // Search input
            Constraint::Length(trending_height), // Trending (0 when empty)
            Constraint::Min(3),                  // Results
            Constraint::Length(1),               // Status bar
        ])
        .split(terminal_size);

    LayoutInfo {
        header_area: chunks[0],
        search_area: chunks[1],
        trending_area: (trending_height > 0).then_some(chunks[2]),
        results_area: chunks[3],
        status_area: chunks[4],
    }
}

/// Centered popup area, clamped to the terminal
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trending_hidden_when_empty() {
        let layout = calculate_layout(Rect::new(0, 0, 80, 30), 0);
        assert!(layout.trending_area.is_none());
        assert_eq!(layout.results_area.height, 30 - 4 - 3 - 1);
    }

    #[test]
    fn test_trending_sized_to_entries() {
        let layout = calculate_layout(Rect::new(0, 0, 80, 30), 5);
        assert_eq!(layout.trending_area.map(|a| a.height), Some(7));
        assert_eq!(layout.results_area.height, 30 - 4 - 3 - 7 - 1);
        assert_eq!(layout.status_area.y, 29);
    }

    #[test]
    fn test_centered_rect_clamps() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(centered_rect(area, 20, 4), Rect::new(10, 3, 20, 4));
        assert_eq!(centered_rect(area, 100, 100), area);
    }
}
