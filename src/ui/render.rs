use crate::logic;
use crate::model::Model;
use ratatui::Frame;

use super::{dialogs, layout, movie_list, search, status_bar, trending};

/// Main render function - draws the whole screen from the model.
///
/// The only thing written back is the page size of the result list, which
/// depends on the terminal size.
pub fn render(f: &mut Frame, model: &mut Model) {
    let layout_info = layout::calculate_layout(f.area(), model.trending.len());

    model.ui.page_size = logic::ui::cards_per_page(layout_info.results_area.height);

    search::render_header(f, layout_info.header_area);
    search::render_search_input(
        f,
        layout_info.search_area,
        &model.search.term,
        model.search.loading,
    );

    if let Some(trending_area) = layout_info.trending_area {
        trending::render_trending(f, trending_area, &model.trending);
    }

    movie_list::render_results(
        f,
        layout_info.results_area,
        &model.search,
        model.ui.spinner_tick,
    );

    status_bar::render_status_bar(f, layout_info.status_area, &model.search);

    // Dialogs go on top
    if model.ui.show_welcome {
        dialogs::render_welcome(f);
    }
}
