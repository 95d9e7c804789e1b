mod content;
mod layout;
mod menu;
mod status_bar;
pub mod tabs;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let page = layout::compute_layout(area, state.menu_open(), state.compact);

    tabs::render(frame, page.tab_bar, state);
    if let Some(menu_area) = page.menu {
        menu::render(frame, menu_area, state);
    }
    content::render(frame, page.content, state);
    status_bar::render(frame, page.status_bar, state);
}
