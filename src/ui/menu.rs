use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem};

const ENTRIES: [&str; 4] = ["Profile", "Preferences", "Help", "Sign out"];

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Menu ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border_focused());

    let mut items: Vec<ListItem> = ENTRIES
        .iter()
        .map(|entry| ListItem::new(format!(" {}", entry)))
        .collect();
    items.push(ListItem::new(""));
    items.push(ListItem::new(Span::styled(
        format!(" class: {}", state.toggle.active_class()),
        Theme::hint(),
    )));

    frame.render_widget(List::new(items).block(block), area);
}
