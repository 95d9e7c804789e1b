//! Main body: the selected tab and the live class list of every element.

use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    if area.area() == 0 {
        return;
    }

    let heading = state
        .tracker
        .current()
        .map(|tab| tab.id().to_string())
        .unwrap_or_else(|| "nothing selected".to_string());

    let block = Block::default()
        .title(format!(" {} ", heading))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let mut lines: Vec<Line> = Vec::new();
    let elements = state
        .page
        .tabs
        .iter()
        .chain(std::iter::once(&state.page.menu_button));
    for element in elements {
        let classes = element.classes();
        let class_text = if classes.is_empty() {
            "-".to_string()
        } else {
            classes.join(" ")
        };
        lines.push(Line::from(vec![
            Span::raw(format!(" {:<10}", element.id())),
            Span::styled(class_text, Theme::class_name()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " 1-9/Tab/click: select   m: menu   h: hide   Esc: clear   s: status   q: quit",
        Theme::hint(),
    )));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
