//! Tab bar: the selectable elements plus the menu button, on the first row.

use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use viewstate::ClassList;

const GAP: u16 = 1;
const MENU_LABEL: &str = " [menu] ";

fn tab_label(index: usize, label: &str) -> String {
    format!(" {}:{} ", index + 1, label)
}

/// `(start column, width)` of each tab.
pub fn tab_spans(labels: &[&str]) -> Vec<(u16, u16)> {
    let mut column = 0u16;
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let width = tab_label(i, label).len() as u16;
            let span = (column, width);
            column += width + GAP;
            span
        })
        .collect()
}

fn menu_button_start(labels: &[&str]) -> u16 {
    tab_spans(labels)
        .last()
        .map_or(0, |(start, width)| start + width + GAP * 2)
}

pub fn tab_at(labels: &[&str], column: u16, row: u16) -> Option<usize> {
    if row != 0 {
        return None;
    }
    tab_spans(labels)
        .iter()
        .position(|&(start, width)| column >= start && column < start + width)
}

pub fn menu_button_at(labels: &[&str], column: u16, row: u16) -> bool {
    let start = menu_button_start(labels);
    row == 0 && column >= start && column < start + MENU_LABEL.len() as u16
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let active_class = state.active_binding.class();
    let mut parts: Vec<Span> = Vec::new();

    for (i, tab) in state.page.tabs.iter().enumerate() {
        let style = if tab.has_class(active_class) {
            Theme::tab_active()
        } else {
            Theme::tab_normal()
        };
        parts.push(Span::styled(tab_label(i, tab.id()), style));
        parts.push(Span::raw(" ".repeat(GAP as usize)));
    }

    parts.push(Span::raw(" ".repeat(GAP as usize)));
    let menu_style = if state.page.menu_button.has_class(&state.toggle_class) {
        Theme::menu_button_open()
    } else {
        Theme::menu_button()
    };
    parts.push(Span::styled(MENU_LABEL, menu_style));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
