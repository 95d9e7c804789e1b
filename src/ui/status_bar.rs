use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use viewstate::{Breakpoint, SubscriptionState};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    // Viewport as the dispatcher last saw it
    let viewport = match (state.viewport.width(), state.viewport.height()) {
        (Ok(w), Ok(h)) => format!(" {}x{}px {} ", w, h, Breakpoint::for_width(w)),
        (Err(_), _) | (_, Err(_)) => " viewport n/a ".to_string(),
    };
    parts.push(Span::styled(viewport, Theme::status_bar()));

    let mode = if state.compact { "compact" } else { "wide" };
    parts.push(Span::styled(format!("| {} ", mode), Theme::status_bar()));

    let armed = match state.viewport.subscription_state() {
        SubscriptionState::Armed => "armed",
        SubscriptionState::Unarmed => "unarmed",
    };
    parts.push(Span::styled(format!("| resize {} ", armed), Theme::status_bar()));

    if let Some(message) = &state.status_message {
        parts.push(Span::styled(format!("| {} ", message), Theme::status_warning()));
    }

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.len()).sum();
    let remaining = (area.width as usize).saturating_sub(used);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
