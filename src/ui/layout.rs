use ratatui::layout::{Constraint, Direction, Layout, Rect};

const MENU_WIDTH: u16 = 24;

pub struct PageLayout {
    pub tab_bar: Rect,
    pub menu: Option<Rect>,
    pub content: Rect,
    pub status_bar: Rect,
}

/// Splits the page. In compact mode an open menu covers the whole body.
pub fn compute_layout(area: Rect, menu_open: bool, compact: bool) -> PageLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Min(3),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let tab_bar = main_chunks[0];
    let body = main_chunks[1];
    let status_bar = main_chunks[2];

    let (menu, content) = match (menu_open, compact) {
        (false, _) => (None, body),
        (true, true) => (Some(body), Rect::default()),
        (true, false) => {
            let h_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .spacing(1)
                .constraints([Constraint::Length(MENU_WIDTH), Constraint::Min(20)])
                .split(body);
            (Some(h_chunks[0]), h_chunks[1])
        }
    };

    PageLayout {
        tab_bar,
        menu,
        content,
        status_bar,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_menu_gives_full_body() {
        let layout = compute_layout(Rect::new(0, 0, 100, 30), false, false);
        assert!(layout.menu.is_none());
        assert_eq!(layout.content, Rect::new(0, 1, 100, 28));
        assert_eq!(layout.status_bar, Rect::new(0, 29, 100, 1));
    }

    #[test]
    fn test_open_menu_side_by_side() {
        let layout = compute_layout(Rect::new(0, 0, 100, 30), true, false);
        assert_eq!(layout.menu.map(|m| m.width), Some(MENU_WIDTH));
        assert_eq!(layout.content.x, MENU_WIDTH + 1);
    }

    #[test]
    fn test_compact_menu_covers_body() {
        let layout = compute_layout(Rect::new(0, 0, 60, 30), true, true);
        assert_eq!(layout.menu, Some(Rect::new(0, 1, 60, 28)));
        assert_eq!(layout.content.area(), 0);
    }
}
