use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::ui;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::rc::Rc;
use viewstate::{toggle, ClassList, ElementStatus};

pub fn handle_event(state: &mut AppState, event: AppEvent) {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent);
        }
        AppEvent::ViewportSettled => handle_viewport_settled(state),
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) {
    match event {
        CEvent::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, key),
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(cols, rows) => {
            // The dispatcher picks the new size up once the burst settles.
            state.env.resize(state.cell.viewport(cols, rows));
        }
        _ => {}
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    match key.code {
        KeyCode::Char('q') => state.should_quit = true,
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            if index < state.page.tabs.len() {
                activate_tab(state, index);
            }
        }
        KeyCode::Tab => {
            let next = state
                .active_tab()
                .map_or(0, |i| (i + 1) % state.page.tabs.len());
            activate_tab(state, next);
        }
        KeyCode::Char('m') => toggle_menu(state),
        KeyCode::Char('h') => hide_menu(state),
        KeyCode::Char('s') => {
            let status = state.toggle.status();
            state.set_status(format!("menu status: {}", status));
        }
        KeyCode::Esc => clear_menu(state),
        _ => {}
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    if let Some(index) = ui::tabs::tab_at(&TAB_LABELS, mouse.column, mouse.row) {
        activate_tab(state, index);
    } else if ui::tabs::menu_button_at(&TAB_LABELS, mouse.column, mouse.row) {
        toggle_menu(state);
    }
}

fn activate_tab(state: &mut AppState, index: usize) {
    let tab = Rc::clone(&state.page.tabs[index]);
    state.active_binding.on_click(&mut state.tracker, &tab);
    state.set_status(format!("selected {}", tab.id()));
}

fn toggle_menu(state: &mut AppState) {
    set_menu_status(state, ElementStatus::Show);
}

fn hide_menu(state: &mut AppState) {
    set_menu_status(state, ElementStatus::Hidden);
}

/// Moves the menu status and keeps the button class in step with it: present
/// while shown, absent otherwise. The class is checked before anything
/// changes, so a bad class leaves both untouched.
fn set_menu_status(state: &mut AppState, requested: ElementStatus) {
    let menu = Rc::clone(&state.page.menu_button);
    let class = state.toggle_class.clone();
    let result = toggle::validate_class_name(&class)
        .and_then(|()| state.toggle.toggle_status(requested))
        .and_then(|status| {
            let open = status == ElementStatus::Show;
            if menu.has_class(&class) != open {
                state.toggle.toggle_class(&menu, &class)?;
            }
            Ok(status)
        });
    match result {
        Ok(status) => state.set_status(format!("menu {}", status)),
        Err(e) => state.set_status(e.to_string()),
    }
}

fn clear_menu(state: &mut AppState) {
    let result = state
        .toggle
        .clear_active_class()
        .and_then(|()| state.toggle.toggle_status(ElementStatus::Hidden));
    match result {
        Ok(_) => state.set_status(format!("cleared '{}'", state.toggle.active_class())),
        Err(e) => state.set_status(e.to_string()),
    }
}

fn handle_viewport_settled(state: &mut AppState) {
    match state.viewport.width() {
        Ok(width) => {
            let compact = width <= state.compact_below.px();
            if compact != state.compact {
                tracing::debug!(width, compact, "layout mode changed");
            }
            state.compact = compact;
            state.dirty = true;
        }
        Err(e) => state.set_status(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use viewstate::config::AppConfig;
    use viewstate::{Environment, HostEnvironment, Viewport};

    fn new_state(width_cols: u16) -> AppState {
        let config = AppConfig::default();
        let cell = CellSize {
            width_px: config.viewport.cell_width_px,
            height_px: config.viewport.cell_height_px,
        };
        let env = HostEnvironment::browser(cell.viewport(width_cols, 40));
        AppState::new(&config, env)
    }

    fn key(state: &mut AppState, code: KeyCode) {
        let event = KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        };
        handle_event(state, AppEvent::Terminal(CEvent::Key(event)));
    }

    fn click(state: &mut AppState, column: u16, row: u16) {
        let event = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };
        handle_event(state, AppEvent::Terminal(CEvent::Mouse(event)));
    }

    #[test]
    fn test_number_keys_select_one_tab() {
        let mut state = new_state(120);
        key(&mut state, KeyCode::Char('2'));
        key(&mut state, KeyCode::Char('4'));
        let active: Vec<_> = state
            .page
            .tabs
            .iter()
            .map(|t| t.has_class("active"))
            .collect();
        assert_eq!(active, vec![false, false, false, true]);
        assert_eq!(state.active_tab(), Some(3));
    }

    #[test]
    fn test_tab_key_cycles() {
        let mut state = new_state(120);
        key(&mut state, KeyCode::Tab);
        assert_eq!(state.active_tab(), Some(0));
        key(&mut state, KeyCode::Char('4'));
        key(&mut state, KeyCode::Tab);
        assert_eq!(state.active_tab(), Some(0));
    }

    #[test]
    fn test_click_selects_tab() {
        let mut state = new_state(120);
        let (start, _) = ui::tabs::tab_spans(&TAB_LABELS)[2];
        click(&mut state, start + 1, 0);
        assert_eq!(state.active_tab(), Some(2));
        click(&mut state, start + 1, 5);
        assert_eq!(state.active_tab(), Some(2));
    }

    #[test]
    fn test_menu_toggle_and_clear() {
        let mut state = new_state(120);
        key(&mut state, KeyCode::Esc);
        assert_eq!(
            state.status_message.as_deref(),
            Some("precondition violated: the element history is empty")
        );

        key(&mut state, KeyCode::Char('m'));
        assert!(state.menu_open());
        assert!(state.page.menu_button.has_class("open"));

        key(&mut state, KeyCode::Char('m'));
        assert!(!state.menu_open());
        assert!(!state.page.menu_button.has_class("open"));

        key(&mut state, KeyCode::Char('m'));
        key(&mut state, KeyCode::Esc);
        assert!(!state.menu_open());
        assert!(!state.page.menu_button.has_class("open"));
    }

    #[test]
    fn test_hide_then_show_keeps_class_in_step() {
        let mut state = new_state(120);
        key(&mut state, KeyCode::Char('m'));
        assert!(state.menu_open());
        assert!(state.page.menu_button.has_class("open"));

        key(&mut state, KeyCode::Char('h'));
        assert!(!state.menu_open());
        assert!(!state.page.menu_button.has_class("open"));

        key(&mut state, KeyCode::Char('m'));
        assert!(state.menu_open());
        assert!(state.page.menu_button.has_class("open"));

        key(&mut state, KeyCode::Char('h'));
        key(&mut state, KeyCode::Char('h'));
        assert!(!state.menu_open());
        assert!(!state.page.menu_button.has_class("open"));
    }

    #[test]
    fn test_blank_toggle_class_changes_nothing() {
        let mut state = new_state(120);
        state.toggle_class = "  ".to_string();
        key(&mut state, KeyCode::Char('m'));
        assert_eq!(
            state.status_message.as_deref(),
            Some("invalid argument: the class name cannot be empty")
        );
        assert_eq!(*state.menu_status.borrow(), ElementStatus::Default);
        assert!(state.page.menu_button.classes().is_empty());
        assert_eq!(state.toggle.history_len(), 0);
    }

    #[test]
    fn test_status_key_reports_default() {
        let mut state = new_state(120);
        key(&mut state, KeyCode::Char('s'));
        assert_eq!(state.status_message.as_deref(), Some("menu status: default"));
    }

    #[test]
    fn test_settled_viewport_sets_compact() {
        let mut state = new_state(80);
        handle_event(&mut state, AppEvent::ViewportSettled);
        assert!(state.compact);

        let mut wide = new_state(200);
        handle_event(&mut wide, AppEvent::ViewportSettled);
        assert!(!wide.compact);
    }

    #[tokio::test(start_paused = true)]
    async fn test_resize_reaches_dispatcher() {
        let mut state = new_state(80);
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        state.watch_viewport(tx).unwrap();
        assert!(matches!(rx.recv().await, Some(AppEvent::ViewportSettled)));

        handle_event(&mut state, AppEvent::Terminal(CEvent::Resize(200, 50)));
        assert_eq!(state.env.measure(), Viewport::new(1600, 800));
        assert!(matches!(rx.recv().await, Some(AppEvent::ViewportSettled)));
        handle_event(&mut state, AppEvent::ViewportSettled);
        assert!(!state.compact);
        assert_eq!(state.viewport.width(), Ok(1600));
    }
}
