use crate::app::event::AppEvent;
use std::rc::Rc;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use viewstate::config::AppConfig;
use viewstate::{
    ActiveElementTracker, ActiveOnClick, Element, ElementStatus, HostEnvironment, Threshold,
    ToggleStateMachine, Viewport, ViewportDispatcher,
};

pub const TAB_LABELS: [&str; 4] = ["Overview", "Details", "History", "Settings"];

/// Nodes owned by the view. The state holders only see weak handles.
#[derive(Debug)]
pub struct Page {
    pub tabs: Vec<Rc<Element>>,
    pub menu_button: Rc<Element>,
}

impl Page {
    pub fn new() -> Self {
        Self {
            tabs: TAB_LABELS.iter().map(|label| Element::new(*label)).collect(),
            menu_button: Element::new("menu"),
        }
    }
}

/// Converts terminal cells to the pixel units the breakpoints use.
#[derive(Debug, Clone, Copy)]
pub struct CellSize {
    pub width_px: u32,
    pub height_px: u32,
}

impl CellSize {
    pub fn viewport(&self, cols: u16, rows: u16) -> Viewport {
        Viewport::new(
            u32::from(cols) * self.width_px,
            u32::from(rows) * self.height_px,
        )
    }
}

pub struct AppState {
    pub page: Page,
    pub tracker: ActiveElementTracker<Element>,
    pub active_binding: ActiveOnClick,
    pub toggle: ToggleStateMachine<Element>,
    pub toggle_class: String,
    pub menu_status: watch::Receiver<ElementStatus>,
    pub env: Arc<HostEnvironment>,
    pub viewport: ViewportDispatcher,
    pub compact_below: Threshold,
    pub compact: bool,
    pub cell: CellSize,
    pub should_quit: bool,
    pub dirty: bool,
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: &AppConfig, env: Arc<HostEnvironment>) -> Self {
        let toggle = ToggleStateMachine::new();
        let menu_status = toggle.subscribe();
        let viewport = config.viewport.dispatcher(env.clone());
        Self {
            page: Page::new(),
            tracker: ActiveElementTracker::new(),
            active_binding: ActiveOnClick::new(config.active.class.clone()),
            toggle,
            toggle_class: config.toggle.class.clone(),
            menu_status,
            env,
            viewport,
            compact_below: config.viewport.compact_below,
            compact: false,
            cell: CellSize {
                width_px: config.viewport.cell_width_px,
                height_px: config.viewport.cell_height_px,
            },
            should_quit: false,
            dirty: true,
            status_message: None,
        }
    }

    /// Registers the compact-layout callback with the dispatcher. The
    /// callback only signals the event loop; the handler does the work.
    pub fn watch_viewport(
        &mut self,
        event_tx: mpsc::UnboundedSender<AppEvent>,
    ) -> viewstate::Result<()> {
        let fired = self.viewport.execute_by_width(
            move || {
                let _ = event_tx.send(AppEvent::ViewportSettled);
            },
            self.compact_below,
        )?;
        tracing::info!(fired, threshold = %self.compact_below, "viewport callback registered");
        Ok(())
    }

    pub fn menu_open(&self) -> bool {
        *self.menu_status.borrow() == ElementStatus::Show
    }

    pub fn active_tab(&self) -> Option<usize> {
        self.page
            .tabs
            .iter()
            .position(|tab| self.tracker.is_active(tab))
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.dirty = true;
    }
}
