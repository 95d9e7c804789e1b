//! Host environment: execution context, viewport measurement and resize
//! notifications.

use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::broadcast;
use tracing::trace;

const RESIZE_CHANNEL_CAPACITY: usize = 16;

/// Viewport size in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Whether live viewport measurement is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionContext {
    /// Interactive context with a real viewport.
    Browser,
    /// Server-side, test or otherwise non-interactive context.
    Headless,
}

impl ExecutionContext {
    pub fn is_browser(self) -> bool {
        self == ExecutionContext::Browser
    }
}

/// What a [`ViewportDispatcher`](super::ViewportDispatcher) needs from its host.
pub trait Environment: Send + Sync {
    fn context(&self) -> ExecutionContext;

    /// Current viewport measurement.
    fn measure(&self) -> Viewport;

    /// A fresh receiver of resize notifications. Each notification only says
    /// "the viewport changed"; the new size comes from [`measure`](Self::measure).
    fn resize_events(&self) -> broadcast::Receiver<()>;
}

/// Environment driven by the host application: it records the latest
/// measurement and fans resize notifications out to every subscriber.
#[derive(Debug)]
pub struct HostEnvironment {
    context: ExecutionContext,
    viewport: Mutex<Viewport>,
    resize_tx: broadcast::Sender<()>,
}

impl HostEnvironment {
    pub fn new(context: ExecutionContext, initial: Viewport) -> Arc<Self> {
        let (resize_tx, _) = broadcast::channel(RESIZE_CHANNEL_CAPACITY);
        Arc::new(Self {
            context,
            viewport: Mutex::new(initial),
            resize_tx,
        })
    }

    pub fn browser(initial: Viewport) -> Arc<Self> {
        Self::new(ExecutionContext::Browser, initial)
    }

    pub fn headless() -> Arc<Self> {
        Self::new(ExecutionContext::Headless, Viewport::default())
    }

    /// Records a new measurement and notifies subscribers.
    pub fn resize(&self, viewport: Viewport) {
        *self.viewport.lock().unwrap_or_else(PoisonError::into_inner) = viewport;
        // No subscribers yet is fine.
        let receivers = self.resize_tx.send(()).unwrap_or(0);
        trace!(width = viewport.width, height = viewport.height, receivers, "resize notified");
    }
}

impl Environment for HostEnvironment {
    fn context(&self) -> ExecutionContext {
        self.context
    }

    fn measure(&self) -> Viewport {
        *self.viewport.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn resize_events(&self) -> broadcast::Receiver<()> {
        self.resize_tx.subscribe()
    }
}
