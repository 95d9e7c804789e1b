//! Single-active-element tracking.
//!
//! [`ActiveElementTracker`] keeps at most one element carrying the active
//! class among every element it has ever been handed. [`ActiveOnClick`] is the
//! click binding a view attaches to each selectable node.

use std::rc::Rc;

use tracing::{debug, trace};

use crate::element::{ClassList, ElementRef};

pub const DEFAULT_ACTIVE_CLASS: &str = "active";

pub struct ActiveElementTracker<E> {
    current: Option<ElementRef<E>>,
    clicked: Vec<ElementRef<E>>,
}

impl<E: ClassList> ActiveElementTracker<E> {
    pub fn new() -> Self {
        Self {
            current: None,
            clicked: Vec::new(),
        }
    }

    /// Makes `element` the only element carrying `class`.
    ///
    /// Every other element seen so far loses `class`, `element` gains it, and
    /// `element` is registered if new. Repeating the call is harmless.
    pub fn set_active(&mut self, element: &Rc<E>, class: &str) {
        self.deactivate_others(element, class);

        element.add_class(class);
        let handle = ElementRef::new(element);
        if !self.clicked.contains(&handle) {
            self.clicked.push(handle.clone());
            debug!(registered = self.clicked.len(), "registered clicked element");
        }
        self.current = Some(handle);
    }

    fn deactivate_others(&mut self, exclude: &Rc<E>, class: &str) {
        // Dropped nodes can no longer show a class; forget them here.
        self.clicked.retain(ElementRef::is_alive);
        for handle in &self.clicked {
            if handle.is(exclude) {
                continue;
            }
            if let Some(node) = handle.get() {
                node.remove_class(class);
            }
        }
        trace!(scanned = self.clicked.len(), class, "deactivated other elements");
    }

    /// The active element, if one was set and the view still holds it.
    pub fn current(&self) -> Option<Rc<E>> {
        self.current.as_ref().and_then(ElementRef::get)
    }

    pub fn is_active(&self, element: &Rc<E>) -> bool {
        self.current.as_ref().is_some_and(|c| c.is(element))
    }

    /// Number of live elements ever activated.
    pub fn len(&self) -> usize {
        self.clicked.iter().filter(|h| h.is_alive()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E: ClassList> Default for ActiveElementTracker<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Click binding for a selectable node: activates it through the tracker.
#[derive(Debug, Clone)]
pub struct ActiveOnClick {
    class: String,
}

impl ActiveOnClick {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
        }
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn on_click<E: ClassList>(&self, tracker: &mut ActiveElementTracker<E>, element: &Rc<E>) {
        tracker.set_active(element, &self.class);
        element.add_class(&self.class);
    }
}

impl Default for ActiveOnClick {
    fn default() -> Self {
        Self::new(DEFAULT_ACTIVE_CLASS)
    }
}
