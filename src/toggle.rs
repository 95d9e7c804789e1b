//! Show/hide toggle state with a history of toggled elements.
//!
//! Used by menus and buttons that reveal or hide content. The machine holds a
//! three-valued status (`Default` meaning "never set") and remembers every
//! element whose class it flipped, so the view can clear them all at once.

use std::fmt;
use std::rc::Rc;

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::element::{ClassList, ElementRef};
use crate::error::{Error, Result};
use crate::observable::StateCell;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ElementStatus {
    /// Unset. Not a valid display state and never a valid toggle target.
    #[default]
    Default,
    Show,
    Hidden,
}

impl fmt::Display for ElementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementStatus::Default => "default",
            ElementStatus::Show => "show",
            ElementStatus::Hidden => "hidden",
        };
        f.write_str(name)
    }
}

/// Non-fatal conditions reported through the diagnostic hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    /// The status was read while still `Default`.
    UnsetStatusRead,
}

type DiagnosticHook = Box<dyn Fn(Diagnostic)>;

/// Rejects empty or all-whitespace class names.
pub fn validate_class_name(class: &str) -> Result<()> {
    if class.trim().is_empty() {
        return Err(Error::InvalidArgument("the class name cannot be empty".into()));
    }
    Ok(())
}

pub struct ToggleStateMachine<E> {
    status: StateCell<ElementStatus>,
    history: Vec<ElementRef<E>>,
    active_class: String,
    diagnostic_hook: Option<DiagnosticHook>,
}

impl<E: ClassList> ToggleStateMachine<E> {
    pub fn new() -> Self {
        Self {
            status: StateCell::new(ElementStatus::Default),
            history: Vec::new(),
            active_class: String::new(),
            diagnostic_hook: None,
        }
    }

    /// Installs a hook called for every [`Diagnostic`], in addition to the
    /// `tracing` warning.
    pub fn on_diagnostic(&mut self, hook: impl Fn(Diagnostic) + 'static) {
        self.diagnostic_hook = Some(Box::new(hook));
    }

    /// Current status. Reading `Default` is reported as a diagnostic.
    pub fn status(&self) -> ElementStatus {
        let status = self.status.get();
        if status == ElementStatus::Default {
            warn!("the element status is default; a different value should be set");
            if let Some(hook) = &self.diagnostic_hook {
                hook(Diagnostic::UnsetStatusRead);
            }
        }
        status
    }

    /// Follows status changes. The receiver starts at the current value.
    pub fn subscribe(&self) -> watch::Receiver<ElementStatus> {
        self.status.subscribe()
    }

    /// Moves to `status`; requesting `Show` while already shown hides instead.
    ///
    /// Returns the new status.
    pub fn toggle_status(&mut self, status: ElementStatus) -> Result<ElementStatus> {
        if status == ElementStatus::Default {
            return Err(Error::InvalidArgument("the element status cannot be default".into()));
        }

        let current = self.status.get();
        let next = match (current, status) {
            (ElementStatus::Show, ElementStatus::Show) => ElementStatus::Hidden,
            (_, requested) => requested,
        };
        self.status.set(next);
        debug!(from = %current, to = %next, "element status changed");
        Ok(next)
    }

    /// Flips `class` on `element` and records both.
    ///
    /// Returns `true` when the class is present on the element afterwards.
    pub fn toggle_class(&mut self, element: &Rc<E>, class: &str) -> Result<bool> {
        validate_class_name(class)?;

        let present = element.toggle_class(class);
        if self.active_class != class {
            self.active_class = class.to_string();
        }
        let handle = ElementRef::new(element);
        if !self.history.contains(&handle) {
            self.history.push(handle);
        }
        debug!(class, present, history = self.history.len(), "toggled class");
        Ok(present)
    }

    /// Removes the active class from every element ever toggled, whatever its
    /// individual state.
    pub fn clear_active_class(&mut self) -> Result<()> {
        if self.history.is_empty() {
            return Err(Error::PreconditionViolation("the element history is empty".into()));
        }

        for node in self.history.iter().filter_map(ElementRef::get) {
            node.remove_class(&self.active_class);
        }
        debug!(
            class = %self.active_class,
            cleared = self.history.len(),
            "cleared active class from history"
        );
        Ok(())
    }

    /// Class name passed to the most recent [`toggle_class`](Self::toggle_class).
    pub fn active_class(&self) -> &str {
        &self.active_class
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

impl<E: ClassList> Default for ToggleStateMachine<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;
    use crate::error::ErrorKind;
    use std::cell::Cell;

    fn machine() -> ToggleStateMachine<Element> {
        ToggleStateMachine::new()
    }

    #[test]
    fn test_status_transitions() {
        let mut m = machine();
        assert_eq!(m.toggle_status(ElementStatus::Show), Ok(ElementStatus::Show));
        assert_eq!(m.toggle_status(ElementStatus::Show), Ok(ElementStatus::Hidden));
        assert_eq!(m.toggle_status(ElementStatus::Hidden), Ok(ElementStatus::Hidden));
        assert_eq!(m.toggle_status(ElementStatus::Show), Ok(ElementStatus::Show));
        assert_eq!(m.toggle_status(ElementStatus::Hidden), Ok(ElementStatus::Hidden));
        assert_eq!(m.status(), ElementStatus::Hidden);
    }

    #[test]
    fn test_default_target_rejected_from_any_state() {
        let mut m = machine();
        for setup in [None, Some(ElementStatus::Show), Some(ElementStatus::Hidden)] {
            if let Some(s) = setup {
                m.toggle_status(s).unwrap();
            }
            let before = m.status.get();
            let err = m.toggle_status(ElementStatus::Default).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
            assert_eq!(m.status.get(), before);
        }
    }

    #[test]
    fn test_default_read_reports_diagnostic() {
        let mut m = machine();
        let seen = Rc::new(Cell::new(0));
        let counter = Rc::clone(&seen);
        m.on_diagnostic(move |d| {
            assert_eq!(d, Diagnostic::UnsetStatusRead);
            counter.set(counter.get() + 1);
        });

        assert_eq!(m.status(), ElementStatus::Default);
        assert_eq!(seen.get(), 1);

        m.toggle_status(ElementStatus::Show).unwrap();
        assert_eq!(m.status(), ElementStatus::Show);
        assert_eq!(seen.get(), 1);
    }

    #[test]
    fn test_subscribe_follows_transitions() {
        let mut m = machine();
        let mut rx = m.subscribe();
        assert_eq!(*rx.borrow(), ElementStatus::Default);
        m.toggle_status(ElementStatus::Show).unwrap();
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), ElementStatus::Show);
    }

    #[test]
    fn test_blank_class_rejected() {
        let mut m = machine();
        let el = Element::new("menu");
        for class in ["", "   ", "\t\n"] {
            let err = m.toggle_class(&el, class).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        }
        assert_eq!(m.history_len(), 0);
    }

    #[test]
    fn test_validate_class_name() {
        assert_eq!(validate_class_name("open"), Ok(()));
        assert_eq!(validate_class_name(" \t").unwrap_err().kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_toggle_class_twice_restores() {
        let mut m = machine();
        let el = Element::new("menu");
        assert_eq!(m.toggle_class(&el, "x"), Ok(true));
        assert_eq!(m.toggle_class(&el, "x"), Ok(false));
        assert!(!el.has_class("x"));
        assert_eq!(m.toggle_class(&el, "x"), Ok(true));
        assert_eq!(m.history_len(), 1);
        assert_eq!(m.active_class(), "x");
    }

    #[test]
    fn test_clear_needs_history() {
        let mut m = machine();
        let err = m.clear_active_class().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PreconditionViolation);

        let el = Element::new("menu");
        m.toggle_class(&el, "on").unwrap();
        assert!(el.has_class("on"));
        m.clear_active_class().unwrap();
        assert!(!el.has_class("on"));
    }

    #[test]
    fn test_clear_uses_last_class_for_every_element() {
        let mut m = machine();
        let a = Element::new("a");
        let b = Element::new("b");
        m.toggle_class(&a, "open").unwrap();
        m.toggle_class(&b, "open").unwrap();
        m.toggle_class(&b, "open").unwrap();
        a.add_class("expanded");
        m.toggle_class(&b, "expanded").unwrap();

        m.clear_active_class().unwrap();
        assert!(a.has_class("open"));
        assert!(!a.has_class("expanded"));
        assert!(!b.has_class("expanded"));
        assert_eq!(m.history_len(), 2);
    }

    #[test]
    fn test_clear_skips_dropped_elements() {
        let mut m = machine();
        let a = Element::new("a");
        let b = Element::new("b");
        m.toggle_class(&a, "on").unwrap();
        m.toggle_class(&b, "on").unwrap();
        drop(b);
        m.clear_active_class().unwrap();
        assert!(!a.has_class("on"));
    }
}
