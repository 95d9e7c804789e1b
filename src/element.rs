//! Element references and the class-list seam to the view layer.
//!
//! The view layer owns its nodes (behind `Rc`). The state holders in this
//! crate only keep [`ElementRef`]s, which are weak and compared by identity,
//! so a node the view layer drops simply disappears from their bookkeeping.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Class-list operations the core needs from a view-layer node.
///
/// Methods take `&self`: like a DOM `classList`, the node is mutated through
/// a shared handle.
pub trait ClassList {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    /// Flips `class`. Returns `true` when the class is present afterwards.
    fn toggle_class(&self, class: &str) -> bool;
    fn has_class(&self, class: &str) -> bool;
}

/// A plain view node: an id plus an ordered class list.
#[derive(Debug, Default)]
pub struct Element {
    id: String,
    classes: RefCell<Vec<String>>,
}

impl Element {
    pub fn new(id: impl Into<String>) -> Rc<Self> {
        Rc::new(Self {
            id: id.into(),
            classes: RefCell::new(Vec::new()),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn classes(&self) -> Vec<String> {
        self.classes.borrow().clone()
    }
}

impl ClassList for Element {
    fn add_class(&self, class: &str) {
        let mut classes = self.classes.borrow_mut();
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    }

    fn remove_class(&self, class: &str) {
        self.classes.borrow_mut().retain(|c| c != class);
    }

    fn toggle_class(&self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().iter().any(|c| c == class)
    }
}

/// Non-owning, identity-compared handle to a view node.
pub struct ElementRef<E> {
    node: Weak<E>,
}

impl<E> ElementRef<E> {
    pub fn new(node: &Rc<E>) -> Self {
        Self {
            node: Rc::downgrade(node),
        }
    }

    /// The node, if the view layer still holds it.
    pub fn get(&self) -> Option<Rc<E>> {
        self.node.upgrade()
    }

    pub fn is(&self, node: &Rc<E>) -> bool {
        std::ptr::eq(self.node.as_ptr(), Rc::as_ptr(node))
    }

    pub fn is_alive(&self) -> bool {
        self.node.strong_count() > 0
    }
}

impl<E> Clone for ElementRef<E> {
    fn clone(&self) -> Self {
        Self {
            node: self.node.clone(),
        }
    }
}

impl<E> PartialEq for ElementRef<E> {
    fn eq(&self, other: &Self) -> bool {
        self.node.ptr_eq(&other.node)
    }
}

impl<E> Eq for ElementRef<E> {}

impl<E> fmt::Debug for ElementRef<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementRef")
            .field("node", &self.node.as_ptr())
            .field("alive", &self.is_alive())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_list_toggle() {
        let el = Element::new("a");
        assert!(el.toggle_class("open"));
        assert!(el.has_class("open"));
        assert!(!el.toggle_class("open"));
        assert!(el.classes().is_empty());
    }

    #[test]
    fn test_add_class_is_unique() {
        let el = Element::new("a");
        el.add_class("x");
        el.add_class("y");
        el.add_class("x");
        assert_eq!(el.classes(), vec!["x".to_string(), "y".to_string()]);
    }

    #[test]
    fn test_ref_identity() {
        let a = Element::new("same");
        let b = Element::new("same");
        let ra = ElementRef::new(&a);
        assert!(ra.is(&a));
        assert!(!ra.is(&b));
        assert_eq!(ra, ElementRef::new(&a));
        assert_ne!(ra, ElementRef::new(&b));
    }

    #[test]
    fn test_ref_does_not_own() {
        let a = Element::new("a");
        let ra = ElementRef::new(&a);
        assert!(ra.get().is_some());
        drop(a);
        assert!(!ra.is_alive());
        assert!(ra.get().is_none());
    }
}
