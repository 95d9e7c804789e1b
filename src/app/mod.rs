//! Demo host logic: page state, event handling, and the view-layer bindings.

pub mod event;
pub mod handler;
pub mod state;
