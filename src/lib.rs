//! Presentation state for UI views.
//!
//! Three small, independent state holders driven by a view layer:
//!
//! - [`ActiveElementTracker`] keeps exactly one element "active" among all
//!   elements it has seen.
//! - [`ToggleStateMachine`] tracks a show/hide status and remembers every
//!   element whose class it flipped.
//! - [`ViewportDispatcher`] runs callbacks for narrow viewports and again after
//!   each debounced resize.
//!
//! Each holder is an ordinary value: construct it where the UI is composed and
//! pass it by reference. Elements are owned by the view layer; holders keep
//! weak, identity-compared [`ElementRef`]s only.

pub mod active;
pub mod config;
pub mod element;
pub mod error;
pub mod logging;
pub mod observable;
pub mod toggle;
pub mod viewport;

pub use active::{ActiveElementTracker, ActiveOnClick};
pub use element::{ClassList, Element, ElementRef};
pub use error::{Error, ErrorKind, Result};
pub use observable::StateCell;
pub use toggle::{Diagnostic, ElementStatus, ToggleStateMachine};
pub use viewport::{
    ArmPolicy, Breakpoint, Environment, ExecutionContext, HostEnvironment, SubscriptionState,
    Threshold, Viewport, ViewportDispatcher,
};
