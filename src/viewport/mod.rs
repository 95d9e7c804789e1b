//! Viewport tracking and width-gated callbacks.
//!
//! A [`ViewportDispatcher`] reads its measurements from a host-supplied
//! [`Environment`] and re-runs registered callbacks after each burst of
//! resize notifications settles.

pub mod breakpoint;
mod debounce;
pub mod dispatcher;
pub mod environment;

pub use breakpoint::{Breakpoint, Threshold};
pub use dispatcher::{
    ArmPolicy, Subscription, SubscriptionState, ViewportDispatcher, DEFAULT_DEBOUNCE,
};
pub use environment::{Environment, ExecutionContext, HostEnvironment, Viewport};
