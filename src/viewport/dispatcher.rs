use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use super::breakpoint::Threshold;
use super::debounce::debounced;
use super::environment::{Environment, ExecutionContext, Viewport};
use crate::error::{Error, Result};

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(200);

/// When [`ViewportDispatcher::execute_by_width`] arms a resize subscription.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArmPolicy {
    /// Only when the callback fired immediately. A viewport wider than the
    /// threshold therefore never arms the callback for later shrinking.
    #[default]
    OnImmediateFire,
    /// On every call, whatever the current width.
    Always,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionState {
    Unarmed,
    Armed,
}

/// A live debounced resize subscription. Dropping it stops delivery.
pub struct Subscription {
    task: JoinHandle<()>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.task.abort();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("finished", &self.task.is_finished())
            .finish()
    }
}

/// Tracks the viewport and runs callbacks for narrow viewports.
///
/// Subscriptions live as long as the dispatcher: dropping it tears them all
/// down and no callback fires afterwards.
pub struct ViewportDispatcher {
    env: Arc<dyn Environment>,
    context: ExecutionContext,
    viewport: Arc<Mutex<Viewport>>,
    debounce: Duration,
    policy: ArmPolicy,
    subscriptions: Vec<Subscription>,
}

impl ViewportDispatcher {
    pub fn new(env: Arc<dyn Environment>) -> Self {
        let context = env.context();
        let viewport = if context.is_browser() {
            env.measure()
        } else {
            Viewport::default()
        };
        Self {
            env,
            context,
            viewport: Arc::new(Mutex::new(viewport)),
            debounce: DEFAULT_DEBOUNCE,
            policy: ArmPolicy::default(),
            subscriptions: Vec::new(),
        }
    }

    pub fn with_debounce(mut self, window: Duration) -> Self {
        self.debounce = window;
        self
    }

    pub fn with_arm_policy(mut self, policy: ArmPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn context(&self) -> ExecutionContext {
        self.context
    }

    pub fn arm_policy(&self) -> ArmPolicy {
        self.policy
    }

    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    pub fn subscription_state(&self) -> SubscriptionState {
        if self.subscriptions.is_empty() {
            SubscriptionState::Unarmed
        } else {
            SubscriptionState::Armed
        }
    }

    /// Last-known viewport width.
    pub fn width(&self) -> Result<u32> {
        self.require_browser("width")?;
        Ok(self.current().width)
    }

    /// Last-known viewport height.
    pub fn height(&self) -> Result<u32> {
        self.require_browser("height")?;
        Ok(self.current().height)
    }

    /// Runs `callback` now if the viewport is no wider than `threshold`, and
    /// arms a debounced resize subscription that runs it after every settled
    /// resize from then on, at any width.
    ///
    /// Whether the subscription is armed when the callback did not fire
    /// depends on the [`ArmPolicy`]. Returns whether the callback fired now.
    pub fn execute_by_width<F>(
        &mut self,
        mut callback: F,
        threshold: impl Into<Threshold>,
    ) -> Result<bool>
    where
        F: FnMut() + Send + 'static,
    {
        self.require_browser("execute_by_width")?;

        let threshold = threshold.into();
        let width = self.current().width;
        let fire = width <= threshold.px();
        let arm = match self.policy {
            ArmPolicy::OnImmediateFire => fire,
            ArmPolicy::Always => true,
        };
        debug!(width, %threshold, fire, arm, "execute by width");

        // Check the runtime before running anything so a failure has no effects.
        let runtime = if arm {
            Some(Handle::try_current().map_err(|_| Error::EnvironmentMismatch {
                operation: "execute_by_width",
                reason: "no async runtime to watch resize events",
            })?)
        } else {
            None
        };

        if fire {
            callback();
        }
        if let Some(runtime) = runtime {
            self.subscribe(&runtime, callback);
        }
        Ok(fire)
    }

    fn subscribe<F>(&mut self, runtime: &Handle, mut callback: F)
    where
        F: FnMut() + Send + 'static,
    {
        let events = self.env.resize_events();
        let env = Arc::clone(&self.env);
        let viewport = Arc::clone(&self.viewport);
        let task = runtime.spawn(debounced(events, self.debounce, move || {
            let measured = env.measure();
            *viewport.lock().unwrap_or_else(PoisonError::into_inner) = measured;
            trace!(width = measured.width, height = measured.height, "resize settled");
            callback();
        }));
        self.subscriptions.push(Subscription { task });
        debug!(subscriptions = self.subscriptions.len(), "resize subscription armed");
    }

    fn current(&self) -> Viewport {
        *self.viewport.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn require_browser(&self, operation: &'static str) -> Result<()> {
        if self.context.is_browser() {
            Ok(())
        } else {
            Err(Error::EnvironmentMismatch {
                operation,
                reason: "no live viewport measurement",
            })
        }
    }
}

impl Drop for ViewportDispatcher {
    fn drop(&mut self) {
        if !self.subscriptions.is_empty() {
            debug!(subscriptions = self.subscriptions.len(), "releasing resize subscriptions");
        }
    }
}

impl fmt::Debug for ViewportDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewportDispatcher")
            .field("context", &self.context)
            .field("viewport", &self.current())
            .field("debounce", &self.debounce)
            .field("policy", &self.policy)
            .field("subscriptions", &self.subscriptions.len())
            .finish()
    }
}
