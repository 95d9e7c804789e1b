//! Observable state cell: a current value plus change subscriptions.

use tokio::sync::watch;

/// Holds a value and lets any number of observers follow its changes.
///
/// Writes never fail, with or without live subscribers.
#[derive(Debug)]
pub struct StateCell<T> {
    tx: watch::Sender<T>,
}

impl<T> StateCell<T> {
    pub fn new(value: T) -> Self {
        let (tx, _rx) = watch::channel(value);
        Self { tx }
    }

    /// Replaces the value, notifying subscribers. Returns the previous value.
    pub fn set(&self, value: T) -> T {
        self.tx.send_replace(value)
    }

    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }
}

impl<T: Clone> StateCell<T> {
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }
}

impl<T: Default> Default for StateCell<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
