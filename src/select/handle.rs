//! SyncHandle: the subscriptions that make up one attached synchronizer.
//!
//! A handle walks `Uninitialized → Attached → Detached`. Construction always
//! ends in `Attached`; `detach` (or dropping the handle) is terminal and
//! releases every subscription, so no further propagation happens in either
//! direction.

use std::fmt;

use crate::reactive::Subscription;

/// Lifecycle state of a synchronizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    Uninitialized,
    Attached,
    Detached,
}

/// Selection arity of a synchronizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Single,
    Multi,
}

/// Owner of a synchronizer's subscriptions.
#[must_use = "dropping a SyncHandle detaches the synchronizer"]
pub struct SyncHandle {
    arity: Arity,
    widget_type: &'static str,
    state: SyncState,
    subscriptions: Vec<Subscription>,
}

impl SyncHandle {
    pub(crate) fn new(arity: Arity, widget_type: &'static str) -> Self {
        Self {
            arity,
            widget_type,
            state: SyncState::Uninitialized,
            subscriptions: Vec::new(),
        }
    }

    /// Take ownership of the listening subscriptions and go live.
    pub(crate) fn attach(mut self, subscriptions: Vec<Subscription>) -> Self {
        debug_assert_eq!(self.state, SyncState::Uninitialized);
        self.subscriptions = subscriptions;
        self.state = SyncState::Attached;
        log::debug!(
            "attached {:?} selection sync to {} ({} subscriptions)",
            self.arity,
            self.widget_type,
            self.subscriptions.len()
        );
        self
    }

    pub fn state(&self) -> SyncState {
        self.state
    }

    pub fn is_attached(&self) -> bool {
        self.state == SyncState::Attached
    }

    pub fn arity(&self) -> Arity {
        self.arity
    }

    /// Type name of the synchronized control.
    pub fn widget_type(&self) -> &'static str {
        self.widget_type
    }

    /// Stop propagating in both directions. Idempotent.
    pub fn detach(&mut self) {
        if self.state != SyncState::Attached {
            return;
        }
        self.subscriptions.clear();
        self.state = SyncState::Detached;
        log::debug!("detached {:?} selection sync from {}", self.arity, self.widget_type);
    }
}

impl Drop for SyncHandle {
    fn drop(&mut self) {
        self.detach();
    }
}

impl fmt::Debug for SyncHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncHandle")
            .field("arity", &self.arity)
            .field("widget_type", &self.widget_type)
            .field("state", &self.state)
            .field("subscriptions", &self.subscriptions.len())
            .finish()
    }
}
