//! ViewScope: lifetime owner for everything a form view attaches.
//!
//! A view collects its synchronizers, value bindings, and ad-hoc
//! subscriptions in one scope. Tearing the scope down (or dropping it)
//! detaches them all at once.

use std::fmt;

use crate::binding::ValueBinding;
use crate::reactive::Subscription;
use crate::select::SyncHandle;

/// Owner of the synchronizers and subscriptions of one view.
#[derive(Default)]
pub struct ViewScope {
    handles: Vec<SyncHandle>,
    bindings: Vec<ValueBinding>,
    subscriptions: Vec<Subscription>,
}

impl ViewScope {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep a synchronizer attached for the scope's lifetime.
    pub fn adopt(&mut self, handle: SyncHandle) -> &mut Self {
        self.handles.push(handle);
        self
    }

    /// Keep a value binding connected for the scope's lifetime.
    pub fn bind(&mut self, binding: ValueBinding) -> &mut Self {
        self.bindings.push(binding);
        self
    }

    /// Keep a subscription alive for the scope's lifetime.
    pub fn hold(&mut self, subscription: Subscription) -> &mut Self {
        self.subscriptions.push(subscription);
        self
    }

    /// Number of synchronizers still attached.
    pub fn attached_count(&self) -> usize {
        self.handles.iter().filter(|h| h.is_attached()).count()
    }

    /// Number of owned synchronizers, bindings, and subscriptions.
    pub fn len(&self) -> usize {
        self.handles.len() + self.bindings.len() + self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Detach everything. The scope can be reused afterwards.
    pub fn teardown(&mut self) {
        if self.is_empty() {
            return;
        }
        log::debug!(
            "tearing down view scope ({} syncs, {} bindings, {} subscriptions)",
            self.handles.len(),
            self.bindings.len(),
            self.subscriptions.len()
        );
        for handle in &mut self.handles {
            handle.detach();
        }
        self.handles.clear();
        self.bindings.clear();
        self.subscriptions.clear();
    }
}

impl Drop for ViewScope {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl fmt::Debug for ViewScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewScope")
            .field("handles", &self.handles)
            .field("bindings", &self.bindings.len())
            .field("subscriptions", &self.subscriptions.len())
            .finish()
    }
}
