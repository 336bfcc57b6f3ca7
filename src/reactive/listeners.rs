//! Listener registry and RAII subscriptions.
//!
//! Every observable in this crate (cells, lists, controls) keeps its
//! listeners in a [`Listeners`] registry backed by a slotmap. Subscribing
//! returns a [`Subscription`]; dropping it removes the listener.
//!
//! Notification snapshots the registered callbacks and releases every
//! borrow before calling them, so a listener may freely read or mutate the
//! observable that notified it, or drop other subscriptions.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Identifies a registered listener. Copy, lightweight (u64).
    pub struct ListenerId;
}

type Callback<E> = Rc<dyn Fn(&E)>;
type Slots<E> = RefCell<SlotMap<ListenerId, Callback<E>>>;

// ---------------------------------------------------------------------------
// Listeners
// ---------------------------------------------------------------------------

/// A set of callbacks notified with a borrowed event of type `E`.
pub(crate) struct Listeners<E: ?Sized + 'static> {
    slots: Rc<Slots<E>>,
}

impl<E: ?Sized + 'static> Listeners<E> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Rc::new(RefCell::new(SlotMap::with_key())),
        }
    }

    /// Register `callback`, returning the guard that keeps it registered.
    pub(crate) fn subscribe(&self, callback: impl Fn(&E) + 'static) -> Subscription {
        let id = self.slots.borrow_mut().insert(Rc::new(callback));
        let slots = Rc::downgrade(&self.slots);
        Subscription::new(move || {
            if let Some(slots) = slots.upgrade() {
                slots.borrow_mut().remove(id);
            }
        })
    }

    /// Call every registered listener with `event`.
    ///
    /// A listener removed by an earlier listener in the same pass is skipped.
    pub(crate) fn notify(&self, event: &E) {
        let snapshot: Vec<(ListenerId, Callback<E>)> = self
            .slots
            .borrow()
            .iter()
            .map(|(id, cb)| (id, Rc::clone(cb)))
            .collect();

        for (id, callback) in snapshot {
            if self.slots.borrow().contains_key(id) {
                callback(event);
            }
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.borrow().len()
    }
}

impl<E: ?Sized + 'static> fmt::Debug for Listeners<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.len())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Subscription
// ---------------------------------------------------------------------------

/// RAII guard for a registered listener.
///
/// Dropping the guard (or calling [`unsubscribe`](Self::unsubscribe))
/// removes the listener before its next notification. A subscription
/// outliving its observable is harmless.
#[must_use = "dropping a Subscription immediately removes its listener"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Remove the listener now.
    pub fn unsubscribe(mut self) {
        self.cancel_now();
    }

    /// Whether the listener is still registered through this guard.
    pub fn is_active(&self) -> bool {
        self.cancel.is_some()
    }

    fn cancel_now(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
