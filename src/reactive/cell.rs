//! ObservableCell<T>: a shared, optional value with change notification.
//!
//! Holds zero or one `T`. Writes that do not change the value are no-ops and
//! notify nobody; this idempotence is what lets two cells (or a cell and a
//! control) echo a value back and forth and still come to rest.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::listeners::{Listeners, Subscription};

/// The old and new value delivered to cell listeners.
#[derive(Debug, Clone, PartialEq)]
pub struct CellChange<T> {
    pub old: Option<T>,
    pub new: Option<T>,
}

struct CellInner<T: 'static> {
    value: RefCell<Option<T>>,
    listeners: Listeners<CellChange<T>>,
}

/// A shared, single-threaded cell holding at most one value.
///
/// Cloning yields another handle to the same cell.
///
/// # Examples
///
/// ```
/// use gilt_select::reactive::ObservableCell;
///
/// let name = ObservableCell::new("Alpha");
/// let _sub = name.subscribe(|change| println!("{:?} -> {:?}", change.old, change.new));
/// name.set("Beta");
/// assert_eq!(name.get(), Some("Beta"));
/// ```
pub struct ObservableCell<T: 'static> {
    inner: Rc<CellInner<T>>,
}

impl<T: 'static> Clone for ObservableCell<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + PartialEq + 'static> ObservableCell<T> {
    /// Create a cell holding `value`.
    pub fn new(value: T) -> Self {
        Self::from_option(Some(value))
    }

    /// Create an unset cell.
    pub fn empty() -> Self {
        Self::from_option(None)
    }

    /// Create a cell from an optional value.
    pub fn from_option(value: Option<T>) -> Self {
        Self {
            inner: Rc::new(CellInner {
                value: RefCell::new(value),
                listeners: Listeners::new(),
            }),
        }
    }

    /// Clone out the current value.
    pub fn get(&self) -> Option<T> {
        self.inner.value.borrow().clone()
    }

    /// Read the current value by reference.
    pub fn with<R>(&self, f: impl FnOnce(Option<&T>) -> R) -> R {
        f(self.inner.value.borrow().as_ref())
    }

    /// Whether the cell holds a value.
    pub fn is_set(&self) -> bool {
        self.inner.value.borrow().is_some()
    }

    /// Store `value`, notifying listeners if it differs from the current one.
    pub fn set(&self, value: T) {
        self.replace(Some(value));
    }

    /// Unset the cell, notifying listeners if it held a value.
    pub fn clear(&self) {
        self.replace(None);
    }

    /// Store `value` (or unset), returning whether anything changed.
    ///
    /// Listeners run after the new value is committed.
    pub fn replace(&self, value: Option<T>) -> bool {
        let old = {
            let mut slot = self.inner.value.borrow_mut();
            if *slot == value {
                return false;
            }
            std::mem::replace(&mut *slot, value.clone())
        };
        self.inner.listeners.notify(&CellChange { old, new: value });
        true
    }

    /// Subscribe to value changes.
    pub fn subscribe(&self, f: impl Fn(&CellChange<T>) + 'static) -> Subscription {
        self.inner.listeners.subscribe(f)
    }

    /// Number of live listeners.
    pub fn subscriber_count(&self) -> usize {
        self.inner.listeners.len()
    }

    /// Whether both handles point at the same cell.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: Clone + PartialEq + 'static> Default for ObservableCell<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: fmt::Debug + 'static> fmt::Debug for ObservableCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObservableCell")
            .field("value", &*self.inner.value.borrow())
            .field("listeners", &self.inner.listeners)
            .finish()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
