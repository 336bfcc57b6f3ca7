//! ObservableList<T>: a shared, ordered collection with change notification.
//!
//! Used both for candidate collections and for multi-selection sets. Every
//! mutating call commits first and then notifies listeners exactly once with
//! a [`ListChange`] describing what went in and what came out. Calls that
//! change nothing notify nobody.

use std::cell::RefCell;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

use super::listeners::{Listeners, Subscription};
use crate::error::{Result, SelectError};

/// Elements added to and removed from a list by one mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct ListChange<T> {
    pub added: Vec<T>,
    pub removed: Vec<T>,
}

impl<T> ListChange<T> {
    fn added(added: Vec<T>) -> Self {
        Self {
            added,
            removed: Vec::new(),
        }
    }

    fn removed(removed: Vec<T>) -> Self {
        Self {
            added: Vec::new(),
            removed,
        }
    }

    /// Whether the change carries no elements at all.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

struct ListInner<T: 'static> {
    items: RefCell<Vec<T>>,
    listeners: Listeners<ListChange<T>>,
}

/// A shared, single-threaded ordered list.
///
/// Cloning yields another handle to the same list. Duplicates are allowed;
/// element identity is equality.
pub struct ObservableList<T: 'static> {
    inner: Rc<ListInner<T>>,
}

impl<T: 'static> Clone for ObservableList<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + PartialEq + 'static> ObservableList<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::from_vec(Vec::new())
    }

    /// Create a list holding `items`.
    pub fn from_vec(items: Vec<T>) -> Self {
        Self {
            inner: Rc::new(ListInner {
                items: RefCell::new(items),
                listeners: Listeners::new(),
            }),
        }
    }

    // ── Reads ────────────────────────────────────────────────────────

    pub fn len(&self) -> usize {
        self.inner.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.items.borrow().is_empty()
    }

    /// Clone out the element at `index`.
    pub fn get(&self, index: usize) -> Option<T> {
        self.inner.items.borrow().get(index).cloned()
    }

    pub fn first(&self) -> Option<T> {
        self.get(0)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.inner.items.borrow().contains(value)
    }

    /// Index of the first element equal to `value`.
    pub fn position(&self, value: &T) -> Option<usize> {
        self.inner.items.borrow().iter().position(|v| v == value)
    }

    /// Clone out the whole list.
    pub fn snapshot(&self) -> Vec<T> {
        self.inner.items.borrow().clone()
    }

    /// Read the list by reference.
    pub fn with<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        f(&self.inner.items.borrow())
    }

    // ── Mutations ────────────────────────────────────────────────────

    /// Append one element.
    pub fn push(&self, value: T) {
        self.inner.items.borrow_mut().push(value.clone());
        self.emit(ListChange::added(vec![value]));
    }

    /// Append every element of `values`.
    pub fn extend(&self, values: impl IntoIterator<Item = T>) {
        let added: Vec<T> = values.into_iter().collect();
        if added.is_empty() {
            return;
        }
        self.inner.items.borrow_mut().extend(added.iter().cloned());
        self.emit(ListChange::added(added));
    }

    /// Insert `value` at `index`, shifting later elements right.
    pub fn insert(&self, index: usize, value: T) -> Result<()> {
        {
            let mut items = self.inner.items.borrow_mut();
            if index > items.len() {
                return Err(SelectError::IndexOutOfBounds {
                    index,
                    len: items.len(),
                });
            }
            items.insert(index, value.clone());
        }
        self.emit(ListChange::added(vec![value]));
        Ok(())
    }

    /// Remove and return the element at `index`.
    pub fn remove(&self, index: usize) -> Option<T> {
        let removed = {
            let mut items = self.inner.items.borrow_mut();
            if index >= items.len() {
                return None;
            }
            items.remove(index)
        };
        self.emit(ListChange::removed(vec![removed.clone()]));
        Some(removed)
    }

    /// Remove the first element equal to `value`.
    pub fn remove_item(&self, value: &T) -> bool {
        match self.position(value) {
            Some(index) => self.remove(index).is_some(),
            None => false,
        }
    }

    /// Overwrite the element at `index`, returning the previous one.
    pub fn replace(&self, index: usize, value: T) -> Result<T> {
        let old = {
            let mut items = self.inner.items.borrow_mut();
            let len = items.len();
            let slot = items
                .get_mut(index)
                .ok_or(SelectError::IndexOutOfBounds { index, len })?;
            if *slot == value {
                return Ok(value);
            }
            std::mem::replace(slot, value.clone())
        };
        self.emit(ListChange {
            added: vec![value],
            removed: vec![old.clone()],
        });
        Ok(old)
    }

    /// Replace the whole content.
    pub fn set_all(&self, values: Vec<T>) {
        let old = {
            let mut items = self.inner.items.borrow_mut();
            if *items == values {
                return;
            }
            std::mem::replace(&mut *items, values.clone())
        };
        self.emit(ListChange {
            added: values,
            removed: old,
        });
    }

    /// Remove everything.
    pub fn clear(&self) {
        self.set_all(Vec::new());
    }

    // ── Observation ──────────────────────────────────────────────────

    /// Subscribe to list mutations.
    pub fn subscribe(&self, f: impl Fn(&ListChange<T>) + 'static) -> Subscription {
        self.inner.listeners.subscribe(f)
    }

    /// Number of live listeners.
    pub fn subscriber_count(&self) -> usize {
        self.inner.listeners.len()
    }

    fn emit(&self, change: ListChange<T>) {
        if !change.is_empty() {
            self.inner.listeners.notify(&change);
        }
    }
}

impl<T: Clone + Eq + Hash + 'static> ObservableList<T> {
    /// Remove every element equal to one in `remove`, then append `add`,
    /// as a single mutation with a single notification.
    pub fn apply_batch(&self, add: &[T], remove: &[T]) {
        let remove: HashSet<&T> = remove.iter().collect();
        let removed = {
            let mut items = self.inner.items.borrow_mut();
            let mut removed = Vec::new();
            items.retain(|item| {
                if remove.contains(item) {
                    removed.push(item.clone());
                    false
                } else {
                    true
                }
            });
            items.extend(add.iter().cloned());
            removed
        };
        self.emit(ListChange {
            added: add.to_vec(),
            removed,
        });
    }
}

impl<T: Clone + PartialEq + 'static> Default for ObservableList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + PartialEq + 'static> From<Vec<T>> for ObservableList<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}

impl<T: Clone + PartialEq + 'static> FromIterator<T> for ObservableList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: fmt::Debug + 'static> fmt::Debug for ObservableList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObservableList")
            .field("items", &*self.inner.items.borrow())
            .field("listeners", &self.inner.listeners)
            .finish()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
