//! CheckBoxGroup: one check box per item, any number of them checked.
//!
//! A check box stands for its item's value, so when the same value is
//! listed twice both boxes check and uncheck together, whether the change
//! comes from a gesture or from programmatic selection.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::traits::{distinct_values, ItemsControl, MultiSelect};
use crate::reactive::{Listeners, Subscription};

struct CheckState<T> {
    items: Vec<T>,
    checked: Vec<bool>,
}

impl<T: Clone + PartialEq> CheckState<T> {
    fn checked_values(&self) -> Vec<T> {
        let indices = self
            .checked
            .iter()
            .enumerate()
            .filter_map(|(i, &on)| on.then_some(i));
        distinct_values(&self.items, indices)
    }
}

struct CheckInner<T: 'static> {
    state: RefCell<CheckState<T>>,
    listeners: Listeners<Vec<T>>,
}

/// A headless group of independent check boxes.
pub struct CheckBoxGroup<T: 'static> {
    inner: Rc<CheckInner<T>>,
}

impl<T: 'static> Clone for CheckBoxGroup<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + PartialEq + 'static> CheckBoxGroup<T> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(CheckInner {
                state: RefCell::new(CheckState {
                    items: Vec::new(),
                    checked: Vec::new(),
                }),
                listeners: Listeners::new(),
            }),
        }
    }

    /// Set the initial items (builder pattern).
    pub fn with_items(self, items: Vec<T>) -> Self {
        self.set_displayed_items(items);
        self
    }

    /// Whether the box at `index` is checked.
    pub fn is_checked(&self, index: usize) -> bool {
        self.inner
            .state
            .borrow()
            .checked
            .get(index)
            .copied()
            .unwrap_or(false)
    }

    /// Gesture: flip the box at `index` and every box with the same value.
    pub fn toggle(&self, index: usize) -> bool {
        let current = self.is_checked(index);
        self.set_checked(index, !current)
    }

    /// Gesture: check or uncheck the box at `index` and every box with the
    /// same value.
    pub fn set_checked(&self, index: usize, checked: bool) -> bool {
        let snapshot = {
            let mut st = self.inner.state.borrow_mut();
            let CheckState { items, checked: boxes } = &mut *st;
            let Some(value) = items.get(index) else {
                return false;
            };
            let mut changed = false;
            for (item, on) in items.iter().zip(boxes.iter_mut()) {
                if item == value && *on != checked {
                    *on = checked;
                    changed = true;
                }
            }
            if !changed {
                return false;
            }
            st.checked_values()
        };
        self.inner.listeners.notify(&snapshot);
        true
    }
}

impl<T: Clone + PartialEq + 'static> Default for CheckBoxGroup<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + PartialEq + 'static> ItemsControl<T> for CheckBoxGroup<T> {
    fn widget_type(&self) -> &'static str {
        "CheckBoxGroup"
    }

    fn displayed_items(&self) -> Vec<T> {
        self.inner.state.borrow().items.clone()
    }

    /// Boxes are rebuilt; a box starts checked if its value was checked.
    fn set_displayed_items(&self, items: Vec<T>) {
        let mut st = self.inner.state.borrow_mut();
        let kept = st.checked_values();
        st.checked = items.iter().map(|item| kept.contains(item)).collect();
        st.items = items;
    }
}

impl<T: Clone + PartialEq + 'static> MultiSelect<T> for CheckBoxGroup<T> {
    fn active_selection_set(&self) -> Vec<T> {
        self.inner.state.borrow().checked_values()
    }

    fn replace_active_selection_set(&self, add: &[T], remove: &[T]) {
        let mut st = self.inner.state.borrow_mut();
        let CheckState { items, checked } = &mut *st;
        for (item, on) in items.iter().zip(checked.iter_mut()) {
            if add.contains(item) {
                *on = true;
            } else if remove.contains(item) {
                *on = false;
            }
        }
    }

    fn on_selection_changed(&self, listener: Box<dyn Fn(&[T])>) -> Subscription {
        self.inner
            .listeners
            .subscribe(move |values: &Vec<T>| listener(values.as_slice()))
    }
}

impl<T: fmt::Debug + 'static> fmt::Debug for CheckBoxGroup<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let st = self.inner.state.borrow();
        f.debug_struct("CheckBoxGroup")
            .field("items", &st.items)
            .field("checked", &st.checked)
            .finish()
    }
}
