//! ListView: a list of items with a native selection model.
//!
//! Supports single and multiple selection modes. The selection is stored as
//! a set of indices into the displayed items; the capability traits speak in
//! values, so duplicated items resolve to their first occurrence.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;

use super::traits::{distinct_values, ItemsControl, MultiSelect, SingleSelect};
use crate::reactive::{Listeners, Subscription};

// ---------------------------------------------------------------------------
// SelectionMode
// ---------------------------------------------------------------------------

/// Whether a list view allows one or many selected rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    #[default]
    Single,
    Multiple,
}

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

struct ListViewState<T> {
    items: Vec<T>,
    selected: BTreeSet<usize>,
    mode: SelectionMode,
}

impl<T: Clone + PartialEq> ListViewState<T> {
    fn selection_values(&self) -> Vec<T> {
        distinct_values(&self.items, self.selected.iter().copied())
    }

    fn position(&self, value: &T) -> Option<usize> {
        self.items.iter().position(|item| item == value)
    }

    fn is_value_selected(&self, value: &T) -> bool {
        self.selected.iter().any(|&i| self.items.get(i) == Some(value))
    }

    fn in_range(&self, index: usize) -> bool {
        index < self.items.len()
    }
}

struct ListViewInner<T: 'static> {
    state: RefCell<ListViewState<T>>,
    listeners: Listeners<Vec<T>>,
}

// ---------------------------------------------------------------------------
// ListView
// ---------------------------------------------------------------------------

/// A headless list view.
///
/// Cloning yields another handle to the same control.
///
/// # Examples
///
/// ```
/// use gilt_select::control::{ListView, MultiSelect};
///
/// let list = ListView::multiple().with_items(vec!["a", "b", "c"]);
/// list.click(0);
/// list.toggle(2);
/// assert_eq!(list.active_selection_set(), vec!["a", "c"]);
/// ```
pub struct ListView<T: 'static> {
    inner: Rc<ListViewInner<T>>,
}

impl<T: 'static> Clone for ListView<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + PartialEq + 'static> ListView<T> {
    /// Create an empty single-selection list view.
    pub fn new() -> Self {
        Self::with_mode(SelectionMode::Single)
    }

    /// Create an empty multiple-selection list view.
    pub fn multiple() -> Self {
        Self::with_mode(SelectionMode::Multiple)
    }

    /// Create an empty list view in the given mode.
    pub fn with_mode(mode: SelectionMode) -> Self {
        Self {
            inner: Rc::new(ListViewInner {
                state: RefCell::new(ListViewState {
                    items: Vec::new(),
                    selected: BTreeSet::new(),
                    mode,
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

    /// The selection mode.
    pub fn mode(&self) -> SelectionMode {
        self.inner.state.borrow().mode
    }

    /// Selected row indices, ascending.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.inner.state.borrow().selected.iter().copied().collect()
    }

    /// Whether the row at `index` is selected.
    pub fn is_selected(&self, index: usize) -> bool {
        self.inner.state.borrow().selected.contains(&index)
    }

    // ── Gestures ─────────────────────────────────────────────────────

    /// Plain click: select only the row at `index`.
    pub fn click(&self, index: usize) -> bool {
        self.gesture(|st| {
            if st.in_range(index) {
                st.selected = BTreeSet::from([index]);
            }
        })
    }

    /// Modifier click: flip the row at `index`.
    ///
    /// In single mode this selects the row, or clears it if it was the
    /// selected one.
    pub fn toggle(&self, index: usize) -> bool {
        self.gesture(|st| {
            if !st.in_range(index) {
                return;
            }
            if st.selected.contains(&index) {
                st.selected.remove(&index);
            } else {
                if st.mode == SelectionMode::Single {
                    st.selected.clear();
                }
                st.selected.insert(index);
            }
        })
    }

    /// Range click: select rows `from..=to` (in either order).
    ///
    /// In single mode only `to` is selected.
    pub fn click_range(&self, from: usize, to: usize) -> bool {
        self.gesture(|st| {
            if !st.in_range(from) || !st.in_range(to) {
                return;
            }
            st.selected = match st.mode {
                SelectionMode::Single => BTreeSet::from([to]),
                SelectionMode::Multiple => (from.min(to)..=from.max(to)).collect(),
            };
        })
    }

    /// Deselect every row.
    pub fn deselect_all(&self) -> bool {
        self.gesture(|st| st.selected.clear())
    }

    /// Run a gesture and, if the selection changed, notify once.
    fn gesture(&self, f: impl FnOnce(&mut ListViewState<T>)) -> bool {
        let snapshot = {
            let mut st = self.inner.state.borrow_mut();
            let before = st.selected.clone();
            f(&mut st);
            if st.selected == before {
                return false;
            }
            st.selection_values()
        };
        self.inner.listeners.notify(&snapshot);
        true
    }
}

impl<T: Clone + PartialEq + 'static> Default for ListView<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Capability impls
// ---------------------------------------------------------------------------

impl<T: Clone + PartialEq + 'static> ItemsControl<T> for ListView<T> {
    fn widget_type(&self) -> &'static str {
        "ListView"
    }

    fn displayed_items(&self) -> Vec<T> {
        self.inner.state.borrow().items.clone()
    }

    fn set_displayed_items(&self, items: Vec<T>) {
        let mut st = self.inner.state.borrow_mut();
        let kept = st.selection_values();
        st.items = items;
        let selected = kept.iter().filter_map(|v| st.position(v)).collect();
        st.selected = selected;
    }
}

impl<T: Clone + PartialEq + 'static> SingleSelect<T> for ListView<T> {
    fn active_selection(&self) -> Option<T> {
        let st = self.inner.state.borrow();
        st.selected.first().and_then(|&i| st.items.get(i)).cloned()
    }

    /// An unknown value deselects everything.
    fn set_active_selection(&self, value: Option<&T>) {
        let mut st = self.inner.state.borrow_mut();
        match value {
            Some(v) if st.is_value_selected(v) && st.selected.len() == 1 => {}
            Some(v) => {
                st.selected = st.position(v).into_iter().collect();
            }
            None => st.selected.clear(),
        }
    }

    fn on_selection_changed(&self, listener: Box<dyn Fn(Option<&T>)>) -> Subscription {
        self.inner
            .listeners
            .subscribe(move |values: &Vec<T>| listener(values.first()))
    }
}

impl<T: Clone + PartialEq + 'static> MultiSelect<T> for ListView<T> {
    fn active_selection_set(&self) -> Vec<T> {
        self.inner.state.borrow().selection_values()
    }

    fn replace_active_selection_set(&self, add: &[T], remove: &[T]) {
        let mut st = self.inner.state.borrow_mut();
        let ListViewState {
            items,
            selected,
            mode,
        } = &mut *st;
        selected.retain(|&i| items.get(i).is_some_and(|item| !remove.contains(item)));
        for value in add {
            if selected.iter().any(|&i| items.get(i) == Some(value)) {
                continue;
            }
            if let Some(index) = items.iter().position(|item| item == value) {
                if *mode == SelectionMode::Single {
                    selected.clear();
                }
                selected.insert(index);
            }
        }
    }

    fn on_selection_changed(&self, listener: Box<dyn Fn(&[T])>) -> Subscription {
        self.inner
            .listeners
            .subscribe(move |values: &Vec<T>| listener(values.as_slice()))
    }

    /// Switches to [`SelectionMode::Multiple`], keeping the current rows.
    fn enable_multiple(&self) {
        self.inner.state.borrow_mut().mode = SelectionMode::Multiple;
    }
}

impl<T: fmt::Debug + 'static> fmt::Debug for ListView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let st = self.inner.state.borrow();
        f.debug_struct("ListView")
            .field("mode", &st.mode)
            .field("items", &st.items)
            .field("selected", &st.selected)
            .finish()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
