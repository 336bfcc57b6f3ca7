//! ComboBox and ChoiceBox: drop-down pickers holding a single value.
//!
//! Both keep a value rather than a row index. They differ in what they do
//! with a value that is not among their items: a [`ComboBox`] keeps and
//! shows it (like an editable combo), a [`ChoiceBox`] drops it.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::traits::{ItemsControl, SingleSelect};
use crate::reactive::{Listeners, Subscription};

// ---------------------------------------------------------------------------
// Picker (shared core)
// ---------------------------------------------------------------------------

struct PickerState<T> {
    items: Vec<T>,
    value: Option<T>,
}

struct Picker<T: 'static> {
    state: RefCell<PickerState<T>>,
    listeners: Listeners<Option<T>>,
    keeps_foreign: bool,
}

impl<T: Clone + PartialEq + 'static> Picker<T> {
    fn new(keeps_foreign: bool) -> Self {
        Self {
            state: RefCell::new(PickerState {
                items: Vec::new(),
                value: None,
            }),
            listeners: Listeners::new(),
            keeps_foreign,
        }
    }

    fn admit(&self, items: &[T], value: Option<T>) -> Option<T> {
        value.filter(|v| self.keeps_foreign || items.contains(v))
    }

    /// User gesture: store `value`, notifying once if it changed.
    fn commit(&self, value: Option<T>) -> bool {
        {
            let mut st = self.state.borrow_mut();
            if st.value == value {
                return false;
            }
            st.value = value.clone();
        }
        self.listeners.notify(&value);
        true
    }

    fn pick(&self, index: usize) -> bool {
        let picked = self.state.borrow().items.get(index).cloned();
        match picked {
            Some(value) => self.commit(Some(value)),
            None => false,
        }
    }

    fn items(&self) -> Vec<T> {
        self.state.borrow().items.clone()
    }

    fn set_items(&self, items: Vec<T>) {
        let mut st = self.state.borrow_mut();
        let value = self.admit(&items, st.value.take());
        st.items = items;
        st.value = value;
    }

    fn value(&self) -> Option<T> {
        self.state.borrow().value.clone()
    }

    fn set_value(&self, value: Option<&T>) {
        let mut st = self.state.borrow_mut();
        if st.value.as_ref() == value {
            return;
        }
        let admitted = self.admit(&st.items, value.cloned());
        st.value = admitted;
    }

    fn subscribe(&self, listener: Box<dyn Fn(Option<&T>)>) -> Subscription {
        self.listeners
            .subscribe(move |value: &Option<T>| listener(value.as_ref()))
    }
}

impl<T: fmt::Debug + 'static> fmt::Debug for Picker<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let st = self.state.borrow();
        f.debug_struct("Picker")
            .field("items", &st.items)
            .field("value", &st.value)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// ComboBox
// ---------------------------------------------------------------------------

/// A drop-down whose value may be any `T`, listed or not.
///
/// Cloning yields another handle to the same control.
pub struct ComboBox<T: 'static> {
    picker: Rc<Picker<T>>,
}

impl<T: 'static> Clone for ComboBox<T> {
    fn clone(&self) -> Self {
        Self {
            picker: Rc::clone(&self.picker),
        }
    }
}

impl<T: Clone + PartialEq + 'static> ComboBox<T> {
    /// Create an empty combo box.
    pub fn new() -> Self {
        Self {
            picker: Rc::new(Picker::new(true)),
        }
    }

    /// Set the initial items (builder pattern).
    pub fn with_items(self, items: Vec<T>) -> Self {
        self.picker.set_items(items);
        self
    }

    /// Gesture: choose the item at `index` from the drop-down.
    pub fn pick(&self, index: usize) -> bool {
        self.picker.pick(index)
    }

    /// Gesture: commit a typed-in value, listed or not.
    pub fn commit_value(&self, value: T) -> bool {
        self.picker.commit(Some(value))
    }
}

impl<T: Clone + PartialEq + 'static> Default for ComboBox<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + PartialEq + 'static> ItemsControl<T> for ComboBox<T> {
    fn widget_type(&self) -> &'static str {
        "ComboBox"
    }

    fn displayed_items(&self) -> Vec<T> {
        self.picker.items()
    }

    fn set_displayed_items(&self, items: Vec<T>) {
        self.picker.set_items(items);
    }
}

impl<T: Clone + PartialEq + 'static> SingleSelect<T> for ComboBox<T> {
    fn active_selection(&self) -> Option<T> {
        self.picker.value()
    }

    /// Unlisted values are kept and shown.
    fn set_active_selection(&self, value: Option<&T>) {
        self.picker.set_value(value);
    }

    fn on_selection_changed(&self, listener: Box<dyn Fn(Option<&T>)>) -> Subscription {
        self.picker.subscribe(listener)
    }
}

impl<T: fmt::Debug + 'static> fmt::Debug for ComboBox<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ComboBox").field(&self.picker).finish()
    }
}

// ---------------------------------------------------------------------------
// ChoiceBox
// ---------------------------------------------------------------------------

/// A drop-down whose value is always one of its items, or nothing.
///
/// Cloning yields another handle to the same control.
pub struct ChoiceBox<T: 'static> {
    picker: Rc<Picker<T>>,
}

impl<T: 'static> Clone for ChoiceBox<T> {
    fn clone(&self) -> Self {
        Self {
            picker: Rc::clone(&self.picker),
        }
    }
}

impl<T: Clone + PartialEq + 'static> ChoiceBox<T> {
    /// Create an empty choice box.
    pub fn new() -> Self {
        Self {
            picker: Rc::new(Picker::new(false)),
        }
    }

    /// Set the initial items (builder pattern).
    pub fn with_items(self, items: Vec<T>) -> Self {
        self.picker.set_items(items);
        self
    }

    /// Gesture: choose the item at `index`.
    pub fn pick(&self, index: usize) -> bool {
        self.picker.pick(index)
    }
}

impl<T: Clone + PartialEq + 'static> Default for ChoiceBox<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + PartialEq + 'static> ItemsControl<T> for ChoiceBox<T> {
    fn widget_type(&self) -> &'static str {
        "ChoiceBox"
    }

    fn displayed_items(&self) -> Vec<T> {
        self.picker.items()
    }

    /// A value that is no longer listed is dropped.
    fn set_displayed_items(&self, items: Vec<T>) {
        self.picker.set_items(items);
    }
}

impl<T: Clone + PartialEq + 'static> SingleSelect<T> for ChoiceBox<T> {
    fn active_selection(&self) -> Option<T> {
        self.picker.value()
    }

    /// Unlisted values clear the selection.
    fn set_active_selection(&self, value: Option<&T>) {
        self.picker.set_value(value);
    }

    fn on_selection_changed(&self, listener: Box<dyn Fn(Option<&T>)>) -> Subscription {
        self.picker.subscribe(listener)
    }
}

impl<T: fmt::Debug + 'static> fmt::Debug for ChoiceBox<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ChoiceBox").field(&self.picker).finish()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
