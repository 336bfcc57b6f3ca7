//! Capability traits: displayed items, active selection, change events.
//!
//! Synchronizers never see concrete widgets. Every selection control is
//! reached through [`ItemsControl`] plus exactly one of [`SingleSelect`] or
//! [`MultiSelect`] (a list view in either mode implements both).
//!
//! Setters are programmatic and silent. `on_selection_changed` listeners
//! fire only for user gestures, once per gesture, after the control's state
//! has been committed.

use crate::reactive::Subscription;

// ---------------------------------------------------------------------------
// ItemsControl
// ---------------------------------------------------------------------------

/// A control that displays an ordered list of items.
pub trait ItemsControl<T> {
    /// The control's type name (e.g. "ListView", "ComboBox"), used in logs.
    fn widget_type(&self) -> &'static str;

    /// The items currently displayed, in order.
    fn displayed_items(&self) -> Vec<T>;

    /// Replace the displayed items.
    ///
    /// The selection is carried over by value: elements that are still
    /// displayed stay selected, the rest are dropped. No event fires.
    fn set_displayed_items(&self, items: Vec<T>);
}

// ---------------------------------------------------------------------------
// SingleSelect
// ---------------------------------------------------------------------------

/// A control with zero or one active item.
pub trait SingleSelect<T>: ItemsControl<T> {
    /// The active item, if any.
    fn active_selection(&self) -> Option<T>;

    /// Make `value` the active item, or clear the selection with `None`.
    ///
    /// Writing the already-active value changes nothing. A value the
    /// control cannot represent is handled by the control's native
    /// behavior. No event fires.
    fn set_active_selection(&self, value: Option<&T>);

    /// Subscribe to gesture-driven selection changes.
    fn on_selection_changed(&self, listener: Box<dyn Fn(Option<&T>)>) -> Subscription;
}

// ---------------------------------------------------------------------------
// MultiSelect
// ---------------------------------------------------------------------------

/// A control with any number of active items.
pub trait MultiSelect<T>: ItemsControl<T> {
    /// The active items, each at most once, in display order.
    fn active_selection_set(&self) -> Vec<T>;

    /// Deselect everything in `remove`, then select everything in `add`.
    ///
    /// Selecting an element that is not displayed is a no-op. No event fires.
    fn replace_active_selection_set(&self, add: &[T], remove: &[T]);

    /// Subscribe to gesture-driven selection changes. The listener gets the
    /// full active set after the gesture.
    fn on_selection_changed(&self, listener: Box<dyn Fn(&[T])>) -> Subscription;

    /// Put the control in a state that can hold more than one active item.
    ///
    /// Called once when a multi-selection synchronizer attaches. Controls
    /// that are always multi-valued keep the default no-op.
    fn enable_multiple(&self) {}
}

// ---------------------------------------------------------------------------
// Shared helpers for implementations
// ---------------------------------------------------------------------------

/// Values at `indices` of `items`, first occurrence of each value only.
pub(crate) fn distinct_values<T: Clone + PartialEq>(
    items: &[T],
    indices: impl IntoIterator<Item = usize>,
) -> Vec<T> {
    let mut out: Vec<T> = Vec::new();
    for index in indices {
        if let Some(item) = items.get(index) {
            if !out.contains(item) {
                out.push(item.clone());
            }
        }
    }
    out
}
