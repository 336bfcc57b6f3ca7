//! RadioGroup: one radio button per item, at most one of them on.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::traits::{ItemsControl, SingleSelect};
use crate::reactive::{Listeners, Subscription};

struct RadioState<T> {
    items: Vec<T>,
    selected: Option<usize>,
}

impl<T: PartialEq> RadioState<T> {
    fn position(&self, value: &T) -> Option<usize> {
        self.items.iter().position(|item| item == value)
    }

    fn selected_value(&self) -> Option<&T> {
        self.selected.and_then(|i| self.items.get(i))
    }
}

struct RadioInner<T: 'static> {
    state: RefCell<RadioState<T>>,
    listeners: Listeners<Option<T>>,
}

/// A headless group of mutually exclusive radio buttons.
///
/// Choosing the button that is already on does nothing; a group can only be
/// emptied programmatically.
pub struct RadioGroup<T: 'static> {
    inner: Rc<RadioInner<T>>,
}

impl<T: 'static> Clone for RadioGroup<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + PartialEq + 'static> RadioGroup<T> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RadioInner {
                state: RefCell::new(RadioState {
                    items: Vec::new(),
                    selected: None,
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

    /// Index of the button that is on.
    pub fn selected_index(&self) -> Option<usize> {
        self.inner.state.borrow().selected
    }

    /// Gesture: turn on the button at `index`.
    pub fn choose(&self, index: usize) -> bool {
        let value = {
            let mut st = self.inner.state.borrow_mut();
            if index >= st.items.len() || st.selected == Some(index) {
                return false;
            }
            st.selected = Some(index);
            st.items.get(index).cloned()
        };
        self.inner.listeners.notify(&value);
        true
    }
}

impl<T: Clone + PartialEq + 'static> Default for RadioGroup<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + PartialEq + 'static> ItemsControl<T> for RadioGroup<T> {
    fn widget_type(&self) -> &'static str {
        "RadioGroup"
    }

    fn displayed_items(&self) -> Vec<T> {
        self.inner.state.borrow().items.clone()
    }

    fn set_displayed_items(&self, items: Vec<T>) {
        let mut st = self.inner.state.borrow_mut();
        let kept = st.selected_value().cloned();
        st.items = items;
        st.selected = kept.and_then(|v| st.position(&v));
    }
}

impl<T: Clone + PartialEq + 'static> SingleSelect<T> for RadioGroup<T> {
    fn active_selection(&self) -> Option<T> {
        self.inner.state.borrow().selected_value().cloned()
    }

    /// Every button whose item differs from `value` is turned off, so an
    /// unknown value leaves the group empty.
    fn set_active_selection(&self, value: Option<&T>) {
        let mut st = self.inner.state.borrow_mut();
        if st.selected_value() == value {
            return;
        }
        st.selected = value.and_then(|v| st.position(v));
    }

    fn on_selection_changed(&self, listener: Box<dyn Fn(Option<&T>)>) -> Subscription {
        self.inner
            .listeners
            .subscribe(move |value: &Option<T>| listener(value.as_ref()))
    }
}

impl<T: fmt::Debug + 'static> fmt::Debug for RadioGroup<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let st = self.inner.state.borrow();
        f.debug_struct("RadioGroup")
            .field("items", &st.items)
            .field("selected", &st.selected)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn choose_turns_one_on() {
        let group = RadioGroup::new().with_items(vec!["S", "M", "L"]);
        assert!(group.choose(1));
        assert_eq!(group.selected_index(), Some(1));
        assert_eq!(group.active_selection(), Some("M"));
    }

    #[test]
    fn choosing_the_active_button_is_silent() {
        let group = RadioGroup::new().with_items(vec![1, 2]);
        let hits = Rc::new(Cell::new(0));
        let _sub = {
            let hits = hits.clone();
            group.on_selection_changed(Box::new(move |_: Option<&i32>| hits.set(hits.get() + 1)))
        };
        group.choose(0);
        group.choose(0);
        group.choose(5);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn unknown_value_turns_everything_off() {
        let group = RadioGroup::new().with_items(vec!['a', 'b']);
        group.set_active_selection(Some(&'b'));
        assert_eq!(group.selected_index(), Some(1));
        group.set_active_selection(Some(&'z'));
        assert_eq!(group.selected_index(), None);
    }

    #[test]
    fn items_change_follows_value() {
        let group = RadioGroup::new().with_items(vec!["x", "y", "z"]);
        group.choose(2);
        group.set_displayed_items(vec!["z", "x"]);
        assert_eq!(group.selected_index(), Some(0));
        group.set_displayed_items(vec!["x"]);
        assert_eq!(group.selected_index(), None);
    }

    #[test]
    fn metadata() {
        let group: RadioGroup<u8> = RadioGroup::default();
        assert_eq!(group.widget_type(), "RadioGroup");
        assert!(format!("{group:?}").contains("RadioGroup"));
    }
}
