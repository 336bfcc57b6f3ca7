//! Two-way bindings between plain value cells.
//!
//! Unlike selection sync there is no control in between: two
//! [`ObservableCell`]s are kept equal, optionally through a text
//! [`Converter`]. Cycles end because writing an equal value is a no-op.

use std::fmt;
use std::rc::Rc;

use super::convert::Converter;
use crate::reactive::{ObservableCell, Subscription};

/// Both directions of a value binding. Drop it (or call [`unbind`]) to
/// disconnect.
///
/// [`unbind`]: ValueBinding::unbind
#[must_use = "dropping a ValueBinding disconnects it"]
pub struct ValueBinding {
    kind: &'static str,
    subscriptions: Vec<Subscription>,
}

impl ValueBinding {
    fn new(kind: &'static str, subscriptions: Vec<Subscription>) -> Self {
        log::debug!("bound {kind} pair");
        Self {
            kind,
            subscriptions,
        }
    }

    /// Whether both directions are still connected.
    pub fn is_bound(&self) -> bool {
        !self.subscriptions.is_empty()
    }

    /// Disconnect both directions. Idempotent.
    pub fn unbind(&mut self) {
        if self.subscriptions.is_empty() {
            return;
        }
        self.subscriptions.clear();
        log::debug!("unbound {} pair", self.kind);
    }
}

impl Drop for ValueBinding {
    fn drop(&mut self) {
        self.unbind();
    }
}

impl fmt::Debug for ValueBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueBinding")
            .field("kind", &self.kind)
            .field("bound", &self.is_bound())
            .finish()
    }
}

/// Keep `a` and `b` equal. `b` takes `a`'s value first.
///
/// # Examples
///
/// ```
/// use gilt_select::binding::bind_bidirectional;
/// use gilt_select::reactive::ObservableCell;
///
/// let checked = ObservableCell::new(true);
/// let enabled = ObservableCell::new(false);
/// let _binding = bind_bidirectional(&checked, &enabled);
/// assert_eq!(enabled.get(), Some(true));
///
/// enabled.set(false);
/// assert_eq!(checked.get(), Some(false));
/// ```
pub fn bind_bidirectional<T>(a: &ObservableCell<T>, b: &ObservableCell<T>) -> ValueBinding
where
    T: Clone + PartialEq + 'static,
{
    b.replace(a.get());

    let a_to_b = {
        let b = b.clone();
        a.subscribe(move |change| {
            b.replace(change.new.clone());
        })
    };
    let b_to_a = {
        let a = a.clone();
        b.subscribe(move |change| {
            a.replace(change.new.clone());
        })
    };

    ValueBinding::new("value", vec![a_to_b, b_to_a])
}

/// Keep `text` showing `value` through `converter`.
///
/// `text` takes `value`'s text form first. Text that does not convert is
/// logged and leaves `value` as it is; clearing `text` clears `value`.
/// A value change does not rewrite text that already converts to that
/// value, so `"007"` stays as typed.
pub fn bind_converted<T, C>(
    text: &ObservableCell<String>,
    value: &ObservableCell<T>,
    converter: C,
) -> ValueBinding
where
    T: Clone + PartialEq + fmt::Debug + 'static,
    C: Converter<T> + 'static,
{
    let converter = Rc::new(converter);
    text.replace(value.with(|v| v.map(|v| converter.to_text(v))));

    let text_to_value = {
        let value = value.clone();
        let converter = Rc::clone(&converter);
        text.subscribe(move |change| match change.new.as_deref() {
            None => value.clear(),
            Some(raw) => match converter.from_text(raw) {
                Some(parsed) => value.set(parsed),
                None => log::warn!("cannot convert {raw:?}, keeping {:?}", value.get()),
            },
        })
    };
    let value_to_text = {
        let text = text.clone();
        value.subscribe(move |change| match &change.new {
            None => text.clear(),
            Some(new) => {
                let current = text.with(|t| t.and_then(|raw| converter.from_text(raw)));
                if current.as_ref() != Some(new) {
                    text.set(converter.to_text(new));
                }
            }
        })
    };

    ValueBinding::new("converted", vec![text_to_value, value_to_text])
}
