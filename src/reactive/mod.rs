//! Reactive state: observable cells, observable lists, subscriptions.
//!
//! Explicit-subscription reactivity for driving selection controls.
//!
//! - [`ObservableCell`]: zero-or-one shared value with change events.
//! - [`ObservableList`]: shared ordered collection with change events.
//! - [`Subscription`]: RAII guard returned by every `subscribe`.
//!
//! Everything is single-threaded and synchronous: listeners run before the
//! mutating call returns, after the mutation is committed.

mod listeners;

pub mod cell;
pub mod list;

pub(crate) use listeners::Listeners;

pub use cell::{CellChange, ObservableCell};
pub use list::{ListChange, ObservableList};
pub use listeners::{ListenerId, Subscription};
