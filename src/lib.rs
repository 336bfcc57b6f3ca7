//! # gilt-select
//!
//! Bidirectional selection synchronization for headless form controls.
//!
//! gilt-select keeps application-owned selection state (a single value cell,
//! or a list of selected values) consistent with a control's own selection,
//! while mirroring an externally mutable list of candidates into the
//! control. Changes on either side propagate to the other until the view is
//! torn down.
//!
//! ## Core Systems
//!
//! - **[`reactive`]**: Observable cells and lists with RAII subscriptions
//! - **[`control`]**: Capability traits plus ComboBox, ChoiceBox, RadioGroup, ListView, CheckBoxGroup
//! - **[`select`]**: Set reconciler, single- and multi-selection synchronizers
//! - **[`binding`]**: Two-way value bindings and text converters
//! - **[`view`]**: ViewScope owning everything a view attaches
//! - **[`config`]**: Synchronizer policies
//! - **[`error`]**: Error type for index and membership failures
//! - **[`testing`]**: Plain-text snapshot helpers
//!
//! ## Example
//!
//! ```
//! use gilt_select::control::{ComboBox, SingleSelect};
//! use gilt_select::reactive::{ObservableCell, ObservableList};
//! use gilt_select::select::attach_single_selection;
//! use gilt_select::view::ViewScope;
//!
//! let currencies = ObservableList::from(vec!["EUR", "USD"]);
//! let currency = ObservableCell::empty();
//! let combo = ComboBox::new();
//!
//! let mut scope = ViewScope::new();
//! scope.adopt(attach_single_selection(&combo, &currencies, &currency));
//! assert_eq!(combo.active_selection(), Some("EUR"));
//!
//! combo.pick(1);
//! assert_eq!(currency.get(), Some("USD"));
//! ```

// Foundation
pub mod config;
pub mod error;
pub mod reactive;

// Controls and synchronization
pub mod control;
pub mod select;

// Views
pub mod binding;
pub mod view;

// Test support
pub mod testing;

pub use config::{InitialPolicy, MembershipPolicy, SyncConfig};
pub use error::{Result, SelectError};
pub use select::{attach_multi_selection, attach_single_selection, SyncHandle};
pub use view::ViewScope;
