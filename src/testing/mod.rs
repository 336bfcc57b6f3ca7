//! Headless testing helpers.
//!
//! Use [`render_single`] and [`render_multi`] to capture a control's items
//! and selection as plain text for snapshot-style assertions, and
//! [`render_list`] for an observable list.

pub mod snapshot;

pub use snapshot::{render_list, render_multi, render_single};
