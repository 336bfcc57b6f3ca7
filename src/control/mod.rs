//! Selection controls: capability traits and headless implementations.
//!
//! - [`ItemsControl`], [`SingleSelect`], [`MultiSelect`]: the one
//!   abstraction synchronizers talk to.
//! - [`ComboBox`], [`ChoiceBox`], [`RadioGroup`]: single selection.
//! - [`ListView`]: single or multiple selection.
//! - [`CheckBoxGroup`]: multiple selection.
//!
//! Each control is a cheap, clonable handle to shared state. Gesture methods
//! (`click`, `pick`, `toggle`, ...) stand in for user input and are the only
//! source of selection-changed events.

pub mod check_group;
pub mod combo_box;
pub mod list_view;
pub mod radio_group;
pub mod traits;

pub use check_group::CheckBoxGroup;
pub use combo_box::{ChoiceBox, ComboBox};
pub use list_view::{ListView, SelectionMode};
pub use radio_group::RadioGroup;
pub use traits::{ItemsControl, MultiSelect, SingleSelect};
