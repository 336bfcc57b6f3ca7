//! Snapshot rendering helpers.
//!
//! Functions for converting a control's displayed items and selection into
//! plain-text strings suitable for snapshot testing and assertions. One item
//! per line, lines joined with `'\n'`, no trailing newline.

use std::fmt::Display;

use crate::control::{MultiSelect, SingleSelect};
use crate::reactive::ObservableList;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Render a single-selection control as radio-style lines.
///
/// The first item equal to the active value is marked `(•)`. An active value
/// that is not among the items (a combo box keeps those) gets a trailing
/// line marked `unlisted`.
///
/// # Examples
///
/// ```
/// use gilt_select::control::ChoiceBox;
/// use gilt_select::testing::render_single;
///
/// let choice = ChoiceBox::new().with_items(vec!["Alpha", "Beta"]);
/// choice.pick(1);
/// assert_eq!(render_single(&choice), "( ) Alpha\n(•) Beta");
/// ```
pub fn render_single<T, C>(control: &C) -> String
where
    T: Display + PartialEq,
    C: SingleSelect<T> + ?Sized,
{
    let items = control.displayed_items();
    let active = control.active_selection();
    let marked = active
        .as_ref()
        .and_then(|value| items.iter().position(|item| item == value));

    let mut lines: Vec<String> = items
        .iter()
        .enumerate()
        .map(|(i, item)| line(if marked == Some(i) { "(•)" } else { "( )" }, item))
        .collect();
    if let (Some(value), None) = (&active, marked) {
        lines.push(format!("{} (unlisted)", line("(•)", value)));
    }
    lines.join("\n")
}

/// Render a multi-selection control as check-box lines.
///
/// Every item whose value is in the active set is marked `[x]`.
///
/// # Examples
///
/// ```
/// use gilt_select::control::CheckBoxGroup;
/// use gilt_select::testing::render_multi;
///
/// let boxes = CheckBoxGroup::new().with_items(vec!["ham", "olives"]);
/// boxes.toggle(1);
/// assert_eq!(render_multi(&boxes), "[ ] ham\n[x] olives");
/// ```
pub fn render_multi<T, C>(control: &C) -> String
where
    T: Display + PartialEq,
    C: MultiSelect<T> + ?Sized,
{
    let active = control.active_selection_set();
    control
        .displayed_items()
        .iter()
        .map(|item| line(if active.contains(item) { "[x]" } else { "[ ]" }, item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render an observable list on one line, e.g. `[a, c]`.
pub fn render_list<T: Display + Clone + PartialEq + 'static>(list: &ObservableList<T>) -> String {
    list.with(|items| {
        let parts: Vec<String> = items.iter().map(ToString::to_string).collect();
        format!("[{}]", parts.join(", "))
    })
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn line(marker: &str, item: &impl Display) -> String {
    format!("{marker} {item}")
}

// ===========================================================================
// Tests
// ===========================================================================
