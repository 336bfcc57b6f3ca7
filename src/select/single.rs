//! Single-selection synchronizer: one value cell ↔ one control.
//!
//! Three subscriptions make up a sync:
//!
//! 1. candidates → control items (then the cell value is pushed again, so a
//!    value that just became representable shows up);
//! 2. control gesture → cell;
//! 3. cell → control.
//!
//! Loops end on their own. A cell write of the value it already holds is a
//! no-op, and a programmatic control update never fires the control's
//! listeners.

use crate::config::{InitialPolicy, MembershipPolicy, SyncConfig};
use crate::control::SingleSelect;
use crate::reactive::{CellChange, ObservableCell, ObservableList};

use super::handle::{Arity, SyncHandle};
use super::{check_membership, Element};

/// Outcome of [`initialize_default_selection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitialSelection {
    /// The cell already held a value and was left alone.
    Kept,
    /// The cell was unset and now holds the first candidate.
    Defaulted,
    /// The cell was unset and there was nothing to default to.
    Empty,
}

/// Give an unset cell the first candidate.
///
/// A cell that already holds a value is never touched, even if that value
/// is not among the candidates. With no candidates the cell stays unset.
pub fn initialize_default_selection<T: Element>(
    candidates: &ObservableList<T>,
    selected: &ObservableCell<T>,
) -> InitialSelection {
    if selected.is_set() {
        return InitialSelection::Kept;
    }
    match candidates.first() {
        Some(first) => {
            log::debug!("defaulting selection to first candidate {first:?}");
            selected.set(first);
            InitialSelection::Defaulted
        }
        None => InitialSelection::Empty,
    }
}

/// Synchronize `selected` with `control`'s active selection, with the
/// default [`SyncConfig`].
///
/// # Examples
///
/// ```
/// use gilt_select::control::{ChoiceBox, SingleSelect};
/// use gilt_select::reactive::{ObservableCell, ObservableList};
/// use gilt_select::select::attach_single_selection;
///
/// let sizes = ObservableList::from(vec!["S", "M", "L"]);
/// let size = ObservableCell::empty();
/// let choice = ChoiceBox::new();
///
/// let _sync = attach_single_selection(&choice, &sizes, &size);
/// assert_eq!(size.get(), Some("S"));
///
/// choice.pick(2);
/// assert_eq!(size.get(), Some("L"));
///
/// size.set("M");
/// assert_eq!(choice.active_selection(), Some("M"));
/// ```
pub fn attach_single_selection<T, C>(
    control: &C,
    candidates: &ObservableList<T>,
    selected: &ObservableCell<T>,
) -> SyncHandle
where
    T: Element,
    C: SingleSelect<T> + Clone + 'static,
{
    attach_single_selection_with(control, candidates, selected, &SyncConfig::default())
}

/// Synchronize `selected` with `control`'s active selection.
pub fn attach_single_selection_with<T, C>(
    control: &C,
    candidates: &ObservableList<T>,
    selected: &ObservableCell<T>,
    config: &SyncConfig,
) -> SyncHandle
where
    T: Element,
    C: SingleSelect<T> + Clone + 'static,
{
    let handle = SyncHandle::new(Arity::Single, control.widget_type());
    let membership = config.membership;

    control.set_displayed_items(candidates.snapshot());
    if config.initial == InitialPolicy::FirstCandidate {
        initialize_default_selection(candidates, selected);
    }
    selected.with(|value| push_value(control, candidates, value, membership));

    let on_candidates = {
        let control = control.clone();
        let list = candidates.clone();
        let cell = selected.clone();
        candidates.subscribe(move |change| {
            log::trace!(
                "{}: candidates changed (+{} -{})",
                control.widget_type(),
                change.added.len(),
                change.removed.len()
            );
            control.set_displayed_items(list.snapshot());
            cell.with(|value| push_value(&control, &list, value, membership));
        })
    };

    let on_control = {
        let cell = selected.clone();
        let widget = control.widget_type();
        control.on_selection_changed(Box::new(move |value: Option<&T>| {
            log::trace!("{widget}: selection changed to {value:?}");
            cell.replace(value.cloned());
        }))
    };

    let on_cell = {
        let control = control.clone();
        let list = candidates.clone();
        selected.subscribe(move |change: &CellChange<T>| {
            log::trace!(
                "{}: cell changed {:?} -> {:?}",
                control.widget_type(),
                change.old,
                change.new
            );
            push_value(&control, &list, change.new.as_ref(), membership);
        })
    };

    handle.attach(vec![on_candidates, on_control, on_cell])
}

/// Make `value` the control's active selection.
fn push_value<T, C>(
    control: &C,
    candidates: &ObservableList<T>,
    value: Option<&T>,
    membership: MembershipPolicy,
) where
    T: Element,
    C: SingleSelect<T>,
{
    if let (MembershipPolicy::Warn, Some(v)) = (membership, value) {
        if let Err(err) = check_membership(candidates, v) {
            log::warn!("{}: {err}", control.widget_type());
        }
    }
    control.set_active_selection(value);
}

// ===========================================================================
// Tests
// ===========================================================================
