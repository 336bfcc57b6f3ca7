//! Multi-selection synchronizer: selected list ↔ one control.
//!
//! Every propagation diffs the two sides with [`reconcile`] and applies the
//! result to the side that did not change. After a pass both sides hold the
//! same set, so the echo computes an empty diff and stops there.
//!
//! Order of the selected list is not preserved: elements picked in the
//! control are appended in control order.

use crate::config::{MembershipPolicy, SyncConfig};
use crate::control::MultiSelect;
use crate::reactive::ObservableList;

use super::diff::{reconcile, SelectionDiff};
use super::handle::{Arity, SyncHandle};
use super::{check_membership, Element};

/// Synchronize `selected` with `control`'s selection set, with the default
/// [`SyncConfig`].
///
/// # Examples
///
/// ```
/// use gilt_select::control::{ListView, MultiSelect};
/// use gilt_select::reactive::ObservableList;
/// use gilt_select::select::attach_multi_selection;
///
/// let fruit = ObservableList::from(vec!["apple", "pear", "plum"]);
/// let basket = ObservableList::from(vec!["pear"]);
/// let list = ListView::multiple();
///
/// let _sync = attach_multi_selection(&list, &fruit, &basket);
/// assert_eq!(list.active_selection_set(), vec!["pear"]);
///
/// list.toggle(2);
/// assert_eq!(basket.snapshot(), vec!["pear", "plum"]);
/// ```
pub fn attach_multi_selection<T, C>(
    control: &C,
    candidates: &ObservableList<T>,
    selected: &ObservableList<T>,
) -> SyncHandle
where
    T: Element,
    C: MultiSelect<T> + Clone + 'static,
{
    attach_multi_selection_with(control, candidates, selected, &SyncConfig::default())
}

/// Synchronize `selected` with `control`'s selection set.
///
/// Attaching switches the control to multiple selection, clears whatever
/// it had selected, and selects every element of `selected` once. The
/// initialization policy does not apply to multiple selection; an empty
/// `selected` stays empty.
pub fn attach_multi_selection_with<T, C>(
    control: &C,
    candidates: &ObservableList<T>,
    selected: &ObservableList<T>,
    config: &SyncConfig,
) -> SyncHandle
where
    T: Element,
    C: MultiSelect<T> + Clone + 'static,
{
    let handle = SyncHandle::new(Arity::Multi, control.widget_type());
    let membership = config.membership;

    control.enable_multiple();
    control.set_displayed_items(candidates.snapshot());
    let initial = SelectionDiff {
        to_select: reconcile(&[], &selected.snapshot()).to_select,
        to_deselect: control.active_selection_set(),
    };
    apply_to_control(control, candidates, &initial, membership);

    let on_candidates = {
        let control = control.clone();
        let list = candidates.clone();
        let sel = selected.clone();
        candidates.subscribe(move |change| {
            log::trace!(
                "{}: candidates changed (+{} -{})",
                control.widget_type(),
                change.added.len(),
                change.removed.len()
            );
            control.set_displayed_items(list.snapshot());
            let diff = reconcile(&control.active_selection_set(), &sel.snapshot());
            apply_to_control(&control, &list, &diff, membership);
        })
    };

    let on_control = {
        let sel = selected.clone();
        let widget = control.widget_type();
        control.on_selection_changed(Box::new(move |snapshot: &[T]| {
            let diff = reconcile(&sel.snapshot(), snapshot);
            if diff.is_empty() {
                return;
            }
            log::trace!(
                "{widget}: selection changed, selected +{} -{}",
                diff.to_select.len(),
                diff.to_deselect.len()
            );
            sel.apply_batch(&diff.to_select, &diff.to_deselect);
        }))
    };

    let on_selected = {
        let control = control.clone();
        let list = candidates.clone();
        let sel = selected.clone();
        selected.subscribe(move |_| {
            let diff = reconcile(&control.active_selection_set(), &sel.snapshot());
            apply_to_control(&control, &list, &diff, membership);
        })
    };

    handle.attach(vec![on_candidates, on_control, on_selected])
}

/// Apply `diff` to the control in one call.
fn apply_to_control<T, C>(
    control: &C,
    candidates: &ObservableList<T>,
    diff: &SelectionDiff<T>,
    membership: MembershipPolicy,
) where
    T: Element,
    C: MultiSelect<T>,
{
    if diff.is_empty() {
        return;
    }
    if membership == MembershipPolicy::Warn {
        for value in &diff.to_select {
            if let Err(err) = check_membership(candidates, value) {
                log::warn!("{}: {err}", control.widget_type());
            }
        }
    }
    log::trace!(
        "{}: applying +{} -{}",
        control.widget_type(),
        diff.to_select.len(),
        diff.to_deselect.len()
    );
    control.replace_active_selection_set(&diff.to_select, &diff.to_deselect);
}

// ===========================================================================
// Tests
// ===========================================================================
