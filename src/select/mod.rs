//! Selection synchronization.
//!
//! - [`reconcile`]: the diffing set reconciler.
//! - [`attach_single_selection`]: value cell ↔ single-selection control.
//! - [`attach_multi_selection`]: selected list ↔ multi-selection control.
//!
//! Both synchronizers mirror a candidate list into the control and then
//! keep the caller's selection state and the control's selection equal,
//! in both directions, until the returned [`SyncHandle`] is dropped or
//! detached.

use std::fmt;
use std::hash::Hash;

use crate::error::{Result, SelectError};
use crate::reactive::ObservableList;

pub mod diff;
pub mod handle;
pub mod multi;
pub mod single;

pub use diff::{reconcile, SelectionDiff};
pub use handle::{Arity, SyncHandle, SyncState};
pub use multi::{attach_multi_selection, attach_multi_selection_with};
pub use single::{
    attach_single_selection, attach_single_selection_with, initialize_default_selection,
    InitialSelection,
};

/// Bound shared by every selectable element type.
///
/// Equality is identity: two equal elements are the same selection.
pub trait Element: Clone + Eq + Hash + fmt::Debug + 'static {}

impl<T: Clone + Eq + Hash + fmt::Debug + 'static> Element for T {}

/// Fail with [`SelectError::NotACandidate`] unless `value` is in `candidates`.
///
/// Synchronizers never call this on their own; it is there for callers that
/// want strict membership.
pub fn check_membership<T: Element>(candidates: &ObservableList<T>, value: &T) -> Result<()> {
    if candidates.contains(value) {
        Ok(())
    } else {
        Err(SelectError::NotACandidate {
            value: format!("{value:?}"),
            candidates: candidates.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_check() {
        let candidates = ObservableList::from(vec!["a", "b"]);
        assert_eq!(check_membership(&candidates, &"b"), Ok(()));
        assert_eq!(
            check_membership(&candidates, &"z"),
            Err(SelectError::NotACandidate {
                value: "\"z\"".to_string(),
                candidates: 2,
            })
        );
    }
}
