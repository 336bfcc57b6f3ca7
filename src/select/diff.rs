//! Diffing set reconciler.
//!
//! [`reconcile`] compares two selection snapshots as sets and returns what
//! has to be selected and deselected on the `current` side to make it equal
//! to `target`. The caller applies the result to whichever side did *not*
//! originate the change; the originating side is already correct.

use std::collections::HashSet;

use super::Element;

/// The minimal add/remove sets between two selection snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionDiff<T> {
    /// `target − current`, in `target` order, each element once.
    pub to_select: Vec<T>,
    /// `current − target`, in `current` order, each element once.
    pub to_deselect: Vec<T>,
}

impl<T> SelectionDiff<T> {
    /// Whether both sides already agree.
    pub fn is_empty(&self) -> bool {
        self.to_select.is_empty() && self.to_deselect.is_empty()
    }

    /// Total number of elements to touch.
    pub fn len(&self) -> usize {
        self.to_select.len() + self.to_deselect.len()
    }
}

impl<T> Default for SelectionDiff<T> {
    fn default() -> Self {
        Self {
            to_select: Vec::new(),
            to_deselect: Vec::new(),
        }
    }
}

/// Diff `current` against `target`, ignoring order and duplicates.
///
/// Runs in O(n) with hash-set membership. Elements of `target` are passed
/// through whether or not any control can show them.
///
/// # Examples
///
/// ```
/// use gilt_select::select::reconcile;
///
/// let diff = reconcile(&["a", "b"], &["b", "c"]);
/// assert_eq!(diff.to_select, vec!["c"]);
/// assert_eq!(diff.to_deselect, vec!["a"]);
/// ```
pub fn reconcile<T: Element>(current: &[T], target: &[T]) -> SelectionDiff<T> {
    let current_set: HashSet<&T> = current.iter().collect();
    let target_set: HashSet<&T> = target.iter().collect();

    SelectionDiff {
        to_select: only_in(target, &current_set),
        to_deselect: only_in(current, &target_set),
    }
}

/// Elements of `from` missing from `other`, first occurrence only.
fn only_in<T: Element>(from: &[T], other: &HashSet<&T>) -> Vec<T> {
    let mut seen: HashSet<&T> = HashSet::with_capacity(from.len());
    from.iter()
        .filter(|item| !other.contains(item) && seen.insert(*item))
        .cloned()
        .collect()
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn equal_sets_yield_nothing() {
        let diff = reconcile(&[1, 2, 3], &[3, 1, 2]);
        assert!(diff.is_empty());
        assert_eq!(diff.len(), 0);
    }

    #[test]
    fn overlap_yields_one_each_way() {
        let diff = reconcile(&["a", "b"], &["b", "c"]);
        assert_eq!(
            diff,
            SelectionDiff {
                to_select: vec!["c"],
                to_deselect: vec!["a"],
            }
        );
    }

    #[test]
    fn empty_target_deselects_everything() {
        let diff = reconcile(&['x', 'y'], &[]);
        assert_eq!(diff.to_select, Vec::<char>::new());
        assert_eq!(diff.to_deselect, vec!['x', 'y']);
    }

    #[test]
    fn empty_current_selects_everything() {
        let diff = reconcile(&[], &[5, 6]);
        assert_eq!(diff.to_select, vec![5, 6]);
        assert!(diff.to_deselect.is_empty());
    }

    #[test]
    fn duplicates_are_reconciled_once() {
        let diff = reconcile(&["a", "a", "b"], &["c", "c", "b", "c"]);
        assert_eq!(diff.to_select, vec!["c"]);
        assert_eq!(diff.to_deselect, vec!["a"]);
        assert_eq!(diff.len(), 2);
    }

    #[test]
    fn output_follows_source_order() {
        let diff = reconcile(&[9, 8, 7], &[3, 1, 2]);
        assert_eq!(diff.to_select, vec![3, 1, 2]);
        assert_eq!(diff.to_deselect, vec![9, 8, 7]);
    }

    #[test]
    fn default_is_empty() {
        assert!(SelectionDiff::<u8>::default().is_empty());
    }
}
