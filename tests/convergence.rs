//! Property tests: after any interleaving of candidate edits, selection
//! writes, and user gestures, control and selection state agree.

use std::collections::BTreeSet;

use gilt_select::control::{CheckBoxGroup, ItemsControl, ListView, MultiSelect, SingleSelect};
use gilt_select::reactive::{ObservableCell, ObservableList};
use gilt_select::select::{attach_multi_selection, attach_single_selection};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
enum CandidateOp {
    Push(u8),
    Remove(usize),
    Reset(Vec<u8>),
}

#[derive(Debug, Clone)]
enum SingleOp {
    Candidates(CandidateOp),
    Set(Option<u8>),
    Click(usize),
    Toggle(usize),
}

#[derive(Debug, Clone)]
enum MultiOp {
    Candidates(CandidateOp),
    Select(u8),
    Deselect(u8),
    Toggle(usize),
    Range(usize, usize),
    DeselectAll,
}

fn value() -> impl Strategy<Value = u8> {
    0u8..6
}

fn index() -> impl Strategy<Value = usize> {
    0usize..8
}

fn candidate_op() -> impl Strategy<Value = CandidateOp> {
    prop_oneof![
        value().prop_map(CandidateOp::Push),
        index().prop_map(CandidateOp::Remove),
        prop::collection::vec(value(), 0..6).prop_map(CandidateOp::Reset),
    ]
}

fn single_op() -> impl Strategy<Value = SingleOp> {
    prop_oneof![
        candidate_op().prop_map(SingleOp::Candidates),
        prop::option::of(value()).prop_map(SingleOp::Set),
        index().prop_map(SingleOp::Click),
        index().prop_map(SingleOp::Toggle),
    ]
}

fn multi_op() -> impl Strategy<Value = MultiOp> {
    prop_oneof![
        candidate_op().prop_map(MultiOp::Candidates),
        value().prop_map(MultiOp::Select),
        value().prop_map(MultiOp::Deselect),
        index().prop_map(MultiOp::Toggle),
        (index(), index()).prop_map(|(a, b)| MultiOp::Range(a, b)),
        Just(MultiOp::DeselectAll),
    ]
}

fn apply_candidate_op(candidates: &ObservableList<u8>, op: &CandidateOp) {
    match op {
        CandidateOp::Push(v) => candidates.push(*v),
        CandidateOp::Remove(i) => {
            candidates.remove(*i);
        }
        CandidateOp::Reset(values) => candidates.set_all(values.clone()),
    }
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn single_selection_converges(
        initial in prop::collection::vec(value(), 0..5),
        ops in prop::collection::vec(single_op(), 0..40),
    ) {
        let candidates = ObservableList::from(initial.clone());
        let selected = ObservableCell::empty();
        let list = ListView::new();
        let _sync = attach_single_selection(&list, &candidates, &selected);
        prop_assert_eq!(selected.get(), initial.first().copied());

        for op in &ops {
            match op {
                SingleOp::Candidates(op) => apply_candidate_op(&candidates, op),
                SingleOp::Set(v) => {
                    selected.replace(*v);
                }
                SingleOp::Click(i) => {
                    list.click(*i);
                }
                SingleOp::Toggle(i) => {
                    list.toggle(*i);
                }
            }
            let expected = selected.get().filter(|v| candidates.contains(v));
            prop_assert_eq!(SingleSelect::active_selection(&list), expected);
            prop_assert_eq!(list.displayed_items(), candidates.snapshot());
        }
    }

    #[test]
    fn multi_selection_converges(
        initial in prop::collection::vec(value(), 0..5),
        chosen in prop::collection::btree_set(value(), 0..4),
        ops in prop::collection::vec(multi_op(), 0..40),
    ) {
        let candidates = ObservableList::from(initial);
        let selected: ObservableList<u8> = chosen.iter().copied().collect();
        let list = ListView::multiple();
        let boxes = CheckBoxGroup::new();
        let _list_sync = attach_multi_selection(&list, &candidates, &selected);
        let _boxes_sync = attach_multi_selection(&boxes, &candidates, &selected);

        for op in &ops {
            match op {
                MultiOp::Candidates(op) => apply_candidate_op(&candidates, op),
                MultiOp::Select(v) => {
                    if !selected.contains(v) {
                        selected.push(*v);
                    }
                }
                MultiOp::Deselect(v) => {
                    selected.remove_item(v);
                }
                MultiOp::Toggle(i) => {
                    boxes.toggle(*i);
                }
                MultiOp::Range(a, b) => {
                    list.click_range(*a, *b);
                }
                MultiOp::DeselectAll => {
                    list.deselect_all();
                }
            }

            let selection: Vec<u8> = selected.snapshot();
            let unique: BTreeSet<u8> = selection.iter().copied().collect();
            prop_assert_eq!(unique.len(), selection.len());

            let expected: BTreeSet<u8> = unique
                .into_iter()
                .filter(|v| candidates.contains(v))
                .collect();
            let in_list: BTreeSet<u8> = list.active_selection_set().into_iter().collect();
            let in_boxes: BTreeSet<u8> = boxes.active_selection_set().into_iter().collect();
            prop_assert_eq!(&in_list, &expected);
            prop_assert_eq!(&in_boxes, &expected);
        }
    }
}
