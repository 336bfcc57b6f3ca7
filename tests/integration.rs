//! Integration tests for gilt-select.
//!
//! These tests exercise the public API from outside the crate, verifying that
//! observable state, controls, synchronizers, and view scopes work together.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gilt_select::binding::{bind_bidirectional, bind_converted, IntegerConverter};
use gilt_select::control::*;
use gilt_select::reactive::{ObservableCell, ObservableList};
use gilt_select::select::{
    attach_multi_selection, attach_single_selection, attach_single_selection_with,
    check_membership, reconcile, SyncState,
};
use gilt_select::testing::{render_list, render_multi, render_single};
use gilt_select::{InitialPolicy, SelectError, SyncConfig, ViewScope};
use pretty_assertions::assert_eq;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ---------------------------------------------------------------------------
// Reconciler
// ---------------------------------------------------------------------------

#[test]
fn test_reconcile_overlapping_sets() {
    let diff = reconcile(&["a", "b"], &["b", "c"]);
    assert_eq!(diff.to_select, vec!["c"]);
    assert_eq!(diff.to_deselect, vec!["a"]);
}

#[test]
fn test_reconcile_is_empty_at_fixed_point() {
    let diff = reconcile(&[3, 1, 2], &[1, 2, 3]);
    assert!(diff.is_empty());
}

// ---------------------------------------------------------------------------
// Single selection
// ---------------------------------------------------------------------------

#[test]
fn test_default_selection_is_first_candidate() {
    init_logger();
    let candidates = ObservableList::from(vec!["Alpha", "Beta", "Gamma"]);
    let selected = ObservableCell::empty();
    let choice = ChoiceBox::new();

    let sync = attach_single_selection(&choice, &candidates, &selected);
    assert_eq!(sync.state(), SyncState::Attached);
    assert_eq!(selected.get(), Some("Alpha"));
    insta::assert_snapshot!(render_single(&choice), @r"
    (•) Alpha
    ( ) Beta
    ( ) Gamma
    ");
}

#[test]
fn test_combo_box_with_no_candidates_stays_unset() {
    init_logger();
    let candidates: ObservableList<&str> = ObservableList::new();
    let selected = ObservableCell::empty();
    let combo = ComboBox::new();

    let _sync = attach_single_selection(&combo, &candidates, &selected);
    assert_eq!(selected.get(), None);
    assert_eq!(combo.active_selection(), None);
    assert_eq!(render_single(&combo), "");
}

#[test]
fn test_leave_unset_then_pick() {
    let candidates = ObservableList::from(vec![10, 20, 30]);
    let selected = ObservableCell::empty();
    let radio = RadioGroup::new();
    let config = SyncConfig::new().with_initial(InitialPolicy::LeaveUnset);

    let _sync = attach_single_selection_with(&radio, &candidates, &selected, &config);
    assert_eq!(selected.get(), None);
    radio.choose(1);
    assert_eq!(selected.get(), Some(20));
}

#[test]
fn test_candidate_edits_are_mirrored() {
    let candidates = ObservableList::from(vec!["red", "green"]);
    let selected = ObservableCell::new("green");
    let list = ListView::new();
    let _sync = attach_single_selection(&list, &candidates, &selected);

    candidates.insert(0, "blue").unwrap();
    candidates.replace(2, "lime").unwrap();
    assert_eq!(list.displayed_items(), vec!["blue", "red", "lime"]);
    assert_eq!(SingleSelect::active_selection(&list), None);
    assert_eq!(selected.get(), Some("green"));

    candidates.push("green");
    assert_eq!(list.selected_indices(), vec![3]);
}

#[test]
fn test_insert_past_end_is_an_error() {
    let candidates = ObservableList::from(vec![1]);
    assert_eq!(
        candidates.insert(5, 2),
        Err(SelectError::IndexOutOfBounds { index: 5, len: 1 })
    );
    assert!(check_membership(&candidates, &2).is_err());
}

#[test]
fn test_cell_listener_sees_each_gesture_once() {
    let candidates = ObservableList::from(vec!["S", "M", "L"]);
    let selected = ObservableCell::empty();
    let choice = ChoiceBox::new();
    let _sync = attach_single_selection(&choice, &candidates, &selected);

    let seen = Rc::new(RefCell::new(Vec::new()));
    let _sub = {
        let seen = seen.clone();
        selected.subscribe(move |change| seen.borrow_mut().push(change.new))
    };
    choice.pick(1);
    choice.pick(1);
    choice.pick(2);
    selected.set("S");
    assert_eq!(*seen.borrow(), vec![Some("M"), Some("L"), Some("S")]);
    assert_eq!(choice.active_selection(), Some("S"));
}

// ---------------------------------------------------------------------------
// Multi selection
// ---------------------------------------------------------------------------

#[test]
fn test_multi_round_trip_is_one_update() {
    init_logger();
    let candidates = ObservableList::from(vec!["cheese", "ham", "olives"]);
    let selected = ObservableList::new();
    let boxes = CheckBoxGroup::new();
    let _sync = attach_multi_selection(&boxes, &candidates, &selected);

    let updates = Rc::new(Cell::new(0));
    let _sub = {
        let updates = updates.clone();
        selected.subscribe(move |_| updates.set(updates.get() + 1))
    };

    boxes.toggle(0);
    boxes.toggle(2);
    assert_eq!(updates.get(), 2);
    assert_eq!(render_list(&selected), "[cheese, olives]");

    selected.remove_item(&"cheese");
    insta::assert_snapshot!(render_multi(&boxes), @r"
    [ ] cheese
    [ ] ham
    [x] olives
    ");
}

#[test]
fn test_appended_candidate_then_selection() {
    let candidates = ObservableList::from(vec!["a", "b"]);
    let selected = ObservableList::from(vec!["a"]);
    let list = ListView::multiple();
    let _sync = attach_multi_selection(&list, &candidates, &selected);

    candidates.push("c");
    selected.push("c");
    insta::assert_snapshot!(render_multi(&list), @r"
    [x] a
    [ ] b
    [x] c
    ");
}

#[test]
fn test_deselect_all_empties_selected() {
    let candidates = ObservableList::from(vec![1, 2, 3]);
    let selected = ObservableList::from(vec![1, 3]);
    let list = ListView::multiple();
    let _sync = attach_multi_selection(&list, &candidates, &selected);

    assert!(list.deselect_all());
    assert!(selected.is_empty());
}

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

#[test]
fn test_form_view_teardown() {
    init_logger();
    let countries = ObservableList::from(vec!["DE", "FR", "NL"]);
    let country = ObservableCell::empty();
    let languages = ObservableList::from(vec!["de", "en", "fr", "nl"]);
    let spoken = ObservableList::from(vec!["en"]);
    let age_text = ObservableCell::empty();
    let age = ObservableCell::new(30i64);
    let newsletter = ObservableCell::new(false);
    let newsletter_box = ObservableCell::empty();

    let combo = ComboBox::new();
    let list = ListView::multiple();

    let mut view = ViewScope::new();
    view.adopt(attach_single_selection(&combo, &countries, &country))
        .adopt(attach_multi_selection(&list, &languages, &spoken))
        .bind(bind_converted(&age_text, &age, IntegerConverter))
        .bind(bind_bidirectional(&newsletter, &newsletter_box));
    assert_eq!(view.attached_count(), 2);

    combo.pick(1);
    list.toggle(2);
    age_text.set("31".to_string());
    newsletter_box.set(true);
    assert_eq!(country.get(), Some("FR"));
    assert_eq!(render_list(&spoken), "[en, fr]");
    assert_eq!(age.get(), Some(31));
    assert_eq!(newsletter.get(), Some(true));

    view.teardown();
    assert_eq!(view.attached_count(), 0);
    combo.pick(2);
    list.deselect_all();
    age_text.set("99".to_string());
    assert_eq!(country.get(), Some("FR"));
    assert_eq!(render_list(&spoken), "[en, fr]");
    assert_eq!(age.get(), Some(31));
}
