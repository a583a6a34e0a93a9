//! End-to-end reconciliation scenarios across mode transitions, free-text
//! commits, and external syncs.

use combo_picker_core::{Mode, PickerEffect, PickerEvent, PickerModel, PickerState};

#[derive(Clone, Debug, PartialEq)]
struct Millimeters(u32);

impl PickerModel for Millimeters {
    type Value = u32;

    fn from_value(value: u32) -> Self {
        Millimeters(value)
    }

    fn from_text(text: &str) -> Option<Self> {
        text.trim().parse().ok().map(Millimeters)
    }

    fn label(&self) -> String {
        format!("{} mm", self.0)
    }

    fn value(&self) -> u32 {
        self.0
    }

    fn manual_input_text(&self) -> Option<String> {
        Some(self.0.to_string())
    }
}

fn candidates(range: std::ops::RangeInclusive<u32>) -> Vec<Millimeters> {
    range.map(Millimeters).collect()
}

#[test]
fn activate_type_commit_resync() {
    let mut state = PickerState::new(candidates(1..=100), 1);
    assert_eq!(state.draft(), "1");

    // Activation moves to editing; the draft already mirrors the value.
    let effects = state.update(PickerEvent::Activate);
    assert_eq!(effects, vec![PickerEffect::FocusRequested(Mode::Editing)]);
    assert_eq!(state.mode(), Mode::Editing);
    assert_eq!(state.draft(), "1");

    // Typing "55": present in the list, so no insertion, just the value write.
    let effects = state.update(PickerEvent::DraftChanged("55".into()));
    assert_eq!(effects, vec![PickerEffect::ValueChanged(55)]);
    assert_eq!(state.candidates().len(), 100);

    // Commit returns to selecting without touching the value.
    let effects = state.update(PickerEvent::Commit);
    assert_eq!(effects, vec![PickerEffect::FocusRequested(Mode::Selecting)]);
    assert_eq!(*state.value(), 55);
    assert_eq!(state.draft(), "55");

    // External code resets the value; the draft follows.
    let effects = state.update(PickerEvent::ValueSynced(1));
    assert!(effects.is_empty());
    assert_eq!(state.draft(), "1");
    assert_eq!(state.selected_index(), Some(0));
}

#[test]
fn typing_digit_by_digit_settles_on_the_last_parseable_value() {
    let mut state = PickerState::new(candidates(1..=9), 1);
    state.update(PickerEvent::Activate);

    // "4" parses and differs from 1: immediate write, no insertion (present).
    let effects = state.update(PickerEvent::DraftChanged("4".into()));
    assert_eq!(effects, vec![PickerEffect::ValueChanged(4)]);

    // "42" parses to a novel value: append before assign.
    let effects = state.update(PickerEvent::DraftChanged("42".into()));
    assert_eq!(
        effects,
        vec![
            PickerEffect::CandidateAppended(Millimeters(42)),
            PickerEffect::ValueChanged(42),
        ]
    );
    assert_eq!(state.candidates().last(), Some(&Millimeters(42)));
    assert_eq!(*state.value(), 42);
}

#[test]
fn unparseable_interludes_do_not_disturb_the_selection() {
    let mut state = PickerState::new(candidates(1..=3), 2);
    state.update(PickerEvent::Activate);

    for text in ["", "x", "4x", " - "] {
        let effects = state.update(PickerEvent::DraftChanged(text.into()));
        assert!(effects.is_empty(), "{text:?} should be inert");
        assert_eq!(*state.value(), 2);
        assert_eq!(state.candidates().len(), 3);
        assert_eq!(state.draft(), text);
    }

    // The next parseable text reconciles as usual.
    let effects = state.update(PickerEvent::DraftChanged("4".into()));
    assert_eq!(
        effects,
        vec![
            PickerEffect::CandidateAppended(Millimeters(4)),
            PickerEffect::ValueChanged(4),
        ]
    );
}

#[test]
fn candidate_list_never_shrinks_and_grows_one_entry_per_commit() {
    let mut state = PickerState::new(candidates(1..=2), 1);
    state.update(PickerEvent::Activate);

    state.update(PickerEvent::DraftChanged("7".into()));
    state.update(PickerEvent::DraftChanged("7".into()));
    state.update(PickerEvent::DraftChanged("8".into()));
    state.update(PickerEvent::DraftChanged("7".into()));

    assert_eq!(
        state.candidates(),
        &[
            Millimeters(1),
            Millimeters(2),
            Millimeters(7),
            Millimeters(8),
        ]
    );
}

#[test]
fn external_sync_during_editing_overwrites_the_draft() {
    let mut state = PickerState::new(candidates(1..=3), 1);
    state.update(PickerEvent::Activate);
    state.update(PickerEvent::DraftChanged("2".into()));
    assert_eq!(state.draft(), "2");

    state.update(PickerEvent::ValueSynced(3));
    assert_eq!(state.draft(), "3");
    assert_eq!(state.mode(), Mode::Editing);
}
