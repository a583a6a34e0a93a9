//! Mode state machine and reconciliation between value, candidates, and draft.
//!
//! [`PickerState`] mirrors the host's candidate list and current value, owns
//! the transient draft text, and applies three standing rules on every event:
//!
//! 1. Value → draft: any value change rewrites the draft from the value's
//!    manual-input text.
//! 2. Draft → value/candidates: a draft change that parses to a new value
//!    appends the model to the candidates when novel, then writes the value.
//!    Unparseable drafts are silently inert.
//! 3. Row → value: selecting a list row writes the value directly, bypassing
//!    the draft.
//!
//! State mutations never reach the host directly; they are reported as
//! [`PickerEffect`]s so the host can write them back to its own bindings.
//! `update` is synchronous and never recurses: the rule-2 equality guard is
//! what terminates the value → draft → value chain.

use tracing::{debug, trace};

use crate::model::{PickerModel, parse_text};

/// Which surface is active and holds input focus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Choosing from the candidate list.
    #[default]
    Selecting,
    /// Entering free text.
    Editing,
}

/// An input to the reconciliation core.
#[derive(Debug, Clone, PartialEq)]
pub enum PickerEvent<M: PickerModel> {
    /// The user activated free-text entry from the list surface.
    Activate,
    /// The user committed free-text entry, returning to the list.
    Commit,
    /// The free-text surface changed; carries the full new text.
    DraftChanged(String),
    /// A list row was chosen, by index into the candidates.
    RowSelected(usize),
    /// The host's current value changed externally.
    ValueSynced(M::Value),
    /// The host's candidate list changed externally.
    CandidatesSynced(Vec<M>),
}

/// A state change the host must mirror into its own bindings.
///
/// When a novel draft commits, `CandidateAppended` is always emitted before
/// the matching `ValueChanged`; consumers reacting to list growth see it
/// before the value write.
#[derive(Debug, Clone, PartialEq)]
pub enum PickerEffect<M: PickerModel> {
    /// A novel model was appended to the candidate list.
    CandidateAppended(M),
    /// The current value was written.
    ValueChanged(M::Value),
    /// A mode transition happened; focus belongs to the new mode's surface.
    FocusRequested(Mode),
}

/// The reconciliation core: mode, draft text, and mirrors of the host's
/// candidate list and current value.
#[derive(Debug, Clone)]
pub struct PickerState<M: PickerModel> {
    mode: Mode,
    draft: String,
    candidates: Vec<M>,
    value: M::Value,
}

impl<M: PickerModel> PickerState<M> {
    /// Build the state and apply the initial value → draft resync.
    pub fn new(candidates: Vec<M>, value: M::Value) -> Self {
        let mut state = Self {
            mode: Mode::Selecting,
            draft: String::new(),
            candidates,
            value,
        };
        state.resync_draft();
        state
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn value(&self) -> &M::Value {
        &self.value
    }

    pub fn candidates(&self) -> &[M] {
        &self.candidates
    }

    /// Index of the candidate whose value equals the current value, if any.
    ///
    /// The current value may legitimately be absent from the list: a value
    /// committed from free text stays current even if the host later replaces
    /// the candidates.
    pub fn selected_index(&self) -> Option<usize> {
        self.candidates.iter().position(|m| m.value() == self.value)
    }

    /// Apply one event and report the effects the host must mirror.
    pub fn update(&mut self, event: PickerEvent<M>) -> Vec<PickerEffect<M>> {
        match event {
            PickerEvent::Activate => self.transition(Mode::Editing),
            PickerEvent::Commit => self.transition(Mode::Selecting),
            PickerEvent::DraftChanged(text) => self.apply_draft(text),
            PickerEvent::RowSelected(index) => self.apply_row(index),
            PickerEvent::ValueSynced(value) => self.apply_external_value(value),
            PickerEvent::CandidatesSynced(candidates) => {
                self.candidates = candidates;
                Vec::new()
            }
        }
    }

    fn transition(&mut self, target: Mode) -> Vec<PickerEffect<M>> {
        if self.mode == target {
            return Vec::new();
        }
        self.mode = target;
        trace!(?target, "mode transition");
        vec![PickerEffect::FocusRequested(target)]
    }

    fn apply_draft(&mut self, text: String) -> Vec<PickerEffect<M>> {
        if text == self.draft {
            return Vec::new();
        }
        self.draft = text;

        let model = match parse_text::<M>(&self.draft) {
            Ok(model) => model,
            Err(error) => {
                trace!(%error, "draft is inert until it parses");
                return Vec::new();
            }
        };
        // Loop guard: a draft that already names the current value is a no-op.
        if model.value() == self.value {
            return Vec::new();
        }

        let mut effects = Vec::new();
        if !self.candidates.contains(&model) {
            debug!(label = %model.label(), "appending novel candidate");
            self.candidates.push(model.clone());
            effects.push(PickerEffect::CandidateAppended(model.clone()));
        }
        self.value = model.value();
        self.resync_draft();
        debug!(value = %self.value, "draft committed to value");
        effects.push(PickerEffect::ValueChanged(self.value.clone()));
        effects
    }

    fn apply_row(&mut self, index: usize) -> Vec<PickerEffect<M>> {
        let Some(model) = self.candidates.get(index) else {
            trace!(index, "row selection out of range");
            return Vec::new();
        };
        let value = model.value();
        if value == self.value {
            return Vec::new();
        }
        self.value = value.clone();
        self.resync_draft();
        debug!(value = %self.value, "row selection wrote value");
        vec![PickerEffect::ValueChanged(value)]
    }

    fn apply_external_value(&mut self, value: M::Value) -> Vec<PickerEffect<M>> {
        // Idempotent: syncing the value we already hold changes nothing.
        if value == self.value {
            return Vec::new();
        }
        self.value = value;
        self.resync_draft();
        trace!(value = %self.value, "external value synced");
        Vec::new()
    }

    fn resync_draft(&mut self) {
        self.draft = M::from_value(self.value.clone())
            .manual_input_text()
            .unwrap_or_default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Num(i64);

    impl PickerModel for Num {
        type Value = i64;

        fn from_value(value: i64) -> Self {
            Num(value)
        }

        fn from_text(text: &str) -> Option<Self> {
            text.trim().parse().ok().map(Num)
        }

        fn label(&self) -> String {
            format!("{} units", self.0)
        }

        fn value(&self) -> i64 {
            self.0
        }

        fn manual_input_text(&self) -> Option<String> {
            Some(self.0.to_string())
        }
    }

    fn state() -> PickerState<Num> {
        PickerState::new(vec![Num(1), Num(2)], 1)
    }

    #[test]
    fn mount_resyncs_draft_from_value() {
        assert_eq!(state().draft(), "1");
    }

    #[test]
    fn mount_with_no_prefill_leaves_draft_empty() {
        #[derive(Clone, Debug, PartialEq)]
        struct Bare(i64);
        impl PickerModel for Bare {
            type Value = i64;
            fn from_value(value: i64) -> Self {
                Bare(value)
            }
            fn from_text(text: &str) -> Option<Self> {
                text.parse().ok().map(Bare)
            }
            fn label(&self) -> String {
                self.0.to_string()
            }
            fn value(&self) -> i64 {
                self.0
            }
            fn manual_input_text(&self) -> Option<String> {
                None
            }
        }
        let state = PickerState::new(vec![Bare(5)], 5);
        assert_eq!(state.draft(), "");
    }

    #[test]
    fn external_resync_to_current_value_is_a_complete_noop() {
        let mut state = state();
        state.update(PickerEvent::DraftChanged("partial".into()));
        let draft_before = state.draft().to_string();
        let effects = state.update(PickerEvent::ValueSynced(1));
        assert!(effects.is_empty());
        assert_eq!(state.draft(), draft_before);
        assert_eq!(state.candidates().len(), 2);
        assert_eq!(state.mode(), Mode::Selecting);
    }

    #[test]
    fn novel_draft_appends_then_assigns() {
        let mut state = state();
        let effects = state.update(PickerEvent::DraftChanged("3".into()));
        assert_eq!(
            effects,
            vec![
                PickerEffect::CandidateAppended(Num(3)),
                PickerEffect::ValueChanged(3),
            ]
        );
        assert_eq!(state.candidates(), &[Num(1), Num(2), Num(3)]);
        assert_eq!(*state.value(), 3);
    }

    #[test]
    fn duplicate_draft_assigns_without_appending() {
        let mut state = state();
        let effects = state.update(PickerEvent::DraftChanged("2".into()));
        assert_eq!(effects, vec![PickerEffect::ValueChanged(2)]);
        assert_eq!(state.candidates(), &[Num(1), Num(2)]);
        assert_eq!(*state.value(), 2);
    }

    #[test]
    fn invalid_draft_is_inert() {
        let mut state = state();
        let effects = state.update(PickerEvent::DraftChanged("twelve".into()));
        assert!(effects.is_empty());
        assert_eq!(state.draft(), "twelve");
        assert_eq!(*state.value(), 1);
        assert_eq!(state.candidates().len(), 2);
    }

    #[test]
    fn draft_naming_current_value_is_guarded() {
        let mut state = state();
        let effects = state.update(PickerEvent::DraftChanged("01".into()));
        assert!(effects.is_empty());
        assert_eq!(*state.value(), 1);
        // The guard also leaves the typed text in place, canonical or not.
        assert_eq!(state.draft(), "01");
    }

    #[test]
    fn committed_draft_is_rewritten_canonically() {
        let mut state = state();
        let effects = state.update(PickerEvent::DraftChanged("002".into()));
        assert_eq!(effects, vec![PickerEffect::ValueChanged(2)]);
        assert_eq!(state.draft(), "2");
    }

    #[test]
    fn activation_and_commit_move_focus() {
        let mut state = state();
        let effects = state.update(PickerEvent::Activate);
        assert_eq!(effects, vec![PickerEffect::FocusRequested(Mode::Editing)]);
        assert_eq!(state.mode(), Mode::Editing);
        assert_eq!(state.draft(), "1");

        let effects = state.update(PickerEvent::Commit);
        assert_eq!(effects, vec![PickerEffect::FocusRequested(Mode::Selecting)]);
        assert_eq!(state.mode(), Mode::Selecting);
        assert_eq!(*state.value(), 1);
    }

    #[test]
    fn redundant_transitions_emit_nothing() {
        let mut state = state();
        assert!(state.update(PickerEvent::Commit).is_empty());
        state.update(PickerEvent::Activate);
        assert!(state.update(PickerEvent::Activate).is_empty());
    }

    #[test]
    fn row_selection_bypasses_draft() {
        let mut state = state();
        let effects = state.update(PickerEvent::RowSelected(1));
        assert_eq!(effects, vec![PickerEffect::ValueChanged(2)]);
        assert_eq!(*state.value(), 2);
        assert_eq!(state.draft(), "2");
    }

    #[test]
    fn row_selection_of_current_value_is_a_noop() {
        let mut state = state();
        assert!(state.update(PickerEvent::RowSelected(0)).is_empty());
    }

    #[test]
    fn out_of_range_row_is_ignored() {
        let mut state = state();
        assert!(state.update(PickerEvent::RowSelected(7)).is_empty());
        assert_eq!(*state.value(), 1);
    }

    #[test]
    fn candidates_sync_replaces_wholesale() {
        let mut state = state();
        let effects = state.update(PickerEvent::CandidatesSynced(vec![Num(9)]));
        assert!(effects.is_empty());
        assert_eq!(state.candidates(), &[Num(9)]);
        // Current value survives even when absent from the new list.
        assert_eq!(*state.value(), 1);
        assert_eq!(state.selected_index(), None);
    }

    #[test]
    fn selected_index_tracks_value() {
        let mut state = state();
        assert_eq!(state.selected_index(), Some(0));
        state.update(PickerEvent::RowSelected(1));
        assert_eq!(state.selected_index(), Some(1));
    }
}
