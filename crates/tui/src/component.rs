//! The combo picker component: configuration, event translation, and
//! strategy dispatch.
//!
//! A [`ComboPicker`] owns a [`PickerState`] and one of three presentation
//! surfaces, chosen once at construction from the host's [`Capabilities`]. It
//! translates crossterm key and mouse events into [`PickerEvent`]s, keeps its
//! two focus flags and the surface buffers in step with the returned effects,
//! and exposes the host-relevant effects (value writes, candidate appends)
//! through a drain so the embedding application can mirror them into its own
//! data.

use combo_picker_core::{
    Capabilities, InputHint, Mode, PickerEffect, PickerEvent, PickerModel, PickerState, Strategy,
    ValueFormatter,
};
use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::Frame;
use ratatui::layout::Rect;
use tracing::debug;

use crate::combo_box::ComboBoxView;
use crate::inline::InlineView;
use crate::manual_input::ManualInputView;
use crate::style::PickerStyle;
use crate::wheel::WheelView;

#[derive(Debug)]
enum Surface {
    ListWithButton {
        wheel: WheelView,
        manual: ManualInputView,
    },
    Merged {
        combo: ComboBoxView,
    },
    Inline {
        view: InlineView,
    },
}

/// A picker with predefined candidates and free-text entry of custom values.
pub struct ComboPicker<M: PickerModel, F: ValueFormatter<M>> {
    title: String,
    manual_entry_title: String,
    formatter: F,
    hint: InputHint,
    capabilities: Capabilities,
    strategy: Strategy,
    style: PickerStyle,
    state: PickerState<M>,
    surface: Surface,
    container_focus: FocusFlag,
    f_list: FocusFlag,
    f_field: FocusFlag,
    pending: Vec<PickerEffect<M>>,
}

impl<M: PickerModel, F: ValueFormatter<M>> ComboPicker<M, F> {
    /// Build a picker over the host's candidates and current value.
    ///
    /// `title` labels the list surface, `manual_entry_title` the free-text
    /// surface. Strategy defaults to list+button; see
    /// [`with_capabilities`](Self::with_capabilities).
    pub fn new(
        title: impl Into<String>,
        manual_entry_title: impl Into<String>,
        formatter: F,
        candidates: Vec<M>,
        value: M::Value,
    ) -> Self {
        let capabilities = Capabilities::default();
        let strategy = Strategy::select(&capabilities);
        let title = title.into();
        let manual_entry_title = manual_entry_title.into();
        let hint = InputHint::default();
        let state = PickerState::new(candidates, value);
        let f_list = FocusFlag::named("combo_picker.list");
        f_list.set(true);
        let f_field = FocusFlag::named("combo_picker.field");
        let surface = build_surface(
            strategy,
            &capabilities,
            &title,
            &manual_entry_title,
            hint,
            &state,
            &f_list,
            &f_field,
        );
        Self {
            title,
            manual_entry_title,
            formatter,
            hint,
            capabilities,
            strategy,
            style: PickerStyle::default(),
            state,
            surface,
            container_focus: FocusFlag::named("combo_picker"),
            f_list,
            f_field,
            pending: Vec::new(),
        }
    }

    /// Re-dispatch on a capability descriptor. Construction-time only; the
    /// choice is never re-evaluated while events flow.
    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self.strategy = Strategy::select(&capabilities);
        debug!(strategy = ?self.strategy, "presentation strategy selected");
        self.surface = self.make_surface();
        self
    }

    /// Soft-input hint for the free-text surface.
    pub fn with_input_hint(mut self, hint: InputHint) -> Self {
        self.hint = hint;
        match &mut self.surface {
            Surface::ListWithButton { manual, .. } => manual.set_hint(hint),
            Surface::Inline { view } => view.set_hint(hint),
            Surface::Merged { .. } => {}
        }
        self
    }

    pub fn with_style(mut self, style: PickerStyle) -> Self {
        self.style = style;
        self
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn mode(&self) -> Mode {
        self.state.mode()
    }

    pub fn value(&self) -> &M::Value {
        self.state.value()
    }

    pub fn candidates(&self) -> &[M] {
        self.state.candidates()
    }

    pub fn is_focused(&self) -> bool {
        self.container_focus.get() || self.f_list.get() || self.f_field.get()
    }

    /// Host-relevant effects accumulated since the last drain, in order.
    pub fn take_effects(&mut self) -> Vec<PickerEffect<M>> {
        std::mem::take(&mut self.pending)
    }

    /// The host's current value changed externally.
    pub fn set_value(&mut self, value: M::Value) {
        self.apply(PickerEvent::ValueSynced(value));
    }

    /// The host's candidate list changed externally.
    pub fn set_candidates(&mut self, candidates: Vec<M>) {
        self.apply(PickerEvent::CandidatesSynced(candidates));
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Inline surfaces have no activation gesture; Tab walks between the
        // two always-visible surfaces and carries the mode with it.
        if matches!(self.surface, Surface::Inline { .. })
            && matches!(key.code, KeyCode::Tab | KeyCode::BackTab)
        {
            let event = if self.f_field.get() {
                self.f_field.set(false);
                PickerEvent::Commit
            } else {
                PickerEvent::Activate
            };
            self.apply(event);
            return;
        }

        let event = match &mut self.surface {
            Surface::ListWithButton { wheel, manual } => match self.state.mode() {
                Mode::Selecting => wheel.handle_key_event(key, self.state.candidates().len()),
                Mode::Editing => manual.handle_key_event(key),
            },
            Surface::Merged { combo } => combo.handle_key_event(key, &self.state),
            Surface::Inline { view } => view.handle_key_event(key, &self.state),
        };
        if let Some(event) = event {
            self.apply(event);
        }
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let event = match &mut self.surface {
            Surface::ListWithButton { wheel, manual } => match self.state.mode() {
                Mode::Selecting => wheel.handle_mouse_event(mouse, self.state.candidates().len()),
                Mode::Editing => manual.handle_mouse_event(mouse),
            },
            Surface::Merged { combo } => combo.handle_mouse_event(mouse, &self.state),
            Surface::Inline { view } => view.handle_mouse_event(mouse, &self.state),
        };
        if let Some(event) = event {
            self.apply(event);
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        match &mut self.surface {
            Surface::ListWithButton { wheel, manual } => match self.state.mode() {
                Mode::Selecting => {
                    wheel.render(frame, area, self.state.candidates(), &self.formatter, &self.style)
                }
                Mode::Editing => manual.render(frame, area, &self.style),
            },
            Surface::Merged { combo } => combo.render(frame, area, &self.state, &self.style),
            Surface::Inline { view } => {
                view.render(frame, area, &self.state, &self.formatter, &self.style)
            }
        }
    }

    fn apply(&mut self, event: PickerEvent<M>) {
        let value_before = self.state.value().clone();
        for effect in self.state.update(event) {
            match effect {
                PickerEffect::FocusRequested(mode) => self.apply_focus(mode),
                host_effect => self.pending.push(host_effect),
            }
        }
        let value_changed = *self.state.value() != value_before;
        self.resync_surface(value_changed);
    }

    fn apply_focus(&mut self, mode: Mode) {
        self.f_field.set(mode == Mode::Editing);
        self.f_list.set(mode == Mode::Selecting);
    }

    /// Bring the surface mirrors (list selection, text buffers) back in step
    /// with the core after an update.
    fn resync_surface(&mut self, value_changed: bool) {
        match &mut self.surface {
            Surface::ListWithButton { wheel, manual } => {
                wheel.sync_selection(self.state.selected_index());
                manual.sync_draft(self.state.draft());
            }
            Surface::Merged { combo } => {
                if value_changed {
                    combo.sync_value(&self.state);
                }
            }
            Surface::Inline { view } => {
                view.sync_selection(self.state.selected_index());
                if value_changed {
                    view.sync_value(&self.state);
                }
            }
        }
    }

    fn make_surface(&self) -> Surface {
        build_surface(
            self.strategy,
            &self.capabilities,
            &self.title,
            &self.manual_entry_title,
            self.hint,
            &self.state,
            &self.f_list,
            &self.f_field,
        )
    }
}

#[allow(clippy::too_many_arguments)]
fn build_surface<M: PickerModel>(
    strategy: Strategy,
    capabilities: &Capabilities,
    title: &str,
    manual_entry_title: &str,
    hint: InputHint,
    state: &PickerState<M>,
    f_list: &FocusFlag,
    f_field: &FocusFlag,
) -> Surface {
    match strategy {
        Strategy::ListWithButton => {
            let mut wheel = WheelView::new(title, capabilities.constrained_rows, f_list.clone());
            wheel.sync_selection(state.selected_index());
            let mut manual = ManualInputView::new(manual_entry_title, hint, f_field.clone());
            manual.sync_draft(state.draft());
            Surface::ListWithButton { wheel, manual }
        }
        Strategy::Merged => {
            let mut combo = ComboBoxView::new(title, f_list.clone());
            combo.sync_value(state);
            Surface::Merged { combo }
        }
        Strategy::ListWithInlineField => {
            let mut view = InlineView::new(
                title,
                manual_entry_title,
                hint,
                f_list.clone(),
                f_field.clone(),
            );
            view.sync_selection(state.selected_index());
            Surface::Inline { view }
        }
    }
}

impl<M: PickerModel, F: ValueFormatter<M>> HasFocus for ComboPicker<M, F> {
    fn build(&self, builder: &mut FocusBuilder) {
        let start = builder.start(self);
        builder.leaf_widget(&self.f_list);
        builder.leaf_widget(&self.f_field);
        builder.end(start);
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        Rect::default()
    }
}
