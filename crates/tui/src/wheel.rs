//! Wheel-style row selector for the list+button strategy.
//!
//! Selecting mode surface: a scrollable list of candidates where moving the
//! selection writes the value immediately (rule 3), and an activation
//! keystroke or click on the already-selected row switches to editing. With
//! constrained row visibility the list renders a window centered on the
//! selection instead of scrolling lazily.

use combo_picker_core::{PickerEvent, PickerModel, ValueFormatter};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use rat_focus::FocusFlag;
use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};

use crate::style::PickerStyle;

/// The key that activates free-text entry from the list.
const ACTIVATE_KEY: char = 'e';

#[derive(Debug)]
pub struct WheelView {
    title: String,
    constrained: bool,
    focus: FocusFlag,
    list_state: ListState,
    list_area: Rect,
}

impl WheelView {
    pub fn new(title: impl Into<String>, constrained: bool, focus: FocusFlag) -> Self {
        Self {
            title: title.into(),
            constrained,
            focus,
            list_state: ListState::default(),
            list_area: Rect::default(),
        }
    }

    /// Mirror the core's selected index into the list widget.
    pub fn sync_selection(&mut self, selected: Option<usize>) {
        self.list_state.select(selected);
    }

    /// Next row for a one-step navigation. A cleared selection (the current
    /// value can be absent after a candidate resync) starts at row 0.
    fn step(&self, forward: bool, row_count: usize) -> Option<usize> {
        let Some(current) = self.list_state.selected() else {
            return (row_count > 0).then_some(0);
        };
        if forward {
            (current + 1 < row_count).then(|| current + 1)
        } else {
            (current > 0).then(|| current - 1)
        }
    }

    pub fn handle_key_event<M: PickerModel>(
        &mut self,
        key: KeyEvent,
        row_count: usize,
    ) -> Option<PickerEvent<M>> {
        match key.code {
            KeyCode::Enter | KeyCode::Char(ACTIVATE_KEY) => Some(PickerEvent::Activate),
            KeyCode::Up | KeyCode::Char('k') => {
                self.step(false, row_count).map(PickerEvent::RowSelected)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.step(true, row_count).map(PickerEvent::RowSelected)
            }
            KeyCode::Home => (row_count > 0).then(|| PickerEvent::RowSelected(0)),
            KeyCode::End => (row_count > 0).then(|| PickerEvent::RowSelected(row_count - 1)),
            _ => None,
        }
    }

    pub fn handle_mouse_event<M: PickerModel>(
        &mut self,
        mouse: MouseEvent,
        row_count: usize,
    ) -> Option<PickerEvent<M>> {
        match mouse.kind {
            MouseEventKind::ScrollUp => {
                self.step(false, row_count).map(PickerEvent::RowSelected)
            }
            MouseEventKind::ScrollDown => {
                self.step(true, row_count).map(PickerEvent::RowSelected)
            }
            MouseEventKind::Down(MouseButton::Left) => {
                let pos = Position {
                    x: mouse.column,
                    y: mouse.row,
                };
                if !self.list_area.contains(pos) {
                    return None;
                }
                let offset = self.list_state.offset();
                let index = offset + (mouse.row - self.list_area.y) as usize;
                if index >= row_count {
                    return None;
                }
                if Some(index) == self.list_state.selected() {
                    // Tapping the current row is the activation gesture.
                    Some(PickerEvent::Activate)
                } else {
                    Some(PickerEvent::RowSelected(index))
                }
            }
            _ => None,
        }
    }

    pub fn render<M, F>(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        candidates: &[M],
        formatter: &F,
        style: &PickerStyle,
    ) where
        M: PickerModel,
        F: ValueFormatter<M>,
    {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(style.border_for(self.focus.get()))
            .title(Span::styled(self.title.clone(), style.title));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        self.list_area = inner;

        if self.constrained {
            // Window the list around the selection, wheel style.
            let visible = inner.height.max(1) as usize;
            let selected = self.list_state.selected().unwrap_or(0);
            let max_offset = candidates.len().saturating_sub(visible);
            *self.list_state.offset_mut() = selected.saturating_sub(visible / 2).min(max_offset);
        }

        let items: Vec<ListItem> = candidates
            .iter()
            .map(|model| ListItem::new(formatter.format(model)).style(style.row))
            .collect();
        let list = List::new(items).highlight_style(style.selected_row);
        frame.render_stateful_widget(list, inner, &mut self.list_state);
    }
}
