//! List+inline-field strategy for surfaces without an activation gesture.
//!
//! The candidate list and the text field are both always visible; editing is
//! implicit in where focus sits. The field routes edits straight into the
//! draft. After an external value sync, a field whose text no longer parses
//! to the synced value clears instead of being overwritten with canonical
//! text.

use std::str::FromStr;

use combo_picker_core::{InputHint, PickerEvent, PickerModel, PickerState, ValueFormatter};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use rat_focus::FocusFlag;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::input::InputBuffer;
use crate::style::PickerStyle;
use crate::wheel::WheelView;

#[derive(Debug)]
pub struct InlineView {
    list: WheelView,
    field_title: String,
    hint: InputHint,
    buffer: InputBuffer,
    field_focus: FocusFlag,
    field_area: Rect,
}

impl InlineView {
    pub fn new(
        title: impl Into<String>,
        field_title: impl Into<String>,
        hint: InputHint,
        list_focus: FocusFlag,
        field_focus: FocusFlag,
    ) -> Self {
        Self {
            // Constrained surfaces are what this strategy exists for; window
            // the list around the selection.
            list: WheelView::new(title, true, list_focus),
            field_title: field_title.into(),
            hint,
            buffer: InputBuffer::new(),
            field_focus,
            field_area: Rect::default(),
        }
    }

    pub fn buffer(&self) -> &InputBuffer {
        &self.buffer
    }

    pub fn set_hint(&mut self, hint: InputHint) {
        self.hint = hint;
    }

    pub fn sync_selection(&mut self, selected: Option<usize>) {
        self.list.sync_selection(selected);
    }

    /// External value sync: keep the field only while it still names the
    /// synced value; otherwise clear it.
    pub fn sync_value<M: PickerModel>(&mut self, state: &PickerState<M>) {
        let typed = M::Value::from_str(self.buffer.text()).ok();
        if typed.as_ref() != Some(state.value()) {
            self.buffer.clear();
        }
    }

    pub fn handle_key_event<M: PickerModel>(
        &mut self,
        key: KeyEvent,
        state: &PickerState<M>,
    ) -> Option<PickerEvent<M>> {
        if self.field_focus.get() {
            self.handle_field_key(key)
        } else {
            self.list.handle_key_event(key, state.candidates().len())
        }
    }

    fn handle_field_key<M: PickerModel>(&mut self, key: KeyEvent) -> Option<PickerEvent<M>> {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => {
                // Unfocus, then transition.
                self.field_focus.set(false);
                Some(PickerEvent::Commit)
            }
            KeyCode::Left => {
                self.buffer.move_left();
                None
            }
            KeyCode::Right => {
                self.buffer.move_right();
                None
            }
            KeyCode::Home => {
                self.buffer.move_home();
                None
            }
            KeyCode::End => {
                self.buffer.move_end();
                None
            }
            KeyCode::Backspace => {
                self.buffer.backspace();
                Some(PickerEvent::DraftChanged(self.buffer.text().to_string()))
            }
            KeyCode::Delete => {
                self.buffer.delete();
                Some(PickerEvent::DraftChanged(self.buffer.text().to_string()))
            }
            KeyCode::Char(ch) => {
                if self.hint.accepts(self.buffer.text(), self.buffer.cursor(), ch) {
                    self.buffer.insert_char(ch);
                    Some(PickerEvent::DraftChanged(self.buffer.text().to_string()))
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    pub fn handle_mouse_event<M: PickerModel>(
        &mut self,
        mouse: MouseEvent,
        state: &PickerState<M>,
    ) -> Option<PickerEvent<M>> {
        if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
            let pos = Position {
                x: mouse.column,
                y: mouse.row,
            };
            if self.field_area.contains(pos) {
                let column = mouse.column.saturating_sub(self.field_area.x);
                let cursor = self.buffer.cursor_from_column(column);
                self.buffer.set_cursor(cursor);
                return Some(PickerEvent::Activate);
            }
        }
        self.list.handle_mouse_event(mouse, state.candidates().len())
    }

    pub fn render<M, F>(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &PickerState<M>,
        formatter: &F,
        style: &PickerStyle,
    ) where
        M: PickerModel,
        F: ValueFormatter<M>,
    {
        let [list_area, field_outer] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(3)]).areas(area);
        self.list
            .render(frame, list_area, state.candidates(), formatter, style);

        let focused = self.field_focus.get();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(style.border_for(focused))
            .title(Span::styled(self.field_title.clone(), style.title));
        let inner = block.inner(field_outer);
        frame.render_widget(block, field_outer);
        self.field_area = inner;

        let content = if self.buffer.is_empty() {
            Line::from(Span::styled(self.field_title.clone(), style.placeholder))
        } else {
            Line::from(Span::styled(self.buffer.text().to_string(), style.field))
        };
        frame.render_widget(Paragraph::new(content), inner);
        if focused {
            let cursor_x = inner.x + self.buffer.cursor_columns() as u16;
            frame.set_cursor_position((cursor_x.min(inner.right()), inner.y));
        }
    }
}
