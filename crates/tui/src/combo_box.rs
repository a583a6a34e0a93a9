//! Merged strategy: one widget that is both an editable field and a dropdown.
//!
//! Everything funnels through the draft. Typing reports the buffer as a draft
//! change; picking a dropdown row copies that row's canonical text into the
//! buffer and reports the same draft change, so direct row selection
//! degenerates into rule 2. The field resyncs from the core's draft only when
//! the value actually changed, so in-progress typing that has not committed is
//! never clobbered.

use combo_picker_core::{PickerEvent, PickerModel, PickerState};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use rat_focus::FocusFlag;
use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use crate::input::InputBuffer;
use crate::style::PickerStyle;

#[derive(Debug)]
pub struct ComboBoxView {
    title: String,
    buffer: InputBuffer,
    open: bool,
    focus: FocusFlag,
    list_state: ListState,
    field_area: Rect,
    dropdown_area: Rect,
}

impl ComboBoxView {
    pub fn new(title: impl Into<String>, focus: FocusFlag) -> Self {
        Self {
            title: title.into(),
            buffer: InputBuffer::new(),
            open: false,
            focus,
            list_state: ListState::default(),
            field_area: Rect::default(),
            dropdown_area: Rect::default(),
        }
    }

    pub fn buffer(&self) -> &InputBuffer {
        &self.buffer
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Rewrite the field from the core's draft. Called when the value
    /// changed; never while typing sits unreconciled.
    pub fn sync_value<M: PickerModel>(&mut self, state: &PickerState<M>) {
        self.buffer.set_text(state.draft());
    }

    pub fn handle_key_event<M: PickerModel>(
        &mut self,
        key: KeyEvent,
        state: &PickerState<M>,
    ) -> Option<PickerEvent<M>> {
        match key.code {
            KeyCode::Down => {
                if self.open {
                    self.move_selection(1, state.candidates().len());
                } else if !state.candidates().is_empty() {
                    self.open = true;
                    self.list_state.select(state.selected_index().or(Some(0)));
                }
                None
            }
            KeyCode::Up => {
                if self.open {
                    self.move_selection(-1, state.candidates().len());
                }
                None
            }
            KeyCode::Esc => {
                self.open = false;
                None
            }
            KeyCode::Enter => {
                if self.open {
                    self.open = false;
                    let index = self.list_state.selected()?;
                    return self.choose_row(index, state);
                }
                None
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
            KeyCode::Char(ch) if !ch.is_control() => {
                self.buffer.insert_char(ch);
                Some(PickerEvent::DraftChanged(self.buffer.text().to_string()))
            }
            _ => None,
        }
    }

    pub fn handle_mouse_event<M: PickerModel>(
        &mut self,
        mouse: MouseEvent,
        state: &PickerState<M>,
    ) -> Option<PickerEvent<M>> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }
        let pos = Position {
            x: mouse.column,
            y: mouse.row,
        };
        if self.field_area.contains(pos) {
            if self.open {
                self.open = false;
            } else if !state.candidates().is_empty() {
                self.open = true;
                self.list_state.select(state.selected_index().or(Some(0)));
            }
            let column = mouse.column.saturating_sub(self.field_area.x);
            let cursor = self.buffer.cursor_from_column(column);
            self.buffer.set_cursor(cursor);
            return None;
        }
        if self.open && self.dropdown_area.contains(pos) {
            let offset = self.list_state.offset();
            let index = offset + (mouse.row - self.dropdown_area.y) as usize;
            if index < state.candidates().len() {
                self.open = false;
                return self.choose_row(index, state);
            }
        }
        None
    }

    /// Route a dropdown row through the draft (degenerate rule 3).
    fn choose_row<M: PickerModel>(
        &mut self,
        index: usize,
        state: &PickerState<M>,
    ) -> Option<PickerEvent<M>> {
        let model = state.candidates().get(index)?;
        self.buffer.set_text(model.value().to_string());
        Some(PickerEvent::DraftChanged(self.buffer.text().to_string()))
    }

    fn move_selection(&mut self, delta: isize, row_count: usize) {
        if row_count == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, row_count as isize - 1) as usize;
        self.list_state.select(Some(next));
    }

    pub fn render<M: PickerModel>(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &PickerState<M>,
        style: &PickerStyle,
    ) {
        let focused = self.focus.get();
        let field_height = area.height.min(3);
        let field_outer = Rect {
            height: field_height,
            ..area
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(style.border_for(focused))
            .title(Span::styled(self.title.clone(), style.title));
        let inner = block.inner(field_outer);
        frame.render_widget(block, field_outer);
        self.field_area = inner;

        let content = if self.buffer.is_empty() {
            Line::from(Span::styled(self.title.clone(), style.placeholder))
        } else {
            Line::from(Span::styled(self.buffer.text().to_string(), style.field))
        };
        frame.render_widget(Paragraph::new(content), inner);
        if focused && !self.open {
            let cursor_x = inner.x + self.buffer.cursor_columns() as u16;
            frame.set_cursor_position((cursor_x.min(inner.right()), inner.y));
        }

        if !self.open {
            self.dropdown_area = Rect::default();
            return;
        }
        let below = Rect {
            y: area.y + field_height,
            height: area.height.saturating_sub(field_height),
            ..area
        };
        if below.height == 0 {
            self.dropdown_area = Rect::default();
            self.open = false;
            return;
        }
        let dropdown = Block::default()
            .borders(Borders::ALL)
            .border_style(style.border_for(focused));
        let list_area = dropdown.inner(below);
        frame.render_widget(dropdown, below);
        self.dropdown_area = list_area;

        // The native combo box shows canonical value text, not formatted rows.
        let items: Vec<ListItem> = state
            .candidates()
            .iter()
            .map(|model| ListItem::new(model.value().to_string()).style(style.row))
            .collect();
        let list = List::new(items).highlight_style(style.selected_row);
        frame.render_stateful_widget(list, list_area, &mut self.list_state);
    }
}
