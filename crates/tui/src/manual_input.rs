//! Free-text entry surface with an explicit commit affordance.
//!
//! Holds the draft buffer while the picker is in editing mode. Enter or a
//! click on the checkmark commits; the view releases its focus flag strictly
//! before reporting the commit, because hosts with competing focus claims
//! reject a mode transition while the field still holds focus.

use combo_picker_core::{InputHint, PickerEvent, PickerModel};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use rat_focus::FocusFlag;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::input::InputBuffer;
use crate::style::PickerStyle;

const COMMIT_LABEL: &str = " [✔] ";

/// Rendered rectangles for pointer hit-testing.
#[derive(Debug, Default, Clone, Copy)]
struct ManualInputLayout {
    field_area: Rect,
    commit_area: Rect,
}

/// The editing-mode surface: draft buffer, hint filter, commit control.
#[derive(Debug)]
pub struct ManualInputView {
    title: String,
    hint: InputHint,
    buffer: InputBuffer,
    focus: FocusFlag,
    layout: ManualInputLayout,
}

impl ManualInputView {
    pub fn new(title: impl Into<String>, hint: InputHint, focus: FocusFlag) -> Self {
        Self {
            title: title.into(),
            hint,
            buffer: InputBuffer::new(),
            focus,
            layout: ManualInputLayout::default(),
        }
    }

    pub fn buffer(&self) -> &InputBuffer {
        &self.buffer
    }

    /// Load the draft into the buffer, cursor at the end.
    pub fn sync_draft(&mut self, draft: &str) {
        if self.buffer.text() != draft {
            self.buffer.set_text(draft);
        }
    }

    pub fn set_hint(&mut self, hint: InputHint) {
        self.hint = hint;
    }

    pub fn handle_key_event<M: PickerModel>(&mut self, key: KeyEvent) -> Option<PickerEvent<M>> {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => Some(self.commit()),
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

    pub fn handle_mouse_event<M: PickerModel>(&mut self, mouse: MouseEvent) -> Option<PickerEvent<M>> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }
        let pos = Position {
            x: mouse.column,
            y: mouse.row,
        };
        if self.layout.commit_area.contains(pos) {
            return Some(self.commit());
        }
        if self.layout.field_area.contains(pos) {
            let column = mouse.column.saturating_sub(self.layout.field_area.x);
            let cursor = self.buffer.cursor_from_column(column);
            self.buffer.set_cursor(cursor);
        }
        None
    }

    /// Unfocus, then transition.
    fn commit<M: PickerModel>(&mut self) -> PickerEvent<M> {
        self.focus.set(false);
        PickerEvent::Commit
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, style: &PickerStyle) {
        let focused = self.focus.get();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(style.border_for(focused))
            .title(Span::styled(self.title.clone(), style.title));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [field_area, commit_area] = Layout::horizontal([
            Constraint::Min(1),
            Constraint::Length(COMMIT_LABEL.chars().count() as u16),
        ])
        .areas(inner);
        self.layout = ManualInputLayout {
            field_area,
            commit_area,
        };

        let content = if self.buffer.is_empty() {
            Line::from(Span::styled(self.title.clone(), style.placeholder))
        } else {
            Line::from(Span::styled(self.buffer.text().to_string(), style.field))
        };
        frame.render_widget(Paragraph::new(content), field_area);
        frame.render_widget(
            Paragraph::new(Span::styled(COMMIT_LABEL, style.commit_button)),
            commit_area,
        );

        if focused {
            let cursor_x = field_area.x + self.buffer.cursor_columns() as u16;
            frame.set_cursor_position((cursor_x.min(field_area.right()), field_area.y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combo_picker_core::PickerModel;
    use crossterm::event::KeyModifiers;

    #[derive(Clone, Debug, PartialEq)]
    struct Num(i64);

    impl PickerModel for Num {
        type Value = i64;
        fn from_value(value: i64) -> Self {
            Num(value)
        }
        fn from_text(text: &str) -> Option<Self> {
            text.parse().ok().map(Num)
        }
        fn label(&self) -> String {
            self.0.to_string()
        }
        fn value(&self) -> i64 {
            self.0
        }
        fn manual_input_text(&self) -> Option<String> {
            Some(self.0.to_string())
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_reports_the_full_draft() {
        let mut view = ManualInputView::new("Custom", InputHint::Numeric, FocusFlag::default());
        assert_eq!(
            view.handle_key_event::<Num>(key(KeyCode::Char('4'))),
            Some(PickerEvent::DraftChanged("4".into()))
        );
        assert_eq!(
            view.handle_key_event::<Num>(key(KeyCode::Char('2'))),
            Some(PickerEvent::DraftChanged("42".into()))
        );
    }

    #[test]
    fn hint_filter_drops_rejected_keystrokes() {
        let mut view = ManualInputView::new("Custom", InputHint::Numeric, FocusFlag::default());
        assert_eq!(view.handle_key_event::<Num>(key(KeyCode::Char('x'))), None);
        assert_eq!(view.buffer().text(), "");
    }

    #[test]
    fn enter_unfocuses_before_reporting_commit() {
        let focus = FocusFlag::default();
        focus.set(true);
        let mut view = ManualInputView::new("Custom", InputHint::Text, focus.clone());
        let event = view.handle_key_event::<Num>(key(KeyCode::Enter));
        assert_eq!(event, Some(PickerEvent::Commit));
        assert!(!focus.get());
    }

    #[test]
    fn sync_draft_replaces_buffer_content() {
        let mut view = ManualInputView::new("Custom", InputHint::Text, FocusFlag::default());
        view.handle_key_event::<Num>(key(KeyCode::Char('9')));
        view.sync_draft("55");
        assert_eq!(view.buffer().text(), "55");
        assert_eq!(view.buffer().cursor(), 2);
    }
}
