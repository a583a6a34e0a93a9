//! Visual styling for the picker surfaces.
//!
//! A flat bag of ratatui styles so hosts can restyle the control without a
//! theme framework. Defaults keep everything legible on a plain terminal.

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy)]
pub struct PickerStyle {
    /// Title line above the control.
    pub title: Style,
    /// Unselected candidate rows.
    pub row: Style,
    /// The selected candidate row.
    pub selected_row: Style,
    /// Free-text field content.
    pub field: Style,
    /// Placeholder text in an empty field.
    pub placeholder: Style,
    /// The commit affordance next to the field.
    pub commit_button: Style,
    /// Border of whichever surface holds focus.
    pub focused_border: Style,
    /// Border of unfocused surfaces.
    pub border: Style,
}

impl Default for PickerStyle {
    fn default() -> Self {
        Self {
            title: Style::default().add_modifier(Modifier::BOLD),
            row: Style::default(),
            selected_row: Style::default()
                .add_modifier(Modifier::REVERSED)
                .add_modifier(Modifier::BOLD),
            field: Style::default(),
            placeholder: Style::default().fg(Color::DarkGray),
            commit_button: Style::default().fg(Color::Green),
            focused_border: Style::default().fg(Color::Cyan),
            border: Style::default().fg(Color::DarkGray),
        }
    }
}

impl PickerStyle {
    /// Border style for a surface, by focus.
    pub fn border_for(&self, focused: bool) -> Style {
        if focused { self.focused_border } else { self.border }
    }
}
