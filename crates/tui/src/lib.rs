//! Ratatui presentation layer for the combo picker control.
//!
//! The control lets the user choose from a predefined candidate list or type
//! a custom value. All selection semantics live in `combo-picker-core`; this
//! crate renders one of three surfaces over that core and translates
//! crossterm input into core events:
//!
//! - list+button: a row selector while selecting, a separate text field with
//!   a commit control while editing;
//! - merged: a combo box whose field and dropdown both funnel through the
//!   draft;
//! - list+inline-field: list and field always visible, editing implicit.
//!
//! Embed a [`ComboPicker`] in an application by forwarding key and mouse
//! events to it, rendering it each frame, and draining its effects into the
//! application's own candidate list and current value.

pub mod combo_box;
pub mod component;
pub mod inline;
pub mod input;
pub mod manual_input;
pub mod style;
pub mod wheel;

pub use combo_box::ComboBoxView;
pub use component::ComboPicker;
pub use inline::InlineView;
pub use input::InputBuffer;
pub use manual_input::ManualInputView;
pub use style::PickerStyle;
pub use wheel::WheelView;
