//! Toolkit-free core of the combo picker control.
//!
//! A combo picker lets the user choose from a predefined candidate list or
//! type a custom value. This crate holds everything that does not touch a
//! rendering toolkit: the value-model and formatter contracts, the
//! selecting/editing mode state machine, the reconciliation rules between the
//! host's current value, the host's candidate list, and the internal draft
//! text, and the capability-driven choice of presentation strategy.
//!
//! Presentation layers (see `combo-picker-tui`) translate their input events
//! into [`PickerEvent`]s, feed them through [`PickerState::update`], and
//! mirror the returned [`PickerEffect`]s back into the host's bindings.

pub mod error;
pub mod format;
pub mod hint;
pub mod model;
pub mod state;
pub mod strategy;

pub use error::PickerError;
pub use format::{FnFormatter, LabelFormatter, ValueFormatter};
pub use hint::InputHint;
pub use model::{PickerModel, parse_text};
pub use state::{Mode, PickerEffect, PickerEvent, PickerState};
pub use strategy::{Capabilities, Strategy};
