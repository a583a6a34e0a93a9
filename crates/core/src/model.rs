//! Value-model contract for pickable values.
//!
//! Anything the picker displays implements [`PickerModel`]. The picker uses
//! `label` for row display, `value` as the typed value it reads and writes
//! through the host binding, and `manual_input_text` to prefill the free-text
//! surface. Values must be losslessly convertible to and from text because the
//! user can type arbitrary characters.

use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::str::FromStr;

use crate::error::PickerError;

/// A value that can be displayed in and selected from a combo picker.
///
/// Implementations wrap a typed value and decide what free text is acceptable
/// for it. The two constructors have different totality: [`from_value`] always
/// succeeds, while [`from_text`] may reject the input.
///
/// Contract: `Self::from_value(v).value() == v` for every `v`. There is no
/// guarantee that `from_text` round-trips through `manual_input_text`.
///
/// [`from_value`]: PickerModel::from_value
/// [`from_text`]: PickerModel::from_text
pub trait PickerModel: Clone + PartialEq {
    /// The typed value this model carries.
    type Value: Clone + Eq + Hash + Debug + Display + FromStr;

    /// Build a model from a typed value. Total.
    fn from_value(value: Self::Value) -> Self;

    /// Try to build a model from free-form text the user typed.
    ///
    /// Returning `None` marks the text as invalid input. The implementer
    /// decides what counts as parseable.
    fn from_text(text: &str) -> Option<Self>;

    /// The human-readable label for this value.
    fn label(&self) -> String;

    /// The typed value back out.
    fn value(&self) -> Self::Value;

    /// Text to prefill the manual input surface with, if any.
    ///
    /// `None` means the surface starts empty.
    fn manual_input_text(&self) -> Option<String>;
}

/// Parse free text into a model, surfacing the failure as a typed error.
///
/// The reconciliation core swallows parse failures (invalid keystrokes are
/// inert); this helper exists for hosts that want the failure as a value.
pub fn parse_text<M: PickerModel>(text: &str) -> Result<M, PickerError> {
    M::from_text(text).ok_or_else(|| PickerError::InvalidInput {
        text: text.to_string(),
    })
}
