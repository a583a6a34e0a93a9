//! Row formatting, decoupled from the model's own label.
//!
//! Some surfaces can only render a flat string per row. A [`ValueFormatter`]
//! turns a model into that string without touching the model's semantic
//! `label`, so display customization never changes what the value means.

use crate::model::PickerModel;

/// Formats a model for row display.
pub trait ValueFormatter<M> {
    fn format(&self, model: &M) -> String;
}

/// Default formatter: renders the model's own label.
#[derive(Debug, Clone, Copy, Default)]
pub struct LabelFormatter;

impl<M: PickerModel> ValueFormatter<M> for LabelFormatter {
    fn format(&self, model: &M) -> String {
        model.label()
    }
}

/// Wraps a closure as a formatter, so hosts do not need a named type for
/// one-off display tweaks.
#[derive(Debug, Clone, Copy)]
pub struct FnFormatter<F>(pub F);

impl<M, F> ValueFormatter<M> for FnFormatter<F>
where
    F: Fn(&M) -> String,
{
    fn format(&self, model: &M) -> String {
        (self.0)(model)
    }
}
