use thiserror::Error;

/// Errors produced by the picker core.
///
/// There is exactly one kind: free text that does not parse into a model.
/// Reconciliation never raises it to the host; it only suppresses the write
/// for that keystroke. The variant exists for hosts that call the parse path
/// directly.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PickerError {
    /// The text cannot represent a valid value.
    #[error("invalid input: {text:?} does not parse into a picker value")]
    InvalidInput { text: String },
}
