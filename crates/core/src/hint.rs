//! Soft-input hints for the manual entry surface.
//!
//! Platforms with selectable on-screen keyboards use hints to pick a layout.
//! A terminal has no soft keyboard, so the hint degrades into a keystroke
//! filter: characters the hinted input would never produce are dropped before
//! they reach the draft buffer.

/// Hint describing what kind of text the manual input surface expects.
///
/// Unknown or absent hints fall back to [`InputHint::Text`], which accepts
/// anything printable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputHint {
    /// Free text; any printable character.
    #[default]
    Text,
    /// ASCII-only text.
    Ascii,
    /// Whole numbers, optionally signed.
    Numeric,
    /// Numbers with a decimal separator.
    Decimal,
    /// Telephone-style input.
    Phone,
    /// URL entry; printable ASCII, no spaces.
    Url,
    /// Email address entry; printable ASCII, no spaces.
    Email,
}

impl InputHint {
    /// Whether `ch` may be inserted into `current` at byte offset `cursor`.
    ///
    /// The sign rules mirror a numeric field: a leading `-`/`+` only, and
    /// only one; `.` only once and only for [`InputHint::Decimal`].
    pub fn accepts(self, current: &str, cursor: usize, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        match self {
            InputHint::Text => true,
            InputHint::Ascii => ch.is_ascii(),
            InputHint::Numeric => Self::accepts_numeric(current, cursor, ch, false),
            InputHint::Decimal => Self::accepts_numeric(current, cursor, ch, true),
            InputHint::Phone => {
                ch.is_ascii_digit() || matches!(ch, '+' | '-' | '(' | ')' | '#' | '*' | ' ')
            }
            InputHint::Url | InputHint::Email => ch.is_ascii_graphic(),
        }
    }

    fn accepts_numeric(current: &str, cursor: usize, ch: char, decimal: bool) -> bool {
        if ch.is_ascii_digit() {
            return true;
        }
        if ch == '-' || ch == '+' {
            return cursor == 0 && !current.starts_with(['-', '+']);
        }
        if ch == '.' && decimal {
            return !current.contains('.');
        }
        false
    }
}
