//! Construction-time selection of a presentation strategy.
//!
//! The host describes what its surface can do and gets back one of three
//! presentation strategies. The choice is a pure function evaluated once when
//! the control is built; it is never re-evaluated at runtime.

/// What the host surface is capable of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// The surface has a native combo-box widget that merges list and text
    /// entry into one control.
    pub native_combo_box: bool,
    /// The surface supports an explicit tap/click activation gesture on the
    /// list, so editing can be a separate mode behind that gesture.
    pub activation_gesture: bool,
    /// Only a few rows are visible at once; the list renders a window around
    /// the selection instead of every row.
    pub constrained_rows: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            native_combo_box: false,
            activation_gesture: true,
            constrained_rows: false,
        }
    }
}

/// The three ways the same reconciliation contract can be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Row selector while selecting, a separate text field with an explicit
    /// commit control while editing.
    ListWithButton,
    /// One widget that is simultaneously an editable field and a dropdown of
    /// candidates; all edits funnel through the draft.
    Merged,
    /// List and text field both always visible; editing is implicit.
    ListWithInlineField,
}

impl Strategy {
    /// Pick the strategy for a capability descriptor.
    pub fn select(capabilities: &Capabilities) -> Self {
        if capabilities.native_combo_box {
            Strategy::Merged
        } else if capabilities.activation_gesture {
            Strategy::ListWithButton
        } else {
            Strategy::ListWithInlineField
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_combo_box_wins() {
        let caps = Capabilities {
            native_combo_box: true,
            activation_gesture: true,
            constrained_rows: false,
        };
        assert_eq!(Strategy::select(&caps), Strategy::Merged);
    }

    #[test]
    fn activation_gesture_gets_modal_editing() {
        assert_eq!(
            Strategy::select(&Capabilities::default()),
            Strategy::ListWithButton
        );
    }

    #[test]
    fn no_gesture_falls_back_to_inline() {
        let caps = Capabilities {
            native_combo_box: false,
            activation_gesture: false,
            constrained_rows: true,
        };
        assert_eq!(Strategy::select(&caps), Strategy::ListWithInlineField);
    }
}
