//! Widget state definitions.

use serde::{Deserialize, Serialize};

/// The interaction state of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WidgetState {
    /// No drag in progress; pointer motion only updates hover feedback.
    #[default]
    Idle,
    /// A button went down on the ellipse; motion drags it.
    Selected,
}

impl WidgetState {
    /// Check if a drag is in progress.
    pub fn is_selected(self) -> bool {
        matches!(self, Self::Selected)
    }
}
