//! Pointer cursor hints.

use crate::zone::InteractionZone;
use serde::{Deserialize, Serialize};

/// Advisory cursor shape for the host to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CursorShape {
    #[default]
    Default,
    /// North-south resize arrows.
    ResizeVertical,
    /// East-west resize arrows.
    ResizeHorizontal,
    /// Four-way move arrows.
    Move,
    /// Pointing hand.
    Hand,
}

/// Cursor for a zone. A non-resizable widget only offers interior feedback.
pub fn cursor_for(zone: InteractionZone, moving: bool, resizable: bool) -> CursorShape {
    if !resizable && zone != InteractionZone::Inside {
        return CursorShape::Default;
    }
    match zone {
        InteractionZone::Top | InteractionZone::Bottom => CursorShape::ResizeVertical,
        InteractionZone::Left | InteractionZone::Right => CursorShape::ResizeHorizontal,
        InteractionZone::Inside if moving => CursorShape::Move,
        InteractionZone::Inside => CursorShape::Hand,
        InteractionZone::Edge | InteractionZone::Outside => CursorShape::Default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_cursors() {
        assert_eq!(cursor_for(InteractionZone::Top, false, true), CursorShape::ResizeVertical);
        assert_eq!(cursor_for(InteractionZone::Bottom, true, true), CursorShape::ResizeVertical);
        assert_eq!(cursor_for(InteractionZone::Left, false, true), CursorShape::ResizeHorizontal);
        assert_eq!(cursor_for(InteractionZone::Inside, true, true), CursorShape::Move);
        assert_eq!(cursor_for(InteractionZone::Inside, false, true), CursorShape::Hand);
        assert_eq!(cursor_for(InteractionZone::Edge, false, true), CursorShape::Default);
    }

    #[test]
    fn test_not_resizable() {
        assert_eq!(cursor_for(InteractionZone::Right, false, false), CursorShape::Default);
        assert_eq!(cursor_for(InteractionZone::Inside, true, false), CursorShape::Move);
    }
}
