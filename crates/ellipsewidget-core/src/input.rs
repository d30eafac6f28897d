//! Pointer events delivered by the host event system.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Pointer event in display pixels (y-down, origin at the window's top-left).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { position: Point, button: MouseButton },
    Up { position: Point, button: MouseButton },
    Move { position: Point },
}

impl PointerEvent {
    /// Button press at `(x, y)`.
    pub fn down(x: f64, y: f64, button: MouseButton) -> Self {
        Self::Down {
            position: Point::new(x, y),
            button,
        }
    }

    /// Button release at `(x, y)`.
    pub fn up(x: f64, y: f64, button: MouseButton) -> Self {
        Self::Up {
            position: Point::new(x, y),
            button,
        }
    }

    /// Pointer motion to `(x, y)`.
    pub fn moved(x: f64, y: f64) -> Self {
        Self::Move {
            position: Point::new(x, y),
        }
    }

    pub fn position(&self) -> Point {
        match *self {
            Self::Down { position, .. } | Self::Up { position, .. } | Self::Move { position } => {
                position
            }
        }
    }

    /// The button involved, if any.
    pub fn button(&self) -> Option<MouseButton> {
        match *self {
            Self::Down { button, .. } | Self::Up { button, .. } => Some(button),
            Self::Move { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let down = PointerEvent::down(10.0, 20.0, MouseButton::Middle);
        assert_eq!(down.position(), Point::new(10.0, 20.0));
        assert_eq!(down.button(), Some(MouseButton::Middle));
        assert_eq!(PointerEvent::moved(1.0, 2.0).button(), None);
    }

    #[test]
    fn test_json_shape() {
        let event: PointerEvent = serde_json::from_str(
            r#"{"Up":{"position":{"x":3.0,"y":4.0},"button":"Left"}}"#,
        )
        .unwrap();
        assert_eq!(event, PointerEvent::up(3.0, 4.0, MouseButton::Left));
    }
}
