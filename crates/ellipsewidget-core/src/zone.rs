//! Hit-test zones and resize handle definitions.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Where a device point lies relative to the ellipse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum InteractionZone {
    #[default]
    Outside,
    Inside,
    /// On the boundary band, away from any handle.
    Edge,
    // Resize handles at the four cardinal points of the ellipse
    Top,
    Right,
    Bottom,
    Left,
}

/// Coarse grouping of zones, used to decide when hover feedback changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneCategory {
    Outside,
    Inside,
    /// The edge band or any of the handles.
    Boundary,
}

impl InteractionZone {
    /// Check if this zone is one of the four resize handles.
    pub fn is_handle(self) -> bool {
        matches!(self, Self::Top | Self::Right | Self::Bottom | Self::Left)
    }

    pub fn category(self) -> ZoneCategory {
        match self {
            Self::Outside => ZoneCategory::Outside,
            Self::Inside => ZoneCategory::Inside,
            Self::Edge | Self::Top | Self::Right | Self::Bottom | Self::Left => {
                ZoneCategory::Boundary
            }
        }
    }
}

/// The kind of resize handle, in hit-test priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleKind {
    Top,
    Right,
    Bottom,
    Left,
}

impl HandleKind {
    /// Handles in the order they are hit-tested; the first match wins.
    pub const ORDER: [HandleKind; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];
}

impl From<HandleKind> for InteractionZone {
    fn from(kind: HandleKind) -> Self {
        match kind {
            HandleKind::Top => Self::Top,
            HandleKind::Right => Self::Right,
            HandleKind::Bottom => Self::Bottom,
            HandleKind::Left => Self::Left,
        }
    }
}

/// A resize handle placed on the ellipse boundary.
#[derive(Debug, Clone, Copy)]
pub struct Handle {
    /// The kind of handle (determines which box edge it drags).
    pub kind: HandleKind,
    /// Position in device pixels.
    pub position: Point,
}

impl Handle {
    /// Create a new handle.
    pub fn new(kind: HandleKind, position: Point) -> Self {
        Self { kind, position }
    }

    /// Check if a point is strictly closer than `tolerance` to this handle.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        let dx = point.x - self.position.x;
        let dy = point.y - self.position.y;
        dx * dx + dy * dy < tolerance * tolerance
    }
}

/// The four handles of an ellipse inscribed in `bounds`, in [`HandleKind::ORDER`].
pub fn handles_for(bounds: Rect) -> [Handle; 4] {
    let center = bounds.center();
    HandleKind::ORDER.map(|kind| {
        let position = match kind {
            HandleKind::Top => Point::new(center.x, bounds.y0),
            HandleKind::Right => Point::new(bounds.x1, center.y),
            HandleKind::Bottom => Point::new(center.x, bounds.y1),
            HandleKind::Left => Point::new(bounds.x0, center.y),
        };
        Handle::new(kind, position)
    })
}

/// Hit test the handles of an ellipse inscribed in `bounds`.
pub fn hit_test_handle(bounds: Rect, point: Point, tolerance: f64) -> Option<HandleKind> {
    handles_for(bounds)
        .into_iter()
        .find(|handle| handle.hit_test(point, tolerance))
        .map(|handle| handle.kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        assert_eq!(InteractionZone::Outside.category(), ZoneCategory::Outside);
        assert_eq!(InteractionZone::Inside.category(), ZoneCategory::Inside);
        assert_eq!(InteractionZone::Edge.category(), ZoneCategory::Boundary);
        assert_eq!(InteractionZone::Left.category(), ZoneCategory::Boundary);
        assert!(InteractionZone::Bottom.is_handle());
        assert!(!InteractionZone::Edge.is_handle());
    }

    #[test]
    fn test_handle_positions() {
        let handles = handles_for(Rect::new(0.0, 0.0, 100.0, 50.0));
        assert_eq!(handles[0].kind, HandleKind::Top);
        assert_eq!(handles[0].position, Point::new(50.0, 0.0));
        assert_eq!(handles[1].position, Point::new(100.0, 25.0));
        assert_eq!(handles[2].position, Point::new(50.0, 50.0));
        assert_eq!(handles[3].position, Point::new(0.0, 25.0));
    }

    #[test]
    fn test_handle_hit_is_strict() {
        let handle = Handle::new(HandleKind::Right, Point::new(10.0, 10.0));
        assert!(handle.hit_test(Point::new(12.0, 10.0), 3.0));
        assert!(!handle.hit_test(Point::new(13.0, 10.0), 3.0));
    }

    #[test]
    fn test_first_handle_in_order_wins() {
        // Tiny box: the point is within tolerance of both Top and Right.
        let bounds = Rect::new(0.0, 0.0, 10.0, 10.0);
        let point = Point::new(8.0, 2.0);
        assert_eq!(hit_test_handle(bounds, point, 10.0), Some(HandleKind::Top));
        assert_eq!(hit_test_handle(bounds, Point::new(50.0, 50.0), 10.0), None);
    }
}
