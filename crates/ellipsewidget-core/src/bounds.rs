//! Logical extent of the ellipse.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default top-left corner in normalized viewport coordinates.
pub const DEFAULT_ORIGIN: Point = Point::new(0.05, 0.05);
/// Default bottom-right corner in normalized viewport coordinates.
pub const DEFAULT_OPPOSITE: Point = Point::new(0.15, 0.15);

/// Bounding box validation errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("Non-finite corner: origin {origin:?}, opposite {opposite:?}")]
    NonFinite { origin: Point, opposite: Point },
    #[error("Opposite corner {opposite:?} must exceed origin {origin:?} on both axes")]
    Inverted { origin: Point, opposite: Point },
}

/// Result type for bounding box validation.
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Axis-aligned box in normalized viewport coordinates.
///
/// `opposite` is strictly greater than `origin` on both axes; every
/// constructor and mutator enforces this, so a `BoundingBox` value is never
/// degenerate or inverted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Corners")]
pub struct BoundingBox {
    origin: Point,
    opposite: Point,
}

/// Unvalidated serialized form.
#[derive(Deserialize)]
struct Corners {
    origin: Point,
    opposite: Point,
}

impl TryFrom<Corners> for BoundingBox {
    type Error = GeometryError;

    fn try_from(corners: Corners) -> GeometryResult<Self> {
        Self::try_new(corners.origin, corners.opposite)
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN,
            opposite: DEFAULT_OPPOSITE,
        }
    }
}

impl BoundingBox {
    /// Create a bounding box, validating the corner ordering.
    pub fn try_new(origin: Point, opposite: Point) -> GeometryResult<Self> {
        let finite = [origin.x, origin.y, opposite.x, opposite.y]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            return Err(GeometryError::NonFinite { origin, opposite });
        }
        if opposite.x > origin.x && opposite.y > origin.y {
            Ok(Self { origin, opposite })
        } else {
            Err(GeometryError::Inverted { origin, opposite })
        }
    }

    /// Top-left corner.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Bottom-right corner.
    pub fn opposite(&self) -> Point {
        self.opposite
    }

    pub fn width(&self) -> f64 {
        self.opposite.x - self.origin.x
    }

    pub fn height(&self) -> f64 {
        self.opposite.y - self.origin.y
    }

    pub fn center(&self) -> Point {
        self.origin.midpoint(self.opposite)
    }

    /// The same box moved by `delta`.
    pub fn translated(&self, delta: Vec2) -> GeometryResult<Self> {
        Self::try_new(self.origin + delta, self.opposite + delta)
    }

    /// Express a normalized viewport point relative to this box, where the
    /// origin maps to `(0, 0)` and the opposite corner to `(1, 1)`.
    pub fn relative_point(&self, point: Point) -> Point {
        Point::new(
            (point.x - self.origin.x) / self.width(),
            (point.y - self.origin.y) / self.height(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_box() {
        let bounds = BoundingBox::default();
        assert!((bounds.width() - 0.1).abs() < 1e-12);
        assert!((bounds.height() - 0.1).abs() < 1e-12);
        assert!((bounds.center().x - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_inverted_and_collapsed() {
        let inverted = BoundingBox::try_new(Point::new(0.5, 0.5), Point::new(0.4, 0.6));
        assert!(matches!(inverted, Err(GeometryError::Inverted { .. })));

        let collapsed = BoundingBox::try_new(Point::new(0.5, 0.5), Point::new(0.6, 0.5));
        assert!(matches!(collapsed, Err(GeometryError::Inverted { .. })));

        let nan = BoundingBox::try_new(Point::new(f64::NAN, 0.0), Point::new(1.0, 1.0));
        assert!(matches!(nan, Err(GeometryError::NonFinite { .. })));
    }

    #[test]
    fn test_translated() {
        let bounds = BoundingBox::default();
        let moved = bounds.translated(Vec2::new(0.1, -0.05)).unwrap();
        assert!((moved.origin().x - 0.15).abs() < 1e-12);
        assert!((moved.origin().y - 0.0).abs() < 1e-12);
        assert!((moved.width() - bounds.width()).abs() < 1e-12);

        assert!(matches!(
            bounds.translated(Vec2::new(f64::NAN, 0.0)),
            Err(GeometryError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_relative_point() {
        let bounds = BoundingBox::try_new(Point::new(0.2, 0.4), Point::new(0.6, 0.6)).unwrap();
        let rel = bounds.relative_point(Point::new(0.3, 0.5));
        assert!((rel.x - 0.25).abs() < 1e-12);
        assert!((rel.y - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: BoundingBox = serde_json::from_str(
            r#"{"origin":{"x":0.0,"y":0.0},"opposite":{"x":1.0,"y":1.0}}"#,
        )
        .unwrap();
        assert_eq!(ok.opposite(), Point::new(1.0, 1.0));

        let bad = serde_json::from_str::<BoundingBox>(
            r#"{"origin":{"x":1.0,"y":0.0},"opposite":{"x":0.0,"y":1.0}}"#,
        );
        assert!(bad.is_err());
    }
}
