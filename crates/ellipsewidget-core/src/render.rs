//! Renderable surface exposed to a rasterizer.

use crate::outline::{loop_indices, polyline_path};
use kurbo::{Affine, BezPath, Point};
use peniko::Color;

/// Immutable view of an outline, ready to be drawn.
#[derive(Debug, Clone)]
pub struct OutlineSnapshot<'a> {
    /// Unit-circle samples in the canonical square.
    pub vertices: &'a [Point],
    /// Canonical square to display pixels.
    pub transform: Affine,
    /// Stroke color.
    pub color: Color,
    /// Stroke width in display pixels.
    pub line_width: f64,
    /// Whether the show policy currently allows drawing.
    pub visible: bool,
}

impl OutlineSnapshot<'_> {
    /// Closed-loop vertex order.
    pub fn indices(&self) -> impl Iterator<Item = usize> {
        loop_indices(self.vertices.len())
    }

    /// The outline in canonical coordinates.
    pub fn to_path(&self) -> BezPath {
        polyline_path(self.vertices)
    }

    /// The outline in display pixels.
    pub fn placed_path(&self) -> BezPath {
        let mut path = self.to_path();
        path.apply_affine(self.transform);
        path
    }

    /// Check if drawing needs blending.
    pub fn is_translucent(&self) -> bool {
        self.color.components[3] < 1.0
    }
}

/// Something that can be drawn as a 2D overlay.
pub trait Renderable2D {
    /// Snapshots of every drawable part, visible or not.
    fn actors(&self) -> Vec<OutlineSnapshot<'_>>;

    /// Drop cached drawing resources; they are rebuilt on the next render.
    fn release_resources(&mut self);

    /// Bring the drawable up to date and return it if it should be drawn.
    fn render_overlay(&mut self) -> Option<OutlineSnapshot<'_>>;

    /// Bring the drawable up to date and report whether it needs blending.
    fn has_translucent_geometry(&mut self) -> bool;
}
