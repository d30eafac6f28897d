//! Renderable ellipse outline.
//!
//! The outline separates shape resolution from placement: the unit-circle
//! samples are computed once per negotiation, while the placement transform
//! is recomputed whenever the box or the window changes.

use crate::time::TimeStamp;
use kurbo::{Affine, BezPath, Point, Rect, Size};
use std::f64::consts::TAU;

/// Default number of outline vertices.
pub const DEFAULT_RESOLUTION: usize = 50;
/// Fewest vertices that still enclose an area.
pub const MIN_RESOLUTION: usize = 3;
/// Upper bound on outline vertices.
pub const MAX_RESOLUTION: usize = 1024;

/// Size of the canonical square the unit circle is sampled in.
pub const CANONICAL_SIZE: Size = Size::new(1.0, 1.0);

/// Clamp a requested resolution into the supported range.
pub fn clamp_resolution(resolution: usize) -> usize {
    resolution.clamp(MIN_RESOLUTION, MAX_RESOLUTION)
}

/// Closed polyline approximating the ellipse, plus its placement.
#[derive(Debug, Clone)]
pub struct EllipseOutline {
    resolution: usize,
    /// Unit-circle samples inside the canonical square.
    vertices: Vec<Point>,
    /// Whether `vertices` reflects the current resolution.
    negotiated: bool,
    /// Number of times the samples have been (re)computed.
    generation: u64,
    /// Canonical square to display pixels.
    transform: Affine,
    /// When the placement was last computed.
    build_time: TimeStamp,
}

impl Default for EllipseOutline {
    fn default() -> Self {
        Self::new(DEFAULT_RESOLUTION)
    }
}

impl EllipseOutline {
    /// Create an outline that will sample `resolution` vertices on first use.
    pub fn new(resolution: usize) -> Self {
        Self {
            resolution: clamp_resolution(resolution),
            vertices: Vec::new(),
            negotiated: false,
            generation: 0,
            transform: Affine::IDENTITY,
            build_time: TimeStamp::new(),
        }
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Change the resolution. Returns the value actually applied.
    ///
    /// A different resolution discards the current samples.
    pub fn set_resolution(&mut self, resolution: usize) -> usize {
        let clamped = clamp_resolution(resolution);
        if clamped != resolution {
            log::warn!("Outline resolution {} clamped to {}", resolution, clamped);
        }
        if clamped != self.resolution {
            self.resolution = clamped;
            self.invalidate();
        }
        clamped
    }

    pub fn is_negotiated(&self) -> bool {
        self.negotiated
    }

    /// Sample the unit circle if that has not happened for this resolution.
    /// Returns `true` if sampling was performed.
    pub fn ensure_negotiated(&mut self) -> bool {
        if self.negotiated {
            return false;
        }
        self.vertices = (0..self.resolution)
            .map(|i| {
                let angle = TAU * i as f64 / self.resolution as f64;
                Point::new(0.5 * angle.cos() + 0.5, 0.5 * angle.sin() + 0.5)
            })
            .collect();
        self.negotiated = true;
        self.generation += 1;
        log::debug!("Sampled {} outline vertices", self.resolution);
        true
    }

    /// Drop the samples and the placement; the next build starts over.
    pub fn invalidate(&mut self) {
        self.vertices.clear();
        self.negotiated = false;
        self.build_time = TimeStamp::new();
    }

    /// Unit-circle samples in the canonical square.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// How many times the samples have been computed.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Canonical square to display pixels.
    pub fn transform(&self) -> Affine {
        self.transform
    }

    pub fn build_time(&self) -> TimeStamp {
        self.build_time
    }

    /// Place the canonical square onto `display_bounds` and stamp the build.
    pub fn place(&mut self, display_bounds: Rect) {
        let sx = display_bounds.width() / CANONICAL_SIZE.width;
        let sy = display_bounds.height() / CANONICAL_SIZE.height;
        self.transform = Affine::translate((display_bounds.x0, display_bounds.y0))
            * Affine::scale_non_uniform(sx, sy);
        self.build_time.modified();
    }
}

/// Closed-loop vertex order: every vertex once, then back to the first.
pub fn loop_indices(count: usize) -> impl Iterator<Item = usize> {
    (0..count).chain((count > 0).then_some(0))
}

/// Closed polyline through `vertices`.
pub fn polyline_path(vertices: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let mut indices = loop_indices(vertices.len());
    if let Some(first) = indices.next() {
        path.move_to(vertices[first]);
        for i in indices {
            path.line_to(vertices[i]);
        }
        path.close_path();
    }
    path
}
