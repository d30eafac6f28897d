//! The ellipse representation: logical extent, hit-testing and outline placement.

use crate::bounds::BoundingBox;
use crate::outline::{EllipseOutline, DEFAULT_RESOLUTION};
use crate::render::{OutlineSnapshot, Renderable2D};
use crate::time::TimeStamp;
use crate::viewport::Viewport;
use crate::zone::{hit_test_handle, InteractionZone};
use kurbo::{Point, Rect, Size, Vec2};
use peniko::Color;
use serde::{Deserialize, Serialize};

/// Default hit-test band width in pixels.
pub const DEFAULT_TOLERANCE: f64 = 10.0;
/// Narrowest accepted hit-test band in pixels.
pub const MIN_TOLERANCE: f64 = 1.0;
/// Widest accepted hit-test band in pixels.
pub const MAX_TOLERANCE: f64 = 100.0;

/// Default advisory minimum size in pixels.
pub const DEFAULT_MINIMUM_SIZE: [u32; 2] = [1, 1];
/// Default advisory maximum size in pixels.
pub const DEFAULT_MAXIMUM_SIZE: [u32; 2] = [100_000, 100_000];

/// Smallest interior, as a fraction of the semi-axes, left by the hit-test band.
const MIN_INTERIOR_RATIO: f64 = 0.5;

/// Clamp a requested tolerance into the accepted band.
pub fn clamp_tolerance(tolerance: f64) -> f64 {
    if tolerance.is_nan() {
        DEFAULT_TOLERANCE
    } else {
        tolerance.clamp(MIN_TOLERANCE, MAX_TOLERANCE)
    }
}

/// When the outline is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShowMode {
    /// Never drawn.
    Off,
    /// Always drawn.
    #[default]
    On,
    /// Drawn only while the pointer is over the ellipse or a drag is active.
    ActiveOnHover,
}

/// Stroke appearance of the outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlineStyle {
    /// Normal stroke color.
    pub color: Color,
    /// Stroke color while the pointer is on the boundary band.
    pub highlight_color: Color,
    /// Stroke width in display pixels.
    pub line_width: f64,
}

impl Default for OutlineStyle {
    fn default() -> Self {
        Self {
            color: Color::from_rgba8(255, 255, 255, 255),
            highlight_color: Color::from_rgba8(255, 255, 0, 255),
            line_width: 1.0,
        }
    }
}

/// The ellipse representation.
///
/// Owns the bounding box, the viewport it is placed in, and the outline.
/// Geometry is never mutated by hit-testing; only [`set_bounding_box`] and
/// [`apply_drag`] change the box, and both refuse inverted results.
///
/// [`set_bounding_box`]: EllipseGeometry::set_bounding_box
/// [`apply_drag`]: EllipseGeometry::apply_drag
#[derive(Debug, Clone)]
pub struct EllipseGeometry {
    bounds: BoundingBox,
    viewport: Viewport,
    outline: EllipseOutline,
    tolerance: f64,
    minimum_size: [u32; 2],
    maximum_size: [u32; 2],
    show_mode: ShowMode,
    style: OutlineStyle,
    /// Pointer over the ellipse or drag in progress.
    active: bool,
    /// Pointer on the boundary band.
    highlighted: bool,
    /// Last region-select position relative to the box.
    selection_point: Point,
    mtime: TimeStamp,
}

impl Default for EllipseGeometry {
    fn default() -> Self {
        Self::new()
    }
}

impl EllipseGeometry {
    /// Create a geometry with the default box in a default-sized window.
    pub fn new() -> Self {
        Self::with_viewport(Viewport::default())
    }

    /// Create a geometry placed in the given viewport.
    pub fn with_viewport(viewport: Viewport) -> Self {
        Self {
            bounds: BoundingBox::default(),
            viewport,
            outline: EllipseOutline::new(DEFAULT_RESOLUTION),
            tolerance: DEFAULT_TOLERANCE,
            minimum_size: DEFAULT_MINIMUM_SIZE,
            maximum_size: DEFAULT_MAXIMUM_SIZE,
            show_mode: ShowMode::default(),
            style: OutlineStyle::default(),
            active: false,
            highlighted: false,
            selection_point: Point::ZERO,
            mtime: TimeStamp::now(),
        }
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.bounds
    }

    /// Replace the box. Inverted or collapsed boxes are ignored and `false`
    /// is returned; the previous box stays in place.
    pub fn set_bounding_box(&mut self, origin: Point, opposite: Point) -> bool {
        match BoundingBox::try_new(origin, opposite) {
            Ok(bounds) => {
                self.bounds = bounds;
                self.modified();
                true
            }
            Err(e) => {
                log::debug!("Rejected bounding box update: {}", e);
                false
            }
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Place the geometry in a different viewport.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        // The new viewport's stamp may predate the last build.
        self.modified();
    }

    /// Resize the window the viewport belongs to.
    pub fn set_window_size(&mut self, window: Size) -> bool {
        self.viewport.set_window_size(window)
    }

    /// The box in display pixels.
    pub fn display_bounds(&self) -> Rect {
        Rect::from_points(
            self.viewport.normalized_viewport_to_display(self.bounds.origin()),
            self.viewport.normalized_viewport_to_display(self.bounds.opposite()),
        )
    }

    /// Classify a display point against the ellipse.
    ///
    /// Two offset ellipses, one inflated and one deflated by `tolerance`
    /// pixels, bound the edge band. Points in the band are refined into a
    /// handle zone when strictly closer than `tolerance` to one of the four
    /// cardinal points, testing top, right, bottom, left in that order.
    /// The deflated ellipse never shrinks below half the box, so small
    /// ellipses keep a grabbable interior. Non-finite points are `Outside`.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> InteractionZone {
        if !(point.x.is_finite() && point.y.is_finite()) {
            return InteractionZone::Outside;
        }
        let tolerance = if tolerance.is_finite() {
            tolerance.max(0.0)
        } else {
            0.0
        };
        let bounds = self.display_bounds();
        let center = bounds.center();
        let a = bounds.width() / 2.0;
        let b = bounds.height() / 2.0;

        let outer = normalized_distance(point, center, a + tolerance, b + tolerance);
        if outer > 1.0 {
            return InteractionZone::Outside;
        }
        let inner = normalized_distance(
            point,
            center,
            (a - tolerance).max(a * MIN_INTERIOR_RATIO),
            (b - tolerance).max(b * MIN_INTERIOR_RATIO),
        );
        if inner < 1.0 {
            return InteractionZone::Inside;
        }

        hit_test_handle(bounds, point, tolerance)
            .map_or(InteractionZone::Edge, InteractionZone::from)
    }

    /// [`hit_test`](Self::hit_test) with the configured tolerance.
    pub fn hit_test_configured(&self, point: Point) -> InteractionZone {
        self.hit_test(point, self.tolerance)
    }

    /// Apply a pointer displacement (display pixels) for a drag that started
    /// in `zone`. Handles move one edge of the box; the interior translates
    /// the whole box when `moving` is set; anything else is ignored.
    ///
    /// Returns `true` if a new box was committed.
    pub fn apply_drag(&mut self, zone: InteractionZone, moving: bool, device_delta: Vec2) -> bool {
        if device_delta == Vec2::ZERO {
            return false;
        }
        let delta = self.viewport.display_delta_to_normalized(device_delta);
        let mut origin = self.bounds.origin();
        let mut opposite = self.bounds.opposite();

        match zone {
            InteractionZone::Top => origin.y += delta.y,
            InteractionZone::Right => opposite.x += delta.x,
            InteractionZone::Bottom => opposite.y += delta.y,
            InteractionZone::Left => origin.x += delta.x,
            InteractionZone::Inside if moving => {
                return match self.bounds.translated(delta) {
                    Ok(moved) => self.set_bounding_box(moved.origin(), moved.opposite()),
                    Err(e) => {
                        log::debug!("Rejected translation: {}", e);
                        false
                    }
                };
            }
            _ => return false,
        }

        self.set_bounding_box(origin, opposite)
    }

    /// Last region-select position, with the box spanning `(0,0)..(1,1)`.
    pub fn selection_point(&self) -> Point {
        self.selection_point
    }

    /// Record a region-select at a display point and return it relative to the box.
    pub fn set_selection_point(&mut self, device_point: Point) -> Point {
        let normalized = self.viewport.display_to_normalized_viewport(device_point);
        self.selection_point = self.bounds.relative_point(normalized);
        self.selection_point
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Set the hit-test band width. Returns the value actually applied.
    pub fn set_tolerance(&mut self, tolerance: f64) -> f64 {
        let clamped = clamp_tolerance(tolerance);
        if clamped != tolerance {
            log::warn!("Tolerance {} clamped to {}", tolerance, clamped);
        }
        if clamped != self.tolerance {
            self.tolerance = clamped;
            self.modified();
        }
        clamped
    }

    pub fn resolution(&self) -> usize {
        self.outline.resolution()
    }

    /// Set the outline vertex count. Returns the value actually applied.
    pub fn set_resolution(&mut self, resolution: usize) -> usize {
        let before = self.outline.resolution();
        let applied = self.outline.set_resolution(resolution);
        if applied != before {
            self.modified();
        }
        applied
    }

    pub fn minimum_size(&self) -> [u32; 2] {
        self.minimum_size
    }

    /// Advisory lower size bound in pixels; each axis is at least 1.
    pub fn set_minimum_size(&mut self, size: [u32; 2]) {
        let clamped = size.map(|v| v.max(1));
        if clamped != size {
            log::warn!("Minimum size {:?} clamped to {:?}", size, clamped);
        }
        self.minimum_size = clamped;
        self.maximum_size = [
            self.maximum_size[0].max(clamped[0]),
            self.maximum_size[1].max(clamped[1]),
        ];
    }

    pub fn maximum_size(&self) -> [u32; 2] {
        self.maximum_size
    }

    /// Advisory upper size bound in pixels; never below the minimum size.
    pub fn set_maximum_size(&mut self, size: [u32; 2]) {
        let clamped = [
            size[0].max(self.minimum_size[0]),
            size[1].max(self.minimum_size[1]),
        ];
        if clamped != size {
            log::warn!("Maximum size {:?} clamped to {:?}", size, clamped);
        }
        self.maximum_size = clamped;
    }

    pub fn show_mode(&self) -> ShowMode {
        self.show_mode
    }

    pub fn set_show_mode(&mut self, show_mode: ShowMode) {
        self.show_mode = show_mode;
    }

    pub fn style(&self) -> &OutlineStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: OutlineStyle) {
        self.style = style;
        self.modified();
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns `true` if the flag changed.
    pub fn set_active(&mut self, active: bool) -> bool {
        std::mem::replace(&mut self.active, active) != active
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    /// Returns `true` if the flag changed.
    pub fn set_highlighted(&mut self, highlighted: bool) -> bool {
        std::mem::replace(&mut self.highlighted, highlighted) != highlighted
    }

    /// Whether the show policy currently allows drawing the outline.
    pub fn is_outline_visible(&self) -> bool {
        match self.show_mode {
            ShowMode::Off => false,
            ShowMode::On => true,
            ShowMode::ActiveOnHover => self.active,
        }
    }

    /// Last modification time of the box or settings.
    pub fn mtime(&self) -> TimeStamp {
        self.mtime
    }

    /// Mark the geometry as changed so the next build re-places the outline.
    pub fn modified(&mut self) {
        self.mtime.modified();
    }

    pub fn outline(&self) -> &EllipseOutline {
        &self.outline
    }

    /// Bring the outline up to date.
    ///
    /// Samples the unit circle if it has not been negotiated, then re-places
    /// it only if the geometry or the viewport changed since the last build.
    /// Returns `true` if the placement was recomputed.
    pub fn build_representation(&mut self) -> bool {
        let negotiated = self.outline.ensure_negotiated();
        let build_time = self.outline.build_time();
        if !negotiated && self.mtime <= build_time && self.viewport.mtime() <= build_time {
            return false;
        }
        let display_bounds = self.display_bounds();
        self.outline.place(display_bounds);
        log::trace!("Placed ellipse outline at {:?}", display_bounds);
        true
    }

    /// Update the window size and bring the outline up to date.
    pub fn rebuild_outline(&mut self, window: Size) -> bool {
        self.viewport.set_window_size(window);
        self.build_representation()
    }

    fn snapshot(&self) -> OutlineSnapshot<'_> {
        OutlineSnapshot {
            vertices: self.outline.vertices(),
            transform: self.outline.transform(),
            color: if self.highlighted {
                self.style.highlight_color
            } else {
                self.style.color
            },
            line_width: self.style.line_width,
            visible: self.is_outline_visible(),
        }
    }
}

impl Renderable2D for EllipseGeometry {
    fn actors(&self) -> Vec<OutlineSnapshot<'_>> {
        vec![self.snapshot()]
    }

    fn release_resources(&mut self) {
        log::debug!("Releasing ellipse outline resources");
        self.outline.invalidate();
    }

    fn render_overlay(&mut self) -> Option<OutlineSnapshot<'_>> {
        self.build_representation();
        if self.is_outline_visible() {
            Some(self.snapshot())
        } else {
            None
        }
    }

    fn has_translucent_geometry(&mut self) -> bool {
        self.build_representation();
        self.is_outline_visible() && self.snapshot().is_translucent()
    }
}

/// `((x - cx) / a)² + ((y - cy) / b)²`
fn normalized_distance(point: Point, center: Point, a: f64, b: f64) -> f64 {
    let dx = (point.x - center.x) / a;
    let dy = (point.y - center.y) / b;
    dx * dx + dy * dy
}
