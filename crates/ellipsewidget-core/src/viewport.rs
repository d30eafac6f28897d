//! Viewport module for display/viewport coordinate conversion.
//!
//! Four coordinate systems are involved, all y-down with the origin at the
//! top-left corner:
//! - display: device pixels of the whole window;
//! - normalized display: the window mapped to `0..1` on both axes;
//! - viewport: pixels relative to the viewport region's corner;
//! - normalized viewport: the viewport region mapped to `0..1`.

use crate::time::TimeStamp;
use kurbo::{Point, Rect, Size, Vec2};

/// Window size used when none has been provided yet.
pub const DEFAULT_WINDOW_SIZE: Size = Size::new(300.0, 300.0);

/// Full-window viewport region in normalized display coordinates.
pub const FULL_REGION: Rect = Rect::new(0.0, 0.0, 1.0, 1.0);

/// A render window and the viewport region the widget lives in.
#[derive(Debug, Clone)]
pub struct Viewport {
    /// Window size in device pixels.
    window: Size,
    /// Viewport region in normalized display coordinates.
    region: Rect,
    /// Last time the window size or region changed.
    mtime: TimeStamp,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_SIZE)
    }
}

impl Viewport {
    /// Create a full-window viewport for a window of the given size.
    ///
    /// Sizes that are not positive and finite fall back to the default size.
    pub fn new(window: Size) -> Self {
        let window = if is_valid_window(window) {
            window
        } else {
            DEFAULT_WINDOW_SIZE
        };
        Self {
            window,
            region: FULL_REGION,
            mtime: TimeStamp::now(),
        }
    }

    /// Restrict the viewport to a sub-region of the window.
    pub fn with_region(mut self, region: Rect) -> Self {
        self.set_region(region);
        self
    }

    /// Window size in device pixels.
    pub fn window_size(&self) -> Size {
        self.window
    }

    /// Viewport region in normalized display coordinates.
    pub fn region(&self) -> Rect {
        self.region
    }

    /// Last modification time of the window size or region.
    pub fn mtime(&self) -> TimeStamp {
        self.mtime
    }

    /// Resize the window. Returns `true` if the size actually changed.
    pub fn set_window_size(&mut self, window: Size) -> bool {
        if !is_valid_window(window) {
            log::debug!("Ignoring invalid window size {:?}", window);
            return false;
        }
        if window == self.window {
            return false;
        }
        self.window = window;
        self.mtime.modified();
        true
    }

    /// Change the viewport region. Returns `true` if the region changed.
    ///
    /// The region is intersected with the unit square; an empty result is
    /// rejected and the previous region kept.
    pub fn set_region(&mut self, region: Rect) -> bool {
        let region = region.abs().intersect(FULL_REGION);
        if region.width() <= 0.0 || region.height() <= 0.0 {
            log::debug!("Ignoring empty viewport region {:?}", region);
            return false;
        }
        if region == self.region {
            return false;
        }
        self.region = region;
        self.mtime.modified();
        true
    }

    /// Size of the viewport region in device pixels.
    pub fn pixel_size(&self) -> Size {
        Size::new(
            self.region.width() * self.window.width,
            self.region.height() * self.window.height,
        )
    }

    /// Convert a display point to normalized display coordinates.
    pub fn display_to_normalized_display(&self, point: Point) -> Point {
        Point::new(point.x / self.window.width, point.y / self.window.height)
    }

    /// Convert a normalized display point to viewport pixels.
    pub fn normalized_display_to_viewport(&self, point: Point) -> Point {
        Point::new(
            (point.x - self.region.x0) * self.window.width,
            (point.y - self.region.y0) * self.window.height,
        )
    }

    /// Convert viewport pixels to normalized viewport coordinates.
    pub fn viewport_to_normalized_viewport(&self, point: Point) -> Point {
        let size = self.pixel_size();
        Point::new(point.x / size.width, point.y / size.height)
    }

    /// Convert a display point all the way to normalized viewport coordinates.
    pub fn display_to_normalized_viewport(&self, point: Point) -> Point {
        let normalized = self.display_to_normalized_display(point);
        let viewport = self.normalized_display_to_viewport(normalized);
        self.viewport_to_normalized_viewport(viewport)
    }

    /// Convert a normalized viewport point to display pixels.
    pub fn normalized_viewport_to_display(&self, point: Point) -> Point {
        Point::new(
            (self.region.x0 + point.x * self.region.width()) * self.window.width,
            (self.region.y0 + point.y * self.region.height()) * self.window.height,
        )
    }

    /// Convert a displacement in display pixels to normalized viewport units.
    pub fn display_delta_to_normalized(&self, delta: Vec2) -> Vec2 {
        let size = self.pixel_size();
        Vec2::new(delta.x / size.width, delta.y / size.height)
    }
}

fn is_valid_window(window: Size) -> bool {
    window.width.is_finite()
        && window.height.is_finite()
        && window.width > 0.0
        && window.height > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_window_round_trip() {
        let viewport = Viewport::new(Size::new(200.0, 100.0));
        let normalized = viewport.display_to_normalized_viewport(Point::new(50.0, 25.0));
        assert!((normalized.x - 0.25).abs() < f64::EPSILON);
        assert!((normalized.y - 0.25).abs() < f64::EPSILON);

        let back = viewport.normalized_viewport_to_display(normalized);
        assert!((back.x - 50.0).abs() < 1e-9);
        assert!((back.y - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_sub_region_conversion() {
        let viewport =
            Viewport::new(Size::new(200.0, 200.0)).with_region(Rect::new(0.5, 0.0, 1.0, 0.5));
        // The region's top-left corner is display (100, 0).
        let corner = viewport.display_to_normalized_viewport(Point::new(100.0, 0.0));
        assert!(corner.x.abs() < 1e-9);
        assert!(corner.y.abs() < 1e-9);

        let center = viewport.normalized_viewport_to_display(Point::new(0.5, 0.5));
        assert!((center.x - 150.0).abs() < 1e-9);
        assert!((center.y - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_delta_conversion() {
        let viewport = Viewport::new(Size::new(100.0, 50.0));
        let delta = viewport.display_delta_to_normalized(Vec2::new(10.0, 10.0));
        assert!((delta.x - 0.1).abs() < f64::EPSILON);
        assert!((delta.y - 0.2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_resize_bumps_mtime_only_on_change() {
        let mut viewport = Viewport::new(Size::new(100.0, 100.0));
        let before = viewport.mtime();

        assert!(!viewport.set_window_size(Size::new(100.0, 100.0)));
        assert_eq!(viewport.mtime(), before);

        assert!(viewport.set_window_size(Size::new(120.0, 100.0)));
        assert!(viewport.mtime() > before);
    }

    #[test]
    fn test_invalid_sizes_rejected() {
        let mut viewport = Viewport::new(Size::new(0.0, 10.0));
        assert_eq!(viewport.window_size(), DEFAULT_WINDOW_SIZE);

        assert!(!viewport.set_window_size(Size::new(-1.0, 10.0)));
        assert!(!viewport.set_window_size(Size::new(f64::NAN, 10.0)));
        assert!(!viewport.set_region(Rect::new(2.0, 2.0, 3.0, 3.0)));
        assert_eq!(viewport.region(), FULL_REGION);
    }
}
