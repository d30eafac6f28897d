//! Renderer trait abstraction.

use ellipsewidget_core::OutlineSnapshot;
use kurbo::Size;
use peniko::Color;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Invalid viewport size: {0:?}")]
    InvalidViewport(Size),
    #[error("Invalid scale factor: {0}")]
    InvalidScaleFactor(f64),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// Outlines to draw, in display pixels.
    pub overlays: Vec<OutlineSnapshot<'a>>,
    /// Viewport size in logical pixels.
    pub viewport_size: Size,
    /// Device pixel ratio (for HiDPI).
    pub scale_factor: f64,
    /// Background color.
    pub background_color: Color,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(viewport_size: Size) -> Self {
        Self {
            overlays: Vec::new(),
            viewport_size,
            scale_factor: 1.0,
            background_color: Color::from_rgba8(0, 0, 0, 255),
        }
    }

    /// Add an outline to draw.
    pub fn with_overlay(mut self, overlay: OutlineSnapshot<'a>) -> Self {
        self.overlays.push(overlay);
        self
    }

    /// Add every outline of a drawable.
    pub fn with_overlays(
        mut self,
        overlays: impl IntoIterator<Item = OutlineSnapshot<'a>>,
    ) -> Self {
        self.overlays.extend(overlays);
        self
    }

    /// Set the scale factor for HiDPI.
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Check that the frame can be drawn at all.
    pub fn validate(&self) -> RenderResult<()> {
        let Size { width, height } = self.viewport_size;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(RendererError::InvalidViewport(self.viewport_size));
        }
        if !self.scale_factor.is_finite() || self.scale_factor <= 0.0 {
            return Err(RendererError::InvalidScaleFactor(self.scale_factor));
        }
        Ok(())
    }
}

/// Trait for rendering backends.
pub trait Renderer: Send + Sync {
    /// Build the scene/command buffer for a frame.
    ///
    /// Called once per frame; invisible overlays are skipped.
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()>;

    /// Get the background color (for clearing).
    fn background_color(&self, ctx: &RenderContext) -> Color {
        ctx.background_color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert!(RenderContext::new(Size::new(800.0, 600.0)).validate().is_ok());
        assert!(matches!(
            RenderContext::new(Size::new(0.0, 600.0)).validate(),
            Err(RendererError::InvalidViewport(_))
        ));
        assert!(matches!(
            RenderContext::new(Size::new(800.0, 600.0))
                .with_scale_factor(f64::NAN)
                .validate(),
            Err(RendererError::InvalidScaleFactor(_))
        ));
    }
}
