//! Vello-based renderer implementation.

use crate::renderer::{RenderContext, RenderResult, Renderer};
use ellipsewidget_core::OutlineSnapshot;
use kurbo::{Affine, Stroke};
use vello::Scene;

/// Vello-based renderer for GPU-accelerated 2D graphics.
pub struct VelloRenderer {
    /// The Vello scene being built.
    scene: Scene,
    /// Outlines stroked by the last `build_scene`.
    outlines_drawn: usize,
}

impl Default for VelloRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl VelloRenderer {
    /// Create a new Vello renderer.
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            outlines_drawn: 0,
        }
    }

    /// Get the built scene for rendering.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Take ownership of the scene (resets internal scene).
    pub fn take_scene(&mut self) -> Scene {
        std::mem::take(&mut self.scene)
    }

    /// Number of outlines drawn into the current scene.
    pub fn outlines_drawn(&self) -> usize {
        self.outlines_drawn
    }

    fn render_outline(&mut self, outline: &OutlineSnapshot, transform: Affine) {
        let path = outline.placed_path();
        self.scene.stroke(
            &Stroke::new(outline.line_width),
            transform,
            outline.color,
            None,
            &path,
        );
    }
}

impl Renderer for VelloRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()> {
        ctx.validate()?;
        self.scene.reset();
        self.outlines_drawn = 0;

        // Outlines are placed in logical pixels.
        let transform = Affine::scale(ctx.scale_factor);
        for outline in ctx.overlays.iter().filter(|o| o.visible) {
            self.render_outline(outline, transform);
            self.outlines_drawn += 1;
        }
        log::trace!("Built scene with {} outline(s)", self.outlines_drawn);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ellipsewidget_core::{EllipseGeometry, Renderable2D, ShowMode, Viewport};
    use kurbo::{Point, Size};

    fn geometry() -> EllipseGeometry {
        let mut geometry = EllipseGeometry::with_viewport(Viewport::new(Size::new(200.0, 100.0)));
        geometry.set_bounding_box(Point::new(0.25, 0.25), Point::new(0.75, 0.75));
        geometry
    }

    #[test]
    fn test_renderer_creation() {
        let renderer = VelloRenderer::new();
        assert!(renderer.scene().encoding().is_empty());
        assert_eq!(renderer.outlines_drawn(), 0);
    }

    #[test]
    fn test_build_empty_scene() {
        let mut renderer = VelloRenderer::new();
        let ctx = RenderContext::new(Size::new(800.0, 600.0));
        renderer.build_scene(&ctx).unwrap();
        assert!(renderer.scene().encoding().is_empty());
    }

    #[test]
    fn test_build_scene_with_outline() {
        let mut geometry = geometry();
        let overlay = geometry.render_overlay().unwrap();
        let ctx = RenderContext::new(Size::new(200.0, 100.0))
            .with_scale_factor(2.0)
            .with_overlay(overlay);

        let mut renderer = VelloRenderer::new();
        renderer.build_scene(&ctx).unwrap();
        assert_eq!(renderer.outlines_drawn(), 1);
        assert!(!renderer.scene().encoding().is_empty());

        let scene = renderer.take_scene();
        assert!(!scene.encoding().is_empty());
        assert!(renderer.scene().encoding().is_empty());
    }

    #[test]
    fn test_hidden_outline_skipped() {
        let mut geometry = geometry();
        geometry.set_show_mode(ShowMode::Off);
        geometry.build_representation();
        let ctx = RenderContext::new(Size::new(200.0, 100.0)).with_overlays(geometry.actors());

        let mut renderer = VelloRenderer::new();
        renderer.build_scene(&ctx).unwrap();
        assert_eq!(renderer.outlines_drawn(), 0);
    }

    #[test]
    fn test_invalid_context_rejected() {
        let mut renderer = VelloRenderer::new();
        let ctx = RenderContext::new(Size::new(-1.0, 100.0));
        assert!(renderer.build_scene(&ctx).is_err());
    }
}
