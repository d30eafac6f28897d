//! The composed ellipse widget.

use super::controller::EllipseController;
use super::events::{EventDisposition, WidgetEvent};
use super::state::WidgetState;
use crate::config::WidgetConfig;
use crate::geometry::EllipseGeometry;
use crate::input::PointerEvent;

/// Anything that reacts to pointer input.
pub trait InteractiveWidget {
    /// Handle one pointer event, reporting whether it was used.
    fn on_event(&mut self, event: &PointerEvent) -> EventDisposition;
}

/// One controller driving one geometry.
#[derive(Debug, Clone, Default)]
pub struct EllipseWidget {
    controller: EllipseController,
    geometry: EllipseGeometry,
}

impl EllipseWidget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing geometry with a default controller.
    pub fn with_geometry(geometry: EllipseGeometry) -> Self {
        Self {
            controller: EllipseController::new(),
            geometry,
        }
    }

    /// Build a widget from a config. Out-of-range values are clamped.
    pub fn from_config(config: &WidgetConfig) -> Self {
        let config = config.clone().sanitized();

        let mut geometry = EllipseGeometry::new();
        let bounds = config.bounding_box;
        geometry.set_bounding_box(bounds.origin(), bounds.opposite());
        geometry.set_resolution(config.resolution);
        geometry.set_tolerance(config.tolerance);
        geometry.set_minimum_size(config.minimum_size);
        geometry.set_maximum_size(config.maximum_size);
        geometry.set_show_mode(config.show_mode);
        geometry.set_style(config.style.into());

        let mut controller = EllipseController::new();
        controller.set_selectable(config.selectable);
        controller.set_resizable(config.resizable);
        controller.set_buttons(config.select_button, config.translate_button);

        Self {
            controller,
            geometry,
        }
    }

    pub fn controller(&self) -> &EllipseController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut EllipseController {
        &mut self.controller
    }

    pub fn geometry(&self) -> &EllipseGeometry {
        &self.geometry
    }

    pub fn geometry_mut(&mut self) -> &mut EllipseGeometry {
        &mut self.geometry
    }

    pub fn state(&self) -> WidgetState {
        self.controller.state()
    }

    pub fn is_enabled(&self) -> bool {
        self.controller.is_enabled()
    }

    /// Enable or disable the widget. Disabling cancels any drag and clears
    /// hover feedback.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.controller.set_enabled(enabled);
        if !enabled {
            self.geometry.set_active(false);
            self.geometry.set_highlighted(false);
        }
    }

    /// Take all notifications emitted since the last poll.
    pub fn poll_events(&mut self) -> Vec<WidgetEvent> {
        self.controller.poll_events()
    }
}

impl InteractiveWidget for EllipseWidget {
    fn on_event(&mut self, event: &PointerEvent) -> EventDisposition {
        self.controller.handle_event(&mut self.geometry, event)
    }
}
