//! Interaction state machine.

use super::cursor::{cursor_for, CursorShape};
use super::events::{EventDisposition, WidgetEvent};
use super::state::WidgetState;
use crate::geometry::{EllipseGeometry, ShowMode};
use crate::input::{MouseButton, PointerEvent};
use crate::zone::{InteractionZone, ZoneCategory};
use kurbo::Point;

/// Maps pointer events onto an [`EllipseGeometry`].
///
/// The controller never owns the geometry; every call receives it. Pressing
/// the select button on the ellipse starts a resize (or a region select on
/// the interior), pressing the translate button starts a move, and
/// releasing either ends the drag.
#[derive(Debug, Clone)]
pub struct EllipseController {
    state: WidgetState,
    /// Interior drags translate the whole box.
    moving: bool,
    enabled: bool,
    selectable: bool,
    resizable: bool,
    select_button: MouseButton,
    translate_button: MouseButton,
    /// Zone the current drag started in.
    drag_zone: InteractionZone,
    /// Zone under the pointer at the last idle hit-test.
    hover_zone: InteractionZone,
    /// Display position the next drag delta is measured from.
    anchor: Option<Point>,
    cursor: CursorShape,
    events: Vec<WidgetEvent>,
}

impl Default for EllipseController {
    fn default() -> Self {
        Self::new()
    }
}

impl EllipseController {
    /// Create an enabled, selectable, resizable controller.
    pub fn new() -> Self {
        Self {
            state: WidgetState::Idle,
            moving: false,
            enabled: true,
            selectable: true,
            resizable: true,
            select_button: MouseButton::Left,
            translate_button: MouseButton::Middle,
            drag_zone: InteractionZone::Outside,
            hover_zone: InteractionZone::Outside,
            anchor: None,
            cursor: CursorShape::Default,
            events: Vec::new(),
        }
    }

    pub fn state(&self) -> WidgetState {
        self.state
    }

    /// Check if an interior drag translates the box.
    pub fn is_moving(&self) -> bool {
        self.moving
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable event handling. Disabling drops any drag in progress.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.reset_drag();
            self.hover_zone = InteractionZone::Outside;
        }
    }

    pub fn is_selectable(&self) -> bool {
        self.selectable
    }

    /// Whether interior clicks raise [`WidgetEvent::RegionSelected`].
    /// A non-selectable widget drags its interior with the select button.
    pub fn set_selectable(&mut self, selectable: bool) {
        self.selectable = selectable;
    }

    pub fn is_resizable(&self) -> bool {
        self.resizable
    }

    /// Whether drags that start outside the interior are honored.
    pub fn set_resizable(&mut self, resizable: bool) {
        self.resizable = resizable;
    }

    pub fn select_button(&self) -> MouseButton {
        self.select_button
    }

    pub fn translate_button(&self) -> MouseButton {
        self.translate_button
    }

    /// Assign the select and translate buttons. Identical buttons are
    /// rejected and `false` is returned.
    pub fn set_buttons(&mut self, select: MouseButton, translate: MouseButton) -> bool {
        if select == translate {
            log::warn!(
                "Select and translate buttons must differ, keeping {:?}/{:?}",
                self.select_button,
                self.translate_button
            );
            return false;
        }
        self.select_button = select;
        self.translate_button = translate;
        true
    }

    /// Zone the current drag started in (`Outside` when idle).
    pub fn drag_zone(&self) -> InteractionZone {
        self.drag_zone
    }

    /// Zone under the pointer at the last idle hit-test.
    pub fn hover_zone(&self) -> InteractionZone {
        self.hover_zone
    }

    pub fn cursor(&self) -> CursorShape {
        self.cursor
    }

    /// Take all notifications emitted since the last poll.
    pub fn poll_events(&mut self) -> Vec<WidgetEvent> {
        std::mem::take(&mut self.events)
    }

    /// Process one pointer event against `geometry`.
    pub fn handle_event(
        &mut self,
        geometry: &mut EllipseGeometry,
        event: &PointerEvent,
    ) -> EventDisposition {
        if !self.enabled {
            return EventDisposition::PassThrough;
        }
        match *event {
            PointerEvent::Down { position, button } => self.on_press(geometry, position, button),
            PointerEvent::Move { position } if self.state.is_selected() => {
                self.on_drag(geometry, position)
            }
            PointerEvent::Move { position } => self.on_hover(geometry, position),
            PointerEvent::Up { position, button } => self.on_release(geometry, position, button),
        }
    }

    fn on_press(
        &mut self,
        geometry: &mut EllipseGeometry,
        position: Point,
        button: MouseButton,
    ) -> EventDisposition {
        // One drag at a time.
        if self.state.is_selected() {
            return EventDisposition::PassThrough;
        }
        let translate = button == self.translate_button;
        if !translate && button != self.select_button {
            return EventDisposition::PassThrough;
        }

        let zone = geometry.hit_test_configured(position);
        self.hover_zone = zone;
        if zone == InteractionZone::Outside {
            return EventDisposition::PassThrough;
        }

        self.state = WidgetState::Selected;
        self.moving = translate || self.interior_drags(zone);
        self.drag_zone = zone;
        self.anchor = Some(position);
        self.request_cursor(zone);
        self.sync_feedback(geometry, zone);

        if !translate && self.selectable && zone == InteractionZone::Inside {
            let point = geometry.set_selection_point(position);
            self.events.push(WidgetEvent::RegionSelected { point });
        }

        log::debug!("Drag started in {:?} (moving: {})", zone, self.moving);
        self.events.push(WidgetEvent::StartInteraction { zone });
        EventDisposition::Consumed
    }

    fn on_hover(&mut self, geometry: &mut EllipseGeometry, position: Point) -> EventDisposition {
        let zone = geometry.hit_test_configured(position);
        let before = std::mem::replace(&mut self.hover_zone, zone);
        self.moving = self.interior_drags(zone);
        self.request_cursor(zone);

        if before.category() != zone.category() {
            self.events.push(WidgetEvent::HoverChanged {
                from: before.category(),
                to: zone.category(),
            });
        }
        self.sync_feedback(geometry, zone);

        // Hovering never claims the event.
        EventDisposition::PassThrough
    }

    fn on_drag(&mut self, geometry: &mut EllipseGeometry, position: Point) -> EventDisposition {
        if !self.resizable && self.drag_zone != InteractionZone::Inside {
            return EventDisposition::Consumed;
        }
        let Some(anchor) = self.anchor else {
            return EventDisposition::PassThrough;
        };

        // A rejected step keeps the anchor, so travel accumulates until the
        // box becomes valid again.
        if geometry.apply_drag(self.drag_zone, self.moving, position - anchor) {
            self.anchor = Some(position);
            self.events.push(WidgetEvent::Interaction {
                bounds: geometry.bounding_box(),
            });
            self.events.push(WidgetEvent::RenderRequested);
        }
        EventDisposition::Consumed
    }

    fn on_release(
        &mut self,
        geometry: &mut EllipseGeometry,
        position: Point,
        button: MouseButton,
    ) -> EventDisposition {
        if !self.state.is_selected() {
            return EventDisposition::PassThrough;
        }
        if button != self.select_button && button != self.translate_button {
            return EventDisposition::PassThrough;
        }

        self.reset_drag();
        let bounds = geometry.bounding_box();
        log::debug!(
            "Drag ended with origin {:?}, opposite {:?}",
            bounds.origin(),
            bounds.opposite()
        );
        self.events.push(WidgetEvent::EndInteraction { bounds });

        // The box may have moved out from under the pointer.
        self.on_hover(geometry, position);
        EventDisposition::Consumed
    }

    fn reset_drag(&mut self) {
        self.state = WidgetState::Idle;
        self.moving = false;
        self.anchor = None;
        self.drag_zone = InteractionZone::Outside;
    }

    fn interior_drags(&self, zone: InteractionZone) -> bool {
        !self.selectable && zone == InteractionZone::Inside
    }

    fn request_cursor(&mut self, zone: InteractionZone) {
        let cursor = cursor_for(zone, self.moving, self.resizable);
        if cursor != self.cursor {
            self.cursor = cursor;
            self.events.push(WidgetEvent::CursorChanged(cursor));
        }
    }

    /// Update hover highlight and activity, requesting a render when either
    /// changes what is drawn.
    fn sync_feedback(&mut self, geometry: &mut EllipseGeometry, zone: InteractionZone) {
        let active = zone != InteractionZone::Outside || self.state.is_selected();
        let highlighted = zone.category() == ZoneCategory::Boundary;

        let active_changed = geometry.set_active(active);
        let highlight_changed = geometry.set_highlighted(highlighted);
        let redraw = (active_changed && geometry.show_mode() == ShowMode::ActiveOnHover)
            || (highlight_changed && geometry.is_outline_visible());
        if redraw {
            self.events.push(WidgetEvent::RenderRequested);
        }
    }
}
