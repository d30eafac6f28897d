//! Notifications and event dispositions.

use super::cursor::CursorShape;
use crate::bounds::BoundingBox;
use crate::zone::{InteractionZone, ZoneCategory};
use kurbo::Point;

/// Notification emitted by the controller.
///
/// Events are collected and must be polled via `poll_events()`.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetEvent {
    /// A drag began in `zone`.
    StartInteraction { zone: InteractionZone },
    /// A drag step changed the box.
    Interaction { bounds: BoundingBox },
    /// The drag ended.
    EndInteraction { bounds: BoundingBox },
    /// The pointer moved into a different zone category while idle.
    HoverChanged { from: ZoneCategory, to: ZoneCategory },
    /// The interior was clicked; `point` is relative to the box (`0..1`).
    RegionSelected { point: Point },
    /// The cursor hint changed.
    CursorChanged(CursorShape),
    /// Something visible changed; the host should re-render.
    RenderRequested,
}

/// Whether an event was used by the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventDisposition {
    /// The widget acted on the event; the host should not forward it.
    Consumed,
    /// The widget ignored the event (or only observed it).
    PassThrough,
}

impl EventDisposition {
    pub fn is_consumed(self) -> bool {
        matches!(self, Self::Consumed)
    }
}
