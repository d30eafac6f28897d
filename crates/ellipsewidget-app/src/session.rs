//! Scripted pointer sessions.

use crate::app::AppResult;
use ellipsewidget_core::{
    BoundingBox, EllipseWidget, InteractiveWidget, MouseButton, PointerEvent, WidgetEvent,
};
use kurbo::Size;
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_window() -> Size {
    Size::new(300.0, 300.0)
}

/// A window size plus the pointer events to replay in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default = "default_window")]
    pub window: Size,
    #[serde(default)]
    pub events: Vec<PointerEvent>,
}

/// Outcome of a replay.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionReport {
    /// Events the widget consumed.
    pub consumed: usize,
    /// Every notification, in emission order.
    pub notifications: Vec<WidgetEvent>,
    /// Box after the last event.
    pub bounds: BoundingBox,
}

impl Session {
    /// Read a session from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let session: Self = serde_json::from_str(&json)?;
        log::info!("Loaded {} event(s) from {}", session.events.len(), path.display());
        Ok(session)
    }

    /// Hover onto the default box, translate it, then stretch its top edge.
    pub fn builtin() -> Self {
        Self {
            window: default_window(),
            events: vec![
                PointerEvent::moved(30.0, 30.0),
                PointerEvent::down(30.0, 30.0, MouseButton::Middle),
                PointerEvent::moved(45.0, 45.0),
                PointerEvent::moved(60.0, 60.0),
                PointerEvent::up(60.0, 60.0, MouseButton::Middle),
                PointerEvent::moved(60.0, 45.0),
                PointerEvent::down(60.0, 45.0, MouseButton::Left),
                PointerEvent::moved(60.0, 30.0),
                PointerEvent::up(60.0, 30.0, MouseButton::Left),
            ],
        }
    }

    /// Feed every event to `widget`, collecting its notifications.
    pub fn replay(&self, widget: &mut EllipseWidget) -> SessionReport {
        widget.geometry_mut().set_window_size(self.window);

        let mut consumed = 0;
        let mut notifications = Vec::new();
        for event in &self.events {
            if widget.on_event(event).is_consumed() {
                consumed += 1;
            }
            for notification in widget.poll_events() {
                log::info!("{:?}", notification);
                notifications.push(notification);
            }
        }

        SessionReport {
            consumed,
            notifications,
            bounds: widget.geometry().bounding_box(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;
    use std::io::Write;

    fn assert_point_eq(actual: Point, expected: Point) {
        assert!(
            (actual.x - expected.x).abs() < 1e-9 && (actual.y - expected.y).abs() < 1e-9,
            "{:?} != {:?}",
            actual,
            expected
        );
    }

    #[test]
    fn test_builtin_replay() {
        let mut widget = EllipseWidget::new();
        let report = Session::builtin().replay(&mut widget);

        // Two presses, three drag moves, two releases.
        assert_eq!(report.consumed, 7);
        assert_point_eq(report.bounds.origin(), Point::new(0.15, 0.10));
        assert_point_eq(report.bounds.opposite(), Point::new(0.25, 0.25));
        let ends = report
            .notifications
            .iter()
            .filter(|n| matches!(n, WidgetEvent::EndInteraction { .. }))
            .count();
        assert_eq!(ends, 2);
    }

    #[test]
    fn test_load_session() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "window": {{ "width": 100.0, "height": 100.0 }},
                "events": [
                    {{ "Down": {{ "position": {{ "x": 10.0, "y": 10.0 }}, "button": "Middle" }} }},
                    {{ "Move": {{ "position": {{ "x": 20.0, "y": 10.0 }} }} }}
                ]
            }}"#
        )
        .unwrap();

        let session = Session::load(file.path()).unwrap();
        assert_eq!(session.window, Size::new(100.0, 100.0));
        assert_eq!(session.events[0], PointerEvent::down(10.0, 10.0, MouseButton::Middle));
        assert_eq!(session.events[1], PointerEvent::moved(20.0, 10.0));
    }

    #[test]
    fn test_window_defaults() {
        let session: Session = serde_json::from_str("{}").unwrap();
        assert_eq!(session.window, Size::new(300.0, 300.0));
        assert!(session.events.is_empty());
    }
}
