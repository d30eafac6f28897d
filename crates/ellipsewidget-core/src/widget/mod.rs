//! Widget layer: turns pointer events into geometry changes.
//!
//! This module provides:
//! - The controller state machine (`Idle` / `Selected`)
//! - Cursor affordances per hit-test zone
//! - Notifications emitted to the host
//! - [`EllipseWidget`], which composes a controller with its geometry
//!
//! The geometry stays pure data plus math. The controller owns all UI state.

mod controller;
mod cursor;
mod ellipse_widget;
mod events;
mod state;

pub use controller::EllipseController;
pub use cursor::{cursor_for, CursorShape};
pub use ellipse_widget::{EllipseWidget, InteractiveWidget};
pub use events::{EventDisposition, WidgetEvent};
pub use state::WidgetState;
