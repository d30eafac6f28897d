//! Ellipse Widget Core Library
//!
//! Geometry, hit-testing and the interaction state machine for an interactive
//! elliptical overlay. Rendering and windowing live outside this crate; the
//! geometry hands out immutable outline snapshots for a rasterizer to draw.

pub mod bounds;
pub mod config;
pub mod geometry;
pub mod input;
pub mod outline;
pub mod render;
pub mod time;
pub mod viewport;
pub mod widget;
pub mod zone;

pub use bounds::{BoundingBox, GeometryError, GeometryResult};
pub use config::{ConfigError, ConfigResult, StyleConfig, WidgetConfig};
pub use geometry::{EllipseGeometry, OutlineStyle, ShowMode};
pub use input::{MouseButton, PointerEvent};
pub use outline::EllipseOutline;
pub use render::{OutlineSnapshot, Renderable2D};
pub use time::TimeStamp;
pub use viewport::Viewport;
pub use widget::{
    CursorShape, EllipseController, EllipseWidget, EventDisposition, InteractiveWidget,
    WidgetEvent, WidgetState,
};
pub use zone::{Handle, HandleKind, InteractionZone, ZoneCategory};
