//! Ellipse Widget Demo
//!
//! Replays a scripted pointer session through an ellipse widget and
//! renders the resulting overlay.

mod app;
mod session;

pub use app::{run, AppError, AppResult};
pub use session::{Session, SessionReport};
