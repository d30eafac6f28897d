//! Demo driver: config, session replay and a final render.

use crate::session::Session;
use ellipsewidget_core::{ConfigError, EllipseWidget, Renderable2D, WidgetConfig};
use ellipsewidget_render::{RenderContext, Renderer, RendererError, VelloRenderer};
use kurbo::Size;
use thiserror::Error;

/// Demo errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Usage: ellipse-demo [config.json] [session.json]")]
    Usage,
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Render failed: {0}")]
    Render(#[from] RendererError),
}

/// Result type for demo operations.
pub type AppResult<T> = Result<T, AppError>;

/// Run the demo with command-line arguments (program name excluded).
///
/// Returns the final bounding box as pretty JSON.
pub fn run<I>(args: I) -> AppResult<String>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();
    if args.len() > 2 {
        return Err(AppError::Usage);
    }

    let config = match args.first() {
        Some(path) => WidgetConfig::load(path)?,
        None => WidgetConfig::default(),
    };
    let session = match args.get(1) {
        Some(path) => Session::load(path)?,
        None => {
            log::info!("No session given, replaying the built-in one");
            Session::builtin()
        }
    };

    let mut widget = EllipseWidget::from_config(&config);
    let report = session.replay(&mut widget);
    log::info!(
        "Replayed {} event(s), {} consumed, {} notification(s)",
        session.events.len(),
        report.consumed,
        report.notifications.len()
    );

    let drawn = render(&mut widget, session.window)?;
    log::info!("Rendered {} outline(s)", drawn);

    Ok(serde_json::to_string_pretty(&report.bounds)?)
}

/// Draw the widget's overlay into a fresh scene, returning the outline count.
fn render(widget: &mut EllipseWidget, window: Size) -> AppResult<usize> {
    let geometry = widget.geometry_mut();
    geometry.rebuild_outline(window);

    let mut renderer = VelloRenderer::new();
    let ctx = RenderContext::new(window).with_overlays(geometry.render_overlay());
    renderer.build_scene(&ctx)?;
    Ok(renderer.outlines_drawn())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ellipsewidget_core::BoundingBox;
    use std::io::Write;

    #[test]
    fn test_run_builtin() {
        let json = run(Vec::new()).unwrap();
        let bounds: BoundingBox = serde_json::from_str(&json).unwrap();
        assert!((bounds.opposite().x - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_run_with_files() {
        let mut config = tempfile::NamedTempFile::new().unwrap();
        write!(config, r#"{{ "show_mode": "off" }}"#).unwrap();
        let mut session = tempfile::NamedTempFile::new().unwrap();
        write!(
            session,
            r#"{{ "window": {{ "width": 100.0, "height": 100.0 }}, "events": [] }}"#
        )
        .unwrap();

        let args = vec![
            config.path().display().to_string(),
            session.path().display().to_string(),
        ];
        let bounds: BoundingBox = serde_json::from_str(&run(args).unwrap()).unwrap();
        assert_eq!(bounds, BoundingBox::default());
    }

    #[test]
    fn test_render_counts_visible_outline() {
        let mut widget = EllipseWidget::new();
        assert_eq!(render(&mut widget, Size::new(300.0, 300.0)).unwrap(), 1);
    }

    #[test]
    fn test_too_many_args() {
        let args = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert!(matches!(run(args), Err(AppError::Usage)));
    }

    #[test]
    fn test_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let args = vec![dir.path().join("nope.json").display().to_string()];
        assert!(matches!(run(args), Err(AppError::Config(ConfigError::Io(_)))));
    }
}
