//! Widget configuration loaded from JSON.

use crate::bounds::BoundingBox;
use crate::geometry::{
    clamp_tolerance, OutlineStyle, ShowMode, DEFAULT_MAXIMUM_SIZE, DEFAULT_MINIMUM_SIZE,
    DEFAULT_TOLERANCE,
};
use crate::input::MouseButton;
use crate::outline::{clamp_resolution, DEFAULT_RESOLUTION};
use peniko::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Outline colors as RGBA bytes, plus the stroke width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub color: [u8; 4],
    pub highlight_color: [u8; 4],
    pub line_width: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            color: [255, 255, 255, 255],
            highlight_color: [255, 255, 0, 255],
            line_width: 1.0,
        }
    }
}

impl From<StyleConfig> for OutlineStyle {
    fn from(config: StyleConfig) -> Self {
        let [r, g, b, a] = config.color;
        let [hr, hg, hb, ha] = config.highlight_color;
        Self {
            color: Color::from_rgba8(r, g, b, a),
            highlight_color: Color::from_rgba8(hr, hg, hb, ha),
            line_width: config.line_width,
        }
    }
}

/// Every tunable of an [`EllipseWidget`](crate::widget::EllipseWidget).
///
/// Missing fields take their defaults, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Outline sample count.
    pub resolution: usize,
    /// Hit-test band width in pixels.
    pub tolerance: f64,
    /// Advisory size limits in pixels.
    pub minimum_size: [u32; 2],
    pub maximum_size: [u32; 2],
    pub selectable: bool,
    pub resizable: bool,
    pub show_mode: ShowMode,
    pub select_button: MouseButton,
    pub translate_button: MouseButton,
    pub style: StyleConfig,
    /// Initial box in normalized viewport coordinates.
    pub bounding_box: BoundingBox,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            tolerance: DEFAULT_TOLERANCE,
            minimum_size: DEFAULT_MINIMUM_SIZE,
            maximum_size: DEFAULT_MAXIMUM_SIZE,
            selectable: true,
            resizable: true,
            show_mode: ShowMode::default(),
            select_button: MouseButton::Left,
            translate_button: MouseButton::Middle,
            style: StyleConfig::default(),
            bounding_box: BoundingBox::default(),
        }
    }
}

impl WidgetConfig {
    /// Parse a config from JSON.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a config file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded widget config from {}", path.display());
        Ok(config)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Clamp out-of-range values, warning about each one changed.
    pub fn sanitized(mut self) -> Self {
        let resolution = clamp_resolution(self.resolution);
        if resolution != self.resolution {
            log::warn!("Config resolution {} clamped to {}", self.resolution, resolution);
            self.resolution = resolution;
        }

        let tolerance = clamp_tolerance(self.tolerance);
        if tolerance != self.tolerance {
            log::warn!("Config tolerance {} clamped to {}", self.tolerance, tolerance);
            self.tolerance = tolerance;
        }

        let minimum = self.minimum_size.map(|v| v.max(1));
        let maximum = [
            self.maximum_size[0].max(minimum[0]),
            self.maximum_size[1].max(minimum[1]),
        ];
        if minimum != self.minimum_size || maximum != self.maximum_size {
            log::warn!(
                "Config size limits {:?}..{:?} clamped to {:?}..{:?}",
                self.minimum_size,
                self.maximum_size,
                minimum,
                maximum
            );
            self.minimum_size = minimum;
            self.maximum_size = maximum;
        }

        if !self.style.line_width.is_finite() || self.style.line_width <= 0.0 {
            log::warn!("Config line width {} reset to 1", self.style.line_width);
            self.style.line_width = 1.0;
        }

        if self.select_button == self.translate_button {
            let fallback = if self.select_button == MouseButton::Middle {
                MouseButton::Right
            } else {
                MouseButton::Middle
            };
            log::warn!(
                "Select and translate buttons are both {:?}, translating with {:?}",
                self.select_button,
                fallback
            );
            self.translate_button = fallback;
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;
    use std::io::Write;

    #[test]
    fn test_empty_json_is_default() {
        let config = WidgetConfig::from_json("{}").unwrap();
        assert_eq!(config, WidgetConfig::default());
        assert_eq!(config.resolution, 50);
        assert!((config.tolerance - 10.0).abs() < f64::EPSILON);
        assert_eq!(config.show_mode, ShowMode::On);
    }

    #[test]
    fn test_partial_json() {
        let json = r#"{
            "tolerance": 4.0,
            "selectable": false,
            "show_mode": "active_on_hover",
            "translate_button": "Right",
            "bounding_box": { "origin": { "x": 0.2, "y": 0.3 }, "opposite": { "x": 0.6, "y": 0.9 } }
        }"#;
        let config = WidgetConfig::from_json(json).unwrap();
        assert!((config.tolerance - 4.0).abs() < f64::EPSILON);
        assert!(!config.selectable);
        assert!(config.resizable);
        assert_eq!(config.show_mode, ShowMode::ActiveOnHover);
        assert_eq!(config.translate_button, MouseButton::Right);
        assert_eq!(config.bounding_box.origin(), Point::new(0.2, 0.3));
    }

    #[test]
    fn test_inverted_box_rejected() {
        let json = r#"{
            "bounding_box": {
                "origin": { "x": 0.5, "y": 0.5 },
                "opposite": { "x": 0.1, "y": 0.9 }
            }
        }"#;
        assert!(matches!(WidgetConfig::from_json(json), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_sanitized_clamps() {
        let config = WidgetConfig {
            resolution: 1,
            tolerance: 500.0,
            minimum_size: [0, 10],
            maximum_size: [5, 5],
            translate_button: MouseButton::Left,
            ..Default::default()
        }
        .sanitized();

        assert_eq!(config.resolution, 3);
        assert!((config.tolerance - 100.0).abs() < f64::EPSILON);
        assert_eq!(config.minimum_size, [1, 10]);
        assert_eq!(config.maximum_size, [5, 10]);
        assert_eq!(config.select_button, MouseButton::Left);
        assert_eq!(config.translate_button, MouseButton::Middle);
    }

    #[test]
    fn test_style_conversion() {
        let style: OutlineStyle = StyleConfig {
            color: [255, 0, 0, 128],
            highlight_color: [0, 255, 0, 255],
            line_width: 2.5,
        }
        .into();
        assert_eq!(style.color, Color::from_rgba8(255, 0, 0, 128));
        assert_eq!(style.highlight_color, Color::from_rgba8(0, 255, 0, 255));
        assert!((style.line_width - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "resolution": 64, "resizable": false }}"#).unwrap();

        let config = WidgetConfig::load(file.path()).unwrap();
        assert_eq!(config.resolution, 64);
        assert!(!config.resizable);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = WidgetConfig::load(dir.path().join("missing.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_json_round_trip() {
        let config = WidgetConfig {
            resolution: 80,
            ..Default::default()
        };
        let parsed = WidgetConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }
}
