use std::fs;
use std::path::{Path, PathBuf};

use egui::Color32;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::parse_color;
use crate::tools::StrokeMode;

/// Errors that can occur while loading the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Settings read from the optional JSON config file.
///
/// Every section falls back to its defaults, so a partial file is fine.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PaintConfig {
    pub canvas: CanvasConfig,
    pub brush: BrushConfig,
    pub history: HistoryConfig,
    pub export: ExportConfig,
    pub about: AboutConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    /// Canvas color; also what the eraser paints
    pub background: String,
    /// Largest width or height a resize will accept
    pub max_dimension: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 400,
            background: "white".to_owned(),
            max_dimension: 8192,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushConfig {
    pub color: String,
    pub radius: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    pub stroke_mode: StrokeMode,
    /// Distance between interpolated dabs as a fraction of the radius
    pub interpolation_spacing: f32,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            color: "black".to_owned(),
            radius: 5.0,
            min_radius: 1.0,
            max_radius: 20.0,
            stroke_mode: StrokeMode::PerEvent,
            interpolation_spacing: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Shapes removed by a single undo
    pub undo_batch: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self { undo_batch: 10 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub jpeg_quality: u8,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { jpeg_quality: 90 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutConfig {
    /// Text file shown in the About dialog
    pub description_path: PathBuf,
    pub project_url: Option<String>,
}

impl Default for AboutConfig {
    fn default() -> Self {
        Self {
            description_path: PathBuf::from("description.txt"),
            project_url: None,
        }
    }
}

impl PaintConfig {
    /// Load a config file from disk
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate the config and turn it into the values a session runs with
    pub fn resolve(&self) -> ConfigResult<SessionSettings> {
        let invalid = |msg: String| ConfigError::Invalid(msg);

        let background = parse_color(&self.canvas.background)
            .map_err(|e| invalid(format!("canvas.background: {}", e)))?;
        let brush_color = parse_color(&self.brush.color)
            .map_err(|e| invalid(format!("brush.color: {}", e)))?;

        if self.canvas.max_dimension == 0 {
            return Err(invalid("canvas.max_dimension must be positive".to_owned()));
        }
        let dimension_ok = |d: u32| d > 0 && d <= self.canvas.max_dimension;
        if !dimension_ok(self.canvas.width) || !dimension_ok(self.canvas.height) {
            return Err(invalid(format!(
                "canvas size {}x{} must be between 1 and {}",
                self.canvas.width, self.canvas.height, self.canvas.max_dimension
            )));
        }

        let (min_radius, max_radius) = (self.brush.min_radius, self.brush.max_radius);
        if !(min_radius.is_finite() && max_radius.is_finite() && min_radius > 0.0 && min_radius <= max_radius) {
            return Err(invalid(format!(
                "brush radius range {}..={} is not a positive range",
                min_radius, max_radius
            )));
        }
        if !self.brush.radius.is_finite() {
            return Err(invalid("brush.radius must be a number".to_owned()));
        }
        if !(self.brush.interpolation_spacing.is_finite() && self.brush.interpolation_spacing > 0.0) {
            return Err(invalid("brush.interpolation_spacing must be positive".to_owned()));
        }
        if self.history.undo_batch == 0 {
            return Err(invalid("history.undo_batch must be at least 1".to_owned()));
        }
        if !(1..=100).contains(&self.export.jpeg_quality) {
            return Err(invalid("export.jpeg_quality must be between 1 and 100".to_owned()));
        }

        Ok(SessionSettings {
            canvas_width: self.canvas.width,
            canvas_height: self.canvas.height,
            max_dimension: self.canvas.max_dimension,
            background,
            brush_color,
            brush_radius: self.brush.radius.clamp(min_radius, max_radius),
            min_radius,
            max_radius,
            stroke_mode: self.brush.stroke_mode,
            interpolation_spacing: self.brush.interpolation_spacing,
            undo_batch: self.history.undo_batch,
            jpeg_quality: self.export.jpeg_quality,
        })
    }
}

/// Validated settings a [`crate::DrawingSession`] is created from.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSettings {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub max_dimension: u32,
    pub background: Color32,
    pub brush_color: Color32,
    pub brush_radius: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    pub stroke_mode: StrokeMode,
    pub interpolation_spacing: f32,
    pub undo_batch: usize,
    pub jpeg_quality: u8,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            canvas_width: 800,
            canvas_height: 400,
            max_dimension: 8192,
            background: Color32::WHITE,
            brush_color: Color32::BLACK,
            brush_radius: 5.0,
            min_radius: 1.0,
            max_radius: 20.0,
            stroke_mode: StrokeMode::PerEvent,
            interpolation_spacing: 0.5,
            undo_batch: 10,
            jpeg_quality: 90,
        }
    }
}
