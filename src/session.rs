use std::fs;
use std::path::Path;

use egui::{Color32, Pos2};
use image::RgbImage;

use crate::background::{self, ImportedBackground};
use crate::color::parse_color;
use crate::config::SessionSettings;
use crate::document::Document;
use crate::error::{PaintError, PaintResult};
use crate::export::{self, ExportFormat};
use crate::raster;
use crate::shape::{Fill, Shape};
use crate::tools::{BrushTool, StrokeMode, Tool};

/// Everything one painting session knows: tool state, canvas size, the
/// stroke sequence and the imported background.
///
/// The session is driven synchronously by the GUI; every method runs to
/// completion and either succeeds or leaves the state untouched.
#[derive(Debug, Clone)]
pub struct DrawingSession {
    settings: SessionSettings,
    tool: Tool,
    color: Color32,
    radius: f32,
    width: u32,
    height: u32,
    document: Document,
    brush: BrushTool,
    background: Option<ImportedBackground>,
    imports: u64,
}

impl Default for DrawingSession {
    fn default() -> Self {
        Self::new(SessionSettings::default())
    }
}

impl DrawingSession {
    pub fn new(settings: SessionSettings) -> Self {
        Self {
            tool: Tool::Brush,
            color: settings.brush_color,
            radius: settings.brush_radius,
            width: settings.canvas_width,
            height: settings.canvas_height,
            document: Document::new(),
            brush: BrushTool::new(settings.stroke_mode, settings.interpolation_spacing),
            background: None,
            imports: 0,
            settings,
        }
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn set_tool(&mut self, tool: Tool) {
        if self.tool != tool {
            log::debug!("Tool changed: {} -> {}", self.tool.name(), tool.name());
        }
        self.tool = tool;
    }

    /// The brush color. Stored even while the eraser is active.
    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    /// Set the brush color from a color name or hex string
    pub fn set_color_str(&mut self, color: &str) -> PaintResult<()> {
        self.color = parse_color(color)?;
        Ok(())
    }

    pub fn brush_radius(&self) -> f32 {
        self.radius
    }

    /// Set the brush radius, clamped into the configured range.
    ///
    /// Returns the radius actually applied.
    pub fn set_brush_radius(&mut self, radius: f32) -> PaintResult<f32> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(PaintError::Validation(format!(
                "brush radius must be a positive number, got {}",
                radius
            )));
        }
        self.radius = radius.clamp(self.settings.min_radius, self.settings.max_radius);
        Ok(self.radius)
    }

    pub fn stroke_mode(&self) -> StrokeMode {
        self.brush.mode()
    }

    pub fn set_stroke_mode(&mut self, mode: StrokeMode) {
        self.brush.set_mode(mode);
    }

    /// The fill new dabs get with the current tool
    pub fn current_fill(&self) -> Fill {
        match self.tool {
            Tool::Brush => Fill::Color(self.color),
            Tool::Eraser => Fill::Background,
        }
    }

    /// Commit dabs for one pointer-motion sample at canvas coordinates
    /// `(x, y)`.
    ///
    /// Every call commits at least one shape; samples are never coalesced.
    /// Returns the number of shapes added.
    pub fn paint_at(&mut self, x: f32, y: f32) -> usize {
        let fill = self.current_fill();
        let centers = self.brush.on_pointer_move(Pos2::new(x, y), self.radius);
        for center in &centers {
            log::trace!("Dab at ({}, {}) r={}", center.x, center.y, self.radius);
            self.document.push(Shape::dab(*center, self.radius, fill));
        }
        centers.len()
    }

    /// The pointer was released. Shapes are not grouped by gesture, so this
    /// only matters for interpolation.
    pub fn end_stroke(&mut self) {
        self.brush.on_pointer_up();
    }

    /// Remove the most recent shapes, up to the undo batch size.
    ///
    /// Returns how many were removed; an empty canvas is not an error.
    pub fn undo(&mut self) -> usize {
        let removed = self.document.undo_batch(self.settings.undo_batch);
        log::debug!("Undo removed {} shapes, {} left", removed, self.document.len());
        removed
    }

    /// Remove every shape. An imported background stays where it is.
    pub fn clear(&mut self) -> usize {
        let removed = self.document.clear();
        self.brush.on_pointer_up();
        log::info!("Cleared canvas ({} shapes removed)", removed);
        removed
    }

    pub fn shapes(&self) -> &[Shape] {
        self.document.shapes()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn len(&self) -> usize {
        self.document.len()
    }

    pub fn is_empty(&self) -> bool {
        self.document.is_empty()
    }

    /// Declared canvas size as `(width, height)`
    pub fn canvas_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn background_color(&self) -> Color32 {
        self.settings.background
    }

    pub fn resolve_fill(&self, fill: &Fill) -> Color32 {
        fill.resolve(self.settings.background)
    }

    /// Change the declared canvas size.
    ///
    /// Existing shapes and the background keep their coordinates; anything
    /// outside the new bounds simply stops being visible.
    pub fn resize_canvas(&mut self, width: u32, height: u32) -> PaintResult<()> {
        let max = self.settings.max_dimension;
        if width == 0 || height == 0 {
            return Err(PaintError::Validation(format!(
                "canvas size must be positive, got {}x{}",
                width, height
            )));
        }
        if width > max || height > max {
            return Err(PaintError::Validation(format!(
                "canvas size {}x{} exceeds the maximum of {}",
                width, height, max
            )));
        }

        log::info!(
            "Canvas resized from {}x{} to {}x{}",
            self.width, self.height, width, height
        );
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Resize from the raw text of the canvas size dialog.
    pub fn resize_canvas_from_text(&mut self, width: &str, height: &str) -> PaintResult<()> {
        let width = parse_dimension("width", width)?;
        let height = parse_dimension("height", height)?;
        self.resize_canvas(width, height)
    }

    pub fn background(&self) -> Option<&ImportedBackground> {
        self.background.as_ref()
    }

    /// Decode an image and make it the background, stretched to the
    /// current canvas size. Replaces any earlier background.
    pub fn import_background(&mut self, bytes: &[u8]) -> PaintResult<()> {
        let image = background::decode_stretched(bytes, self.width, self.height)?;
        self.imports += 1;
        self.background = Some(ImportedBackground::new(
            image,
            self.document.next_serial(),
            self.imports,
        ));
        log::info!(
            "Imported background at {}x{} above {} shapes",
            self.width,
            self.height,
            self.document.len()
        );
        Ok(())
    }

    /// Read an image file and import it as the background
    pub fn import_background_file(&mut self, path: &Path) -> PaintResult<()> {
        let bytes = fs::read(path)?;
        self.import_background(&bytes)
            .inspect_err(|e| log::warn!("Import of {} failed: {}", path.display(), e))
    }

    /// Rasterize the stroke sequence at the declared canvas size.
    ///
    /// The imported background is not part of the result.
    pub fn render(&self) -> RgbImage {
        raster::rasterize(
            self.document.shapes(),
            self.width,
            self.height,
            self.settings.background,
        )
    }

    /// Render and encode the canvas
    pub fn export(&self, format: ExportFormat) -> PaintResult<Vec<u8>> {
        export::encode(&self.render(), format, self.settings.jpeg_quality)
    }

    /// Export to a file, choosing the format from its extension.
    pub fn export_to_path(&self, path: &Path) -> PaintResult<ExportFormat> {
        let format = ExportFormat::from_path(path)?;
        let bytes = self.export(format)?;
        fs::write(path, bytes)?;
        log::info!(
            "Saved {}x{} canvas with {} shapes to {}",
            self.width,
            self.height,
            self.document.len(),
            path.display()
        );
        Ok(format)
    }
}

fn parse_dimension(name: &str, text: &str) -> PaintResult<u32> {
    let trimmed = text.trim();
    let value: i64 = trimmed.parse().map_err(|_| {
        PaintError::Validation(format!("{} must be a whole number, got '{}'", name, trimmed))
    })?;
    if value <= 0 {
        return Err(PaintError::Validation(format!(
            "{} must be positive, got {}",
            name, value
        )));
    }
    u32::try_from(value)
        .map_err(|_| PaintError::Validation(format!("{} {} is too large", name, value)))
}
