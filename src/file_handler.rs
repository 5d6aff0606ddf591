use std::path::PathBuf;

use eframe::egui;

use crate::background::IMPORT_EXTENSIONS;
use crate::error::PaintError;
use crate::export::ExportFormat;
use crate::session::DrawingSession;

/// Native file dialogs and drag-and-drop imports.
#[derive(Default)]
pub struct FileHandler {
    /// Last path saved to, offered again by the next save dialog
    last_save_path: Option<PathBuf>,
}

impl FileHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask for a target path and export the canvas there.
    ///
    /// Returns `Ok(None)` when the dialog was cancelled.
    pub fn save_with_dialog(&mut self, session: &DrawingSession) -> Result<Option<PathBuf>, PaintError> {
        let mut dialog = rfd::FileDialog::new().set_file_name("drawing.png");
        for format in ExportFormat::ALL {
            dialog = dialog.add_filter(format.label(), &[format.extension()]);
        }
        dialog = dialog.add_filter("All files", &["*"]);
        if let Some(dir) = self.last_save_path.as_ref().and_then(|p| p.parent()) {
            dialog = dialog.set_directory(dir);
        }

        let Some(path) = dialog.save_file() else {
            return Ok(None);
        };

        session.export_to_path(&path)?;
        self.last_save_path = Some(path.clone());
        Ok(Some(path))
    }

    /// Ask for an image file and import it as the background.
    ///
    /// Returns `Ok(None)` when the dialog was cancelled.
    pub fn import_with_dialog(&mut self, session: &mut DrawingSession) -> Result<Option<PathBuf>, PaintError> {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Image files", IMPORT_EXTENSIONS)
            .pick_file()
        else {
            return Ok(None);
        };

        session.import_background_file(&path)?;
        Ok(Some(path))
    }

    /// Import the first image dropped onto the window this frame, if any.
    pub fn handle_dropped_files(
        &mut self,
        ctx: &egui::Context,
        session: &mut DrawingSession,
    ) -> Option<Result<String, PaintError>> {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        let file = dropped.into_iter().next()?;

        let name = if let Some(path) = &file.path {
            path.display().to_string()
        } else if !file.name.is_empty() {
            file.name.clone()
        } else {
            "unknown".to_owned()
        };

        let result = if let Some(bytes) = &file.bytes {
            log::info!("Importing dropped image from memory: {} ({} bytes)", name, bytes.len());
            session.import_background(bytes)
        } else if let Some(path) = &file.path {
            log::info!("Importing dropped image from path: {}", path.display());
            session.import_background_file(path)
        } else {
            Err(PaintError::Decode(format!("dropped file {} has no accessible data", name)))
        };

        Some(result.map(|()| name))
    }

    /// Darken the window while files are dragged over it
    pub fn preview_files_being_dropped(&self, ctx: &egui::Context) {
        use egui::{Align2, Color32, Id, LayerId, Order, TextStyle};

        if ctx.input(|i| i.raw.hovered_files.is_empty()) {
            return;
        }

        let text = ctx.input(|i| {
            let mut text = "Drop to import as background:\n".to_owned();
            for file in &i.raw.hovered_files {
                if let Some(path) = &file.path {
                    text += &format!("\n{}", path.display());
                } else {
                    text += "\n(Path not available)";
                }
            }
            text
        });

        let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("file_drop_target")));
        let screen_rect = ctx.screen_rect();
        painter.rect_filled(screen_rect, 0.0, Color32::from_black_alpha(192));
        painter.text(
            screen_rect.center(),
            Align2::CENTER_CENTER,
            text,
            TextStyle::Heading.resolve(&ctx.style()),
            Color32::WHITE,
        );
    }
}
