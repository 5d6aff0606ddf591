use std::fs;

use crate::config::AboutConfig;
use crate::session::DrawingSession;
use crate::PaintApp;

/// State of the "Change canvas size" window
pub struct CanvasSizeDialog {
    width: String,
    height: String,
    error: Option<String>,
}

impl CanvasSizeDialog {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.to_string(),
            height: height.to_string(),
            error: None,
        }
    }

    /// Returns false once the dialog should close.
    pub fn show(&mut self, ctx: &egui::Context, session: &mut DrawingSession) -> bool {
        let mut open = true;
        let mut applied = false;

        egui::Window::new("Change canvas size")
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(ctx, |ui| {
                egui::Grid::new("canvas_size_grid")
                    .num_columns(2)
                    .spacing([10.0, 5.0])
                    .show(ui, |ui| {
                        ui.label("Width:");
                        ui.text_edit_singleline(&mut self.width);
                        ui.end_row();

                        ui.label("Height:");
                        ui.text_edit_singleline(&mut self.height);
                        ui.end_row();
                    });

                if let Some(error) = &self.error {
                    let color = ui.visuals().error_fg_color;
                    ui.colored_label(color, error.as_str());
                }

                ui.vertical_centered(|ui| {
                    if ui.button("Apply").clicked() {
                        match session.resize_canvas_from_text(&self.width, &self.height) {
                            Ok(()) => applied = true,
                            Err(err) => {
                                log::warn!("Canvas resize rejected: {}", err);
                                self.error = Some(err.to_string());
                            }
                        }
                    }
                });
            });

        open && !applied
    }
}

/// State of the "About" window
pub struct AboutDialog {
    text: String,
    project_url: Option<String>,
}

impl AboutDialog {
    /// Read the description file named in the config
    pub fn load(config: &AboutConfig) -> Self {
        let text = fs::read_to_string(&config.description_path).unwrap_or_else(|err| {
            log::warn!(
                "Could not read {}: {}",
                config.description_path.display(),
                err
            );
            format!(
                "{} {}\n\nA minimal paint program.",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION")
            )
        });

        Self {
            text,
            project_url: config.project_url.clone(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns false once the dialog should close.
    pub fn show(&mut self, ctx: &egui::Context) -> bool {
        let mut open = true;
        let mut close_clicked = false;

        egui::Window::new("About")
            .collapsible(false)
            .resizable(false)
            .default_width(400.0)
            .open(&mut open)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().max_height(600.0).show(ui, |ui| {
                    ui.label(self.text.as_str());
                });

                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Close").clicked() {
                        close_clicked = true;
                    }
                    if let Some(url) = &self.project_url {
                        ui.hyperlink_to("GitHub", url);
                    }
                });
            });

        open && !close_clicked
    }
}

/// Modal window for the last failed action
pub fn error_window(app: &mut PaintApp, ctx: &egui::Context) {
    let Some(message) = app.error().map(str::to_owned) else {
        return;
    };

    let mut dismissed = false;
    egui::Window::new("Error")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.label(message);
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });

    if dismissed {
        app.dismiss_error();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_about_falls_back_when_file_is_missing() {
        let config = AboutConfig {
            description_path: PathBuf::from("/nonexistent/description.txt"),
            project_url: None,
        };
        let dialog = AboutDialog::load(&config);
        assert!(dialog.text().contains(env!("CARGO_PKG_NAME")));
    }
}
