use eframe::egui::{self, Key, KeyboardShortcut, Modifiers};

use crate::config::{AboutConfig, PaintConfig};
use crate::error::PaintError;
use crate::file_handler::FileHandler;
use crate::panels::{self, AboutDialog, CanvasSizeDialog};
use crate::renderer::Renderer;
use crate::session::DrawingSession;
use crate::tools::Tool;

const SAVE_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::SHIFT, Key::S);
const UNDO_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);

/// The eframe application: owns the session and forwards GUI events to it.
pub struct PaintApp {
    session: DrawingSession,
    renderer: Renderer,
    file_handler: FileHandler,
    about_config: AboutConfig,
    canvas_dialog: Option<CanvasSizeDialog>,
    about_dialog: Option<AboutDialog>,
    /// Message of the last failed action, shown until dismissed
    error: Option<String>,
    /// True while the primary button is held after a press on the canvas
    drawing: bool,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &PaintConfig) -> Self {
        let session = match config.resolve() {
            Ok(settings) => DrawingSession::new(settings),
            Err(err) => {
                log::error!("{}; falling back to default settings", err);
                DrawingSession::default()
            }
        };
        Self::with_session(session, config.about.clone())
    }

    pub fn with_session(session: DrawingSession, about_config: AboutConfig) -> Self {
        Self {
            session,
            renderer: Renderer::new(),
            file_handler: FileHandler::new(),
            about_config,
            canvas_dialog: None,
            about_dialog: None,
            error: None,
            drawing: false,
        }
    }

    pub fn session(&self) -> &DrawingSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut DrawingSession {
        &mut self.session
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Log a failed action and show it to the user
    pub fn report_error(&mut self, action: &str, err: PaintError) {
        log::warn!("{} failed: {}", action, err);
        self.error = Some(format!("{} failed: {}", action, err));
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.session.set_tool(tool);
    }

    pub fn set_brush_radius(&mut self, radius: f32) {
        if let Err(err) = self.session.set_brush_radius(radius) {
            self.report_error("Changing brush size", err);
        }
    }

    pub fn undo(&mut self) {
        self.session.undo();
    }

    pub fn clear(&mut self) {
        self.session.clear();
    }

    pub fn save(&mut self) {
        match self.file_handler.save_with_dialog(&self.session) {
            Ok(Some(path)) => log::info!("Saved to {}", path.display()),
            Ok(None) => log::debug!("Save cancelled"),
            Err(err) => self.report_error("Saving", err),
        }
    }

    pub fn import(&mut self) {
        match self.file_handler.import_with_dialog(&mut self.session) {
            Ok(Some(path)) => log::info!("Imported {}", path.display()),
            Ok(None) => log::debug!("Import cancelled"),
            Err(err) => self.report_error("Importing image", err),
        }
    }

    pub fn open_canvas_size_dialog(&mut self) {
        let (width, height) = self.session.canvas_size();
        self.canvas_dialog = Some(CanvasSizeDialog::new(width, height));
    }

    pub fn open_about_dialog(&mut self) {
        self.about_dialog = Some(AboutDialog::load(&self.about_config));
    }

    /// Feed pointer events of this frame into the session, in arrival order.
    ///
    /// A primary press on the visible canvas starts a gesture. Every
    /// pointer-move event until the release becomes one `paint_at` call,
    /// including moves queued in the same frame as the release.
    pub fn handle_canvas_input(&mut self, ctx: &egui::Context, response: &egui::Response) {
        let events = ctx.input(|i| i.events.clone());
        let origin = response.rect.min;

        for event in events {
            match event {
                egui::Event::PointerButton {
                    pos,
                    button: egui::PointerButton::Primary,
                    pressed: true,
                    ..
                } => {
                    if response.interact_rect.contains(pos) && is_top_layer(ctx, response, pos) {
                        self.drawing = true;
                    }
                }
                egui::Event::PointerButton {
                    button: egui::PointerButton::Primary,
                    pressed: false,
                    ..
                } => self.end_gesture(),
                egui::Event::PointerMoved(pos) if self.drawing => {
                    let local = pos - origin;
                    self.session.paint_at(local.x, local.y);
                }
                _ => {}
            }
        }
    }

    fn end_gesture(&mut self) {
        if self.drawing {
            self.session.end_stroke();
            self.drawing = false;
        }
    }

    pub fn render_canvas(&mut self, ctx: &egui::Context, painter: &egui::Painter, rect: egui::Rect) {
        self.renderer.render(ctx, painter, rect, &self.session);
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        if ctx.input_mut(|i| i.consume_shortcut(&SAVE_SHORTCUT)) {
            self.save();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&UNDO_SHORTCUT)) {
            self.undo();
        }
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        self.file_handler.preview_files_being_dropped(ctx);
        match self.file_handler.handle_dropped_files(ctx, &mut self.session) {
            Some(Ok(name)) => log::info!("Imported dropped file {}", name),
            Some(Err(err)) => self.report_error("Importing dropped file", err),
            None => {}
        }
    }

    fn show_dialogs(&mut self, ctx: &egui::Context) {
        if let Some(mut dialog) = self.canvas_dialog.take() {
            if dialog.show(ctx, &mut self.session) {
                self.canvas_dialog = Some(dialog);
            }
        }

        if let Some(mut dialog) = self.about_dialog.take() {
            if dialog.show(ctx) {
                self.about_dialog = Some(dialog);
            }
        }

        panels::error_window(self, ctx);
    }
}

/// False when a window or popup covers the canvas at `pos`
fn is_top_layer(ctx: &egui::Context, response: &egui::Response, pos: egui::Pos2) -> bool {
    ctx.layer_id_at(pos)
        .map_or(true, |layer| layer == response.layer_id)
}

impl eframe::App for PaintApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);
        self.handle_dropped_files(ctx);

        panels::menu_bar(self, ctx);
        panels::tools_panel(self, ctx);
        panels::central_panel(self, ctx);

        self.show_dialogs(ctx);
    }
}
