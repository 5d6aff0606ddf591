use eframe::egui::{self, Color32, ColorImage, Painter, Pos2, Rect, TextureHandle, TextureOptions};

use crate::background::ImportedBackground;
use crate::session::DrawingSession;
use crate::shape::Shape;

/// Draws a [`DrawingSession`] onto the screen.
///
/// Keeps the GPU texture for the imported background and re-uploads it
/// only when a new background is imported.
#[derive(Default)]
pub struct Renderer {
    background_texture: Option<(u64, TextureHandle)>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paint the session into `canvas_rect`, whose top-left corner is the
    /// canvas origin.
    pub fn render(&mut self, ctx: &egui::Context, painter: &Painter, canvas_rect: Rect, session: &DrawingSession) {
        let painter = painter.with_clip_rect(canvas_rect.intersect(painter.clip_rect()));
        let origin = canvas_rect.min;
        let background = session.background_color();

        painter.rect_filled(canvas_rect, 0.0, background);

        match session.background() {
            Some(imported) => {
                let (below, above) = session.document().split_at_serial(imported.watermark());
                self.draw_shapes(&painter, origin, below, background);

                let texture = self.background_texture(ctx, imported);
                let image_rect = Rect::from_min_size(
                    origin,
                    egui::vec2(imported.width() as f32, imported.height() as f32),
                );
                painter.image(
                    texture.id(),
                    image_rect,
                    Rect::from_min_max(Pos2::ZERO, egui::pos2(1.0, 1.0)),
                    Color32::WHITE,
                );

                self.draw_shapes(&painter, origin, above, background);
            }
            None => {
                self.background_texture = None;
                self.draw_shapes(&painter, origin, session.shapes(), background);
            }
        }
    }

    fn draw_shapes(&self, painter: &Painter, origin: Pos2, shapes: &[Shape], background: Color32) {
        for shape in shapes {
            let center = origin + shape.center().to_vec2();
            let radii = shape.radii();
            if radii.x <= 0.0 || radii.y <= 0.0 {
                continue;
            }
            // Dabs are always round; min() keeps odd boxes inside their bbox
            painter.circle_filled(center, radii.x.min(radii.y), shape.fill().resolve(background));
        }
    }

    fn background_texture(&mut self, ctx: &egui::Context, imported: &ImportedBackground) -> TextureHandle {
        if let Some((generation, handle)) = &self.background_texture {
            if *generation == imported.generation() {
                return handle.clone();
            }
        }

        let image = ColorImage::from_rgba_unmultiplied(
            [imported.width() as usize, imported.height() as usize],
            imported.image().as_raw(),
        );
        let name = format!("background_{}", imported.generation());
        let handle = ctx.load_texture(name, image, TextureOptions::LINEAR);
        log::debug!("Uploaded background texture {}", imported.generation());

        self.background_texture = Some((imported.generation(), handle.clone()));
        handle
    }

    #[cfg(test)]
    fn has_background_texture(&self) -> bool {
        self.background_texture.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn test_painter(ctx: &egui::Context) -> (Painter, Rect) {
        let rect = Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(100.0, 100.0));
        let painter = Painter::new(ctx.clone(), egui::LayerId::background(), rect);
        (painter, rect)
    }

    #[test]
    fn test_render_without_background() {
        let ctx = egui::Context::default();
        let (painter, rect) = test_painter(&ctx);
        let mut session = DrawingSession::default();
        session.paint_at(10.0, 10.0);

        let mut renderer = Renderer::new();
        renderer.render(&ctx, &painter, rect, &session);
        assert!(!renderer.has_background_texture());
    }

    #[test]
    fn test_background_texture_is_cached() {
        let ctx = egui::Context::default();
        let (painter, rect) = test_painter(&ctx);

        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgba8(RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 255])))
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();

        let mut session = DrawingSession::default();
        session.resize_canvas(20, 20).unwrap();
        session.import_background(&bytes).unwrap();

        let mut renderer = Renderer::new();
        renderer.render(&ctx, &painter, rect, &session);
        let first = renderer.background_texture.as_ref().map(|(_, h)| h.id());
        renderer.render(&ctx, &painter, rect, &session);
        let second = renderer.background_texture.as_ref().map(|(_, h)| h.id());

        assert!(first.is_some());
        assert_eq!(first, second);
    }
}
