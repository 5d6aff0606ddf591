use crate::PaintApp;

pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::both()
            .drag_to_scroll(false)
            .show(ui, |ui| {
                let (width, height) = app.session().canvas_size();
                let (response, painter) = ui.allocate_painter(
                    egui::vec2(width as f32, height as f32),
                    egui::Sense::drag(),
                );

                app.handle_canvas_input(ctx, &response);
                app.render_canvas(ctx, &painter, response.rect);
            });
    });
}
