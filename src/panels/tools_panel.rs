use egui::Slider;

use crate::color::to_hex;
use crate::components::ToolButton;
use crate::tools::Tool;
use crate::PaintApp;

pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("tools_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let active = app.session().tool();
            for tool in [Tool::Brush, Tool::Eraser] {
                if ToolButton::new(tool, active == tool).show(ui).clicked() {
                    log::info!("Tool selected from UI: {}", tool.name());
                    app.set_tool(tool);
                }
            }

            ui.separator();

            if ui.button("Clear layer").clicked() {
                app.clear();
            }

            let mut color = app.session().color();
            if egui::color_picker::color_edit_button_srgba(ui, &mut color, egui::color_picker::Alpha::Opaque)
                .on_hover_text(to_hex(color))
                .changed()
            {
                app.session_mut().set_color(color);
            }

            if ui.button("Import").clicked() {
                app.import();
            }

            ui.separator();

            let settings = app.session().settings();
            let range = settings.min_radius..=settings.max_radius;
            let mut radius = app.session().brush_radius();
            ui.label("Brush size:");
            if ui.add(Slider::new(&mut radius, range)).changed() {
                app.set_brush_radius(radius);
            }

            ui.separator();

            let (width, height) = app.session().canvas_size();
            ui.label(format!("{} x {} | {} shapes", width, height, app.session().len()));
        });
    });
}
