use crate::PaintApp;

pub fn menu_bar(app: &mut PaintApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Save (Shift + S)").clicked() {
                    ui.close_menu();
                    app.save();
                }
                if ui.button("Import image").clicked() {
                    ui.close_menu();
                    app.import();
                }
            });

            ui.menu_button("Edit", |ui| {
                let has_shapes = !app.session().is_empty();
                if ui.add_enabled(has_shapes, egui::Button::new("Undo (Ctrl + Z)")).clicked() {
                    ui.close_menu();
                    app.undo();
                }
                if ui.button("Clear layer").clicked() {
                    ui.close_menu();
                    app.clear();
                }
            });

            ui.menu_button("Format", |ui| {
                if ui.button("Change canvas size").clicked() {
                    ui.close_menu();
                    app.open_canvas_size_dialog();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close_menu();
                    app.open_about_dialog();
                }
            });
        });
    });
}
