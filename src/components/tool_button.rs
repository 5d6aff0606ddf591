use eframe::egui;
use crate::tools::Tool;

/// Square icon button for picking a tool, drawn with the active style
pub struct ToolButton {
    pub tool: Tool,
    pub selected: bool,
}

impl ToolButton {
    pub fn new(tool: Tool, selected: bool) -> Self {
        Self { tool, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let size = egui::Vec2::splat(ui.spacing().interact_size.y * 1.6);
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let (fill, stroke, text_color) = if self.selected {
                let selection = ui.visuals().selection;
                (selection.bg_fill, selection.stroke, selection.stroke.color)
            } else {
                let visuals = ui.style().interact(&response);
                (visuals.weak_bg_fill, visuals.bg_stroke, visuals.text_color())
            };

            let painter = ui.painter();
            painter.rect(rect, ui.visuals().widgets.inactive.rounding, fill, stroke);
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.tool.icon(),
                egui::TextStyle::Heading.resolve(ui.style()),
                text_color,
            );
        }

        response.on_hover_text(self.tool.name())
    }
}
