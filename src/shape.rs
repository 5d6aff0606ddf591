use egui::{Color32, Pos2, Rect, Vec2};

/// What a shape is filled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    /// A concrete brush color
    Color(Color32),
    /// Whatever the canvas background is; this is what the eraser paints
    Background,
}

impl Fill {
    /// The concrete color of this fill on a canvas with the given background.
    pub fn resolve(&self, background: Color32) -> Color32 {
        match self {
            Fill::Color(color) => *color,
            Fill::Background => background,
        }
    }
}

/// One committed drawing action: a filled ellipse inside a bounding box.
///
/// Shapes are value records. Once created they are never modified, only
/// dropped from the tail of the document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    rect: Rect,
    fill: Fill,
}

impl Shape {
    /// Create a shape from an explicit bounding box
    pub fn new(rect: Rect, fill: Fill) -> Self {
        Self { rect, fill }
    }

    /// A round dab of `radius` centered at `center`, covering
    /// `(x - r, y - r, x + r, y + r)`.
    pub fn dab(center: Pos2, radius: f32, fill: Fill) -> Self {
        Self::new(Rect::from_center_size(center, Vec2::splat(radius * 2.0)), fill)
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn fill(&self) -> Fill {
        self.fill
    }

    /// Bounding box as `(x1, y1, x2, y2)`
    pub fn bbox(&self) -> (f32, f32, f32, f32) {
        (self.rect.min.x, self.rect.min.y, self.rect.max.x, self.rect.max.y)
    }

    pub fn center(&self) -> Pos2 {
        self.rect.center()
    }

    /// Half extents of the ellipse along x and y
    pub fn radii(&self) -> Vec2 {
        self.rect.size() / 2.0
    }
}
