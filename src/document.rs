use crate::shape::Shape;

/// The stroke sequence: every committed shape in paint order.
///
/// Each shape is tagged with a serial number when it is pushed. Serials keep
/// increasing across undo and clear, so they can be compared against the
/// watermark an imported background records.
#[derive(Debug, Clone, Default)]
pub struct Document {
    shapes: Vec<Shape>,
    serials: Vec<u64>,
    next_serial: u64,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shape on top of everything else
    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
        self.serials.push(self.next_serial);
        self.next_serial += 1;
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// The serial the next pushed shape will get
    pub fn next_serial(&self) -> u64 {
        self.next_serial
    }

    /// Drop up to `batch` shapes from the tail. Returns how many were removed.
    pub fn undo_batch(&mut self, batch: usize) -> usize {
        let removed = batch.min(self.shapes.len());
        let keep = self.shapes.len() - removed;
        self.shapes.truncate(keep);
        self.serials.truncate(keep);
        removed
    }

    /// Drop every shape. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.shapes.len();
        self.shapes.clear();
        self.serials.clear();
        removed
    }

    /// Split the shapes into those committed before `watermark` and those
    /// committed at or after it.
    pub fn split_at_serial(&self, watermark: u64) -> (&[Shape], &[Shape]) {
        let index = self.serials.partition_point(|serial| *serial < watermark);
        self.shapes.split_at(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Fill;
    use egui::{Color32, Pos2};

    fn dab(x: f32) -> Shape {
        Shape::dab(Pos2::new(x, 0.0), 1.0, Fill::Color(Color32::BLACK))
    }

    #[test]
    fn test_undo_batch_takes_from_tail() {
        let mut doc = Document::new();
        for i in 0..12 {
            doc.push(dab(i as f32));
        }

        assert_eq!(doc.undo_batch(10), 10);
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.shapes()[1], dab(1.0));

        assert_eq!(doc.undo_batch(10), 2);
        assert!(doc.is_empty());
        assert_eq!(doc.undo_batch(10), 0);
    }

    #[test]
    fn test_serials_survive_undo() {
        let mut doc = Document::new();
        doc.push(dab(0.0));
        doc.push(dab(1.0));
        doc.undo_batch(1);
        assert_eq!(doc.next_serial(), 2);

        doc.push(dab(2.0));
        let (below, above) = doc.split_at_serial(2);
        assert_eq!(below, &[dab(0.0)]);
        assert_eq!(above, &[dab(2.0)]);
    }

    #[test]
    fn test_clear() {
        let mut doc = Document::new();
        doc.push(dab(0.0));
        doc.push(dab(1.0));
        assert_eq!(doc.clear(), 2);
        assert!(doc.is_empty());
        assert_eq!(doc.undo_batch(1), 0);
        assert_eq!(doc.next_serial(), 2);
    }
}
