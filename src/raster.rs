//! Offscreen rasterization of the stroke sequence.
//!
//! Shapes are drawn back to front with an opaque overwrite, so the last
//! shape covering a pixel decides its color.

use egui::Color32;
use image::{Rgb, RgbImage};

use crate::shape::Shape;

fn to_rgb(color: Color32) -> Rgb<u8> {
    Rgb([color.r(), color.g(), color.b()])
}

/// Render `shapes` onto a fresh `width` x `height` canvas filled with
/// `background`.
pub fn rasterize(shapes: &[Shape], width: u32, height: u32, background: Color32) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(width, height, to_rgb(background));
    for shape in shapes {
        fill_ellipse(&mut canvas, shape, background);
    }
    canvas
}

/// Fill the ellipse inscribed in the shape's bounding box.
///
/// A pixel at integer coordinates `(px, py)` is painted when it lies inside
/// or on the ellipse. Parts outside the canvas are clipped.
pub fn fill_ellipse(canvas: &mut RgbImage, shape: &Shape, background: Color32) {
    let radii = shape.radii();
    // also rejects NaN extents
    if radii.x.is_nan() || radii.y.is_nan() || radii.x <= 0.0 || radii.y <= 0.0 {
        return;
    }

    let (width, height) = canvas.dimensions();
    if width == 0 || height == 0 {
        return;
    }

    let (x1, y1, x2, y2) = shape.bbox();
    let center = shape.center();
    let color = to_rgb(shape.fill().resolve(background));

    let Some((min_x, max_x)) = clip_span(x1, x2, width) else {
        return;
    };
    let Some((min_y, max_y)) = clip_span(y1, y2, height) else {
        return;
    };

    for py in min_y..=max_y {
        let dy = (py as f32 - center.y) / radii.y;
        let dy2 = dy * dy;
        if dy2 > 1.0 {
            continue;
        }
        for px in min_x..=max_x {
            let dx = (px as f32 - center.x) / radii.x;
            if dx * dx + dy2 <= 1.0 {
                canvas.put_pixel(px, py, color);
            }
        }
    }
}

/// The integer pixel range covered by `[start, end]`, clipped to `0..limit`.
fn clip_span(start: f32, end: f32, limit: u32) -> Option<(u32, u32)> {
    let first = start.ceil().max(0.0);
    let last = end.floor().min(limit as f32 - 1.0);
    if first.is_nan() || last.is_nan() || first > last {
        return None;
    }
    Some((first as u32, last as u32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Fill;
    use egui::Pos2;

    #[test]
    fn test_dab_covers_center_and_extremes() {
        let shape = Shape::dab(Pos2::new(10.0, 10.0), 5.0, Fill::Color(Color32::RED));
        let img = rasterize(&[shape], 30, 30, Color32::WHITE);

        let red = Rgb([255, 0, 0]);
        let white = Rgb([255, 255, 255]);
        assert_eq!(*img.get_pixel(10, 10), red);
        assert_eq!(*img.get_pixel(5, 10), red);
        assert_eq!(*img.get_pixel(15, 10), red);
        assert_eq!(*img.get_pixel(10, 15), red);
        // bbox corners are outside the circle
        assert_eq!(*img.get_pixel(5, 5), white);
        assert_eq!(*img.get_pixel(15, 15), white);
        assert_eq!(*img.get_pixel(16, 10), white);
    }

    #[test]
    fn test_later_shapes_overwrite_earlier() {
        let under = Shape::dab(Pos2::new(10.0, 10.0), 5.0, Fill::Color(Color32::RED));
        let over = Shape::dab(Pos2::new(10.0, 10.0), 2.0, Fill::Background);
        let img = rasterize(&[under, over], 20, 20, Color32::WHITE);

        assert_eq!(*img.get_pixel(10, 10), Rgb([255, 255, 255]));
        assert_eq!(*img.get_pixel(6, 10), Rgb([255, 0, 0]));
    }

    #[test]
    fn test_partially_offscreen_shape_is_clipped() {
        let shape = Shape::dab(Pos2::new(0.0, 0.0), 4.0, Fill::Color(Color32::BLUE));
        let img = rasterize(&[shape], 8, 8, Color32::WHITE);
        assert_eq!(*img.get_pixel(0, 0), Rgb([0, 0, 255]));
        assert_eq!(*img.get_pixel(7, 7), Rgb([255, 255, 255]));
    }

    #[test]
    fn test_fully_offscreen_shape_draws_nothing() {
        let far = Shape::dab(Pos2::new(500.0, 500.0), 5.0, Fill::Color(Color32::RED));
        let negative = Shape::dab(Pos2::new(-50.0, -50.0), 5.0, Fill::Color(Color32::RED));
        let img = rasterize(&[far, negative], 100, 100, Color32::WHITE);
        assert!(img.pixels().all(|p| *p == Rgb([255, 255, 255])));
    }

    #[test]
    fn test_degenerate_box_draws_nothing() {
        let flat = Shape::new(
            egui::Rect::from_min_max(Pos2::new(2.0, 2.0), Pos2::new(2.0, 8.0)),
            Fill::Color(Color32::RED),
        );
        let img = rasterize(&[flat], 10, 10, Color32::WHITE);
        assert!(img.pixels().all(|p| *p == Rgb([255, 255, 255])));
    }
}
