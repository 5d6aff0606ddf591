use flat_paint::{DrawingSession, ExportFormat, PaintError, Tool};
use image::Rgb;

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const RED: Rgb<u8> = Rgb([255, 0, 0]);

fn decode(bytes: &[u8]) -> image::RgbImage {
    image::load_from_memory(bytes).unwrap().to_rgb8()
}

#[test]
fn test_red_dab_export() {
    let mut session = DrawingSession::default();
    session.set_brush_radius(5.0).unwrap();
    session.set_color_str("red").unwrap();
    session.paint_at(10.0, 10.0);

    let img = decode(&session.export(ExportFormat::Png).unwrap());
    assert_eq!(img.dimensions(), (800, 400));
    assert_eq!(*img.get_pixel(10, 10), RED);
    assert_eq!(*img.get_pixel(0, 0), WHITE);
}

#[test]
fn test_eraser_covers_earlier_paint() {
    let mut session = DrawingSession::default();
    session.set_brush_radius(8.0).unwrap();
    session.set_color_str("red").unwrap();
    session.paint_at(20.0, 20.0);

    session.set_tool(Tool::Eraser);
    session.set_brush_radius(3.0).unwrap();
    session.paint_at(20.0, 20.0);

    let img = session.render();
    assert_eq!(*img.get_pixel(20, 20), WHITE);
    assert_eq!(*img.get_pixel(14, 20), RED);
}

#[test]
fn test_export_size_follows_canvas_not_shapes() {
    let mut session = DrawingSession::default();
    session.paint_at(500.0, 500.0);
    session.paint_at(-30.0, 9000.0);

    let img = decode(&session.export(ExportFormat::Png).unwrap());
    assert_eq!(img.dimensions(), (800, 400));

    session.resize_canvas(37, 91).unwrap();
    for format in [ExportFormat::Png, ExportFormat::Jpeg, ExportFormat::Gif] {
        let img = decode(&session.export(format).unwrap());
        assert_eq!(img.dimensions(), (37, 91), "{:?}", format);
    }
}

#[test]
fn test_shrunk_canvas_hides_out_of_bounds_shape() {
    let mut session = DrawingSession::default();
    session.set_color_str("red").unwrap();
    session.paint_at(500.0, 300.0);
    session.resize_canvas(100, 100).unwrap();

    let img = decode(&session.export(ExportFormat::Png).unwrap());
    assert_eq!(img.dimensions(), (100, 100));
    assert!(img.pixels().all(|p| *p == WHITE));
}

#[test]
fn test_undo_everything_matches_cleared_canvas() {
    let mut painted = DrawingSession::default();
    painted.set_color_str("#336699").unwrap();
    for i in 0..27 {
        painted.paint_at(i as f32 * 7.0, 50.0);
    }
    while !painted.is_empty() {
        assert!(painted.undo() <= 10);
    }

    let mut cleared = DrawingSession::default();
    cleared.paint_at(5.0, 5.0);
    cleared.clear();

    let fresh = DrawingSession::default();
    let painted_png = painted.export(ExportFormat::Png).unwrap();
    assert_eq!(painted_png, cleared.export(ExportFormat::Png).unwrap());
    assert_eq!(painted_png, fresh.export(ExportFormat::Png).unwrap());
}

#[test]
fn test_export_to_path_picks_format_from_extension() {
    let dir = std::env::temp_dir().join(format!("flat_paint_export_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let mut session = DrawingSession::default();
    session.resize_canvas(16, 8).unwrap();
    session.paint_at(4.0, 4.0);

    let png = dir.join("out.png");
    assert_eq!(session.export_to_path(&png).unwrap(), ExportFormat::Png);
    assert_eq!(image::open(&png).unwrap().width(), 16);

    let jpg = dir.join("out.JPG");
    assert_eq!(session.export_to_path(&jpg).unwrap(), ExportFormat::Jpeg);

    let bmp = dir.join("out.bmp");
    assert!(matches!(
        session.export_to_path(&bmp),
        Err(PaintError::UnsupportedFormat(_))
    ));
    assert!(!bmp.exists());

    std::fs::remove_dir_all(&dir).unwrap();
}
