use egui::{pos2, vec2, Event, Modifiers, PointerButton, RawInput, Rect};
use flat_paint::config::AboutConfig;
use flat_paint::{panels, DrawingSession, PaintApp};

fn app() -> PaintApp {
    PaintApp::with_session(DrawingSession::default(), AboutConfig::default())
}

fn button(x: f32, y: f32, pressed: bool) -> Event {
    Event::PointerButton {
        pos: pos2(x, y),
        button: PointerButton::Primary,
        pressed,
        modifiers: Modifiers::NONE,
    }
}

fn moved(x: f32, y: f32) -> Event {
    Event::PointerMoved(pos2(x, y))
}

fn run_frame(ctx: &egui::Context, app: &mut PaintApp, events: Vec<Event>) {
    let input = RawInput {
        screen_rect: Some(Rect::from_min_size(pos2(0.0, 0.0), vec2(1200.0, 800.0))),
        events,
        ..Default::default()
    };
    let _ = ctx.run(input, |ctx| panels::central_panel(app, ctx));
}

#[test]
fn test_moves_in_release_frame_are_painted() {
    let ctx = egui::Context::default();
    let mut app = app();

    run_frame(&ctx, &mut app, vec![moved(50.0, 50.0), button(50.0, 50.0, true)]);
    assert_eq!(app.session().len(), 0);

    run_frame(&ctx, &mut app, vec![moved(60.0, 60.0)]);
    assert_eq!(app.session().len(), 1);

    run_frame(
        &ctx,
        &mut app,
        vec![moved(70.0, 70.0), moved(80.0, 80.0), button(80.0, 80.0, false)],
    );
    assert_eq!(app.session().len(), 3);

    // Moves after the release paint nothing
    run_frame(&ctx, &mut app, vec![moved(90.0, 90.0)]);
    assert_eq!(app.session().len(), 3);
}

#[test]
fn test_press_and_moves_in_one_frame() {
    let ctx = egui::Context::default();
    let mut app = app();

    run_frame(
        &ctx,
        &mut app,
        vec![
            moved(40.0, 40.0),
            button(40.0, 40.0, true),
            moved(45.0, 40.0),
            moved(50.0, 40.0),
            button(50.0, 40.0, false),
            moved(55.0, 40.0),
        ],
    );
    assert_eq!(app.session().len(), 2);
}

#[test]
fn test_dab_positions_are_canvas_local() {
    let ctx = egui::Context::default();
    let mut app = app();

    run_frame(&ctx, &mut app, vec![moved(100.0, 100.0), button(100.0, 100.0, true)]);
    run_frame(
        &ctx,
        &mut app,
        vec![moved(130.0, 120.0), moved(150.0, 125.0), button(150.0, 125.0, false)],
    );

    let shapes = app.session().shapes();
    assert_eq!(shapes.len(), 2);
    // The canvas sits inside the panel margin
    assert!(shapes[0].center().x < 130.0 && shapes[0].center().y < 120.0);
    let delta = shapes[1].center() - shapes[0].center();
    assert!((delta - vec2(20.0, 5.0)).length() < 1e-3, "{:?}", delta);
}

#[test]
fn test_press_outside_canvas_does_not_paint() {
    let ctx = egui::Context::default();
    let mut app = app();

    // The default canvas is 800 x 400, the screen is wider and taller
    run_frame(&ctx, &mut app, vec![moved(1100.0, 700.0), button(1100.0, 700.0, true)]);
    run_frame(&ctx, &mut app, vec![moved(100.0, 100.0), button(100.0, 100.0, false)]);
    assert!(app.session().is_empty());
}
