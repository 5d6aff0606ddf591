#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use std::path::PathBuf;

use flat_paint::{PaintApp, PaintConfig};

fn load_config() -> PaintConfig {
    let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        return PaintConfig::default();
    };

    match PaintConfig::load(&path) {
        Ok(config) => {
            log::info!("Loaded config from {}", path.display());
            config
        }
        Err(err) => {
            log::error!("{} ({}); using defaults", err, path.display());
            PaintConfig::default()
        }
    }
}

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = load_config();
    let window_size = [
        config.canvas.width.max(400) as f32 + 40.0,
        config.canvas.height.max(300) as f32 + 120.0,
    ];

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Paint")
            .with_inner_size(window_size)
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        "flat_paint",
        native_options,
        Box::new(move |cc| Ok(Box::new(PaintApp::new(cc, &config)))),
    )
}
