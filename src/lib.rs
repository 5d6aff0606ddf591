#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod background;
pub mod color;
pub mod components;
pub mod config;
pub mod document;
pub mod error;
pub mod export;
pub mod file_handler;
pub mod panels;
pub mod raster;
pub mod renderer;
pub mod session;
pub mod shape;
pub mod tools;

pub use app::PaintApp;
pub use background::ImportedBackground;
pub use config::{PaintConfig, SessionSettings};
pub use document::Document;
pub use error::{PaintError, PaintResult};
pub use export::ExportFormat;
pub use renderer::Renderer;
pub use session::DrawingSession;
pub use shape::{Fill, Shape};
pub use tools::{StrokeMode, Tool};
