use serde::{Deserialize, Serialize};

mod brush;
pub use brush::BrushTool;

/// Which tool new dabs are painted with.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Tool {
    /// Paints with the current color
    #[default]
    Brush,
    /// Paints with the canvas background color
    Eraser,
}

impl Tool {
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Brush => "Brush",
            Tool::Eraser => "Eraser",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tool::Brush => "🖌",
            Tool::Eraser => "⌫",
        }
    }
}

/// How pointer samples of one gesture turn into dabs.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrokeMode {
    /// Exactly one dab per received motion sample. Fast pointer movement
    /// leaves gaps between dabs.
    #[default]
    PerEvent,
    /// One dab per sample plus evenly spaced dabs filling the gap to the
    /// previous sample of the same gesture.
    Interpolated,
}
