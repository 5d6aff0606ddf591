use egui::Pos2;

use super::StrokeMode;

/// Upper bound on gap-filling dabs between two samples
pub const MAX_INTERPOLATED_DABS: usize = 4096;

/// Turns the pointer samples of a drag gesture into dab centers.
///
/// The tool only remembers the previous sample of the current gesture; the
/// dabs themselves are committed to the document by the session.
#[derive(Debug, Clone)]
pub struct BrushTool {
    mode: StrokeMode,
    /// Distance between interpolated dabs, as a fraction of the radius
    spacing: f32,
    last_sample: Option<Pos2>,
}

impl BrushTool {
    pub fn new(mode: StrokeMode, spacing: f32) -> Self {
        Self {
            mode,
            spacing,
            last_sample: None,
        }
    }

    pub fn mode(&self) -> StrokeMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: StrokeMode) {
        self.mode = mode;
        self.last_sample = None;
    }

    /// Dab centers for a new sample, oldest first. The sample itself is
    /// always the last entry, so the result is never empty.
    pub fn on_pointer_move(&mut self, pos: Pos2, radius: f32) -> Vec<Pos2> {
        let mut centers = Vec::new();

        if self.mode == StrokeMode::Interpolated {
            if let Some(last) = self.last_sample {
                let distance = last.distance(pos);
                // A jump too long to fill evenly spreads its dabs further apart
                let step = (radius * self.spacing)
                    .max(1.0)
                    .max(distance / MAX_INTERPOLATED_DABS as f32);
                let steps = if distance.is_finite() {
                    ((distance / step).floor() as usize).min(MAX_INTERPOLATED_DABS)
                } else {
                    0
                };
                // Skip t = 0 (the previous sample already has a dab) and stop
                // short of the sample, which is pushed below.
                for i in 1..=steps {
                    let t = (i as f32 * step) / distance;
                    if t >= 1.0 {
                        break;
                    }
                    centers.push(last.lerp(pos, t));
                }
            }
        }

        centers.push(pos);
        self.last_sample = Some(pos);
        centers
    }

    /// The gesture ended; the next sample starts a fresh stroke.
    pub fn on_pointer_up(&mut self) {
        self.last_sample = None;
    }
}

impl Default for BrushTool {
    fn default() -> Self {
        Self::new(StrokeMode::PerEvent, 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_per_event_yields_single_dab() {
        let mut tool = BrushTool::default();
        assert_eq!(tool.on_pointer_move(Pos2::new(0.0, 0.0), 5.0), vec![Pos2::new(0.0, 0.0)]);
        assert_eq!(tool.on_pointer_move(Pos2::new(300.0, 0.0), 5.0), vec![Pos2::new(300.0, 0.0)]);
    }

    #[test]
    fn test_interpolated_fills_gap() {
        let mut tool = BrushTool::new(StrokeMode::Interpolated, 0.5);
        assert_eq!(tool.on_pointer_move(Pos2::new(0.0, 0.0), 4.0).len(), 1);

        // step = 2px over 10px: dabs at 2, 4, 6, 8 then the sample at 10
        let centers = tool.on_pointer_move(Pos2::new(10.0, 0.0), 4.0);
        assert_eq!(centers.len(), 5);
        assert_eq!(centers.last(), Some(&Pos2::new(10.0, 0.0)));
        assert!((centers[0].x - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_pointer_up_breaks_stroke() {
        let mut tool = BrushTool::new(StrokeMode::Interpolated, 0.5);
        tool.on_pointer_move(Pos2::new(0.0, 0.0), 4.0);
        tool.on_pointer_up();
        assert_eq!(tool.on_pointer_move(Pos2::new(100.0, 0.0), 4.0).len(), 1);
    }

    #[test]
    fn test_far_jump_is_bounded() {
        let mut tool = BrushTool::new(StrokeMode::Interpolated, 0.5);
        tool.on_pointer_move(Pos2::new(0.0, 0.0), 20.0);
        let centers = tool.on_pointer_move(Pos2::new(1e8, 0.0), 20.0);
        assert!(centers.len() <= MAX_INTERPOLATED_DABS + 1);
        assert!(centers.len() > 1);
        assert_eq!(centers.last(), Some(&Pos2::new(1e8, 0.0)));
    }

    #[test]
    fn test_non_finite_jump_skips_interpolation() {
        let mut tool = BrushTool::new(StrokeMode::Interpolated, 0.5);
        tool.on_pointer_move(Pos2::new(-f32::MAX, 0.0), 20.0);
        let centers = tool.on_pointer_move(Pos2::new(f32::MAX, 0.0), 20.0);
        assert_eq!(centers, vec![Pos2::new(f32::MAX, 0.0)]);
    }

    #[test]
    fn test_repeated_sample_still_dabs() {
        let mut tool = BrushTool::new(StrokeMode::Interpolated, 0.5);
        tool.on_pointer_move(Pos2::new(3.0, 3.0), 4.0);
        assert_eq!(tool.on_pointer_move(Pos2::new(3.0, 3.0), 4.0), vec![Pos2::new(3.0, 3.0)]);
    }
}
