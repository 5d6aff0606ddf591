//! Named and hex color parsing.
//!
//! Colors arrive as strings from the config file and from the color picker
//! (`"red"`, `"#ff0000"`, `"#f00"`). Everything downstream works in
//! [`Color32`].

use egui::Color32;

use crate::error::{PaintError, PaintResult};

/// Color names understood by [`parse_color`], with the values a Tk canvas
/// would use for them.
const NAMED_COLORS: &[(&str, Color32)] = &[
    ("white", Color32::from_rgb(255, 255, 255)),
    ("black", Color32::from_rgb(0, 0, 0)),
    ("red", Color32::from_rgb(255, 0, 0)),
    ("green", Color32::from_rgb(0, 128, 0)),
    ("lime", Color32::from_rgb(0, 255, 0)),
    ("blue", Color32::from_rgb(0, 0, 255)),
    ("yellow", Color32::from_rgb(255, 255, 0)),
    ("cyan", Color32::from_rgb(0, 255, 255)),
    ("magenta", Color32::from_rgb(255, 0, 255)),
    ("orange", Color32::from_rgb(255, 165, 0)),
    ("purple", Color32::from_rgb(128, 0, 128)),
    ("pink", Color32::from_rgb(255, 192, 203)),
    ("brown", Color32::from_rgb(165, 42, 42)),
    ("gray", Color32::from_rgb(128, 128, 128)),
    ("grey", Color32::from_rgb(128, 128, 128)),
];

/// Parse a color name or a `#rgb` / `#rrggbb` hex string.
///
/// Names are matched case-insensitively. The result is always opaque.
pub fn parse_color(input: &str) -> PaintResult<Color32> {
    let trimmed = input.trim();

    if let Some(hex) = trimmed.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| {
            PaintError::Validation(format!("'{}' is not a valid hex color", input))
        });
    }

    let lowered = trimmed.to_ascii_lowercase();
    NAMED_COLORS
        .iter()
        .find(|(name, _)| *name == lowered)
        .map(|(_, color)| *color)
        .ok_or_else(|| PaintError::Validation(format!("unknown color name '{}'", input)))
}

fn parse_hex(hex: &str) -> Option<Color32> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    match hex.len() {
        3 => {
            let mut channels = [0u8; 3];
            for (i, c) in hex.chars().enumerate() {
                let nibble = c.to_digit(16)? as u8;
                channels[i] = nibble * 17;
            }
            Some(Color32::from_rgb(channels[0], channels[1], channels[2]))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color32::from_rgb(r, g, b))
        }
        _ => None,
    }
}

/// Format a color as lowercase `#rrggbb`, dropping alpha.
pub fn to_hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}
