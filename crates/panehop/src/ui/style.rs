//! Color and border-style parsing.
//!
//! Config values are free-form strings; a typo falls back to the caller's
//! default instead of failing an interactive jump.

use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Parse a color name, ANSI index or `#rrggbb` value.
pub fn parse_color(value: &str, fallback: Color) -> Color {
    value.trim().parse::<Color>().unwrap_or(fallback)
}

/// Map a border style name onto a ratatui border type.
pub fn parse_border_type(value: &str) -> BorderType {
    match value.trim().to_lowercase().as_str() {
        "double" => BorderType::Double,
        "rounded" => BorderType::Rounded,
        "thick" => BorderType::Thick,
        _ => BorderType::Plain,
    }
}
