use crate::core::Color as PaletteColor;
use ratatui::style::{Color, Style};

// Type aliases for clarity
pub type CharBuffer = Vec<Vec<char>>;
pub type StyleBuffer = Vec<Vec<Style>>;

// Constants for rendering
pub const CURSOR_INDICATOR: char = '▌';
pub const STATUS_EDIT_PREFIX: &str = "Edit: ";

/// Marks the right half of a double-width character in the char buffer.
pub const WIDE_CONTINUATION: char = '\0';

// Edge glyphs, picked by the slope of the segment
pub mod edge {
    pub const HORIZONTAL: char = '─';
    pub const VERTICAL: char = '│';
    pub const RISING: char = '╱';
    pub const FALLING: char = '╲';
}

/// Terminal color for a palette entry (the 500 shade of each hue).
pub fn palette_color(color: PaletteColor) -> Color {
    match color {
        PaletteColor::Blue => Color::Rgb(0x3b, 0x82, 0xf6),
        PaletteColor::Purple => Color::Rgb(0xa8, 0x55, 0xf7),
        PaletteColor::Green => Color::Rgb(0x22, 0xc5, 0x5e),
        PaletteColor::Amber => Color::Rgb(0xf5, 0x9e, 0x0b),
        PaletteColor::Rose => Color::Rgb(0xf4, 0x3f, 0x5e),
        PaletteColor::Cyan => Color::Rgb(0x06, 0xb6, 0xd4),
        PaletteColor::Orange => Color::Rgb(0xf9, 0x73, 0x16),
        PaletteColor::Indigo => Color::Rgb(0x63, 0x66, 0xf1),
    }
}
