use ratatui::style::Color;

pub const MESSAGE: &str = " MERRY CHRISTMAS AND HAPPY NEW YEAR!";
pub const COLORS: [Color; 3] = [Color::Red, Color::White, Color::Green];

/// Encoded width of one coloured glyph: colour prefix, glyph and reset.
pub const GLYPH_UNITS: usize = 11;
pub const PAD_GROWTH: usize = 10;
