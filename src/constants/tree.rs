use ratatui::style::Color;

pub const STAR: char = '*';
pub const FILL: char = '_';
pub const LIGHT: char = '●';
pub const BOUNDARY: char = '|';
pub const TRUNK_HOLLOW: char = ' ';

pub const LEFT_OUTLINE: char = '/';
pub const RIGHT_OUTLINE: char = '\\';

/// Separator that gets lights placed on its rows.
pub const LIT_SEPARATOR: char = '/';
pub const PLAIN_SEPARATOR: char = '\\';

pub const STAR_ROWS: [&str; 2] = ["*", "***"];
pub const TOP_ROWS: usize = 3;
pub const TRUNK_GIRTH: usize = 3;
pub const LIGHT_SPACING: usize = 4;

pub const STAR_COLOR: Color = Color::Yellow;
pub const BOUNDARY_COLOR: Color = Color::Cyan;
pub const FOLIAGE_COLOR: Color = Color::Green;
pub const BACKGROUND_COLOR: Color = Color::Black;
pub const LIGHT_COLORS: [Color; 4] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];
