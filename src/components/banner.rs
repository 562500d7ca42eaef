use std::collections::VecDeque;

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

use crate::constants::{
    banner::{COLORS, GLYPH_UNITS, MESSAGE, PAD_GROWTH},
    tree::BACKGROUND_COLOR,
};

/// Scrolling window over the greeting, which repeats forever.
///
/// Every call to [`MessageWindow::advance`] shifts one glyph of the message into the window. The glyph colour cycles
/// through [`COLORS`], advancing only on non-space glyphs. The second line of each frame is right-justified inside a
/// padding width counted in encoded units, where a coloured glyph costs [`GLYPH_UNITS`]. That width starts at the
/// window capacity and grows by [`PAD_GROWTH`] per frame up to `capacity * GLYPH_UNITS`, so the text slides in from
/// the right and then holds still.
#[derive(Debug, Clone)]
pub struct MessageWindow {
    message: Vec<char>,
    offset: usize,
    window: VecDeque<(char, Color)>,
    capacity: usize,
    pad_width: usize,
    max_pad_width: usize,
    color_index: usize,
}

impl MessageWindow {
    pub fn new(capacity: usize) -> Self {
        let message = MESSAGE.chars().chain(std::iter::repeat_n(' ', capacity / 2)).collect();
        Self {
            message,
            offset: 0,
            window: VecDeque::with_capacity(capacity),
            capacity,
            pad_width: capacity,
            max_pad_width: capacity * GLYPH_UNITS,
            color_index: 0,
        }
    }

    fn next_glyph(&mut self) -> char {
        let glyph = self.message[self.offset];
        self.offset = (self.offset + 1) % self.message.len();
        glyph
    }

    pub fn advance(&mut self) -> [Line<'static>; 2] {
        let glyph = self.next_glyph();
        let color = COLORS[self.color_index % COLORS.len()];
        if glyph != ' ' {
            self.color_index += 1;
        }

        if self.capacity > 0 {
            if self.window.len() == self.capacity {
                self.window.pop_front();
            }
            self.window.push_back((glyph, color));
        }
        self.pad_width = (self.pad_width + PAD_GROWTH).min(self.max_pad_width);

        let background = Style::default().bg(BACKGROUND_COLOR);
        let left_pad = self.pad_width.saturating_sub(self.window.len() * GLYPH_UNITS);

        let spacer = Line::from(Span::styled(" ".repeat(self.capacity), background));
        let content = std::iter::once(Span::styled(" ".repeat(left_pad), background))
            .chain(self.window.iter().map(|(glyph, color)| Span::styled(glyph.to_string(), background.fg(*color))))
            .collect::<Vec<_>>();

        [spacer, Line::from(content)]
    }
}

impl Iterator for MessageWindow {
    type Item = [Line<'static>; 2];

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.advance())
    }
}
