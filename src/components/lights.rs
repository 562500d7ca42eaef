use rand::Rng;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use strum::{Display, EnumString};

use crate::constants::tree::{
    BACKGROUND_COLOR, BOUNDARY, BOUNDARY_COLOR, FILL, FOLIAGE_COLOR, LIGHT, LIGHT_COLORS, STAR, STAR_COLOR,
};

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Display, EnumString)]
pub enum LightMode {
    #[default]
    #[strum(serialize = "r")]
    Randomized,
    #[strum(serialize = "p")]
    Patterned,
}

#[derive(Debug, Clone)]
pub struct LightPalette {
    mode: LightMode,
    colors: Vec<Color>,
    // Lights coloured so far in the current frame.
    index: usize,
}

impl LightPalette {
    pub fn new(mode: LightMode) -> Self {
        Self { mode, colors: LIGHT_COLORS.to_vec(), index: 0 }
    }

    pub fn mode(&self) -> LightMode {
        self.mode
    }

    pub fn next_color<R: Rng>(&mut self, rng: &mut R) -> Color {
        match self.mode {
            LightMode::Randomized => self.colors[rng.gen_range(0..self.colors.len())],
            LightMode::Patterned => {
                let color = self.colors[self.index % self.colors.len()];
                self.index += 1;
                color
            },
        }
    }

    /// Rotates the patterned palette one step right and restarts the per-frame count.
    pub fn end_frame(&mut self) {
        if self.mode == LightMode::Patterned {
            self.colors.rotate_right(1);
            self.index = 0;
        }
    }
}

/// Whether the row contains a run of fill glyphs fenced by two boundary glyphs.
pub fn is_trunk_base(row: &str) -> bool {
    let segments: Vec<&str> = row.split(BOUNDARY).collect();
    segments.len() > 2
        && segments[1..segments.len() - 1]
            .iter()
            .any(|segment| !segment.is_empty() && segment.chars().all(|glyph| glyph == FILL))
}

pub fn colorize<R: Rng>(row: &str, palette: &mut LightPalette, rng: &mut R) -> Line<'static> {
    let trunk_base = is_trunk_base(row);

    let spans = row
        .chars()
        .map(|glyph| {
            let style = match glyph {
                STAR => Style::default().fg(STAR_COLOR).add_modifier(Modifier::BOLD),
                BOUNDARY => Style::default().fg(BOUNDARY_COLOR),
                FILL if trunk_base => Style::default().fg(BOUNDARY_COLOR),
                LIGHT => Style::default().fg(palette.next_color(&mut *rng)).add_modifier(Modifier::BOLD),
                _ => Style::default().fg(FOLIAGE_COLOR),
            };
            Span::styled(glyph.to_string(), style.bg(BACKGROUND_COLOR))
        })
        .collect::<Vec<_>>();

    Line::from(spans)
}
