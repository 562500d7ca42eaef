use rand::Rng;
use ratatui::text::Line;

use crate::components::{
    banner::MessageWindow,
    lights::{colorize, LightMode, LightPalette},
    tree::Row,
};

/// Everything drawn in one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub tree: Vec<Line<'static>>,
    pub banner: [Line<'static>; 2],
}

impl Scene {
    pub fn lines(&self) -> Vec<Line<'static>> {
        self.tree.iter().chain(self.banner.iter()).cloned().collect()
    }
}

/// Per-frame state of the light show: the padded tree, the light palette, the banner window and the random source
/// used for randomized lights.
#[derive(Debug)]
pub struct Animator<R> {
    tree: Vec<Row>,
    palette: LightPalette,
    banner: MessageWindow,
    rng: R,
    frames: u64,
}

impl<R: Rng> Animator<R> {
    /// `tree` should already be padded; the banner is as wide as its widest row.
    pub fn new(tree: Vec<Row>, mode: LightMode, rng: R) -> Self {
        let capacity = tree.iter().map(|row| row.chars().count()).max().unwrap_or(0);
        Self { tree, palette: LightPalette::new(mode), banner: MessageWindow::new(capacity), rng, frames: 0 }
    }

    pub fn tree(&self) -> &[Row] {
        &self.tree
    }

    pub fn mode(&self) -> LightMode {
        self.palette.mode()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn advance(&mut self) -> Scene {
        let tree = self.tree.iter().map(|row| colorize(row, &mut self.palette, &mut self.rng)).collect();
        let banner = self.banner.advance();
        self.palette.end_frame();
        self.frames += 1;

        Scene { tree, banner }
    }
}
