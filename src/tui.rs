use std::io::{stdout, Stdout};

use color_eyre::eyre::Result;
use crossterm::{
    cursor,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    widgets::Paragraph,
    Terminal,
};
use tracing::debug;

use crate::animator::Scene;

/// Somewhere a [`Scene`] can be shown.
pub trait Screen {
    fn enter(&mut self) -> Result<()> {
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        Ok(())
    }

    /// Replaces whatever was on screen with `scene`.
    fn present(&mut self, scene: &Scene) -> Result<()>;
}

pub type DefaultBackend = CrosstermBackend<Stdout>;

/// Full-screen presenter. Raw mode stays off so Ctrl-C still interrupts the process.
pub struct Tui<B: Backend = DefaultBackend> {
    pub terminal: Terminal<B>,
}

impl Tui {
    pub fn new() -> Result<Self> {
        Self::with_backend(CrosstermBackend::new(stdout()))
    }
}

impl<B: Backend> Tui<B> {
    pub fn with_backend(backend: B) -> Result<Self> {
        Ok(Self { terminal: Terminal::new(backend)? })
    }
}

impl<B: Backend> Screen for Tui<B> {
    fn enter(&mut self) -> Result<()> {
        crossterm::execute!(stdout(), EnterAlternateScreen, cursor::Hide)?;
        self.terminal.clear()?;
        debug!("Entered alternate screen");
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        self.terminal.flush()?;
        crossterm::execute!(stdout(), LeaveAlternateScreen, cursor::Show)?;
        debug!("Left alternate screen");
        Ok(())
    }

    fn present(&mut self, scene: &Scene) -> Result<()> {
        // `draw` only writes cells that changed since the last frame. Clearing first forces a full repaint, so
        // echoed keystrokes or other writes outside ratatui never stick.
        self.terminal.clear()?;
        self.terminal.draw(|f| {
            f.render_widget(Paragraph::new(scene.lines()), f.area());
        })?;
        Ok(())
    }
}
