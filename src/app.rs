use std::time::Duration;

use color_eyre::eyre::Result;
use rand::rngs::StdRng;
use tokio::{signal, time::MissedTickBehavior};
use tracing::info;

use crate::{
    animator::Animator,
    audio::{play_cue, AudioPlayer},
    config::Config,
    tui::Screen,
};

pub struct App {
    config: Config,
    frame_interval: Duration,
    animator: Animator<StdRng>,
    screen: Box<dyn Screen>,
    audio: Box<dyn AudioPlayer>,
}

impl App {
    pub fn new(
        config: Config,
        frame_interval: Duration,
        animator: Animator<StdRng>,
        screen: Box<dyn Screen>,
        audio: Box<dyn AudioPlayer>,
    ) -> Self {
        Self { config, frame_interval, animator, screen, audio }
    }

    /// Draws one frame: recolour, render, advance the banner and rotate the palette.
    pub fn tick(&mut self) -> Result<()> {
        let scene = self.animator.advance();
        self.screen.present(&scene)
    }

    /// Runs the show until the process is interrupted.
    pub async fn run(&mut self) -> Result<()> {
        self.screen.enter()?;
        play_cue(self.audio.as_mut(), &self.config.audio);
        info!(mode = ?self.animator.mode(), rows = self.animator.tree().len(), "Light show started");

        let result = self.animate().await;

        self.screen.exit()?;
        info!(frames = self.animator.frames(), "Light show stopped");
        result
    }

    async fn animate(&mut self) -> Result<()> {
        let mut ticker = tokio::time::interval(self.frame_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let shutdown = shutdown_signal();
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => break,
                _ = ticker.tick() => self.tick()?,
            }
        }
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Unable to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            },
            Err(e) => {
                tracing::error!("Unable to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl-C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
