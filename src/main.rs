pub mod animator;
pub mod app;
pub mod audio;
pub mod cli;
pub mod components;
pub mod config;
pub mod constants;
pub mod prompt;
pub mod tui;
pub mod utils;

use std::{io, time::Duration};

use clap::Parser;
use color_eyre::eyre::Result;
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;

use crate::{
    animator::Animator,
    app::App,
    audio::ExternalPlayer,
    cli::Cli,
    components::tree::{generate_tree, pad_tree},
    config::Config,
    constants::FRAME_INTERVAL,
    tui::Tui,
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let _args = Cli::parse();
    let config = Config::new()?;

    let (extra_lines, mode) = {
        let mut input = io::stdin().lock();
        let mut output = io::stdout().lock();
        prompt::show_welcome(&mut output)?;
        let extra_lines = prompt::read_extra_lines(&mut input, &mut output)?;
        let mode = prompt::read_light_mode(&mut input, &mut output)?;
        (extra_lines, mode)
    };
    info!(extra_lines, ?mode, "Got answers");

    prompt::teaser(&mut io::stdout(), Duration::from_secs(1)).await?;

    let tree = pad_tree(&generate_tree(extra_lines));
    info!(rows = tree.len(), width = tree.first().map(|row| row.chars().count()), "Tree generated");

    let animator = Animator::new(tree, mode, StdRng::from_entropy());
    let player = ExternalPlayer::from(&config.audio);
    let mut app = App::new(config, FRAME_INTERVAL, animator, Box::new(Tui::new()?), Box::new(player));
    app.run().await?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
