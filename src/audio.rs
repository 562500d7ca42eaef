use std::process::Stdio;

use color_eyre::eyre::Result;
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::config::AudioConfig;

pub trait AudioPlayer {
    /// Starts playback of `url` and returns without waiting for it to finish.
    fn play(&mut self, url: &str) -> Result<()>;
}

/// Hands the resource to an external media player process.
#[derive(Debug, Clone)]
pub struct ExternalPlayer {
    program: String,
    args: Vec<String>,
}

impl ExternalPlayer {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self { program: program.into(), args }
    }
}

impl From<&AudioConfig> for ExternalPlayer {
    fn from(config: &AudioConfig) -> Self {
        Self::new(config.player.clone(), config.args.clone())
    }
}

impl AudioPlayer for ExternalPlayer {
    fn play(&mut self, url: &str) -> Result<()> {
        let child = Command::new(&self.program)
            .args(&self.args)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        debug!(pid = ?child.id(), program = %self.program, "Spawned audio player");
        Ok(())
    }
}

/// Plays the configured cue once. Failures are logged and never interrupt the show.
pub fn play_cue(player: &mut dyn AudioPlayer, config: &AudioConfig) -> bool {
    let Some(url) = config.cue_url() else {
        debug!("No audio cue configured");
        return false;
    };
    match player.play(url) {
        Ok(()) => {
            info!(url, "Audio cue started");
            true
        },
        Err(e) => {
            warn!("Audio cue failed: {e:?}");
            false
        },
    }
}

#[cfg(test)]
mod tests {
    use color_eyre::eyre::eyre;
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Default)]
    struct Recorder {
        played: Vec<String>,
        fail: bool,
    }

    impl AudioPlayer for Recorder {
        fn play(&mut self, url: &str) -> Result<()> {
            self.played.push(url.to_string());
            if self.fail {
                Err(eyre!("no speakers"))
            } else {
                Ok(())
            }
        }
    }

    fn enabled(url: &str) -> AudioConfig {
        AudioConfig { enabled: true, url: Some(url.to_string()), ..Default::default() }
    }

    #[test]
    fn test_cue_plays_once() {
        let mut player = Recorder::default();
        assert!(play_cue(&mut player, &enabled("https://example.com/jingle.mp3")));
        assert_eq!(player.played, vec!["https://example.com/jingle.mp3".to_string()]);
    }

    #[test]
    fn test_disabled_cue_is_skipped() {
        let mut player = Recorder::default();
        assert!(!play_cue(&mut player, &AudioConfig::default()));
        assert!(player.played.is_empty());
    }

    #[test]
    fn test_failed_cue_is_swallowed() {
        let mut player = Recorder { fail: true, ..Default::default() };
        assert!(!play_cue(&mut player, &enabled("https://example.com/jingle.mp3")));
        assert_eq!(player.played.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_player_is_an_error() {
        let mut player = ExternalPlayer::new("xmas-lights-no-such-player", vec![]);
        assert!(player.play("https://example.com/jingle.mp3").is_err());
    }

    #[test]
    fn test_player_from_config() {
        let config =
            AudioConfig { player: "vlc".to_string(), args: vec!["--intf".into(), "dummy".into()], ..Default::default() };
        let player = ExternalPlayer::from(&config);
        assert_eq!(player.program, "vlc");
        assert_eq!(player.args, vec!["--intf".to_string(), "dummy".to_string()]);
    }
}
