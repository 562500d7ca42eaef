use std::path::{Path, PathBuf};

use serde::Deserialize;

const CONFIG: &str = include_str!("../.config/config.yaml");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

/// External player used for the opening audio cue.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct AudioConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_player")]
    pub player: String,
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default)]
    pub url: Option<String>,
}

fn default_player() -> String {
    "mpv".to_string()
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self { enabled: false, player: default_player(), args: Vec::new(), url: None }
    }
}

impl AudioConfig {
    /// The resource to play, if the cue is switched on and has somewhere to play from.
    pub fn cue_url(&self) -> Option<&str> {
        self.url.as_deref().map(str::trim).filter(|url| self.enabled && !url.is_empty())
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub audio: AudioConfig,
}

impl Config {
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::load(&crate::utils::get_config_dir(), &crate::utils::get_data_dir())
    }

    /// Embedded defaults overlaid by `config.yaml` in `config_dir`, when present.
    pub fn load(config_dir: &Path, data_dir: &Path) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().to_string())?
            .set_default("_config_dir", config_dir.to_string_lossy().to_string())?
            .add_source(config::File::from_str(CONFIG, config::FileFormat::Yaml));

        let config_files = [("config.yaml", config::FileFormat::Yaml)];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(config::File::from(config_dir.join(file)).format(*format).required(false));
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            tracing::debug!("No user configuration file found in {}, using defaults", config_dir.display());
        }

        builder.build()?.try_deserialize()
    }
}
