//! User configuration loaded from a TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_core::{JumpPolicy, SortOrder, SoundVolumes};
use tracing::{debug, info, instrument};

/// Front-end configuration.
#[derive(Debug, Clone, PartialEq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct TuiConfig {
    /// File the TUI writes its log to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Initial move list order.
    #[serde(default)]
    sort: SortOrder,

    /// Whether jumping re-derives the outcome.
    #[serde(default)]
    jump_policy: JumpPolicy,

    /// Sound settings.
    #[serde(default)]
    sound: SoundConfig,
}

/// Sound settings.
#[derive(Debug, Clone, Copy, PartialEq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct SoundConfig {
    /// Play cues at all.
    #[serde(default = "default_sound_enabled")]
    enabled: bool,

    /// Volume of the move click, 0.0-1.0.
    #[serde(default = "default_click_volume")]
    click_volume: f32,

    /// Volume of the game-over cue, 0.0-1.0.
    #[serde(default = "default_game_over_volume")]
    game_over_volume: f32,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe_tui.log")
}

fn default_sound_enabled() -> bool {
    true
}

fn default_click_volume() -> f32 {
    SoundVolumes::default().click
}

fn default_game_over_volume() -> f32 {
    SoundVolumes::default().game_over
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            enabled: default_sound_enabled(),
            click_volume: default_click_volume(),
            game_over_volume: default_game_over_volume(),
        }
    }
}

impl SoundConfig {
    /// Volumes as used by the sound observer.
    pub fn volumes(&self) -> SoundVolumes {
        SoundVolumes::new(self.click_volume, self.game_over_volume)
    }
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            sort: SortOrder::default(),
            jump_policy: JumpPolicy::default(),
            sound: SoundConfig::default(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            let config = Self::from_file(path)?;
            info!("Config loaded successfully");
            Ok(config)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, volume) in [
            ("click_volume", self.sound.click_volume),
            ("game_over_volume", self.sound.game_over_volume),
        ] {
            if !(0.0..=1.0).contains(&volume) {
                return Err(ConfigError::new(format!(
                    "sound.{} must be between 0.0 and 1.0, got {}",
                    name, volume
                )));
            }
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
