//! Command-line interface for tictactoe_tui.

use crate::config::{ConfigError, TuiConfig};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Tic-tac-toe with time travel, in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe_tui")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Override the log file location
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Disable sound cues
    #[arg(long)]
    pub mute: bool,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal
    Play,

    /// Apply a move sequence headlessly and print the result
    Replay {
        /// Board indices (0-8), comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        moves: Vec<usize>,

        /// Jump to this move after replaying
        #[arg(long)]
        jump: Option<usize>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Replay output format.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// JSON document.
    Json,
}

impl Cli {
    /// Loads the config file (or defaults) and applies command-line overrides.
    ///
    /// Call after logging is set up so the load outcome is recorded.
    pub fn load_config(&self) -> Result<TuiConfig, ConfigError> {
        Ok(self.apply_overrides(TuiConfig::load_or_default(&self.config)?))
    }

    /// Applies command-line overrides on top of the file configuration.
    pub fn apply_overrides(&self, config: TuiConfig) -> TuiConfig {
        let mut config = config;
        if let Some(log_file) = &self.log_file {
            config = config.with_log_file(log_file.clone());
        }
        if self.mute {
            let sound = config.sound().with_enabled(false);
            config = config.with_sound(sound);
        }
        config
    }
}
