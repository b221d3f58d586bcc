//! Time-travel tic-tac-toe in the terminal.

use anyhow::Result;
use clap::Parser;
use tictactoe_tui::{Cli, Command, TuiConfig, replay, terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.clone().unwrap_or(Command::Play) {
        Command::Play => {
            // The log file location comes from the config, so the file
            // outcome is logged once logging is up.
            let config = cli.load_config()?;
            terminal::init_file_logging(config.log_file())?;
            log_config_source(&cli, &config);
            terminal::run(&config)
        }
        Command::Replay {
            moves,
            jump,
            format,
        } => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
                )
                .with_writer(std::io::stderr)
                .init();

            let config = cli.load_config()?;
            let mut stdout = std::io::stdout().lock();
            replay::run(&moves, jump, format, &config, &mut stdout)
        }
    }
}

fn log_config_source(cli: &Cli, config: &TuiConfig) {
    if cli.config.exists() {
        info!(path = %cli.config.display(), ?config, "Config loaded successfully");
    } else {
        info!(path = %cli.config.display(), ?config, "Config file not found, using defaults");
    }
}
