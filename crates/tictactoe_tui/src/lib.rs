//! Terminal front end for time-travel tic-tac-toe.
//!
//! Renders the board, the move list and the game-over banner from a
//! [`tictactoe_core::TicTacToe`], and turns keys and mouse clicks into
//! game calls. A headless `replay` command prints the result of a move
//! sequence as text or JSON.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod replay;
pub mod sound;
pub mod terminal;
pub mod ui;

pub use app::{Action, App, Focus, RenderNotifier};
pub use cli::{Cli, Command, OutputFormat};
pub use config::{ConfigError, SoundConfig, TuiConfig};
pub use replay::ReplayReport;
pub use sound::TerminalBell;
