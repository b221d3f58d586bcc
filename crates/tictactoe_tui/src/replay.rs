//! Headless replay of a move sequence.

use crate::cli::OutputFormat;
use crate::config::TuiConfig;
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use tictactoe_core::{Board, GameStatus, TicTacToe, WinningLine};
use tracing::{info, instrument, warn};

/// Final state of a replayed game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    /// Move the game ended up showing.
    pub current_move: usize,
    /// Displayed board.
    pub board: Board,
    /// Outcome of the displayed board.
    pub status: GameStatus,
    /// Game-over banner, if any.
    pub banner: Option<String>,
    /// Strike name of the winning line, if any.
    pub strike: Option<String>,
    /// Move list descriptions in display order.
    pub moves: Vec<String>,
    /// Moves and jumps that were rejected.
    pub ignored: Vec<String>,
}

impl ReplayReport {
    /// Replays `moves` under `config`, then optionally jumps.
    #[instrument(skip(config))]
    pub fn build(moves: &[usize], jump: Option<usize>, config: &TuiConfig) -> Self {
        let mut game = TicTacToe::new()
            .with_jump_policy(*config.jump_policy())
            .with_sort_order(*config.sort());

        let mut ignored = Vec::new();
        for &index in moves {
            if let Err(e) = game.apply_move(index) {
                warn!(index, error = %e, "Move ignored");
                ignored.push(format!("move {}: {}", index, e));
            }
        }
        if let Some(move_number) = jump {
            if let Err(e) = game.jump_to(move_number) {
                warn!(move_number, error = %e, "Jump ignored");
                ignored.push(format!("jump {}: {}", move_number, e));
            }
        }

        info!(current_move = game.current_move(), status = %game.status(), "Replay finished");
        Self::from_game(&game, ignored)
    }

    fn from_game(game: &TicTacToe, ignored: Vec<String>) -> Self {
        Self {
            current_move: game.current_move(),
            board: *game.board(),
            status: game.status(),
            banner: game.status().banner().map(str::to_string),
            strike: game
                .winning_line()
                .map(WinningLine::strike_class)
                .map(str::to_string),
            moves: game.move_list().descriptions(),
            ignored,
        }
    }

    /// Writes the report as plain text.
    pub fn write_text(&self, out: &mut impl Write) -> std::io::Result<()> {
        writeln!(out, "{}", self.board.display())?;
        writeln!(out)?;
        writeln!(out, "Move:   {}", self.current_move)?;
        writeln!(out, "Status: {}", self.status)?;
        if let Some(banner) = &self.banner {
            writeln!(out, "Banner: {}", banner)?;
        }
        if let Some(strike) = &self.strike {
            writeln!(out, "Strike: {}", strike)?;
        }
        writeln!(out)?;
        writeln!(out, "Moves:")?;
        for line in &self.moves {
            writeln!(out, "  {}", line)?;
        }
        if !self.ignored.is_empty() {
            writeln!(out)?;
            writeln!(out, "Ignored:")?;
            for line in &self.ignored {
                writeln!(out, "  {}", line)?;
            }
        }
        Ok(())
    }
}

/// Runs the replay command, writing the report to `out`.
pub fn run(
    moves: &[usize],
    jump: Option<usize>,
    format: OutputFormat,
    config: &TuiConfig,
    out: &mut impl Write,
) -> Result<()> {
    let report = ReplayReport::build(moves, jump, config);
    match format {
        OutputFormat::Text => report.write_text(out).context("Failed to write report")?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &report).context("Failed to encode report")?;
            writeln!(out).context("Failed to write report")?;
        }
    }
    Ok(())
}
