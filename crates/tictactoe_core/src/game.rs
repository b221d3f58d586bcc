//! The game state machine: board, history, time travel and outcome.
//!
//! `TicTacToe` owns the full history of boards and a cursor into it. The
//! displayed board, whose turn it is, and the move list are all derived
//! from those two. Every accepted action publishes [`GameEvent`]s to the
//! subscribed observers; rejected actions change nothing.

use super::error::GameError;
use super::event::{GameEvent, GameObserver};
use super::history::{History, HistoryEntry, MoveLocation};
use super::invariants::{HistoryInvariants, InvariantSet};
use super::listing::{MoveList, SortOrder};
use super::rules::{self, WinningLine};
use super::{Board, GameStatus, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// What [`TicTacToe::jump_to`] does with the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum JumpPolicy {
    /// Always resume as in progress, even on a board that already has a
    /// winner. The outcome is only evaluated again after the next move.
    #[default]
    #[serde(rename = "reset")]
    ResetToInProgress,
    /// Evaluate the jumped-to board and restore its outcome and strike.
    Reevaluate,
}

/// Tic-tac-toe with move history and time travel.
pub struct TicTacToe {
    pub(crate) history: History,
    pub(crate) current_move: usize,
    status: GameStatus,
    winning_line: Option<WinningLine>,
    sort_order: SortOrder,
    jump_policy: JumpPolicy,
    observers: Vec<Box<dyn GameObserver>>,
}

impl TicTacToe {
    /// Creates a new game on an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
            current_move: 0,
            status: GameStatus::InProgress,
            winning_line: None,
            sort_order: SortOrder::Ascending,
            jump_policy: JumpPolicy::ResetToInProgress,
            observers: Vec::new(),
        }
    }

    /// Sets how jumps treat the outcome.
    pub fn with_jump_policy(mut self, jump_policy: JumpPolicy) -> Self {
        self.jump_policy = jump_policy;
        self
    }

    /// Sets the initial move list order.
    pub fn with_sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = sort_order;
        self
    }

    /// Registers an observer for all subsequent events.
    pub fn subscribe(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    // ─────────────────────────────────────────────────────────────
    //  Derived views
    // ─────────────────────────────────────────────────────────────

    /// History index currently displayed.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Entry currently displayed.
    pub fn current_entry(&self) -> &HistoryEntry {
        // `current_move` is kept within bounds by every transition.
        &self.history.entries()[self.current_move]
    }

    /// Board currently displayed.
    pub fn board(&self) -> &Board {
        &self.current_entry().board
    }

    /// Player whose mark the next placement writes.
    pub fn player_turn(&self) -> Player {
        Player::to_move_after(self.current_move)
    }

    /// Current outcome.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Highlighted winning line, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    /// Move list order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Jump policy in effect.
    pub fn jump_policy(&self) -> JumpPolicy {
        self.jump_policy
    }

    /// Every board visited, oldest first.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Move list in display order.
    pub fn move_list(&self) -> MoveList {
        MoveList::build(&self.history, self.current_move, self.sort_order)
    }

    // ─────────────────────────────────────────────────────────────
    //  Transitions
    // ─────────────────────────────────────────────────────────────

    /// Places the current player's mark at board index `index` (0-8).
    ///
    /// Any history after the current move is discarded first. Returns the
    /// new move number.
    ///
    /// # Errors
    ///
    /// Rejected, with no change, when the game is over, the index is out
    /// of range, or the square is occupied.
    #[instrument(skip(self), fields(current_move = self.current_move, player = %self.player_turn()))]
    pub fn apply_move(&mut self, index: usize) -> Result<usize, GameError> {
        let pos = Position::from_index(index).ok_or(GameError::OutOfBounds(index))?;
        self.place(pos)
    }

    /// Places the current player's mark at `pos`.
    ///
    /// # Errors
    ///
    /// See [`TicTacToe::apply_move`].
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn place(&mut self, pos: Position) -> Result<usize, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }
        if !self.board().is_empty(pos) {
            return Err(GameError::SquareOccupied(pos));
        }

        let player = self.player_turn();
        let mut board = *self.board();
        board.set(pos, Square::Occupied(player));

        self.history.truncate_after(self.current_move);
        let move_number = self
            .history
            .push(HistoryEntry::new(board, Some(MoveLocation::from(pos))));
        self.current_move = move_number;
        debug!(move_number, %player, position = %pos, "Move applied");

        self.publish(GameEvent::BoardChanged { move_number, board });

        let evaluation = rules::evaluate(&board);
        if evaluation.status.is_over() {
            info!(status = %evaluation.status, line = ?evaluation.line, "Game over");
            self.set_outcome(evaluation.status, evaluation.line);
        }

        self.debug_check_invariants();
        Ok(move_number)
    }

    /// Moves the cursor to `move_number`.
    ///
    /// Clears the strike and resumes the game as in progress. Under
    /// [`JumpPolicy::Reevaluate`] the jumped-to board is then evaluated.
    ///
    /// # Errors
    ///
    /// Rejected, with no change, when `move_number` is past the end of
    /// history.
    #[instrument(skip(self), fields(current_move = self.current_move, policy = ?self.jump_policy))]
    pub fn jump_to(&mut self, move_number: usize) -> Result<(), GameError> {
        let len = self.history.len();
        if move_number >= len {
            return Err(GameError::NoSuchMove { move_number, len });
        }

        let moved = move_number != self.current_move;
        self.current_move = move_number;
        if moved {
            let board = *self.board();
            self.publish(GameEvent::BoardChanged { move_number, board });
        }

        let (status, line) = match self.jump_policy {
            JumpPolicy::ResetToInProgress => (GameStatus::InProgress, None),
            JumpPolicy::Reevaluate => {
                let evaluation = rules::evaluate(self.board());
                (evaluation.status, evaluation.line)
            }
        };
        self.set_outcome(status, line);

        debug!(move_number, status = %self.status, "Jumped");
        self.debug_check_invariants();
        Ok(())
    }

    /// Starts over on an empty board, keeping the sort order.
    #[instrument(skip(self), fields(history_len = self.history.len()))]
    pub fn reset(&mut self) {
        self.history = History::new();
        self.current_move = 0;
        self.publish(GameEvent::Reset);
        self.publish(GameEvent::BoardChanged {
            move_number: 0,
            board: Board::new(),
        });
        self.set_outcome(GameStatus::InProgress, None);
        info!("Game reset");
        self.debug_check_invariants();
    }

    /// Flips the move list order.
    #[instrument(skip(self), fields(order = ?self.sort_order))]
    pub fn toggle_sort(&mut self) {
        self.sort_order = self.sort_order.toggle();
        self.publish(GameEvent::SortToggled(self.sort_order));
    }

    /// Replays board indices from a fresh game, skipping rejected moves.
    ///
    /// Returns the game and the rejections, in order.
    #[instrument]
    pub fn replay(moves: &[usize]) -> (Self, Vec<GameError>) {
        let mut game = Self::new();
        let rejected = moves
            .iter()
            .filter_map(|&index| game.apply_move(index).err())
            .collect();
        (game, rejected)
    }

    // ─────────────────────────────────────────────────────────────
    //  Internals
    // ─────────────────────────────────────────────────────────────

    fn set_outcome(&mut self, status: GameStatus, line: Option<WinningLine>) {
        if self.status == status && self.winning_line == line {
            return;
        }
        self.status = status;
        self.winning_line = line;
        self.publish(GameEvent::StatusChanged { status, line });
    }

    fn publish(&mut self, event: GameEvent) {
        for observer in &mut self.observers {
            observer.on_event(&event);
        }
    }

    fn debug_check_invariants(&self) {
        debug_assert!(
            HistoryInvariants::check_all(self).is_ok(),
            "History invariants violated: {:?}",
            HistoryInvariants::check_all(self)
        );
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TicTacToe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TicTacToe")
            .field("history", &self.history)
            .field("current_move", &self.current_move)
            .field("status", &self.status)
            .field("winning_line", &self.winning_line)
            .field("sort_order", &self.sort_order)
            .field("jump_policy", &self.jump_policy)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_follows_cursor() {
        let mut game = TicTacToe::new();
        assert_eq!(game.player_turn(), Player::X);
        game.apply_move(4).unwrap();
        assert_eq!(game.player_turn(), Player::O);
        game.jump_to(0).unwrap();
        assert_eq!(game.player_turn(), Player::X);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut game = TicTacToe::new();
        assert_eq!(game.apply_move(9), Err(GameError::OutOfBounds(9)));
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_jump_past_end_rejected() {
        let mut game = TicTacToe::new();
        game.apply_move(0).unwrap();
        assert_eq!(
            game.jump_to(2),
            Err(GameError::NoSuchMove {
                move_number: 2,
                len: 2
            })
        );
        assert_eq!(game.current_move(), 1);
    }

    #[test]
    fn test_replay_skips_rejected_moves() {
        let (game, rejected) = TicTacToe::replay(&[0, 0, 4, 12]);
        assert_eq!(game.history().len(), 3);
        assert_eq!(
            rejected,
            vec![
                GameError::SquareOccupied(Position::TopLeft),
                GameError::OutOfBounds(12)
            ]
        );
    }
}
