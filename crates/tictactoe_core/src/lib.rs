//! Tic-tac-toe with move history and time travel.
//!
//! # Architecture
//!
//! - **State machine**: [`TicTacToe`] owns the history of boards and a
//!   cursor into it; moves, jumps, resets and sort toggles are its
//!   transitions.
//! - **Rules**: [`rules::evaluate`] and friends are pure functions over a
//!   [`Board`].
//! - **Observers**: transitions publish [`GameEvent`]s to subscribed
//!   [`GameObserver`]s; [`SoundEffects`] is one of them.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameStatus, Player, TicTacToe, WinningLine};
//!
//! let mut game = TicTacToe::new();
//! for index in [0, 4, 1, 5, 2] {
//!     game.apply_move(index).unwrap();
//! }
//! assert_eq!(game.status(), GameStatus::Won(Player::X));
//! assert_eq!(game.winning_line(), Some(WinningLine::Row1));
//!
//! game.jump_to(0).unwrap();
//! assert!(game.board().is_blank());
//! assert_eq!(game.status(), GameStatus::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod event;
mod game;
mod history;
pub mod invariants;
mod listing;
mod position;
pub mod rules;
mod sound;
mod types;

pub use error::GameError;
pub use event::{GameEvent, GameObserver};
pub use game::{JumpPolicy, TicTacToe};
pub use history::{History, HistoryEntry, MoveLocation};
pub use listing::{MoveList, MoveListItem, SortOrder};
pub use position::Position;
pub use rules::{Evaluation, WinningLine};
pub use sound::{SilentPlayer, SoundCue, SoundEffects, SoundPlayer, SoundVolumes};
pub use types::{Board, GameStatus, Player, Square};
