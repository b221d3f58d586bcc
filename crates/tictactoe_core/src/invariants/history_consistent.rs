//! History consistency invariant: each entry adds exactly one mark.

use super::super::{Board, Player, Square, TicTacToe};
use super::Invariant;

/// Invariant: entry 0 is the blank board and every later entry differs
/// from its predecessor by one newly placed mark, at the entry's location,
/// belonging to the player whose turn it was.
pub struct HistoryConsistentInvariant;

fn is_single_step(before: &Board, after: &Board, index: usize, player: Player) -> bool {
    before
        .squares()
        .iter()
        .zip(after.squares())
        .enumerate()
        .all(|(i, (was, now))| {
            if i == index {
                *was == Square::Empty && *now == Square::Occupied(player)
            } else {
                was == now
            }
        })
}

impl Invariant<TicTacToe> for HistoryConsistentInvariant {
    fn holds(game: &TicTacToe) -> bool {
        let entries = game.history().entries();
        let Some(root) = entries.first() else {
            return false;
        };
        if !root.board.is_blank() {
            return false;
        }

        entries.windows(2).enumerate().all(|(i, pair)| {
            let move_number = i + 1;
            match (pair[1].location, Player::author_of(move_number)) {
                (Some(location), Some(player)) => {
                    is_single_step(&pair[0].board, &pair[1].board, location.index, player)
                }
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each history entry adds exactly one mark at its location"
    }
}
