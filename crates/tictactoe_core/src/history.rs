//! Board snapshots visited during a game, for time travel.

use super::{Board, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Where a move was played, as shown to the player.
///
/// `row` and `col` are 1-based; `index` is the 0-8 board index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct MoveLocation {
    /// Row, 1-3.
    pub row: usize,
    /// Column, 1-3.
    pub col: usize,
    /// Board index, 0-8.
    pub index: usize,
}

impl From<Position> for MoveLocation {
    fn from(pos: Position) -> Self {
        Self::new(pos.row() + 1, pos.col() + 1, pos.index())
    }
}

impl MoveLocation {
    /// Position this location refers to.
    pub fn position(&self) -> Option<Position> {
        Position::from_index(self.index)
    }
}

impl std::fmt::Display for MoveLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A board snapshot plus the move that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct HistoryEntry {
    /// Board after the move.
    pub board: Board,
    /// Move location, `None` for the initial empty board.
    pub location: Option<MoveLocation>,
}

impl HistoryEntry {
    /// The initial entry: an empty board with no move.
    pub fn initial() -> Self {
        Self::new(Board::new(), None)
    }
}

/// Ordered board snapshots, starting at the empty board.
///
/// Entries are only ever appended, except when a move is made from an
/// earlier point, which drops everything after that point first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Creates a history holding only the initial entry.
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry::initial()],
        }
    }

    /// Number of entries, including the initial one.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; a history holds at least the initial entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `move_number`.
    pub fn get(&self, move_number: usize) -> Option<&HistoryEntry> {
        self.entries.get(move_number)
    }

    /// Last entry.
    pub fn last(&self) -> &HistoryEntry {
        // `entries` is never empty: `new` seeds it and truncation keeps index 0.
        &self.entries[self.entries.len() - 1]
    }

    /// All entries in move order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Drops every entry after `move_number`.
    #[instrument(skip(self), fields(len = self.entries.len()))]
    pub fn truncate_after(&mut self, move_number: usize) {
        let keep = move_number + 1;
        if keep < self.entries.len() {
            debug!(discarded = self.entries.len() - keep, "Discarding future history");
            self.entries.truncate(keep);
        }
    }

    /// Appends an entry and returns its move number.
    pub fn push(&mut self, entry: HistoryEntry) -> usize {
        self.entries.push(entry);
        self.entries.len() - 1
    }

    #[cfg(test)]
    pub(crate) fn entries_mut(&mut self) -> &mut Vec<HistoryEntry> {
        &mut self.entries
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
