//! Sortable move listing shown next to the board.

use super::history::{History, MoveLocation};
use super::Player;
use serde::{Deserialize, Serialize};

/// Display order of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl SortOrder {
    /// Flips the order.
    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    /// Label for the sort toggle control.
    pub fn button_label(self) -> &'static str {
        match self {
            SortOrder::Ascending => "Sort: Ascending ↑",
            SortOrder::Descending => "Sort: Descending ↓",
        }
    }
}

/// One line of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveListItem {
    /// History index this item jumps to.
    pub move_number: usize,
    /// Player who made the move, `None` for game start.
    pub player: Option<Player>,
    /// Where the move was played, `None` for game start.
    pub location: Option<MoveLocation>,
    /// True for the move currently displayed.
    pub is_current: bool,
}

impl MoveListItem {
    /// Text shown for this item.
    ///
    /// The current move is a plain marker; every other item is a jump
    /// target.
    pub fn description(&self) -> String {
        let detail = match (self.player, self.location) {
            (Some(player), Some(location)) => format!(" - {} {}", player, location),
            _ => String::new(),
        };

        if self.is_current {
            format!("You are at move #{}{}", self.move_number, detail)
        } else if self.move_number == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}{}", self.move_number, detail)
        }
    }
}

/// Move list in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveList {
    order: SortOrder,
    items: Vec<MoveListItem>,
}

impl MoveList {
    /// Builds the list for `history` with `current_move` marked.
    pub fn build(history: &History, current_move: usize, order: SortOrder) -> Self {
        let mut items: Vec<MoveListItem> = history
            .entries()
            .iter()
            .enumerate()
            .map(|(move_number, entry)| MoveListItem {
                move_number,
                player: Player::author_of(move_number),
                location: entry.location,
                is_current: move_number == current_move,
            })
            .collect();

        if order == SortOrder::Descending {
            items.reverse();
        }

        Self { order, items }
    }

    /// Items in display order.
    pub fn items(&self) -> &[MoveListItem] {
        &self.items
    }

    /// Order the items are in.
    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Descriptions in display order.
    pub fn descriptions(&self) -> Vec<String> {
        self.items.iter().map(MoveListItem::description).collect()
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if there are no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_is_identity() {
        assert_eq!(SortOrder::Ascending.toggle().toggle(), SortOrder::Ascending);
        assert_eq!(SortOrder::Descending.toggle(), SortOrder::Ascending);
    }

    #[test]
    fn test_descriptions() {
        let go_start = MoveListItem {
            move_number: 0,
            player: None,
            location: None,
            is_current: false,
        };
        assert_eq!(go_start.description(), "Go to game start");

        let at_start = MoveListItem {
            is_current: true,
            ..go_start
        };
        assert_eq!(at_start.description(), "You are at move #0");

        let second = MoveListItem {
            move_number: 2,
            player: Some(Player::O),
            location: Some(MoveLocation::new(2, 2, 4)),
            is_current: false,
        };
        assert_eq!(second.description(), "Go to move #2 - O (2, 2)");

        let at_second = MoveListItem {
            is_current: true,
            ..second
        };
        assert_eq!(at_second.description(), "You are at move #2 - O (2, 2)");
    }

    #[test]
    fn test_button_labels() {
        assert_eq!(SortOrder::Ascending.button_label(), "Sort: Ascending ↑");
        assert_eq!(SortOrder::Descending.button_label(), "Sort: Descending ↓");
    }
}
