//! Screen geometry shared by drawing and mouse hit-testing.

use ratatui::layout::{Constraint, Layout, Margin, Position as Point, Rect};
use std::ops::Range;
use tictactoe_core::Position;

/// Columns inside one tile.
pub const TILE_WIDTH: u16 = 7;
/// Rows inside one tile.
pub const TILE_HEIGHT: u16 = 3;
/// Tiles plus the two inner separators.
pub const GRID_WIDTH: u16 = TILE_WIDTH * 3 + 2;
/// Tiles plus the two inner separators.
pub const GRID_HEIGHT: u16 = TILE_HEIGHT * 3 + 2;
/// Label of the reset control.
pub const PLAY_AGAIN_LABEL: &str = "[ Play Again ]";

/// Something on screen the mouse can hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// Board tile by index.
    Tile(usize),
    /// The Play Again control.
    PlayAgain,
    /// The sort toggle.
    SortButton,
    /// A visible move list row, counted from the top of the list area.
    MoveRow(usize),
}

/// Rectangles for every screen element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title line at the top.
    pub title: Rect,
    /// Board block including its border.
    pub board: Rect,
    /// Each tile with its separators, by board index.
    pub tiles: [Rect; 9],
    /// Game-over banner below the board.
    pub banner: Rect,
    /// Play Again control, sized to its label.
    pub play_again: Rect,
    /// Move list block including its border.
    pub moves: Rect,
    /// Sort toggle row at the top of the move list.
    pub sort_button: Rect,
    /// Rows available for move list items.
    pub move_rows: Rect,
    /// Key help line at the bottom.
    pub footer: Rect,
}

impl ScreenLayout {
    /// Lays out the full screen.
    pub fn compute(area: Rect) -> Self {
        let [title, body, footer] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        let [left, moves] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(body);

        let [board_row, banner, play_again_row, _] = Layout::vertical([
            Constraint::Length(GRID_HEIGHT + 2),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(left);

        let board = center_horizontally(board_row, GRID_WIDTH + 2);
        let grid = board.inner(Margin::new(1, 1));
        let tiles = Position::ALL.map(|pos| tile_rect(grid, pos));

        let play_again = center_horizontally(play_again_row, PLAY_AGAIN_LABEL.chars().count() as u16);

        let list = moves.inner(Margin::new(1, 1));
        let sort_button = Rect::new(list.x, list.y, list.width, list.height.min(1));
        let move_rows = Rect::new(
            list.x,
            list.y.saturating_add(2),
            list.width,
            list.height.saturating_sub(2),
        )
        .intersection(list);

        Self {
            title,
            board,
            tiles,
            banner,
            play_again,
            moves,
            sort_button,
            move_rows,
            footer,
        }
    }

    /// Finds the element under a terminal cell.
    pub fn hit(&self, column: u16, row: u16) -> Option<HitTarget> {
        let point = Point::new(column, row);

        if let Some(index) = self.tiles.iter().position(|tile| tile.contains(point)) {
            return Some(HitTarget::Tile(index));
        }
        if self.play_again.contains(point) {
            return Some(HitTarget::PlayAgain);
        }
        if self.sort_button.contains(point) {
            return Some(HitTarget::SortButton);
        }
        if self.move_rows.contains(point) {
            return Some(HitTarget::MoveRow((row - self.move_rows.y) as usize));
        }
        None
    }
}

/// Tile area including its right and bottom separators.
fn tile_rect(grid: Rect, pos: Position) -> Rect {
    let (row, col) = (pos.row() as u16, pos.col() as u16);
    let width = TILE_WIDTH + u16::from(col < 2);
    let height = TILE_HEIGHT + u16::from(row < 2);
    Rect::new(
        grid.x + col * (TILE_WIDTH + 1),
        grid.y + row * (TILE_HEIGHT + 1),
        width,
        height,
    )
    .intersection(grid)
}

fn center_horizontally(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y,
        width,
        area.height,
    )
}

/// Rows of a list of `len` items that fit in `height` lines, scrolled so
/// `selected` stays visible.
pub fn visible_rows(len: usize, selected: usize, height: u16) -> Range<usize> {
    let height = height as usize;
    if height == 0 || len == 0 {
        return 0..0;
    }
    let start = if selected >= height {
        selected + 1 - height
    } else {
        0
    };
    start..(start + height).min(len)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> ScreenLayout {
        ScreenLayout::compute(Rect::new(0, 0, 80, 24))
    }

    #[test]
    fn test_tiles_do_not_overlap() {
        let layout = layout();
        for (i, a) in layout.tiles.iter().enumerate() {
            assert_eq!(a.height, if i < 6 { TILE_HEIGHT + 1 } else { TILE_HEIGHT });
            for b in layout.tiles.iter().skip(i + 1) {
                assert!(!a.intersects(*b));
            }
        }
    }

    #[test]
    fn test_hit_finds_tiles() {
        let layout = layout();
        let center = layout.tiles[4];
        assert_eq!(layout.hit(center.x + 1, center.y + 1), Some(HitTarget::Tile(4)));
        let last = layout.tiles[8];
        assert_eq!(layout.hit(last.x, last.y), Some(HitTarget::Tile(8)));
    }

    #[test]
    fn test_hit_finds_move_rows() {
        let layout = layout();
        let rows = layout.move_rows;
        assert_eq!(layout.hit(rows.x, rows.y + 2), Some(HitTarget::MoveRow(2)));
        assert_eq!(
            layout.hit(layout.sort_button.x, layout.sort_button.y),
            Some(HitTarget::SortButton)
        );
        assert_eq!(layout.hit(0, 0), None);
    }

    #[test]
    fn test_visible_rows_follow_selection() {
        assert_eq!(visible_rows(10, 0, 4), 0..4);
        assert_eq!(visible_rows(10, 3, 4), 0..4);
        assert_eq!(visible_rows(10, 4, 4), 1..5);
        assert_eq!(visible_rows(10, 9, 4), 6..10);
        assert_eq!(visible_rows(2, 1, 4), 0..2);
        assert_eq!(visible_rows(3, 0, 0), 0..0);
    }
}
