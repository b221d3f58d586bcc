//! Tests for the game state machine: moves, branching, jumps and reset.

use tictactoe_core::{
    Board, GameError, GameStatus, JumpPolicy, MoveLocation, Player, Position, Square, TicTacToe,
    WinningLine,
};

fn play(moves: &[usize]) -> TicTacToe {
    let mut game = TicTacToe::new();
    for &index in moves {
        game.apply_move(index).expect("Valid move");
    }
    game
}

#[test]
fn test_x_wins_top_row() {
    let game = play(&[0, 4, 1, 5, 2]);

    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert_eq!(game.winning_line(), Some(WinningLine::Row1));
    assert_eq!(
        game.winning_line().map(WinningLine::indices),
        Some([0, 1, 2])
    );
    assert_eq!(
        game.winning_line().map(WinningLine::strike_class),
        Some("strike-row-1")
    );
}

#[test]
fn test_o_wins_column() {
    let game = play(&[0, 1, 3, 4, 8, 7]);
    assert_eq!(game.status(), GameStatus::Won(Player::O));
    assert_eq!(game.winning_line(), Some(WinningLine::Column2));
}

#[test]
fn test_nine_moves_without_line_is_draw() {
    // X O X / X O O / O X X
    let game = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.winning_line(), None);
    assert_eq!(game.history().len(), 10);
}

#[test]
fn test_occupied_cell_is_noop() {
    let mut game = play(&[4]);
    let board = *game.board();
    let history = game.history().clone();

    assert_eq!(
        game.apply_move(4),
        Err(GameError::SquareOccupied(Position::Center))
    );
    assert_eq!(game.board(), &board);
    assert_eq!(game.history(), &history);
    assert_eq!(game.current_move(), 1);
}

#[test]
fn test_move_after_game_over_is_noop() {
    let mut game = play(&[0, 4, 1, 5, 2]);
    let history = game.history().clone();

    assert_eq!(game.apply_move(8), Err(GameError::GameOver));
    assert_eq!(game.history(), &history);
    assert_eq!(game.status(), GameStatus::Won(Player::X));
}

#[test]
fn test_move_records_location() {
    let game = play(&[5]);
    let entry = game.current_entry();
    assert_eq!(entry.location, Some(MoveLocation::new(2, 3, 5)));
    assert_eq!(entry.board.get(Position::MiddleRight), Square::Occupied(Player::X));
    assert_eq!(game.history().entries()[0].location, None);
}

#[test]
fn test_jump_to_start_after_win() {
    let mut game = play(&[0, 4, 1, 5, 2]);

    game.jump_to(0).unwrap();

    assert_eq!(game.board(), &Board::new());
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.winning_line(), None);
    // Jumping keeps the future until a new move is made.
    assert_eq!(game.history().len(), 6);
}

#[test]
fn test_jump_to_start_after_draw() {
    let mut game = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    game.jump_to(0).unwrap();
    assert!(game.board().is_blank());
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn test_move_behind_end_discards_future() {
    let mut game = play(&[0, 4, 1, 5]);
    game.jump_to(2).unwrap();

    let new_move = game.apply_move(8).unwrap();

    assert_eq!(new_move, 3);
    assert_eq!(game.history().len(), 4);
    assert_eq!(game.current_move(), 3);
    let board = game.board();
    assert_eq!(board.get(Position::BottomRight), Square::Occupied(Player::X));
    assert_eq!(board.get(Position::TopCenter), Square::Empty);
    assert_eq!(board.get(Position::MiddleRight), Square::Empty);
}

#[test]
fn test_jump_to_winning_board_resets_to_in_progress() {
    let mut game = play(&[0, 4, 1, 5, 2]);
    game.jump_to(3).unwrap();
    game.jump_to(5).unwrap();

    // The jumped-to board has a winner, but the outcome is not re-derived.
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.winning_line(), None);
    assert!(game.apply_move(8).is_ok());
}

#[test]
fn test_reevaluate_policy_restores_outcome() {
    let mut game = TicTacToe::new().with_jump_policy(JumpPolicy::Reevaluate);
    for index in [0, 4, 1, 5, 2] {
        game.apply_move(index).unwrap();
    }

    game.jump_to(3).unwrap();
    assert_eq!(game.status(), GameStatus::InProgress);

    game.jump_to(5).unwrap();
    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert_eq!(game.winning_line(), Some(WinningLine::Row1));
    assert_eq!(game.apply_move(8), Err(GameError::GameOver));
}

#[test]
fn test_reset_restores_initial_state() {
    let mut game = play(&[0, 4, 1, 5, 2]);
    game.toggle_sort();

    game.reset();

    assert_eq!(game.history().len(), 1);
    assert_eq!(game.current_move(), 0);
    assert!(game.board().is_blank());
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.winning_line(), None);
    assert_eq!(game.player_turn(), Player::X);
}

#[test]
fn test_every_reachable_board_has_one_status() {
    // Walk every legal game and check the status agrees with the rules.
    fn walk(game: &mut TicTacToe, visited: &mut usize) {
        *visited += 1;
        let evaluation = tictactoe_core::rules::evaluate(game.board());
        assert_eq!(game.status(), evaluation.status);
        if game.status().is_over() {
            return;
        }
        let here = game.current_move();
        for pos in Position::valid_moves(game.board()) {
            game.place(pos).unwrap();
            walk(game, visited);
            game.jump_to(here).unwrap();
        }
    }

    let mut game = TicTacToe::new();
    let mut visited = 0;
    walk(&mut game, &mut visited);
    // 255,168 finished games, plus every unfinished position on the way.
    assert!(visited > 255_168);
}
