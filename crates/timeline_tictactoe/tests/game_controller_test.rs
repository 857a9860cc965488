//! Scenario tests for the game controller.

use timeline_tictactoe::{
    Board, GameController, History, IllegalMove, Move, Player, Position, Square, StatusView,
    invariants::{HistoryInvariants, InvariantSet},
};

fn played(cells: &[usize]) -> GameController {
    let mut game = GameController::new();
    for &cell in cells {
        game.play_at(cell);
    }
    game
}

#[test]
fn test_top_row_win_then_board_is_terminal() {
    let mut game = played(&[0, 3, 1, 4]);
    assert_eq!(game.status(), StatusView::NextPlayer(Player::X));

    game.play_at(2);
    assert_eq!(game.status(), StatusView::Winner(Player::X));
    assert_eq!(game.history().len(), 6);

    let before = game.history().clone();
    game.play_at(5);
    assert_eq!(game.history(), &before);
    assert_eq!(game.status(), StatusView::Winner(Player::X));
    assert_eq!(game.try_play_at(5), Err(IllegalMove::GameOver));
}

#[test]
fn test_branching_discards_future() {
    let mut game = played(&[0, 3, 1, 4, 2]);

    game.jump_to(2).expect("recorded move");
    assert_eq!(game.current().get(Position::TopLeft), Square::Occupied(Player::X));
    assert_eq!(game.current().get(Position::MiddleLeft), Square::Occupied(Player::O));
    assert_eq!(game.history().len(), 6, "jumping never changes the history");

    game.play_at(6);
    assert_eq!(game.history().len(), 4);
    assert_eq!(game.move_numbers().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    assert_eq!(game.current().get(Position::BottomLeft), Square::Occupied(Player::X));
    assert_eq!(game.current().get(Position::TopCenter), Square::Empty);
    assert_eq!(
        game.history().move_at(3),
        Some(Move::new(Player::X, Position::BottomLeft))
    );
    assert_eq!(game.status(), StatusView::NextPlayer(Player::O));
}

#[test]
fn test_jump_back_from_win_allows_play() {
    let mut game = played(&[0, 3, 1, 4, 2]);
    game.jump_to(4).expect("recorded move");
    assert_eq!(game.status(), StatusView::NextPlayer(Player::X));

    game.play_at(8);
    assert_eq!(game.history().len(), 6);
    assert_eq!(game.status(), StatusView::NextPlayer(Player::O));
}

#[test]
fn test_append_after_set_cursor_always_truncates_at_cursor() {
    for target in 0..=5 {
        let mut game = played(&[0, 3, 1, 4, 2]);
        game.jump_to(target).expect("recorded move");

        let free = Position::valid_moves(game.current())[0];
        let result = game.try_play_at(free.to_index());

        if target == 5 {
            assert_eq!(result, Err(IllegalMove::GameOver));
            assert_eq!(game.history().len(), 6);
        } else {
            result.expect("free square before the win");
            assert_eq!(game.history().len(), target + 2);
            assert!(game.history().is_at_latest());
        }
    }
}

#[test]
fn test_jump_does_not_mutate_snapshots() {
    let mut game = played(&[4, 0, 8, 2]);
    let snapshots: Vec<Board> = game.history().snapshots().to_vec();

    for index in [0, 3, 1, 4, 2] {
        game.jump_to(index).expect("recorded move");
        assert_eq!(game.history().snapshots(), snapshots.as_slice());
        assert_eq!(game.current(), &snapshots[index]);
    }
}

#[test]
fn test_winner_is_stable_for_descendants() {
    let mut game = GameController::new();
    let mut seen_winner = None;

    // O completes the middle column on move 6; later cells are rejected.
    for cell in [0, 1, 2, 4, 3, 7, 5, 6, 8] {
        game.play_at(cell);
        let winner = game.status().winner();
        if seen_winner.is_some() {
            assert_eq!(winner, seen_winner);
        }
        seen_winner = seen_winner.or(winner);
    }

    assert_eq!(seen_winner, Some(Player::O));
    assert_eq!(game.history().len(), 7);
}

#[test]
fn test_drawn_game_reports_next_player() {
    // X O X / X O O / O X X
    let game = played(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert!(game.current().is_full());
    assert_eq!(game.current().winner(), None);
    assert_eq!(game.status(), StatusView::NextPlayer(Player::O));
}

#[test]
fn test_invariants_hold_through_random_walk() {
    let mut game = GameController::new();
    let script: [(bool, usize); 14] = [
        (true, 4),
        (true, 0),
        (true, 8),
        (false, 1),
        (true, 2),
        (true, 6),
        (false, 0),
        (true, 0),
        (true, 0),
        (true, 7),
        (false, 1),
        (true, 1),
        (true, 5),
        (true, 3),
    ];

    for (is_play, arg) in script {
        if is_play {
            game.play_at(arg);
        } else {
            game.jump_to(arg).expect("recorded move");
        }
        assert!(HistoryInvariants::check_all(game.history()).is_ok());
        assert!(game.check_invariants().is_ok());
    }
}

#[test]
fn test_restart_returns_to_fresh_history() {
    let mut game = played(&[0, 3, 1]);
    game.restart();
    assert_eq!(game.history(), &History::new());
    assert_eq!(game.move_entries().len(), 1);
    assert_eq!(game.move_entries()[0].label, "Go to game start");
}
