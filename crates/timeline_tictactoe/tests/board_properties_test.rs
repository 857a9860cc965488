//! Property checks for board snapshots and win detection.

use std::collections::HashSet;

use timeline_tictactoe::{Board, CELL_COUNT, IllegalMove, Player, Square, rules};

/// Every board reachable from the empty board by legal play.
fn reachable_boards() -> Vec<Board> {
    let mut seen = HashSet::from([Board::new()]);
    let mut boards = vec![Board::new()];
    let mut frontier = vec![(Board::new(), 0usize)];

    while let Some((board, moves)) = frontier.pop() {
        for cell in 0..CELL_COUNT {
            if let Ok(next) = board.apply(cell, Player::for_move_count(moves))
                && seen.insert(next)
            {
                boards.push(next);
                frontier.push((next, moves + 1));
            }
        }
    }
    boards
}

#[test]
fn test_apply_is_local() {
    for board in reachable_boards().into_iter().take(400) {
        for cell in 0..CELL_COUNT {
            for mark in [Player::X, Player::O] {
                let Ok(next) = board.apply(cell, mark) else {
                    continue;
                };
                assert_eq!(next.square(cell), Some(Square::Occupied(mark)));
                for other in (0..CELL_COUNT).filter(|&other| other != cell) {
                    assert_eq!(next.square(other), board.square(other));
                }
            }
        }
    }
}

#[test]
fn test_apply_rejects_occupied_and_finished_boards() {
    for board in reachable_boards() {
        let finished = rules::evaluate(&board).is_some();
        for cell in 0..CELL_COUNT {
            let occupied = board.square(cell) != Some(Square::Empty);
            for mark in [Player::X, Player::O] {
                let result = board.apply(cell, mark);
                if finished {
                    assert_eq!(result, Err(IllegalMove::GameOver));
                } else if occupied {
                    assert!(matches!(result, Err(IllegalMove::SquareOccupied(_))));
                } else {
                    assert!(result.is_ok());
                }
            }
        }
    }
}

#[test]
fn test_reachable_boards_never_have_two_winners() {
    for board in reachable_boards() {
        let winners: Vec<Player> = rules::LINES
            .iter()
            .filter_map(|&[a, b, c]| {
                let sq = board.get(a);
                (sq == board.get(b) && sq == board.get(c))
                    .then(|| sq.mark())
                    .flatten()
            })
            .collect();
        assert!(winners.windows(2).all(|pair| pair[0] == pair[1]));
        assert_eq!(winners.first().copied(), rules::evaluate(&board));
    }
}

#[test]
fn test_reachable_state_count() {
    // 5478 distinct legal positions, counting the empty board.
    assert_eq!(reachable_boards().len(), 5478);
}
