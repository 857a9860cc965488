//! Drives the app through key presses the way a player would.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};
use timeline_tictactoe::{GameController, Player, Position, Square, StatusView};
use timeline_tui::{App, Focus, Transition, ui};

fn press(app: &mut App, code: KeyCode) -> Transition {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 24)).expect("test terminal");
    terminal.draw(|frame| ui::draw(frame, app)).expect("draw");
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_full_game_with_arrow_keys() {
    let mut app = App::new(GameController::new(), true);

    // X center, O top-left, X top-right, O bottom-right, X bottom-left.
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Left);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Left);
    press(&mut app, KeyCode::Left);
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.controller().status(), StatusView::Winner(Player::X));
    assert_eq!(
        app.controller().view().winning_line,
        Some([Position::TopRight, Position::Center, Position::BottomLeft])
    );

    // Moves after the win are ignored.
    press(&mut app, KeyCode::Char('2'));
    assert_eq!(app.controller().history().len(), 6);
    assert!(render(&app).contains("Winner: X"));
}

#[test]
fn test_branch_from_move_list() {
    let mut app = App::new(GameController::new(), true);
    for c in ['1', '5', '9', '3'] {
        press(&mut app, KeyCode::Char(c));
    }
    assert_eq!(app.controller().history().len(), 5);

    // Back to move #2 via the move list.
    press(&mut app, KeyCode::Tab);
    assert_eq!(*app.focus(), Focus::MoveList);
    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.controller().cursor(), 2);
    assert_eq!(app.controller().status(), StatusView::NextPlayer(Player::X));

    // History survives the jump until a new move is played.
    assert_eq!(app.controller().history().len(), 5);
    assert!(render(&app).contains("Go to move #4"));

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('7'));

    let controller = app.controller();
    assert_eq!(controller.history().len(), 4);
    assert_eq!(controller.cursor(), 3);
    assert_eq!(controller.current().get(Position::BottomLeft), Square::Occupied(Player::X));
    assert_eq!(controller.current().get(Position::BottomRight), Square::Empty);
    assert!(!render(&app).contains("Go to move #4"));
}

#[test]
fn test_step_back_then_restart() {
    let mut app = App::new(GameController::new(), false);
    for c in ['5', '1'] {
        press(&mut app, KeyCode::Char(c));
    }

    press(&mut app, KeyCode::Char('['));
    press(&mut app, KeyCode::Char('['));
    assert_eq!(app.controller().cursor(), 0);
    assert_eq!(app.controller().history().len(), 3);

    press(&mut app, KeyCode::Char('r'));
    assert_eq!(app.controller().history().len(), 1);
    assert!(render(&app).contains("Next player: X"));

    assert_eq!(press(&mut app, KeyCode::Char('q')), Transition::Quit);
}
