//! Application state and key handling.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use timeline_tictactoe::{GameController, Position};
use tracing::{debug, error, info, instrument};

use crate::input::{cell_for_digit, move_cursor};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move over the board.
    #[default]
    Board,
    /// Arrow keys move over the move list.
    MoveList,
}

impl Focus {
    /// Toggles between the board and the move list.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::MoveList,
            Self::MoveList => Self::Board,
        }
    }
}

/// The result of handling a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Keep running.
    Stay,
    /// Leave the application.
    Quit,
}

/// Main application state: the game plus what the UI is pointing at.
#[derive(Debug, Getters)]
pub struct App {
    controller: GameController,
    cursor: Position,
    focus: Focus,
    selected_move: usize,
    show_cell_numbers: bool,
}

impl App {
    /// Creates the application around a controller.
    pub fn new(controller: GameController, show_cell_numbers: bool) -> Self {
        let selected_move = controller.cursor();
        Self {
            controller,
            cursor: Position::Center,
            focus: Focus::Board,
            selected_move,
            show_cell_numbers,
        }
    }

    /// Handles one key press.
    #[instrument(skip(self, key), fields(code = ?key.code, focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Transition {
        if let KeyCode::Char(c) = key.code
            && let Some(cell) = cell_for_digit(c)
        {
            self.play(cell);
            return Transition::Stay;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                info!("User quit");
                return Transition::Quit;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => self.restart(),
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
                self.selected_move = self.controller.cursor();
            }
            KeyCode::Char('[') => self.step_back(),
            KeyCode::Char(']') => self.step_forward(),
            code => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::MoveList => self.handle_move_list_key(code),
            },
        }
        Transition::Stay
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor.to_index()),
            _ => self.cursor = move_cursor(self.cursor, code),
        }
    }

    fn handle_move_list_key(&mut self, code: KeyCode) {
        let last = self.controller.move_numbers().end - 1;
        match code {
            KeyCode::Up => self.selected_move = self.selected_move.saturating_sub(1),
            KeyCode::Down => self.selected_move = (self.selected_move + 1).min(last),
            KeyCode::Home => self.selected_move = 0,
            KeyCode::End => self.selected_move = last,
            KeyCode::Enter | KeyCode::Char(' ') => self.jump(self.selected_move),
            _ => {}
        }
    }

    /// Plays at `cell`; the controller ignores illegal clicks.
    fn play(&mut self, cell: usize) {
        self.controller.play_at(cell);
        self.selected_move = self.controller.cursor();
    }

    /// Jumps to a move offered by the move list.
    fn jump(&mut self, index: usize) {
        if let Err(err) = self.controller.jump_to(index) {
            // The list only offers recorded moves, so this is a bug here.
            error!(%err, "Move list offered an unrecorded move");
            return;
        }
        debug!(index, "Jumped to move");
        self.selected_move = index;
    }

    fn step_back(&mut self) {
        if let Some(index) = self.controller.cursor().checked_sub(1) {
            self.jump(index);
        }
    }

    fn step_forward(&mut self) {
        let index = self.controller.cursor() + 1;
        if self.controller.move_numbers().contains(&index) {
            self.jump(index);
        }
    }

    /// Starts a fresh game.
    pub fn restart(&mut self) {
        self.controller.restart();
        self.cursor = Position::Center;
        self.focus = Focus::Board;
        self.selected_move = 0;
    }
}
