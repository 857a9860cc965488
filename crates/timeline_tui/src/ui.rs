//! Stateless UI rendering: board, status line, and move list.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use timeline_tictactoe::{GameView, Player, Position, Square, StatusView};

use crate::app::{App, Focus};

const HELP: &str = "←↑↓→ move · Enter/1-9 play · Tab move list · [ ] step · r restart · q quit";

/// Draws the whole screen for the current app state.
pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.controller().view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board + move list
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Timeline Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(38)])
        .split(chunks[1]);

    draw_board(frame, body[0], app, &view);
    draw_move_list(frame, body[1], app, &view);
    draw_status(frame, chunks[2], &view);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, view: &GameView<'_>) {
    let board_area = center_rect(area, 38, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        draw_row(frame, area, app, view, row);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, view: &GameView<'_>, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, cols[col * 2], app, view, pos);
        }
        if col < 2 {
            let sep = Paragraph::new(vec![Line::from("│"); 3])
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, view: &GameView<'_>, pos: Position) {
    let empty_label = if *app.show_cell_numbers() {
        (pos.to_index() + 1).to_string()
    } else {
        String::new()
    };

    let (symbol, mut style) = match view.board.get(pos) {
        Square::Empty => (empty_label, Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if view.winning_line.is_some_and(|line| line.contains(&pos)) {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if *app.focus() == Focus::Board && pos == *app.cursor() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let cell = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(format!("   {}   ", symbol), style)),
        Line::default(),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(cell, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_move_list(frame: &mut Frame, area: Rect, app: &App, view: &GameView<'_>) {
    let history = app.controller().history();

    let items: Vec<ListItem> = view
        .moves
        .iter()
        .map(|entry| {
            let marker = if entry.is_current { "▶ " } else { "  " };
            let detail = history
                .move_at(entry.index)
                .map(|mov| format!(" ({} {})", mov.player, mov.position))
                .unwrap_or_default();
            let style = if entry.is_current {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{}{}", marker, entry.label), style),
                Span::styled(detail, Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let border_style = match app.focus() {
        Focus::MoveList => Style::default().fg(Color::Cyan),
        Focus::Board => Style::default(),
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Moves")
                .border_style(border_style),
        )
        .highlight_style(Style::default().bg(Color::White).fg(Color::Black));

    let mut state = ListState::default();
    if *app.focus() == Focus::MoveList {
        state.select(Some(*app.selected_move()));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_status(frame: &mut Frame, area: Rect, view: &GameView<'_>) {
    let (text, color) = match view.status {
        StatusView::Winner(_) => (view.status.to_string(), Color::Green),
        StatusView::NextPlayer(_) if view.board.is_full() => {
            (format!("{} (board full)", view.status), Color::Yellow)
        }
        StatusView::NextPlayer(_) => (view.status.to_string(), Color::Yellow),
    };

    let status = Paragraph::new(text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};
    use timeline_tictactoe::GameController;

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).expect("test terminal");
        terminal.draw(|frame| draw(frame, app)).expect("draw");
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_new_game() {
        let app = App::new(GameController::new(), true);
        let text = screen_text(&app);
        assert!(text.contains("Timeline Tic-Tac-Toe"));
        assert!(text.contains("Next player: X"));
        assert!(text.contains("Go to game start"));
        assert!(!text.contains("Go to move #1"));
    }

    #[test]
    fn test_renders_winner_and_move_list() {
        let mut app = App::new(GameController::new(), true);
        for c in ['1', '4', '2', '5', '3'] {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }

        let text = screen_text(&app);
        assert!(text.contains("Winner: X"));
        assert!(text.contains("Go to move #5"));
        assert!(text.contains("(X Top-right)"));
    }

    #[test]
    fn test_move_detail_fits_longest_label() {
        let mut app = App::new(GameController::new(), true);
        for c in ['5', '1', '8'] {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }

        let text = screen_text(&app);
        assert!(text.contains("Go to move #3 (X Bottom-center)"));
    }

    #[test]
    fn test_full_board_hint() {
        let mut app = App::new(GameController::new(), true);
        for c in ['1', '2', '3', '5', '4', '6', '8', '7', '9'] {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }

        let text = screen_text(&app);
        assert!(text.contains("Next player: O (board full)"));
        assert!(!text.contains("Winner"));
    }

    #[test]
    fn test_small_terminal_does_not_panic() {
        let app = App::new(GameController::new(), false);
        let mut terminal = Terminal::new(TestBackend::new(20, 8)).expect("test terminal");
        terminal.draw(|frame| draw(frame, &app)).expect("draw");
    }
}
