//! Stateless UI rendering for tic-tac-toe.

use brutal_tictactoe_core::{GameStatus, Player, Position, Square};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::app::App;

const BLUE: Color = Color::Rgb(96, 165, 250);
const RED: Color = Color::Rgb(248, 113, 113);
const GREEN: Color = Color::Rgb(74, 222, 128);
const ORANGE: Color = Color::Rgb(251, 146, 60);
const YELLOW: Color = Color::Rgb(250, 204, 21);

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Colour for a player's marks and turn banner.
pub fn player_color(player: Player) -> Color {
    match player {
        Player::X => BLUE,
        Player::O => RED,
    }
}

/// Banner colour: green on a win, orange on a tie, otherwise the mover's colour.
pub fn status_color(status: GameStatus, current: Player) -> Color {
    match status {
        GameStatus::Won(_) => GREEN,
        GameStatus::Tied => ORANGE,
        GameStatus::InProgress => player_color(current),
    }
}

/// Renders the whole screen from application state.
pub fn draw(frame: &mut Frame, app: &App) {
    let [title, status, board, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(BOARD_HEIGHT),
        Constraint::Length(4),
    ])
    .areas(frame.area());

    let title_text = Paragraph::new("TIC TAC TOE")
        .style(Style::default().fg(Color::Black).bg(YELLOW).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Thick));
    frame.render_widget(title_text, center_rect(title, BOARD_WIDTH + 6, 3));

    draw_status(frame, status, app);
    draw_board(frame, board, app);
    draw_footer(frame, footer, app);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let state = app.state();
    let color = status_color(state.status(), state.current_player());
    let banner = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Black).bg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Thick));
    frame.render_widget(banner, center_rect(area, BOARD_WIDTH + 6, 3));
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let enabled = app.state().valid_moves();
    let rows = Layout::vertical([Constraint::Length(CELL_HEIGHT); 3])
        .spacing(1)
        .split(board_area);

    for (row, row_area) in rows.iter().enumerate() {
        let cols = Layout::horizontal([Constraint::Length(CELL_WIDTH); 3])
            .spacing(1)
            .split(*row_area);
        for (col, cell_area) in cols.iter().enumerate() {
            if let Some(pos) = Position::from_row_col(row, col) {
                draw_cell(frame, *cell_area, app, pos, enabled.contains(&pos));
            }
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position, enabled: bool) {
    let state = app.state();

    let (text, style) = match state.board().get(pos) {
        Square::Occupied(player) => (
            player.to_string(),
            Style::default()
                .fg(Color::White)
                .bg(player_color(player))
                .add_modifier(Modifier::BOLD),
        ),
        Square::Empty if enabled && app.show_cell_numbers() => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Empty => (String::new(), Style::default()),
    };

    let border_style = if pos == app.cursor() && !state.status().is_terminal() {
        Style::default().fg(YELLOW).add_modifier(Modifier::BOLD)
    } else if enabled {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    };

    let cell = Paragraph::new(Line::from(Span::styled(text, style)))
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Thick)
                .border_style(border_style),
        );
    frame.render_widget(cell, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let last = app
        .last_event()
        .map(|event| event.to_string())
        .unwrap_or_default();

    let lines = vec![
        Line::from(Span::styled(last, Style::default().fg(Color::Gray))),
        Line::from("arrows/hjkl move · enter select · 1-9 pick · r new game · q quit"),
        Line::from(Span::styled(
            "NEO BRUTAL THEME ⚡",
            Style::default().fg(Color::Black).bg(Color::White).add_modifier(Modifier::BOLD),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [_, vert, _] = Layout::vertical([
        Constraint::Length(area.height.saturating_sub(height) / 2),
        Constraint::Length(height),
        Constraint::Min(0),
    ])
    .areas(area);

    let [_, rect, _] = Layout::horizontal([
        Constraint::Length(area.width.saturating_sub(width) / 2),
        Constraint::Length(width),
        Constraint::Min(0),
    ])
    .areas(vert);
    rect
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::input::Input;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 26)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_status_colors() {
        assert_eq!(status_color(GameStatus::InProgress, Player::X), BLUE);
        assert_eq!(status_color(GameStatus::InProgress, Player::O), RED);
        assert_eq!(status_color(GameStatus::Won(Player::O), Player::O), GREEN);
        assert_eq!(status_color(GameStatus::Tied, Player::X), ORANGE);
    }

    #[test]
    fn test_renders_title_status_and_hints() {
        let screen = render(&App::new(true));
        assert!(screen.contains("TIC TAC TOE"));
        assert!(screen.contains("Player X's Turn"));
        assert!(screen.contains('5'));
        assert!(screen.contains("NEO BRUTAL THEME"));
    }

    #[test]
    fn test_renders_marks_and_last_event() {
        let mut app = App::new(false);
        app.handle_input(Input::SelectCell(4));
        let screen = render(&app);
        assert!(screen.contains('X'));
        assert!(screen.contains("X played Center"));
        assert!(screen.contains("Player O's Turn"));
    }

    #[test]
    fn test_finished_game_hides_cell_numbers() {
        let mut app = App::new(true);
        for index in [0, 1, 3, 2, 6] {
            app.handle_input(Input::SelectCell(index));
        }
        let screen = render(&app);
        assert!(screen.contains("Player X WINS!"));
        // Center (5) is still empty but no longer selectable.
        assert!(!screen.contains('5'));
    }

    #[test]
    fn test_small_terminal_does_not_panic() {
        let mut terminal = Terminal::new(TestBackend::new(10, 5)).unwrap();
        terminal.draw(|f| draw(f, &App::new(true))).unwrap();
    }
}
