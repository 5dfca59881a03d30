//! Keyboard mapping and cursor movement.

use brutal_tictactoe_core::Position;
use crossterm::event::KeyCode;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Move the cursor one cell up.
    Up,
    /// Move the cursor one cell down.
    Down,
    /// Move the cursor one cell left.
    Left,
    /// Move the cursor one cell right.
    Right,
    /// Select the cell under the cursor.
    SelectCursor,
    /// Select a cell by index (0-8).
    SelectCell(usize),
    /// Start a new game.
    Reset,
    /// Leave the program.
    Quit,
}

/// Maps a key to an input; unknown keys map to `None`.
///
/// Digits are 1-based like the cell hints on screen.
pub fn map_key(key: KeyCode) -> Option<Input> {
    match key {
        KeyCode::Up | KeyCode::Char('k') => Some(Input::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(Input::Down),
        KeyCode::Left | KeyCode::Char('h') => Some(Input::Left),
        KeyCode::Right | KeyCode::Char('l') => Some(Input::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Input::SelectCursor),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .map(|digit| Input::SelectCell(digit as usize - 1)),
        KeyCode::Char('r') | KeyCode::Char('n') => Some(Input::Reset),
        KeyCode::Char('q') | KeyCode::Esc => Some(Input::Quit),
        _ => None,
    }
}

/// Moves the cursor one step; it stops at the board edge.
pub fn move_cursor(cursor: Position, input: Input) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match input {
        Input::Up => row.checked_sub(1).map(|r| (r, col)),
        Input::Down => Some((row + 1, col)),
        Input::Left => col.checked_sub(1).map(|c| (row, c)),
        Input::Right => Some((row, col + 1)),
        _ => None,
    };
    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_are_one_based() {
        assert_eq!(map_key(KeyCode::Char('1')), Some(Input::SelectCell(0)));
        assert_eq!(map_key(KeyCode::Char('9')), Some(Input::SelectCell(8)));
        assert_eq!(map_key(KeyCode::Char('0')), None);
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(map_key(KeyCode::Enter), Some(Input::SelectCursor));
        assert_eq!(map_key(KeyCode::Char('r')), Some(Input::Reset));
        assert_eq!(map_key(KeyCode::Esc), Some(Input::Quit));
        assert_eq!(map_key(KeyCode::Char('k')), Some(Input::Up));
        assert_eq!(map_key(KeyCode::Tab), None);
    }

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, Input::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, Input::Down), Position::BottomCenter);
        assert_eq!(move_cursor(Position::Center, Input::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::Center, Input::Right), Position::MiddleRight);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, Input::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, Input::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, Input::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomRight, Input::Right), Position::BottomRight);
    }

    #[test]
    fn test_non_movement_keeps_cursor() {
        assert_eq!(move_cursor(Position::Center, Input::Reset), Position::Center);
    }
}
