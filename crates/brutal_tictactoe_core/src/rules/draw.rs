//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::super::{GameStatus, Player, Position};
    use super::super::evaluate;
    use super::*;
    use strum::IntoEnumIterator;

    fn fill(board: &mut Board, layout: &str) {
        for (pos, ch) in Position::iter().zip(layout.chars()) {
            let square = match ch {
                'X' => Square::Occupied(Player::X),
                'O' => Square::Occupied(Player::O),
                _ => Square::Empty,
            };
            board.set(pos, square);
        }
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        assert!(!is_full(&board));
        assert_eq!(evaluate(&board), GameStatus::InProgress);
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let mut board = Board::new();
        fill(&mut board, "XOXOXXOXO");
        assert!(is_full(&board));
        assert_eq!(evaluate(&board), GameStatus::Tied);
    }

    #[test]
    fn test_full_board_with_line_is_won() {
        // X wins the top row on an otherwise full board.
        let mut board = Board::new();
        fill(&mut board, "XXXOOXXOO");
        assert!(is_full(&board));
        assert_eq!(evaluate(&board), GameStatus::Won(Player::X));
    }
}
