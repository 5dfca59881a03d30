//! Core domain types for tic-tac-toe.

use super::action::MoveError;
use super::invariants::{self, InvalidGameState};
use super::position::Position;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the mark in this square, if any.
    pub fn mark(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of squares holding the given mark.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Number of non-empty squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, "{}", pos + 1)?,
                    Square::Occupied(player) => write!(f, "{player}")?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Board filled up without a winner.
    Tied,
}

impl GameStatus {
    /// Won or tied; no further moves are accepted.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if the game was won.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }
}

/// Complete game state.
///
/// Only [`GameState::try_move`] mutates a state; a fresh value from
/// [`GameState::new`] is the one and only initial state. Deserializing
/// fails for any state that breaks a game invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedGameState")]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<Position>,
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player.
    ///
    /// After a win this is still the player who made the winning move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the accepted moves in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Cells a selection would currently be accepted on; none once the game
    /// is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.status.is_terminal() {
            return Vec::new();
        }
        Position::iter()
            .filter(|pos| self.board.is_empty(*pos))
            .collect()
    }

    /// Places the current player's mark at `index` (0-8).
    ///
    /// All checks run before anything is written, so on `Err` the state is
    /// left exactly as it was.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game is already won or tied.
    /// - [`MoveError::OutOfBounds`] if `index` is not in `0..9`.
    /// - [`MoveError::SquareOccupied`] if the square already holds a mark.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn try_move(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.current_player;
        self.board.set(pos, Square::Occupied(player));
        self.history.push(pos);

        self.status = super::rules::evaluate(&self.board);
        if self.status == GameStatus::InProgress {
            self.current_player = player.opponent();
        }

        #[cfg(debug_assertions)]
        super::invariants::assert_invariants(self);

        Ok(self.status)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialized shape of a [`GameState`] before its invariants are checked.
#[derive(Deserialize)]
struct UncheckedGameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
    history: Vec<Position>,
}

impl TryFrom<UncheckedGameState> for GameState {
    type Error = InvalidGameState;

    fn try_from(raw: UncheckedGameState) -> Result<Self, Self::Error> {
        let state = GameState {
            board: raw.board,
            current_player: raw.current_player,
            status: raw.status,
            history: raw.history,
        };
        invariants::validate(&state)?;
        Ok(state)
    }
}
