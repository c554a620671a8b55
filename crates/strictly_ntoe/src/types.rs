//! Core domain types for N x N tic-tac-toe.

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};
use tracing::instrument;

/// Symbol a player places on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Token {
    /// Placed by player one.
    #[display("X")]
    X,
    /// Placed by player two.
    #[display("O")]
    O,
}

/// One of the two participants.
///
/// Each player owns exactly one token, so the player is recoverable from any
/// occupied square.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    derive_more::Display,
)]
pub enum Player {
    /// First player, plays `X`.
    #[display("Player one")]
    One,
    /// Second player, plays `O`.
    #[display("Player two")]
    Two,
}

impl Player {
    /// Returns the token this player places.
    pub fn token(self) -> Token {
        match self {
            Player::One => Token::X,
            Player::Two => Token::O,
        }
    }

    /// Returns the player owning `token`.
    pub fn from_token(token: Token) -> Self {
        match token {
            Token::X => Player::One,
            Token::O => Player::Two,
        }
    }

    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Stable index (0 or 1) for per-player arrays.
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// Both players, player one first.
    pub fn all() -> impl Iterator<Item = Player> {
        Player::iter()
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Nothing placed yet.
    #[default]
    Empty,
    /// Holds a token.
    Occupied(Token),
}

impl Square {
    /// Returns the token in this square, if any.
    pub fn token(self) -> Option<Token> {
        match self {
            Square::Empty => None,
            Square::Occupied(token) => Some(token),
        }
    }

    /// True for [`Square::Empty`].
    pub fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }
}

/// Zero-based coordinate of a cell.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct Position {
    /// Row index, top to bottom.
    pub row: usize,
    /// Column index, left to right.
    pub col: usize,
}

impl Position {
    /// Creates a new position.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A player placing their token at a position.
///
/// Moves are domain events: they can be validated before they are applied and
/// are kept in the session history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Where the token goes.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Token placed by this move.
    pub fn token(&self) -> Token {
        self.player.token()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) -> {}", self.player, self.token(), self.position)
    }
}

/// Result of evaluating a board.
///
/// Never stored; recomputed from the board whenever asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// No completed line and at least one empty square.
    InProgress,
    /// The player completed a line.
    Win(Player),
    /// Board full without a completed line.
    Draw,
}

impl GameOutcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameOutcome::Win(player) => Some(*player),
            GameOutcome::InProgress | GameOutcome::Draw => None,
        }
    }

    /// True once the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }
}
