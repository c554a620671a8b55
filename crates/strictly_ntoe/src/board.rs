//! N x N board storage.

use crate::error::GameError;
use crate::types::{Position, Square, Token};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Smallest playable board. A 1x1 board is won by the first placement.
pub const MIN_BOARD_SIZE: usize = 2;

/// Board size used when nothing else is configured.
pub const DEFAULT_BOARD_SIZE: usize = 3;

/// Square grid of cells in row-major order.
///
/// The dimensions are fixed at construction. The only mutation is
/// [`Board::place`], which never overwrites a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    squares: Vec<Square>,
}

impl Board {
    /// Creates an empty `size` x `size` board.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidBoardSize`] when `size` is below
    /// [`MIN_BOARD_SIZE`] or the cell count does not fit in a `usize`.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, GameError> {
        if size < MIN_BOARD_SIZE {
            return Err(GameError::InvalidBoardSize(size));
        }
        let cells = size.checked_mul(size).ok_or(GameError::InvalidBoardSize(size))?;
        Ok(Self {
            size,
            squares: vec![Square::Empty; cells],
        })
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, pos: Position) -> Result<usize, GameError> {
        if pos.row >= self.size || pos.col >= self.size {
            return Err(GameError::OutOfBounds {
                position: pos,
                size: self.size,
            });
        }
        Ok(pos.row * self.size + pos.col)
    }

    /// Returns the square at `pos`.
    pub fn get(&self, pos: Position) -> Result<Square, GameError> {
        let idx = self.index(pos)?;
        Ok(self.squares[idx])
    }

    /// Places `token` at `pos`.
    ///
    /// # Errors
    ///
    /// [`GameError::OutOfBounds`] for coordinates outside the grid,
    /// [`GameError::CellOccupied`] when the cell already holds a token. The
    /// board is untouched in both cases.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn place(&mut self, pos: Position, token: Token) -> Result<(), GameError> {
        let idx = self.index(pos)?;
        if !self.squares[idx].is_empty() {
            return Err(GameError::CellOccupied(pos));
        }
        self.squares[idx] = Square::Occupied(token);
        debug!(%pos, %token, "Token placed");
        Ok(())
    }

    /// Checks if the square at `pos` is empty. Out-of-range positions are
    /// never empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        matches!(self.get(pos), Ok(Square::Empty))
    }

    /// True iff no cell is empty.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| !s.is_empty())
    }

    /// All squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Squares of row `row`, left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = Square> + '_ {
        self.squares
            .chunks(self.size)
            .nth(row)
            .into_iter()
            .flatten()
            .copied()
    }

    /// Positions that can still receive a token.
    pub fn empty_positions(&self) -> Vec<Position> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_empty())
            .map(|(idx, _)| Position::new(idx / self.size, idx % self.size))
            .collect()
    }

    /// Number of tokens on the board.
    pub fn filled(&self) -> usize {
        self.squares.iter().filter(|s| !s.is_empty()).count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let separator = vec!["-"; self.size].join("+");
        for row in 0..self.size {
            let line = self
                .row(row)
                .map(|sq| match sq {
                    Square::Empty => ".".to_string(),
                    Square::Occupied(token) => token.to_string(),
                })
                .collect::<Vec<_>>()
                .join("|");
            f.write_str(&line)?;
            if row + 1 < self.size {
                write!(f, "\n{separator}\n")?;
            }
        }
        Ok(())
    }
}
