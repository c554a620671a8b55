//! Win detection for boards of any size.
//!
//! A line wins only when every one of its cells holds the token under test.
//! Cells are compared against that token, never against their neighbours, so
//! a line of empty cells can not be mistaken for a win.

use crate::board::Board;
use crate::types::{Position, Square, Token};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A row, column or diagonal of length N.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Line {
    /// Row with the given index.
    #[display("row {}", _0)]
    Row(usize),
    /// Column with the given index.
    #[display("column {}", _0)]
    Column(usize),
    /// Cells where `row == col`.
    #[display("main diagonal")]
    MainDiagonal,
    /// Cells where `row + col == size - 1`.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

impl Line {
    /// Positions covered by this line on a board of `size`.
    pub fn positions(self, size: usize) -> impl Iterator<Item = Position> {
        (0..size).map(move |i| match self {
            Line::Row(row) => Position::new(row, i),
            Line::Column(col) => Position::new(i, col),
            Line::MainDiagonal => Position::new(i, i),
            Line::AntiDiagonal => Position::new(i, size - 1 - i),
        })
    }

    /// Every line of a board of `size`: rows, then columns, then diagonals.
    pub fn all(size: usize) -> impl Iterator<Item = Line> {
        (0..size)
            .map(Line::Row)
            .chain((0..size).map(Line::Column))
            .chain([Line::MainDiagonal, Line::AntiDiagonal])
    }
}

/// Fewest total moves after which a win is possible: the opener needs N
/// tokens and the opponent has placed N - 1 in between.
pub fn min_moves_for_win(size: usize) -> usize {
    (2 * size).saturating_sub(1)
}

fn is_complete(board: &Board, line: Line, token: Token) -> bool {
    let target = Square::Occupied(token);
    line.positions(board.size())
        .all(|pos| board.get(pos) == Ok(target))
}

/// Returns the first line made up entirely of `token`.
#[instrument(skip(board), fields(size = board.size()))]
pub fn winning_line(board: &Board, token: Token) -> Option<Line> {
    let line = Line::all(board.size()).find(|line| is_complete(board, *line, token));
    if let Some(line) = line {
        debug!(%line, %token, "Completed line found");
    }
    line
}

/// Checks whether `token` fills a row, a column or either diagonal.
pub fn check(board: &Board, token: Token) -> bool {
    winning_line(board, token).is_some()
}
