//! Front-end copy of the board, fed only by engine notifications.

use strictly_ntoe::{Position, Square, Token};
use tracing::warn;

/// What the front-end has drawn so far.
///
/// Updated from [`BoardDisplay`](strictly_ntoe::BoardDisplay) callbacks; the
/// engine's board is never read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridView {
    size: usize,
    cells: Vec<Square>,
}

impl GridView {
    /// Creates an empty `size` x `size` view.
    ///
    /// A size whose cell count overflows gets no storage; every cell then
    /// reads as empty.
    pub fn new(size: usize) -> Self {
        let cells = size.checked_mul(size).unwrap_or_else(|| {
            warn!(size, "Grid too large to store");
            0
        });
        Self {
            size,
            cells: vec![Square::Empty; cells],
        }
    }

    fn index(&self, pos: Position) -> Option<usize> {
        if pos.row >= self.size || pos.col >= self.size {
            return None;
        }
        let idx = pos.row.checked_mul(self.size)?.checked_add(pos.col)?;
        (idx < self.cells.len()).then_some(idx)
    }

    /// Rows (and columns) of the view.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Records a placed token.
    pub fn set(&mut self, pos: Position, token: Token) {
        let Some(idx) = self.index(pos) else {
            warn!(%pos, size = self.size, "Notification outside the grid");
            return;
        };
        self.cells[idx] = Square::Occupied(token);
    }

    /// Square at `pos`; empty for anything outside the grid.
    pub fn get(&self, pos: Position) -> Square {
        self.index(pos).map_or(Square::Empty, |idx| self.cells[idx])
    }

    /// Forgets every token.
    pub fn clear(&mut self) {
        self.cells.fill(Square::Empty);
    }

    /// Renders the grid with 1-based row and column labels.
    pub fn render_text(&self) -> String {
        let mut out = String::from("   ");
        for col in 1..=self.size {
            out.push_str(&format!("{col:^3}"));
        }
        out.push('\n');
        for row in 0..self.size {
            out.push_str(&format!("{:>2} ", row + 1));
            for col in 0..self.size {
                let symbol = match self.get(Position::new(row, col)) {
                    Square::Empty => ".".to_string(),
                    Square::Occupied(token) => token.to_string(),
                };
                out.push_str(&format!("{symbol:^3}"));
            }
            out.push('\n');
        }
        out
    }
}
