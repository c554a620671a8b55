//! Game rules for N x N tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board); they hold no state and
//! never mutate the board.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{Line, check, min_moves_for_win, winning_line};

use crate::board::Board;
use crate::types::{GameOutcome, Player};
use tracing::instrument;

/// Evaluates the board from scratch.
///
/// A win for either player takes precedence over a full board.
#[instrument(skip(board), fields(size = board.size()))]
pub fn outcome(board: &Board) -> GameOutcome {
    if let Some(player) = Player::all().find(|p| check(board, p.token())) {
        return GameOutcome::Win(player);
    }
    if is_full(board) {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}
