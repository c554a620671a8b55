//! Turn bookkeeping: whose move it is and how many moves were made.

use crate::types::Player;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Current player and move count of one session.
///
/// The count only grows during a session and is reset by starting a fresh
/// `TurnState` on replay. It never touches the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    current: Player,
    moves_made: usize,
}

impl TurnState {
    /// Starts a session with `first` to move and no moves made.
    #[instrument]
    pub fn new(first: Player) -> Self {
        Self {
            current: first,
            moves_made: 0,
        }
    }

    /// The player on turn.
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// Moves made so far this session.
    pub fn moves_made(&self) -> usize {
        self.moves_made
    }

    /// Hands the turn to the opponent and counts the move just made.
    #[instrument(skip(self), fields(current = ?self.current, moves_made = self.moves_made))]
    pub fn advance(&mut self) {
        self.current = self.current.opponent();
        self.moves_made += 1;
        debug!(next = ?self.current, moves_made = self.moves_made, "Turn advanced");
    }

    /// True once `size * size` moves were made.
    pub fn is_board_full(&self, size: usize) -> bool {
        size.checked_mul(size).is_some_and(|cells| self.moves_made == cells)
    }
}
