//! Error taxonomy for the game engine.

use crate::session::SessionState;
use crate::types::{Player, Position};

/// Error raised while validating input or driving a session.
///
/// Most variants are recoverable: the session stays in its prompting state and
/// asks again. Only [`GameError::InputClosed`] and [`GameError::Frontend`]
/// end [`GameSession::run`](crate::GameSession::run).
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// Coordinate outside the grid.
    #[display("Position {position} is outside the {size}x{size} board")]
    OutOfBounds {
        /// The rejected coordinate.
        position: Position,
        /// Board size at the time of the attempt.
        size: usize,
    },

    /// The target cell already holds a token.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Position),

    /// Replay answer was neither yes nor no.
    #[display("Not a valid answer: {:?} (expected y or n)", _0)]
    InvalidReplayInput(String),

    /// A move arrived from the player who is not on turn.
    #[display("It's not {}'s turn", _0)]
    NotYourTurn(Player),

    /// Boards need at least two rows and columns, and a cell count that fits
    /// in memory addressing.
    #[display("Board size {} is not playable (minimum is 2)", _0)]
    InvalidBoardSize(usize),

    /// Operation not allowed in the current session state.
    #[display("Cannot {action} while the session is {state}")]
    WrongState {
        /// State the session was in.
        state: SessionState,
        /// What the caller tried to do.
        action: &'static str,
    },

    /// The input collaborator could not make sense of what it received.
    #[display("Could not read input: {}", _0)]
    UnreadableInput(String),

    /// The input source is gone (end of file, user quit).
    #[display("Input closed")]
    InputClosed,

    /// The front-end failed in a way it cannot recover from.
    #[display("Front-end failure: {}", _0)]
    Frontend(String),
}

impl GameError {
    /// True when the session should re-prompt instead of giving up.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, GameError::InputClosed | GameError::Frontend(_))
    }
}

impl std::error::Error for GameError {}
