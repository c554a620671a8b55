//! Contracts between the engine and its front-end.
//!
//! The engine asks a [`MoveInput`] for coordinates and replay answers, and
//! tells a [`BoardDisplay`] what happened. It never reads anything back from
//! the display.

use crate::board::Board;
use crate::error::GameError;
use crate::score::Score;
use crate::types::{Player, Position, Token};
use tracing::instrument;

/// Source of moves and replay answers.
///
/// Both calls block from the engine's point of view. Recoverable errors
/// (see [`GameError::is_recoverable`]) make the engine ask again.
pub trait MoveInput {
    /// Asks for the next coordinate for `player`.
    ///
    /// The coordinate is validated by the engine; the input does not need to
    /// check it against `board`.
    fn request_move(&mut self, board: &Board, player: Player) -> Result<Position, GameError>;

    /// Asks whether to play another session.
    fn request_replay_confirmation(&mut self) -> Result<bool, GameError>;
}

/// Receiver of engine notifications.
pub trait BoardDisplay {
    /// A token was placed.
    fn on_move_applied(&mut self, position: Position, token: Token);

    /// A move was rejected; the same player will be asked again.
    fn on_invalid_move(&mut self, reason: &GameError);

    /// `winner` completed a line. `score` already counts this win.
    fn on_game_won(&mut self, winner: Player, score: &Score);

    /// The board filled up without a winner.
    fn on_game_drawn(&mut self);

    /// A fresh board is in play.
    fn on_session_reset(&mut self);

    /// No more sessions; release any resources.
    fn on_terminated(&mut self);

    /// `player` is about to be asked for a move.
    fn on_awaiting_move(&mut self, _player: Player, _name: &str) {}

    /// A replay answer was rejected; the question will be asked again.
    fn on_invalid_replay_input(&mut self, _reason: &GameError) {}
}

/// Joins an input and a display that live in separate values.
#[derive(Debug, Clone, Default)]
pub struct Pair<I, D> {
    /// Source of moves.
    pub input: I,
    /// Notification sink.
    pub display: D,
}

impl<I, D> Pair<I, D> {
    /// Creates a new pair.
    pub fn new(input: I, display: D) -> Self {
        Self { input, display }
    }
}

impl<I: MoveInput, D> MoveInput for Pair<I, D> {
    fn request_move(&mut self, board: &Board, player: Player) -> Result<Position, GameError> {
        self.input.request_move(board, player)
    }

    fn request_replay_confirmation(&mut self) -> Result<bool, GameError> {
        self.input.request_replay_confirmation()
    }
}

impl<I, D: BoardDisplay> BoardDisplay for Pair<I, D> {
    fn on_move_applied(&mut self, position: Position, token: Token) {
        self.display.on_move_applied(position, token);
    }

    fn on_invalid_move(&mut self, reason: &GameError) {
        self.display.on_invalid_move(reason);
    }

    fn on_game_won(&mut self, winner: Player, score: &Score) {
        self.display.on_game_won(winner, score);
    }

    fn on_game_drawn(&mut self) {
        self.display.on_game_drawn();
    }

    fn on_session_reset(&mut self) {
        self.display.on_session_reset();
    }

    fn on_terminated(&mut self) {
        self.display.on_terminated();
    }

    fn on_awaiting_move(&mut self, player: Player, name: &str) {
        self.display.on_awaiting_move(player, name);
    }

    fn on_invalid_replay_input(&mut self, reason: &GameError) {
        self.display.on_invalid_replay_input(reason);
    }
}

/// Parses a yes/no answer to the replay question.
///
/// Accepts `y`, `yes`, `n` and `no`, ignoring case and surrounding whitespace.
///
/// # Errors
///
/// [`GameError::InvalidReplayInput`] for anything else.
#[instrument]
pub fn parse_replay_answer(text: &str) -> Result<bool, GameError> {
    match text.trim().to_lowercase().as_str() {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        _ => Err(GameError::InvalidReplayInput(text.trim().to_string())),
    }
}
