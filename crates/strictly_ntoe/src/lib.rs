//! Strictly N-toe - tic-tac-toe on an N x N board
//!
//! This crate is the game engine only: board storage, win and draw
//! detection, turn bookkeeping, the running score and the session state
//! machine. Rendering and input live behind the [`MoveInput`] and
//! [`BoardDisplay`] traits.
//!
//! # Architecture
//!
//! - **Board**: fixed-size grid, mutated only by placing a token
//! - **Rules**: pure win/draw evaluation
//! - **Turn**: current player and move count
//! - **Session**: one game after another, with a score that survives replays
//!
//! # Example
//!
//! ```
//! use strictly_ntoe::{BoardDisplay, GameError, GameSession, Move, Player, Position,
//!     Score, SessionSettings, SessionState, Token};
//!
//! struct Quiet;
//!
//! impl BoardDisplay for Quiet {
//!     fn on_move_applied(&mut self, _: Position, _: Token) {}
//!     fn on_invalid_move(&mut self, _: &GameError) {}
//!     fn on_game_won(&mut self, _: Player, _: &Score) {}
//!     fn on_game_drawn(&mut self) {}
//!     fn on_session_reset(&mut self) {}
//!     fn on_terminated(&mut self) {}
//! }
//!
//! # fn main() -> Result<(), GameError> {
//! let mut session = GameSession::new(SessionSettings::default())?;
//! session.submit_move(Move::new(Player::One, Position::new(1, 1)), &mut Quiet)?;
//! assert_eq!(session.settle(&mut Quiet), SessionState::AwaitingMove);
//! assert_eq!(session.turn().current_player(), Player::Two);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod collaborators;
mod error;
pub mod rules;
mod score;
mod session;
mod settings;
mod turn;
mod types;

pub use board::{Board, DEFAULT_BOARD_SIZE, MIN_BOARD_SIZE};
pub use collaborators::{BoardDisplay, MoveInput, Pair, parse_replay_answer};
pub use error::GameError;
pub use rules::Line;
pub use score::Score;
pub use session::{GameSession, SessionState};
pub use settings::{PlayerNames, SessionSettings, StartingPlayer};
pub use turn::TurnState;
pub use types::{GameOutcome, Move, Player, Position, Square, Token};
