//! Session lifecycle: moves, results, score and replay.
//!
//! A [`GameSession`] is a small state machine. Prompting states
//! ([`SessionState::AwaitingMove`], [`SessionState::ReplayPrompt`]) suspend
//! on the input collaborator; every other state resolves on its own.
//!
//! ```text
//! AwaitingMove --valid move--> MoveApplied --+--> AwaitingMove
//!      ^                                     +--> GameWon  --+
//!      |                                     +--> GameDrawn -+--> ReplayPrompt
//!      +------------------------ yes --------------------------------+  | no
//!                                                                      Terminated
//! ```

use crate::board::Board;
use crate::collaborators::{BoardDisplay, MoveInput};
use crate::error::GameError;
use crate::rules;
use crate::score::Score;
use crate::settings::SessionSettings;
use crate::turn::TurnState;
use crate::types::{GameOutcome, Move, Player};
use tracing::{debug, info, instrument, warn};

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SessionState {
    /// Waiting for the current player's coordinate.
    #[display("awaiting a move")]
    AwaitingMove,
    /// A token was just placed and the board has not been evaluated yet.
    #[display("applying {}", _0)]
    MoveApplied(Move),
    /// The player completed a line.
    #[display("won by {}", _0)]
    GameWon(Player),
    /// The board filled up without a winner.
    #[display("drawn")]
    GameDrawn,
    /// Waiting for a yes/no on playing again.
    #[display("waiting for a replay answer")]
    ReplayPrompt,
    /// Final state.
    #[display("terminated")]
    Terminated,
}

impl SessionState {
    /// True for states that suspend on the input collaborator.
    pub fn is_prompting(&self) -> bool {
        matches!(self, SessionState::AwaitingMove | SessionState::ReplayPrompt)
    }

    /// True for [`SessionState::Terminated`].
    pub fn is_terminated(&self) -> bool {
        matches!(self, SessionState::Terminated)
    }
}

/// Owns the board, turn state and score of a running game.
///
/// The board and turn state are rebuilt for every replay; the score lives as
/// long as the session object.
#[derive(Debug, Clone)]
pub struct GameSession {
    settings: SessionSettings,
    board: Board,
    turn: TurnState,
    score: Score,
    state: SessionState,
    history: Vec<Move>,
    games_played: u32,
}

impl GameSession {
    /// Creates a session waiting for the first move.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidBoardSize`] if the configured size is below 2 or
    /// too large to allocate a grid for.
    #[instrument(skip(settings), fields(board_size = settings.board_size))]
    pub fn new(settings: SessionSettings) -> Result<Self, GameError> {
        let board = Board::new(settings.board_size)?;
        let first = settings.starting_player.resolve(None);
        info!(?first, starting_player = ?settings.starting_player, "Session created");
        Ok(Self {
            settings,
            board,
            turn: TurnState::new(first),
            score: Score::new(),
            state: SessionState::AwaitingMove,
            history: Vec::new(),
            games_played: 0,
        })
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The board of the running session.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Turn state of the running session.
    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    /// Wins accumulated over all sessions.
    pub fn score(&self) -> &Score {
        &self.score
    }

    /// Moves of the running session, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Settings the session was created with.
    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// Number of sessions that ended in a win or a draw.
    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    /// Display name of `player`.
    pub fn name(&self, player: Player) -> &str {
        self.settings.names.get(player)
    }

    /// Evaluates the board as it stands.
    pub fn outcome(&self) -> GameOutcome {
        rules::outcome(&self.board)
    }

    /// Performs one transition and returns the new state.
    ///
    /// In a prompting state this blocks on `frontend`. Recoverable input
    /// errors are reported to the display and leave the state unchanged.
    ///
    /// # Errors
    ///
    /// Only non-recoverable collaborator errors ([`GameError::InputClosed`],
    /// [`GameError::Frontend`]).
    #[instrument(skip(self, frontend), fields(state = %self.state))]
    pub fn step<F>(&mut self, frontend: &mut F) -> Result<SessionState, GameError>
    where
        F: MoveInput + BoardDisplay + ?Sized,
    {
        match self.state {
            SessionState::AwaitingMove => self.prompt_move(frontend)?,
            SessionState::ReplayPrompt => self.prompt_replay(frontend)?,
            SessionState::Terminated => {}
            SessionState::MoveApplied(_) | SessionState::GameWon(_) | SessionState::GameDrawn => {
                self.resolve(frontend)
            }
        }
        Ok(self.state)
    }

    /// Steps until the session terminates and returns the final score.
    ///
    /// # Errors
    ///
    /// Propagates non-recoverable collaborator errors from [`Self::step`].
    #[instrument(skip_all, fields(board_size = self.board.size()))]
    pub fn run<F>(&mut self, frontend: &mut F) -> Result<Score, GameError>
    where
        F: MoveInput + BoardDisplay + ?Sized,
    {
        info!("Game loop started");
        while !self.state.is_terminated() {
            self.step(frontend)?;
        }
        info!(score = %self.score, games = self.games_played, "Game loop finished");
        Ok(self.score)
    }

    fn prompt_move<F>(&mut self, frontend: &mut F) -> Result<(), GameError>
    where
        F: MoveInput + BoardDisplay + ?Sized,
    {
        let player = self.turn.current_player();
        frontend.on_awaiting_move(player, self.settings.names.get(player));

        let attempt = match frontend.request_move(&self.board, player) {
            Ok(position) => self.submit_move(Move::new(player, position), frontend),
            Err(err) => Err(err),
        };

        match attempt {
            Ok(()) => Ok(()),
            Err(err) if err.is_recoverable() => {
                warn!(%err, ?player, "Move rejected");
                frontend.on_invalid_move(&err);
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    fn prompt_replay<F>(&mut self, frontend: &mut F) -> Result<(), GameError>
    where
        F: MoveInput + BoardDisplay + ?Sized,
    {
        match frontend.request_replay_confirmation() {
            Ok(again) => self.answer_replay(again, frontend),
            Err(err) if err.is_recoverable() => {
                warn!(%err, "Replay answer rejected");
                frontend.on_invalid_replay_input(&err);
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    /// Validates and applies `mv`, moving to [`SessionState::MoveApplied`].
    ///
    /// This is the single atomic apply-and-validate step for callers that
    /// receive moves from several actors. Follow it with [`Self::settle`].
    ///
    /// # Errors
    ///
    /// - [`GameError::WrongState`] outside [`SessionState::AwaitingMove`]
    /// - [`GameError::NotYourTurn`] if `mv.player` is not on turn
    /// - [`GameError::OutOfBounds`] / [`GameError::CellOccupied`] from the board
    #[instrument(skip(self, display), fields(player = ?mv.player, position = %mv.position))]
    pub fn submit_move<D>(&mut self, mv: Move, display: &mut D) -> Result<(), GameError>
    where
        D: BoardDisplay + ?Sized,
    {
        if self.state != SessionState::AwaitingMove {
            return Err(GameError::WrongState {
                state: self.state,
                action: "submit a move",
            });
        }
        if mv.player != self.turn.current_player() {
            return Err(GameError::NotYourTurn(mv.player));
        }

        self.board.place(mv.position, mv.token())?;
        self.history.push(mv);
        display.on_move_applied(mv.position, mv.token());
        self.turn.advance();
        self.state = SessionState::MoveApplied(mv);
        debug!(moves_made = self.turn.moves_made(), "Move applied");
        Ok(())
    }

    /// Runs automatic transitions until the session needs input or has
    /// terminated.
    pub fn settle<D>(&mut self, display: &mut D) -> SessionState
    where
        D: BoardDisplay + ?Sized,
    {
        while !self.state.is_prompting() && !self.state.is_terminated() {
            self.resolve(display);
        }
        self.state
    }

    /// Answers the replay question: `true` starts a fresh board, `false`
    /// terminates.
    ///
    /// # Errors
    ///
    /// [`GameError::WrongState`] outside [`SessionState::ReplayPrompt`].
    #[instrument(skip(self, display))]
    pub fn answer_replay<D>(&mut self, again: bool, display: &mut D) -> Result<(), GameError>
    where
        D: BoardDisplay + ?Sized,
    {
        if self.state != SessionState::ReplayPrompt {
            return Err(GameError::WrongState {
                state: self.state,
                action: "answer the replay prompt",
            });
        }

        if again {
            self.reset()?;
            display.on_session_reset();
        } else {
            info!(score = %self.score, "Players are done");
            self.state = SessionState::Terminated;
            display.on_terminated();
        }
        Ok(())
    }

    fn reset(&mut self) -> Result<(), GameError> {
        let last_mover = self.history.last().map(|mv| mv.player);
        let first = self.settings.starting_player.resolve(last_mover);
        self.board = Board::new(self.board.size())?;
        self.turn = TurnState::new(first);
        self.history.clear();
        self.state = SessionState::AwaitingMove;
        info!(?first, game = self.games_played + 1, "New session started");
        Ok(())
    }

    fn resolve<D>(&mut self, display: &mut D)
    where
        D: BoardDisplay + ?Sized,
    {
        let next = match self.state {
            SessionState::MoveApplied(mv) => self.evaluate(mv),
            SessionState::GameWon(winner) => {
                self.score.record_win(winner);
                self.games_played += 1;
                display.on_game_won(winner, &self.score);
                SessionState::ReplayPrompt
            }
            SessionState::GameDrawn => {
                self.games_played += 1;
                display.on_game_drawn();
                SessionState::ReplayPrompt
            }
            other => other,
        };
        debug!(from = %self.state, to = %next, "Transition");
        self.state = next;
    }

    /// Decides what follows the move just applied.
    fn evaluate(&self, mv: Move) -> SessionState {
        let size = self.board.size();
        if self.turn.moves_made() < rules::min_moves_for_win(size) {
            return SessionState::AwaitingMove;
        }
        if let Some(line) = rules::winning_line(&self.board, mv.token()) {
            info!(winner = ?mv.player, %line, moves = self.turn.moves_made(), "Game won");
            return SessionState::GameWon(mv.player);
        }
        if self.turn.is_board_full(size) {
            info!(moves = self.turn.moves_made(), "Game drawn");
            return SessionState::GameDrawn;
        }
        SessionState::AwaitingMove
    }
}
