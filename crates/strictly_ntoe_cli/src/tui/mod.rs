//! Full-screen terminal front-end.

mod input;
mod ui;

pub use input::{KeyAction, home, key_action, move_cursor};

use crate::view::GridView;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use strictly_ntoe::{
    Board, BoardDisplay, GameError, MoveInput, Player, PlayerNames, Position, Score, Token,
    parse_replay_answer,
};
use tracing::{debug, info, instrument, warn};

/// Everything the UI draws. Owned by the front-end, fed by notifications.
#[derive(Debug, Clone)]
pub struct TuiView {
    pub(crate) grid: GridView,
    pub(crate) cursor: Position,
    pub(crate) show_cursor: bool,
    pub(crate) status: String,
    pub(crate) score: Score,
    pub(crate) names: PlayerNames,
    pub(crate) turn: Option<Player>,
}

impl TuiView {
    /// Creates a view with the cursor on the centre cell.
    pub fn new(grid: GridView, names: PlayerNames) -> Self {
        let cursor = home(grid.size());
        Self {
            grid,
            cursor,
            show_cursor: false,
            status: String::new(),
            score: Score::new(),
            names,
            turn: None,
        }
    }

    /// Applies a key press while a move is requested. Returns the chosen
    /// cell once the player confirms.
    pub fn handle_move_key(&mut self, action: KeyAction) -> Option<Result<Position, GameError>> {
        match action {
            KeyAction::Cursor(code) => {
                self.cursor = move_cursor(self.cursor, code, self.grid.size());
                None
            }
            KeyAction::Select => Some(Ok(self.cursor)),
            KeyAction::Quit => Some(Err(GameError::InputClosed)),
            KeyAction::Char(_) | KeyAction::Ignore => None,
        }
    }

    /// Applies a key press while the replay question is open.
    pub fn handle_replay_key(&mut self, action: KeyAction) -> Option<Result<bool, GameError>> {
        match action {
            KeyAction::Char(c) => Some(parse_replay_answer(&c.to_string())),
            KeyAction::Quit => Some(Ok(false)),
            KeyAction::Select => Some(Err(GameError::InvalidReplayInput(String::new()))),
            KeyAction::Cursor(_) | KeyAction::Ignore => None,
        }
    }
}

/// Raw mode plus alternate screen; restored on drop.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        debug!("Terminal switched to alternate screen");
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        info!("Restoring terminal");
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "Failed to leave raw mode");
        }
        if let Err(e) = execute!(self.terminal.backend_mut(), LeaveAlternateScreen) {
            warn!(error = %e, "Failed to leave alternate screen");
        }
        if let Err(e) = self.terminal.show_cursor() {
            warn!(error = %e, "Failed to show cursor");
        }
    }
}

/// Terminal UI implementing both collaborator contracts.
pub struct TuiFrontend {
    guard: TerminalGuard,
    view: TuiView,
}

fn frontend_error(e: io::Error) -> GameError {
    GameError::Frontend(e.to_string())
}

impl TuiFrontend {
    /// Takes over the terminal for a `size` x `size` board.
    #[instrument(skip(names))]
    pub fn new(size: usize, names: PlayerNames) -> io::Result<Self> {
        let guard = TerminalGuard::enter()?;
        Ok(Self {
            guard,
            view: TuiView::new(GridView::new(size), names),
        })
    }

    fn redraw(&mut self) -> Result<(), GameError> {
        let view = &self.view;
        self.guard
            .terminal
            .draw(|f| ui::draw(f, view))
            .map_err(frontend_error)?;
        Ok(())
    }

    /// Blocks until a key is pressed.
    fn next_key(&mut self) -> Result<KeyAction, GameError> {
        loop {
            match event::read().map_err(frontend_error)? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    return Ok(key_action(key.code));
                }
                Event::Resize(..) => self.redraw()?,
                _ => {}
            }
        }
    }
}

impl MoveInput for TuiFrontend {
    fn request_move(&mut self, _board: &Board, player: Player) -> Result<Position, GameError> {
        self.view.show_cursor = true;
        self.view.turn = Some(player);
        let picked = loop {
            self.redraw()?;
            let action = self.next_key()?;
            if let Some(picked) = self.view.handle_move_key(action) {
                break picked;
            }
        };
        self.view.show_cursor = false;
        debug!(?picked, "Cell picked");
        picked
    }

    fn request_replay_confirmation(&mut self) -> Result<bool, GameError> {
        self.view.turn = None;
        loop {
            self.redraw()?;
            let action = self.next_key()?;
            if let Some(answer) = self.view.handle_replay_key(action) {
                return answer;
            }
        }
    }
}

impl BoardDisplay for TuiFrontend {
    fn on_move_applied(&mut self, position: Position, token: Token) {
        self.view.grid.set(position, token);
    }

    fn on_invalid_move(&mut self, reason: &GameError) {
        self.view.status = format!("{reason}, choose another space");
    }

    fn on_game_won(&mut self, winner: Player, score: &Score) {
        self.view.score = *score;
        self.view.status = format!("{} wins! Play again? (y/n)", self.view.names.get(winner));
    }

    fn on_game_drawn(&mut self) {
        self.view.status = "Game is a draw! Play again? (y/n)".to_string();
    }

    fn on_session_reset(&mut self) {
        self.view.grid.clear();
        self.view.cursor = home(self.view.grid.size());
    }

    fn on_terminated(&mut self) {
        self.view.status = "Thanks for playing!".to_string();
        if let Err(e) = self.redraw() {
            warn!(error = %e, "Final redraw failed");
        }
    }

    fn on_awaiting_move(&mut self, player: Player, name: &str) {
        // Keep a rejection message visible until the next accepted move.
        if self.view.turn != Some(player) || self.view.status.is_empty() {
            self.view.status = format!("{name} ({}), make your move!", player.token());
        }
    }

    fn on_invalid_replay_input(&mut self, reason: &GameError) {
        self.view.status = format!("{reason}. Play again? (y/n)");
    }
}
