//! Line-oriented front-end over any reader and writer.

use crate::view::GridView;
use std::io::{BufRead, Write};
use strictly_ntoe::{
    Board, BoardDisplay, GameError, MoveInput, Player, PlayerNames, Position, Score, Token,
    parse_replay_answer,
};
use tracing::{debug, instrument, warn};

/// Parses `"row col"` with 1-based indices (commas allowed as separators).
///
/// Only the shape is checked here; whether the cell exists is up to the
/// engine.
#[instrument]
pub fn parse_position(line: &str) -> Result<Position, GameError> {
    let parts: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .collect();
    let [row, col] = parts.as_slice() else {
        return Err(GameError::UnreadableInput(format!(
            "expected \"row column\", got {:?}",
            line.trim()
        )));
    };
    let parse = |s: &str| -> Result<usize, GameError> {
        let n: usize = s
            .parse()
            .map_err(|_| GameError::UnreadableInput(format!("{s:?} is not a number")))?;
        n.checked_sub(1)
            .ok_or_else(|| GameError::UnreadableInput("rows and columns start at 1".to_string()))
    };
    Ok(Position::new(parse(*row)?, parse(*col)?))
}

/// Console front-end: prompts on `W`, answers from `R`.
pub struct Console<R, W> {
    input: R,
    output: W,
    grid: GridView,
    names: PlayerNames,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console for a `size` x `size` board.
    pub fn new(input: R, output: W, size: usize, names: PlayerNames) -> Self {
        Self {
            input,
            output,
            grid: GridView::new(size),
            names,
        }
    }

    /// Consumes the console, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> Result<String, GameError> {
        self.output
            .flush()
            .map_err(|e| GameError::Frontend(e.to_string()))?;
        let mut bytes = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut bytes)
            .map_err(|e| GameError::Frontend(e.to_string()))?;
        if read == 0 {
            debug!("End of input");
            return Err(GameError::InputClosed);
        }
        // The line is consumed either way, so the next prompt starts clean.
        String::from_utf8(bytes)
            .map_err(|_| GameError::UnreadableInput("input is not valid UTF-8".to_string()))
    }

    fn prompt(&mut self, text: &str) -> Result<(), GameError> {
        write!(self.output, "{text}").map_err(|e| GameError::Frontend(e.to_string()))
    }

    fn say(&mut self, text: &str) {
        if let Err(e) = writeln!(self.output, "{text}") {
            warn!(error = %e, "Console write failed");
        }
    }

    fn show_board(&mut self) {
        let board = self.grid.render_text();
        if let Err(e) = write!(self.output, "{board}") {
            warn!(error = %e, "Console write failed");
        }
    }
}

impl<R: BufRead, W: Write> MoveInput for Console<R, W> {
    fn request_move(&mut self, _board: &Board, _player: Player) -> Result<Position, GameError> {
        self.prompt("row column: ")?;
        let line = self.read_line()?;
        parse_position(&line)
    }

    fn request_replay_confirmation(&mut self) -> Result<bool, GameError> {
        self.prompt("play again (y/n)? ")?;
        let line = self.read_line()?;
        parse_replay_answer(&line)
    }
}

impl<R: BufRead, W: Write> BoardDisplay for Console<R, W> {
    fn on_move_applied(&mut self, position: Position, token: Token) {
        self.grid.set(position, token);
        self.show_board();
    }

    fn on_invalid_move(&mut self, reason: &GameError) {
        self.say(&format!("{reason}, choose another space"));
    }

    fn on_game_won(&mut self, winner: Player, score: &Score) {
        let name = self.names.get(winner).to_string();
        self.say(&format!("{name} wins!"));
        self.say(&format!(
            "score: {} {} - {} {}",
            self.names.get(Player::One),
            score.wins(Player::One),
            score.wins(Player::Two),
            self.names.get(Player::Two)
        ));
    }

    fn on_game_drawn(&mut self) {
        self.say("game is a draw!");
    }

    fn on_session_reset(&mut self) {
        self.grid.clear();
        self.show_board();
    }

    fn on_terminated(&mut self) {
        self.say("bye!");
        if let Err(e) = self.output.flush() {
            warn!(error = %e, "Console flush failed");
        }
    }

    fn on_awaiting_move(&mut self, player: Player, name: &str) {
        self.say(&format!("{name} ({}) make your move!", player.token()));
    }

    fn on_invalid_replay_input(&mut self, reason: &GameError) {
        self.say(&reason.to_string());
    }
}
