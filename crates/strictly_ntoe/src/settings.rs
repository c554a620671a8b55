//! Session settings: board size, player names and who opens.

use crate::board::DEFAULT_BOARD_SIZE;
use crate::types::Player;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Which player opens a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StartingPlayer {
    /// Player one always opens.
    #[default]
    PlayerOne,
    /// Player two always opens.
    PlayerTwo,
    /// Coin flip before every session.
    Random,
    /// Player one opens the first session; afterwards the player who did not
    /// place the final token of the previous session opens.
    Rotate,
}

impl StartingPlayer {
    /// Picks the opener. `last_mover` is whoever placed the final token of
    /// the previous session, if there was one.
    #[instrument]
    pub fn resolve(self, last_mover: Option<Player>) -> Player {
        match self {
            StartingPlayer::PlayerOne => Player::One,
            StartingPlayer::PlayerTwo => Player::Two,
            StartingPlayer::Random => {
                if rand::random::<bool>() {
                    Player::One
                } else {
                    Player::Two
                }
            }
            StartingPlayer::Rotate => last_mover.map_or(Player::One, Player::opponent),
        }
    }
}

/// Display names for both players.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerNames {
    names: [String; 2],
}

impl PlayerNames {
    /// Creates names for player one and player two.
    pub fn new(one: impl Into<String>, two: impl Into<String>) -> Self {
        Self {
            names: [one.into(), two.into()],
        }
    }

    /// Name of `player`.
    pub fn get(&self, player: Player) -> &str {
        &self.names[player.index()]
    }
}

impl Default for PlayerNames {
    fn default() -> Self {
        Self::new("player1", "player2")
    }
}

/// Everything a [`GameSession`](crate::GameSession) needs at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSettings {
    /// Rows and columns of the board.
    pub board_size: usize,
    /// Display names.
    pub names: PlayerNames,
    /// Opening rule applied to every session.
    pub starting_player: StartingPlayer,
}

impl SessionSettings {
    /// Default settings on a `board_size` board.
    pub fn with_size(board_size: usize) -> Self {
        Self {
            board_size,
            ..Self::default()
        }
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            names: PlayerNames::default(),
            starting_player: StartingPlayer::default(),
        }
    }
}
