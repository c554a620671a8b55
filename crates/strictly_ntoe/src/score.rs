//! Running win tally that survives replays.

use crate::types::Player;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Wins per player, indexed by [`Player::index`].
///
/// Created once per process and never reset. Draws do not change it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    wins: [u32; 2],
}

impl Score {
    /// A tally with no wins.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wins recorded for `player`.
    pub fn wins(&self, player: Player) -> u32 {
        self.wins[player.index()]
    }

    /// Adds one win for `player`.
    #[instrument(skip(self))]
    pub fn record_win(&mut self, player: Player) {
        self.wins[player.index()] += 1;
        info!(
            player_one = self.wins(Player::One),
            player_two = self.wins(Player::Two),
            "Score updated"
        );
    }

    /// Sum of all recorded wins.
    pub fn total(&self) -> u32 {
        self.wins.iter().sum()
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X {} : {} O",
            self.wins(Player::One),
            self.wins(Player::Two)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_win_is_per_player() {
        let mut score = Score::new();
        score.record_win(Player::Two);
        score.record_win(Player::Two);
        score.record_win(Player::One);
        assert_eq!(score.wins(Player::One), 1);
        assert_eq!(score.wins(Player::Two), 2);
        assert_eq!(score.total(), 3);
        assert_eq!(score.to_string(), "X 1 : 2 O");
    }
}
