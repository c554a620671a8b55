//! Front-end configuration loaded from TOML and overridden by flags.

use crate::cli::Cli;
use clap::ValueEnum;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_ntoe::{
    DEFAULT_BOARD_SIZE, MIN_BOARD_SIZE, PlayerNames, SessionSettings, StartingPlayer,
};
use tracing::{debug, info, instrument};

/// Largest board the front-ends can lay out.
pub const MAX_BOARD_SIZE: usize = 10;

/// Which front-end drives the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FrontendKind {
    /// Full-screen terminal UI.
    #[default]
    Tui,
    /// Line-oriented prompts on stdin/stdout.
    Console,
}

/// Game configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Rows and columns of the board.
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// Display name of player one (X).
    #[serde(default = "default_player_one")]
    player_one: String,

    /// Display name of player two (O).
    #[serde(default = "default_player_two")]
    player_two: String,

    /// Opening rule.
    #[serde(default)]
    starting_player: StartingPlayer,

    /// Front-end to use.
    #[serde(default)]
    frontend: FrontendKind,
}

#[instrument]
fn default_board_size() -> usize {
    DEFAULT_BOARD_SIZE
}

#[instrument]
fn default_player_one() -> String {
    "player1".to_string()
}

#[instrument]
fn default_player_two() -> String {
    "player2".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: default_board_size(),
            player_one: default_player_one(),
            player_two: default_player_two(),
            starting_player: StartingPlayer::default(),
            frontend: FrontendKind::default(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(board_size = config.board_size, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, defaults otherwise.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Applies command-line overrides.
    #[instrument(skip(self, cli))]
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(size) = cli.size {
            self.board_size = size;
        }
        if let Some(frontend) = cli.frontend {
            self.frontend = frontend;
        }
        if let Some(first) = cli.first {
            self.starting_player = first.into();
        }
        debug!(config = ?self, "Overrides applied");
    }

    /// Rejects values the front-ends can not handle.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::new(format!(
                "Board size must be between {} and {}, got {}",
                MIN_BOARD_SIZE, MAX_BOARD_SIZE, self.board_size
            )));
        }
        if self.player_one.trim().is_empty() || self.player_two.trim().is_empty() {
            return Err(ConfigError::new("Player names must not be empty".to_string()));
        }
        if self.player_one == self.player_two {
            return Err(ConfigError::new(format!(
                "Both players are called {:?}",
                self.player_one
            )));
        }
        Ok(())
    }

    /// Engine settings derived from this configuration.
    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            board_size: self.board_size,
            names: PlayerNames::new(self.player_one.clone(), self.player_two.clone()),
            starting_player: self.starting_player,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = GameConfig::load(None).unwrap();
        assert_eq!(*config.board_size(), 3);
        assert_eq!(config.player_one(), "player1");
        assert_eq!(*config.frontend(), FrontendKind::Tui);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_file_partial() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "board_size = 4").unwrap();
        writeln!(file, "player_two = \"Ada\"").unwrap();
        writeln!(file, "starting_player = \"rotate\"").unwrap();
        writeln!(file, "frontend = \"console\"").unwrap();

        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.board_size(), 4);
        assert_eq!(config.player_one(), "player1");
        assert_eq!(config.player_two(), "Ada");
        assert_eq!(*config.starting_player(), StartingPlayer::Rotate);
        assert_eq!(*config.frontend(), FrontendKind::Console);
    }

    #[test]
    fn test_from_file_rejects_garbage() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "board_size = \"big\"").unwrap();
        let err = GameConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_missing_file() {
        let err = GameConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(err.message.starts_with("Failed to read config file"));
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut config = GameConfig::default();
        let cli = Cli::try_parse_from(["ntoe", "--size", "6", "--first", "player-two"]).unwrap();
        config.apply_cli(&cli);
        assert_eq!(*config.board_size(), 6);
        assert_eq!(*config.starting_player(), StartingPlayer::PlayerTwo);

        let settings = config.session_settings();
        assert_eq!(settings.board_size, 6);
        assert_eq!(settings.names.get(strictly_ntoe::Player::Two), "player2");
    }

    #[test]
    fn test_validate_board_size() {
        let mut config = GameConfig::default();
        let cli = Cli::try_parse_from(["ntoe", "--size", "1"]).unwrap();
        config.apply_cli(&cli);
        assert!(config.validate().is_err());

        let cli = Cli::try_parse_from(["ntoe", "--size", "11"]).unwrap();
        config.apply_cli(&cli);
        assert!(config.validate().is_err());
    }
}
