//! Command-line interface for ntoe.

use crate::config::FrontendKind;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use strictly_ntoe::StartingPlayer;

/// Strictly N-toe - tic-tac-toe on an N x N board
#[derive(Parser, Debug)]
#[command(name = "ntoe")]
#[command(about = "Two-player tic-tac-toe on an N x N board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to multiplayer)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Board size (rows and columns)
    #[arg(short, long, global = true)]
    pub size: Option<usize>,

    /// Front-end to play with
    #[arg(long, value_enum, global = true)]
    pub frontend: Option<FrontendKind>,

    /// Who opens each game
    #[arg(long, value_enum, global = true)]
    pub first: Option<Opener>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    /// Two players sharing one keyboard
    #[default]
    Multiplayer,

    /// Play against the computer (not available)
    Singleplayer,
}

/// Opening rule as spelled on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opener {
    /// Player one always opens
    PlayerOne,
    /// Player two always opens
    PlayerTwo,
    /// Random opener every game
    Random,
    /// Whoever did not place the last token opens the next game
    Rotate,
}

impl From<Opener> for StartingPlayer {
    fn from(opener: Opener) -> Self {
        match opener {
            Opener::PlayerOne => StartingPlayer::PlayerOne,
            Opener::PlayerTwo => StartingPlayer::PlayerTwo,
            Opener::Random => StartingPlayer::Random,
            Opener::Rotate => StartingPlayer::Rotate,
        }
    }
}
