//! Strictly N-toe - tic-tac-toe on an N x N board

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::io;
use std::sync::Arc;
use strictly_ntoe::{BoardDisplay, GameError, GameSession, MoveInput, Player, Score};
use strictly_ntoe_cli::{Cli, Command, Console, FrontendKind, GameConfig, TuiFrontend};
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if cli.command.unwrap_or_default() == Command::Singleplayer {
        println!("no computer opponent available, try multiplayer");
        return Ok(());
    }

    let mut config = GameConfig::load(cli.config.as_deref())?;
    config.apply_cli(&cli);
    config.validate()?;

    init_tracing(&cli, *config.frontend())?;
    info!(
        board_size = config.board_size(),
        frontend = ?config.frontend(),
        "Starting Strictly N-toe"
    );

    let mut session = GameSession::new(config.session_settings())?;
    let names = session.settings().names.clone();

    let score = match config.frontend() {
        FrontendKind::Tui => {
            // Terminal is restored when the front-end drops, before printing.
            let mut tui = TuiFrontend::new(*config.board_size(), names)?;
            play(&mut session, &mut tui)
        }
        FrontendKind::Console => {
            let stdin = io::stdin();
            let mut console = Console::new(stdin.lock(), io::stdout(), *config.board_size(), names);
            play(&mut session, &mut console)
        }
    }?;

    println!(
        "final score: {} {} - {} {}",
        config.player_one(),
        score.wins(Player::One),
        score.wins(Player::Two),
        config.player_two()
    );
    Ok(())
}

/// Runs the session until the players stop. Closing the input counts as quitting.
#[instrument(skip_all)]
fn play<F>(session: &mut GameSession, frontend: &mut F) -> Result<Score>
where
    F: MoveInput + BoardDisplay,
{
    match session.run(frontend) {
        Ok(score) => Ok(score),
        Err(GameError::InputClosed) => {
            info!(games = session.games_played(), "Input closed, leaving");
            Ok(*session.score())
        }
        Err(e) => {
            error!(error = %e, "Session aborted");
            Err(e.into())
        }
    }
}

/// Logs go to `--log-file` when given, stderr otherwise. The TUI owns the
/// screen, so it stays silent on stderr unless `RUST_LOG` asks otherwise.
fn init_tracing(cli: &Cli, frontend: FrontendKind) -> Result<()> {
    let fallback = match (frontend, &cli.log_file) {
        (_, Some(_)) => "info",
        (FrontendKind::Tui, None) => "off",
        (FrontendKind::Console, None) => "warn",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    match &cli.log_file {
        Some(path) => {
            let log_file = std::fs::File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Arc::new(log_file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
        }
    }
    Ok(())
}
