//! Strictly N-toe front-ends
//!
//! Console and full-screen terminal players for the `strictly_ntoe` engine.
//!
//! # Architecture
//!
//! - **Config**: TOML file plus command-line overrides
//! - **View**: the front-end's own copy of the board, fed by notifications
//! - **Console**: line-oriented prompts over any reader and writer
//! - **Tui**: ratatui board with a keyboard cursor

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod console;
pub mod tui;
pub mod view;

pub use cli::{Cli, Command, Opener};
pub use config::{ConfigError, FrontendKind, GameConfig, MAX_BOARD_SIZE};
pub use console::{Console, parse_position};
pub use tui::{TuiFrontend, TuiView};
pub use view::GridView;
