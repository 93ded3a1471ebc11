//! # binary-game
//!
//! Engine for a two-player binary placement game, plus the text protocol
//! used to drive it.
//!
//! ## Rules
//!
//! Players take turns writing a `0` or `1` into an empty cell of a
//! `width × height` grid (each side 1 to 20). A placement is legal when:
//!
//! 1. it does not create three equal digits in a row or column, and
//! 2. no row or column ends up with more than `ceil(n / 2)` of either digit,
//!    `n` being the line length.
//!
//! The game ends when no legal placement remains. The player who made the
//! last placement wins.
//!
//! ## Modules
//!
//! - `core`: digits, board, moves, players, RNG, game state
//! - `rules`: placement constraints and legal-move enumeration
//! - `protocol`: command parsing, dispatch and the read-eval-print loop
//! - `config`: TOML configuration for the interpreter
//! - `error`: structured error types

pub mod config;
pub mod core;
pub mod error;
pub mod protocol;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Board, BoardConfig, Cell, Digit, GameRng, GameState, Move, MoveRecord, PlayerId,
    MAX_DIMENSION,
};

pub use crate::rules::{GameResult, MoveError};

pub use crate::protocol::{Command, Interpreter};

pub use crate::config::AppConfig;
pub use crate::error::{CommandError, ConfigError, DimensionError};
