use std::path::PathBuf;

use crate::core::MAX_DIMENSION;
use crate::rules::MoveError;

/// Board dimensions outside `1..=MAX_DIMENSION`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Width and height must be between 1 and {}", MAX_DIMENSION)]
pub struct DimensionError {
    pub width: i64,
    pub height: i64,
}

/// Errors a protocol command can fail with.
///
/// Every variant is local to one command; the interpreter reports it and
/// keeps reading.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("No game in progress. Use 'game' command to start a new game.")]
    NoGame,

    #[error("'{command}' command requires {expected} arguments: {usage}")]
    Arity {
        command: &'static str,
        expected: usize,
        usage: &'static str,
    },

    #[error("invalid integer argument '{0}'")]
    InvalidInteger(String),

    #[error(transparent)]
    Dimension(#[from] DimensionError),

    /// A `play` that was rejected. Reported in the footer itself rather
    /// than on the error channel.
    #[error("illegal move: {args} {reason}")]
    IllegalMove { args: String, reason: String },

    #[error("generated move was rejected: {0}")]
    Move(#[from] MoveError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
