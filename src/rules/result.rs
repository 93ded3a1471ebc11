//! Result of a completed game.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Result of a completed game.
///
/// The game cannot be drawn: whoever makes the last legal move wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
}

