//! Player identification.
//!
//! The game has two players, numbered `1` and `2`. Turns alternate, but there
//! is no per-player state: a player is only ever "whoever made a move".

use serde::{Deserialize, Serialize};
use std::fmt;

/// Player identifier: `1` or `2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    /// The player credited with the first move of a game.
    pub const FIRST: PlayerId = PlayerId(1);

    /// The other player.
    pub const SECOND: PlayerId = PlayerId(2);

    /// Create a player ID from its number.
    ///
    /// Returns `None` unless `id` is 1 or 2.
    #[must_use]
    pub const fn new(id: u8) -> Option<Self> {
        match id {
            1 | 2 => Some(Self(id)),
            _ => None,
        }
    }

    /// Get the raw player number.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Get the other player (`3 - p`).
    #[must_use]
    pub const fn other(self) -> Self {
        Self(3 - self.0)
    }

    /// Player who makes the move following `last`.
    ///
    /// With no prior mover the first player moves.
    #[must_use]
    pub fn next_after(last: Option<PlayerId>) -> Self {
        last.map_or(Self::FIRST, PlayerId::other)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
