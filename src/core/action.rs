//! Move representation.
//!
//! A move is a placement: a digit written into cell `(x, y)`. Moves are
//! plain values. They are built, validated against a `GameState`, and then
//! either applied or dropped.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::board::Digit;
use super::player::PlayerId;

/// A placement of `digit` at column `x`, row `y`.
///
/// ## Example
///
/// ```
/// use binary_game::core::{Digit, Move};
///
/// let mv = Move::new(2, 0, Digit::One);
/// assert_eq!(mv.to_string(), "2 0 1");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub x: usize,
    pub y: usize,
    pub digit: Digit,
}

impl Move {
    #[must_use]
    pub const fn new(x: usize, y: usize, digit: Digit) -> Self {
        Self { x, y, digit }
    }
}

/// Protocol form: `"x y digit"`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.digit)
    }
}

/// A move that was applied, with the player it was credited to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player credited with this move.
    pub player: PlayerId,

    /// The move applied.
    pub mv: Move,

    /// Position in the game's move sequence (starts at 1).
    pub sequence: u32,
}

impl MoveRecord {
    #[must_use]
    pub fn new(player: PlayerId, mv: Move, sequence: u32) -> Self {
        Self {
            player,
            mv,
            sequence,
        }
    }
}
