//! Placement rules and game outcome.
//!
//! The rules are pure functions of a `Board`:
//! - whether a placement is legal, and if not, why
//! - which placements are legal
//! - whether any placement remains
//!
//! `GameState` wraps these with turn attribution and history.

pub mod constraints;
pub mod result;

pub use constraints::{check_move, has_legal_move, legal_moves, parse_move, MoveError};
pub use result::GameResult;
