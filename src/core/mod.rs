//! Core engine types: digits, board, moves, players, state, RNG, configuration.
//!
//! These are the building blocks the rules and the protocol layer share.
//! Rules enforcement lives in [`crate::rules`]; `GameState` calls into it.

pub mod action;
pub mod board;
pub mod config;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Move, MoveRecord};
pub use board::{Board, Cell, Digit, Line};
pub use config::{BoardConfig, MAX_DIMENSION};
pub use player::PlayerId;
pub use rng::GameRng;
pub use state::GameState;
