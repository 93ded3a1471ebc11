//! Line-oriented text protocol (GTP-style) driving a single game.
//!
//! ## Commands
//!
//! `help`, `game w h`, `show`, `play x y d`, `legal x y d`, `genmove`,
//! `winner`, `exit`. Command names are case-insensitive.
//!
//! ## Footers
//!
//! Every command ends with `= 1` on success or `= -1` on failure, followed by
//! a blank line. A rejected `play` ends with `= illegal move: <args> <reason>`
//! instead.

pub mod command;
pub mod interpreter;
pub mod response;

pub use command::{Command, CommandLine};
pub use interpreter::{Flow, Interpreter};
pub use response::{Footer, Response};
