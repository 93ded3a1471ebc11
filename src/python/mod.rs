//! Python bindings for the binary game engine.
//!
//! # Quick Start
//!
//! ```python
//! import binary_game as bg
//!
//! game = bg.BinaryGame(4, 4, seed=42)
//! game.make_move(0, 0, 1)
//! ok, reason = game.is_valid_move("0", "0", "1")   # (False, "occupied")
//!
//! while not game.is_game_over():
//!     game.genmove()
//! print(game.winner())
//! ```

use pyo3::prelude::*;

mod py_game;

pub use py_game::*;

/// binary_game: placement game engine.
#[pymodule]
fn binary_game(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyBinaryGame>()?;
    Ok(())
}
