//! Game bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{BoardConfig, Digit, GameRng, GameState, Move};

/// Python wrapper for a game in progress.
#[pyclass(name = "BinaryGame")]
pub struct PyBinaryGame {
    state: GameState,
    rng: GameRng,
}

#[pymethods]
impl PyBinaryGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - width, height: board size (1-20)
    /// - seed: RNG seed for genmove; drawn from the OS when omitted
    #[new]
    #[pyo3(signature = (width, height, seed = None))]
    fn new(width: i64, height: i64, seed: Option<u64>) -> PyResult<Self> {
        let config =
            BoardConfig::new(width, height).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self {
            state: GameState::new(config),
            rng: seed.map_or_else(GameRng::from_entropy, GameRng::new),
        })
    }

    /// Check a placement given as strings.
    ///
    /// Returns `(True, None)` or `(False, reason)`.
    fn is_valid_move(&self, x: &str, y: &str, digit: &str) -> (bool, Option<String>) {
        match self.state.is_valid_move(x, y, digit) {
            Ok(_) => (true, None),
            Err(reason) => (false, Some(reason.to_string())),
        }
    }

    /// Apply a placement.
    ///
    /// Returns the player credited with the move, or raises `ValueError`
    /// with the rejection reason.
    fn make_move(&mut self, x: usize, y: usize, digit: u8) -> PyResult<u8> {
        let digit = Digit::from_value(digit).ok_or_else(|| PyValueError::new_err("wrong number"))?;
        self.state
            .make_move(Move::new(x, y, digit))
            .map(|p| p.number())
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// All legal placements as `(x, y, digit)` tuples.
    fn legal_moves(&self) -> Vec<(usize, usize, u8)> {
        self.state
            .legal_moves()
            .into_iter()
            .map(|mv| (mv.x, mv.y, mv.digit.value()))
            .collect()
    }

    /// Play a uniformly random legal move. Returns `None` when none remain.
    fn genmove(&mut self) -> PyResult<Option<(usize, usize, u8)>> {
        let legal = self.state.legal_moves();
        let Some(&mv) = self.rng.choose(&legal) else {
            return Ok(None);
        };
        self.state
            .make_move(mv)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Some((mv.x, mv.y, mv.digit.value())))
    }

    fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    /// Winning player (1 or 2), or None while moves remain.
    fn winner(&self) -> Option<u8> {
        self.state.winner().map(|p| p.number())
    }

    /// Board rows as strings of `.`, `0` and `1`.
    fn rows(&self) -> Vec<String> {
        self.state.board().rendered_rows().collect()
    }

    #[getter]
    fn move_count(&self) -> usize {
        self.state.move_count()
    }

    fn __str__(&self) -> String {
        self.state.board().to_string()
    }

    fn __repr__(&self) -> String {
        let status = if self.state.is_game_over() {
            "over"
        } else {
            "ongoing"
        };
        format!(
            "BinaryGame({}x{}, moves={}, status={})",
            self.state.board().width(),
            self.state.board().height(),
            self.state.move_count(),
            status
        )
    }
}
