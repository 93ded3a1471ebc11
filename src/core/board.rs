//! Grid storage: digits, cells and the fixed-size board.
//!
//! ## Coordinates
//!
//! `x` selects the column and `y` selects the row. Cell `(x, y)` therefore
//! lives in row `y`, and rows are stored contiguously (row-major).
//!
//! ## Rendering
//!
//! Cells render as `.` (empty), `0` and `1`. The board's `Display` writes one
//! line per row, which is exactly what the `show` command prints.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use super::config::{BoardConfig, MAX_DIMENSION};

/// One row or column copied out of the board.
///
/// Lines never exceed `MAX_DIMENSION` cells, so they stay on the stack.
pub type Line = SmallVec<[Cell; MAX_DIMENSION]>;

/// A binary digit that can be placed on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Digit {
    Zero,
    One,
}

impl Digit {
    /// Both digits in ascending order.
    pub const ALL: [Digit; 2] = [Digit::Zero, Digit::One];

    /// Numeric value of the digit.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Digit::Zero => 0,
            Digit::One => 1,
        }
    }

    /// Convert a numeric value into a digit.
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Digit> {
        match value {
            0 => Some(Digit::Zero),
            1 => Some(Digit::One),
            _ => None,
        }
    }

    /// Parse a protocol token.
    ///
    /// The token must consist of ASCII digits only, so signs and blanks are
    /// rejected. Leading zeros are accepted (`"00"` is zero).
    #[must_use]
    pub fn parse_token(token: &str) -> Option<Digit> {
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        match token.trim_start_matches('0') {
            "" => Some(Digit::Zero),
            "1" => Some(Digit::One),
            _ => None,
        }
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Contents of a single board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Filled(Digit),
}

impl Cell {
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Character used by `show`.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Filled(Digit::Zero) => '0',
            Cell::Filled(Digit::One) => '1',
        }
    }
}

impl From<Digit> for Cell {
    fn from(digit: Digit) -> Self {
        Cell::Filled(digit)
    }
}

/// Fixed-size grid of cells.
///
/// Dimensions come from a validated [`BoardConfig`] and never change.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new(config: BoardConfig) -> Self {
        let width = config.width();
        let height = config.height();
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Most cells of either digit a row may hold: `ceil(width / 2)`.
    #[must_use]
    pub fn row_cap(&self) -> usize {
        (self.width + 1) / 2
    }

    /// Most cells of either digit a column may hold: `ceil(height / 2)`.
    #[must_use]
    pub fn column_cap(&self) -> usize {
        (self.height + 1) / 2
    }

    /// Check whether `(x, y)` lies on the board.
    #[must_use]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Get the cell at `(x, y)`, or `None` when off the board.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.contains(x, y).then(|| self.cells[y * self.width + x])
    }

    /// Overwrite the cell at `(x, y)`.
    ///
    /// Callers must have checked the coordinates; rules are not enforced here.
    pub(crate) fn set(&mut self, x: usize, y: usize, cell: Cell) {
        debug_assert!(self.contains(x, y), "({x}, {y}) is off the board");
        self.cells[y * self.width + x] = cell;
    }

    /// Copy row `y`.
    #[must_use]
    pub fn row(&self, y: usize) -> Line {
        let start = y * self.width;
        self.cells[start..start + self.width].iter().copied().collect()
    }

    /// Copy column `x`.
    #[must_use]
    pub fn column(&self, x: usize) -> Line {
        (0..self.height)
            .map(|y| self.cells[y * self.width + x])
            .collect()
    }

    /// Number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Iterate over rows as rendered strings.
    pub fn rendered_rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells
            .chunks(self.width)
            .map(|row| row.iter().map(|c| c.symbol()).collect())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rendered_rows() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}
