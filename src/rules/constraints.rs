//! Placement constraints.
//!
//! A placement is checked in a fixed order and the first failure wins:
//!
//! 1. coordinates on the board (`wrong coordinate`)
//! 2. digit is 0 or 1 (`wrong number`)
//! 3. cell is empty (`occupied`)
//! 4. no three equal digits in a row or column (`three in a row`)
//! 5. no row or column holds more than `ceil(n / 2)` of either digit
//!    (`too many 0` / `too many 1`)
//!
//! Steps 1 and 2 only apply to raw protocol tokens; a typed [`Move`] already
//! carries a valid digit but may still be off the board.
//!
//! Each check copies the affected row and column with the candidate digit
//! substituted and scans them. Lines hold at most 20 cells, so the scan is
//! cheap enough to run for every cell when enumerating legal moves.

use crate::core::{Board, Cell, Digit, Line, Move};

/// Why a placement was rejected.
///
/// `Display` yields the reason string reported by the protocol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum MoveError {
    #[error("wrong coordinate")]
    WrongCoordinate,

    #[error("wrong number")]
    WrongNumber,

    #[error("occupied")]
    Occupied,

    #[error("three in a row")]
    ThreeInARow,

    #[error("too many {0}")]
    TooMany(Digit),
}

/// Parse and validate a placement given as protocol tokens.
///
/// Coordinates must be unsigned decimal numbers (`"-1"` and `"+1"` are
/// wrong coordinates, not wrong numbers).
pub fn parse_move(board: &Board, x: &str, y: &str, digit: &str) -> Result<Move, MoveError> {
    let (x, y) = match (parse_index(x), parse_index(y)) {
        (Some(x), Some(y)) if board.contains(x, y) => (x, y),
        _ => return Err(MoveError::WrongCoordinate),
    };
    let digit = Digit::parse_token(digit).ok_or(MoveError::WrongNumber)?;

    let mv = Move::new(x, y, digit);
    check_move(board, mv)?;
    Ok(mv)
}

/// Validate a typed placement against the board.
pub fn check_move(board: &Board, mv: Move) -> Result<(), MoveError> {
    match board.get(mv.x, mv.y) {
        None => return Err(MoveError::WrongCoordinate),
        Some(Cell::Filled(_)) => return Err(MoveError::Occupied),
        Some(Cell::Empty) => {}
    }

    let candidate = Cell::from(mv.digit);
    let mut row = board.row(mv.y);
    row[mv.x] = candidate;
    let mut column = board.column(mv.x);
    column[mv.y] = candidate;

    if has_triple(&row) || has_triple(&column) {
        return Err(MoveError::ThreeInARow);
    }

    if exceeds_cap(&row, board.row_cap()) || exceeds_cap(&column, board.column_cap()) {
        return Err(MoveError::TooMany(mv.digit));
    }

    Ok(())
}

/// Enumerate legal placements: row-major, then digit ascending.
#[must_use]
pub fn legal_moves(board: &Board) -> Vec<Move> {
    candidates(board)
        .filter(|&mv| check_move(board, mv).is_ok())
        .collect()
}

/// Check whether any legal placement remains, stopping at the first.
#[must_use]
pub fn has_legal_move(board: &Board) -> bool {
    candidates(board).any(|mv| check_move(board, mv).is_ok())
}

fn candidates(board: &Board) -> impl Iterator<Item = Move> {
    let (width, height) = (board.width(), board.height());
    (0..height).flat_map(move |y| {
        (0..width).flat_map(move |x| Digit::ALL.into_iter().map(move |d| Move::new(x, y, d)))
    })
}

fn parse_index(token: &str) -> Option<usize> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Overflow means "far off the board", which the range check rejects anyway.
    token.parse().ok()
}

fn has_triple(line: &Line) -> bool {
    line.windows(3)
        .any(|w| !w[0].is_empty() && w[0] == w[1] && w[1] == w[2])
}

fn exceeds_cap(line: &Line, cap: usize) -> bool {
    Digit::ALL.into_iter().any(|digit| {
        let target = Cell::from(digit);
        line.iter().filter(|&&c| c == target).count() > cap
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BoardConfig;

    fn board_from(rows: &[&str]) -> Board {
        let height = rows.len() as i64;
        let width = rows[0].len() as i64;
        let mut board = Board::new(BoardConfig::new(width, height).unwrap());
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                match ch {
                    '0' => board.set(x, y, Digit::Zero.into()),
                    '1' => board.set(x, y, Digit::One.into()),
                    _ => {}
                }
            }
        }
        board
    }

    #[test]
    fn test_coordinate_checked_first() {
        let board = board_from(&["0.."]);
        assert_eq!(parse_move(&board, "3", "0", "5"), Err(MoveError::WrongCoordinate));
        assert_eq!(parse_move(&board, "0", "1", "0"), Err(MoveError::WrongCoordinate));
        assert_eq!(parse_move(&board, "-1", "0", "0"), Err(MoveError::WrongCoordinate));
        assert_eq!(parse_move(&board, "a", "0", "0"), Err(MoveError::WrongCoordinate));
        assert_eq!(
            parse_move(&board, "99999999999999999999999", "0", "0"),
            Err(MoveError::WrongCoordinate)
        );
    }

    #[test]
    fn test_digit_checked_before_occupancy() {
        let board = board_from(&["0.."]);
        assert_eq!(parse_move(&board, "0", "0", "2"), Err(MoveError::WrongNumber));
        assert_eq!(parse_move(&board, "0", "0", "x"), Err(MoveError::WrongNumber));
        assert_eq!(parse_move(&board, "0", "0", "1"), Err(MoveError::Occupied));
    }

    #[test]
    fn test_triple_in_row() {
        let board = board_from(&["00..", "...."]);
        assert_eq!(check_move(&board, Move::new(2, 0, Digit::Zero)), Err(MoveError::ThreeInARow));
        assert_eq!(check_move(&board, Move::new(2, 0, Digit::One)), Ok(()));
    }

    #[test]
    fn test_triple_with_gap_in_middle() {
        let board = board_from(&["1.1."]);
        assert_eq!(check_move(&board, Move::new(1, 0, Digit::One)), Err(MoveError::ThreeInARow));
    }

    #[test]
    fn test_triple_in_column() {
        let board = board_from(&["1.", "..", "1.", ".."]);
        assert_eq!(check_move(&board, Move::new(0, 1, Digit::One)), Err(MoveError::ThreeInARow));
        assert_eq!(check_move(&board, Move::new(0, 1, Digit::Zero)), Ok(()));
    }

    #[test]
    fn test_non_adjacent_digits_are_not_a_triple() {
        let board = board_from(&["0.0..."]);
        assert_eq!(check_move(&board, Move::new(4, 0, Digit::Zero)), Ok(()));
    }

    #[test]
    fn test_row_balance() {
        // Cap for width 4 is 2.
        let board = board_from(&["0.0."]);
        assert_eq!(check_move(&board, Move::new(3, 0, Digit::Zero)), Err(MoveError::TooMany(Digit::Zero)));
        assert_eq!(check_move(&board, Move::new(3, 0, Digit::One)), Ok(()));
    }

    #[test]
    fn test_column_balance() {
        // Cap for height 5 is 3.
        let board = board_from(&["1", "0", "1", "1", "."]);
        assert_eq!(check_move(&board, Move::new(0, 4, Digit::One)), Err(MoveError::ThreeInARow));

        let board = board_from(&["1", "1", "0", "1", "."]);
        assert_eq!(check_move(&board, Move::new(0, 4, Digit::One)), Err(MoveError::TooMany(Digit::One)));

        let board = board_from(&["1", "0", "1", ".", "1"]);
        assert_eq!(check_move(&board, Move::new(0, 3, Digit::One)), Err(MoveError::ThreeInARow));

        let board = board_from(&["1", "0", "1", "0", "."]);
        assert_eq!(check_move(&board, Move::new(0, 4, Digit::One)), Ok(()));

        let board = board_from(&["1", "0", "1", "0", "1", "."]);
        assert_eq!(check_move(&board, Move::new(0, 5, Digit::One)), Err(MoveError::TooMany(Digit::One)));
    }

    #[test]
    fn test_triple_reported_before_balance() {
        // Single column of height 3: cap is 2, but "000" is a triple first.
        let board = board_from(&["0", "0", "."]);
        assert_eq!(check_move(&board, Move::new(0, 2, Digit::Zero)), Err(MoveError::ThreeInARow));
    }

    #[test]
    fn test_single_cell_rows_cap_at_one() {
        let board = board_from(&["0.", ".."]);
        // Column 0 has height 2, cap 1.
        assert_eq!(check_move(&board, Move::new(0, 1, Digit::Zero)), Err(MoveError::TooMany(Digit::Zero)));
        assert_eq!(check_move(&board, Move::new(0, 1, Digit::One)), Ok(()));
    }

    #[test]
    fn test_legal_moves_order() {
        let board = board_from(&["0.", ".."]);
        let moves = legal_moves(&board);
        assert_eq!(
            moves,
            vec![
                Move::new(1, 0, Digit::One),
                Move::new(0, 1, Digit::One),
                Move::new(1, 1, Digit::Zero),
                Move::new(1, 1, Digit::One),
            ]
        );
        assert!(has_legal_move(&board));
    }

    #[test]
    fn test_full_board_has_no_moves() {
        let board = board_from(&["01", "10"]);
        assert!(legal_moves(&board).is_empty());
        assert!(!has_legal_move(&board));
    }

    #[test]
    fn test_reason_strings() {
        assert_eq!(MoveError::WrongCoordinate.to_string(), "wrong coordinate");
        assert_eq!(MoveError::WrongNumber.to_string(), "wrong number");
        assert_eq!(MoveError::Occupied.to_string(), "occupied");
        assert_eq!(MoveError::ThreeInARow.to_string(), "three in a row");
        assert_eq!(MoveError::TooMany(Digit::Zero).to_string(), "too many 0");
        assert_eq!(MoveError::TooMany(Digit::One).to_string(), "too many 1");
    }
}
