//! Game state: the board plus who moved last.
//!
//! `GameState` is the authoritative record of one game. It is created with
//! an empty board, changes only through [`GameState::make_move`], and is
//! replaced wholesale when a new game starts.
//!
//! ## Turn attribution
//!
//! Players are not tracked separately; they simply alternate. The first move
//! of a game is credited to player 1, every later move to the other player
//! than the previous one. Once no legal move remains, the player credited
//! with the last move is the winner.
//!
//! ## Move history
//!
//! Applied moves are kept in an `im::Vector`, so cloning a state (e.g. to try
//! a move out) stays O(1) regardless of game length.

use im::Vector;

use super::action::{Move, MoveRecord};
use super::board::Board;
use super::config::BoardConfig;
use super::player::PlayerId;
use crate::rules::{self, GameResult, MoveError};

/// Complete state of a game in progress.
#[derive(Clone, Debug)]
pub struct GameState {
    config: BoardConfig,
    board: Board,
    last_mover: Option<PlayerId>,
    history: Vector<MoveRecord>,
}

impl GameState {
    /// Start a game on an empty board.
    #[must_use]
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            board: Board::new(config),
            last_mover: None,
            history: Vector::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> BoardConfig {
        self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player credited with the most recent move, if any.
    #[must_use]
    pub fn last_mover(&self) -> Option<PlayerId> {
        self.last_mover
    }

    /// Player who will be credited with the next move.
    #[must_use]
    pub fn next_mover(&self) -> PlayerId {
        PlayerId::next_after(self.last_mover)
    }

    /// Moves applied so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    #[must_use]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Validate a placement given as protocol tokens.
    ///
    /// Never mutates the state. Returns the parsed move when every
    /// constraint holds, otherwise the first violated constraint.
    pub fn is_valid_move(&self, x: &str, y: &str, digit: &str) -> Result<Move, MoveError> {
        rules::parse_move(&self.board, x, y, digit)
    }

    /// Validate a typed placement.
    pub fn check(&self, mv: Move) -> Result<(), MoveError> {
        rules::check_move(&self.board, mv)
    }

    /// Apply a placement.
    ///
    /// The move is revalidated first. On success the cell is written and the
    /// credited player is returned; on failure the state is left untouched.
    pub fn make_move(&mut self, mv: Move) -> Result<PlayerId, MoveError> {
        self.check(mv)?;

        let player = self.next_mover();
        self.board.set(mv.x, mv.y, mv.digit.into());
        self.last_mover = Some(player);
        let sequence = self.history.len() as u32 + 1;
        self.history.push_back(MoveRecord::new(player, mv, sequence));
        Ok(player)
    }

    /// Parse, validate and apply a placement given as protocol tokens.
    pub fn play(&mut self, x: &str, y: &str, digit: &str) -> Result<PlayerId, MoveError> {
        let mv = self.is_valid_move(x, y, digit)?;
        self.make_move(mv)
    }

    /// All legal placements, row-major then digit ascending.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        rules::legal_moves(&self.board)
    }

    /// The game is over when no legal placement remains.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        !rules::has_legal_move(&self.board)
    }

    /// The player who made the last move, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        if self.is_game_over() {
            self.last_mover
        } else {
            None
        }
    }

    /// Outcome of the game, or `None` while moves remain.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.winner().map(GameResult::Winner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Digit;

    fn new_game(width: i64, height: i64) -> GameState {
        GameState::new(BoardConfig::new(width, height).unwrap())
    }

    #[test]
    fn test_new_game() {
        let state = new_game(3, 2);
        assert_eq!(state.board().width(), 3);
        assert_eq!(state.board().height(), 2);
        assert_eq!(state.last_mover(), None);
        assert_eq!(state.next_mover(), PlayerId::FIRST);
        assert_eq!(state.move_count(), 0);
        assert!(!state.is_game_over());
        assert_eq!(state.winner(), None);
    }

    #[test]
    fn test_players_alternate() {
        let mut state = new_game(4, 4);
        assert_eq!(state.make_move(Move::new(0, 0, Digit::Zero)), Ok(PlayerId::FIRST));
        assert_eq!(state.make_move(Move::new(1, 0, Digit::One)), Ok(PlayerId::SECOND));
        assert_eq!(state.make_move(Move::new(2, 0, Digit::Zero)), Ok(PlayerId::FIRST));
        assert_eq!(state.last_mover(), Some(PlayerId::FIRST));

        let players: Vec<_> = state.history().iter().map(|r| r.player).collect();
        assert_eq!(players, vec![PlayerId::FIRST, PlayerId::SECOND, PlayerId::FIRST]);
        let sequences: Vec<_> = state.history().iter().map(|r| r.sequence).collect();
        assert_eq!(sequences, vec![1, 2, 3]);
    }

    #[test]
    fn test_failed_move_leaves_state_unchanged() {
        let mut state = new_game(3, 3);
        state.play("0", "0", "0").unwrap();
        state.play("1", "0", "0").unwrap();
        let before = state.board().clone();

        assert_eq!(state.play("2", "0", "0"), Err(MoveError::ThreeInARow));
        assert_eq!(state.play("0", "0", "1"), Err(MoveError::Occupied));
        assert_eq!(state.board(), &before);
        assert_eq!(state.move_count(), 2);
        assert_eq!(state.last_mover(), Some(PlayerId::SECOND));
    }

    #[test]
    fn test_is_valid_move_is_pure() {
        let state = new_game(2, 2);
        let before = state.board().clone();
        for _ in 0..3 {
            assert_eq!(state.is_valid_move("1", "1", "1"), Ok(Move::new(1, 1, Digit::One)));
        }
        assert_eq!(state.board(), &before);
    }

    #[test]
    fn test_single_cell_game() {
        let mut state = new_game(1, 1);
        assert_eq!(state.legal_moves().len(), 2);

        state.play("0", "0", "1").unwrap();
        assert!(state.is_game_over());
        assert_eq!(state.winner(), Some(PlayerId::FIRST));
        assert_eq!(state.result(), Some(GameResult::Winner(PlayerId::FIRST)));
    }

    #[test]
    fn test_winner_is_last_mover() {
        let mut state = new_game(2, 1);
        state.play("0", "0", "0").unwrap();
        assert_eq!(state.winner(), None);
        state.play("1", "0", "1").unwrap();
        assert!(state.is_game_over());
        assert_eq!(state.winner(), Some(PlayerId::SECOND));
    }

    #[test]
    fn test_balance_blocks_second_zero() {
        // Lines of length 2 hold at most one of each digit, so only ones fit.
        let mut state = new_game(2, 2);
        state.play("0", "0", "0").unwrap();
        state.play("1", "1", "0").unwrap();
        assert_eq!(
            state.legal_moves(),
            vec![Move::new(1, 0, Digit::One), Move::new(0, 1, Digit::One)]
        );
        assert!(!state.is_game_over());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut state = new_game(3, 3);
        state.play("1", "1", "1").unwrap();
        let snapshot = state.clone();

        state.play("0", "0", "0").unwrap();
        assert_eq!(snapshot.move_count(), 1);
        assert_eq!(state.move_count(), 2);
        assert_ne!(snapshot.board(), state.board());
    }
}
