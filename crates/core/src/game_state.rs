//! Game state module - one immutable snapshot of a game
//!
//! A [`GameState`] is produced by the engine at game creation and after every
//! move. Holders never edit one in place: the engine replaces it wholesale, and
//! powerup effects return a new value built with [`GameState::with_board`].

use crate::Board;

/// Win/loss status as reported by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameStatus {
    pub has_possible_moves: bool,
}

/// One snapshot of a game: board, score and status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameState {
    board: Board,
    score: u32,
    status: GameStatus,
}

impl GameState {
    /// Create a snapshot, deriving the status from the board
    pub fn new(board: Board, score: u32) -> Self {
        Self {
            status: GameStatus {
                has_possible_moves: board.has_possible_moves(),
            },
            board,
            score,
        }
    }

    /// Create a snapshot with an explicit status
    pub fn with_status(board: Board, score: u32, status: GameStatus) -> Self {
        Self {
            board,
            score,
            status,
        }
    }

    /// New snapshot with a different board, same score, status recomputed
    pub fn with_board(&self, board: Board) -> Self {
        Self::new(board, self.score)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn has_possible_moves(&self) -> bool {
        self.status.has_possible_moves
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Board::new(), 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Tile;

    #[test]
    fn test_with_board_keeps_score_and_recomputes_status() {
        let stuck = GameState::with_status(
            Board::new(),
            40,
            GameStatus {
                has_possible_moves: false,
            },
        );
        let next = stuck.with_board(Board::new().with_cell(0, 0, Some(Tile::new(1, 2))));

        assert_eq!(next.score(), 40);
        assert!(next.has_possible_moves());
        // The original snapshot is unchanged.
        assert!(!stuck.has_possible_moves());
        assert_eq!(stuck.board().tile_count(), 0);
    }
}
