//! Merge rules: slide, merge, spawn.
//!
//! - Tiles slide toward the edge named by the move.
//! - Two equal neighbours merge once per move. The tile nearer the edge keeps
//!   its id, doubles its value and records the absorbed id in `merged_id`.
//! - Every other tile loses any `merged_id` from the previous move.
//! - If anything moved, one tile spawns on a random empty cell: 2 (90%) or 4
//!   (10%), with a fresh id. Ids are never reused.

use arrayvec::ArrayVec;

use crate::core::{Board, GameState, SimpleRng};
use crate::types::{Direction, Tile, BOARD_SIZE};
use crate::Engine;

const N: usize = BOARD_SIZE as usize;

/// Outcome of sliding a board without spawning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideResult {
    pub board: Board,
    /// Sum of merged tile values
    pub gained: u32,
    pub changed: bool,
}

/// Cells of line `i` ordered from the destination edge inward
fn line_cells(direction: Direction, i: u8) -> [(u8, u8); N] {
    let last = BOARD_SIZE - 1;
    let mut cells = [(0u8, 0u8); N];
    for (k, cell) in cells.iter_mut().enumerate() {
        let k = k as u8;
        *cell = match direction {
            Direction::Left => (k, i),
            Direction::Right => (last - k, i),
            Direction::Up => (i, k),
            Direction::Down => (i, last - k),
        };
    }
    cells
}

/// Slide and merge every line of `board` toward `direction`.
pub fn slide(board: &Board, direction: Direction) -> SlideResult {
    let mut next = Board::new();
    let mut gained = 0;
    let mut changed = false;

    for i in 0..BOARD_SIZE {
        let cells = line_cells(direction, i);

        let mut packed: ArrayVec<Tile, N> = ArrayVec::new();
        let mut last_merged = false;
        for &(x, y) in &cells {
            let Some(tile) = board.tile(x, y) else {
                continue;
            };
            match packed.last_mut() {
                Some(prev) if !last_merged && prev.value == tile.value => {
                    *prev = Tile::merged(prev.id, prev.value * 2, tile.id);
                    gained += prev.value;
                    last_merged = true;
                }
                _ => {
                    packed.push(Tile::new(tile.id, tile.value));
                    last_merged = false;
                }
            }
        }

        for (k, &(x, y)) in cells.iter().enumerate() {
            let cell = packed.get(k).copied();
            if board.tile(x, y).map(|t| t.id) != cell.map(|t| t.id) {
                changed = true;
            }
            next.set(x, y, cell);
        }
    }

    SlideResult {
        board: next,
        gained,
        changed,
    }
}

/// Built-in engine implementing the classic merge rules
#[derive(Debug, Clone)]
pub struct MergeEngine {
    rng: SimpleRng,
    next_id: u32,
    state: GameState,
}

impl MergeEngine {
    /// Create an engine with a fresh game
    pub fn new(seed: u32) -> Self {
        let mut engine = Self {
            rng: SimpleRng::new(seed),
            next_id: 1,
            state: GameState::default(),
        };
        engine.create_game();
        engine
    }

    pub fn seed(&self) -> u32 {
        self.rng.seed()
    }

    /// Place a new tile on a random empty cell. Returns false if the board is full.
    fn spawn(&mut self, board: &mut Board) -> bool {
        let empty = board.empty_cells();
        let Some((x, y)) = self.rng.pick(&empty) else {
            return false;
        };
        let value = if self.rng.chance(1, 10) { 4 } else { 2 };
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        board.set(x, y, Some(Tile::new(id, value)))
    }
}

impl Engine for MergeEngine {
    fn create_game(&mut self) -> &GameState {
        let mut board = Board::new();
        self.spawn(&mut board);
        self.spawn(&mut board);
        self.state = GameState::new(board, 0);
        tracing::debug!(tiles = board.tile_count(), "new game");
        &self.state
    }

    fn apply_move(&mut self, direction: Direction) -> bool {
        let result = slide(self.state.board(), direction);
        if !result.changed {
            return false;
        }

        let mut board = result.board;
        self.spawn(&mut board);
        let score = self.state.score().saturating_add(result.gained);
        self.state = GameState::new(board, score);

        tracing::debug!(
            direction = direction.as_str(),
            gained = result.gained,
            score,
            has_moves = self.state.has_possible_moves(),
            "move applied"
        );
        true
    }

    fn current_state(&self) -> &GameState {
        &self.state
    }

    fn replace_state(&mut self, state: GameState) {
        self.state = state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(values: [u32; 4]) -> Board {
        let mut board = Board::new();
        for (x, v) in values.iter().enumerate() {
            if *v > 0 {
                board.set(x as u8, 0, Some(Tile::new(x as u32 + 1, *v)));
            }
        }
        board
    }

    fn values(board: &Board) -> [u32; 4] {
        let mut out = [0; 4];
        for (x, v) in out.iter_mut().enumerate() {
            *v = board.tile(x as u8, 0).map(|t| t.value).unwrap_or(0);
        }
        out
    }

    #[test]
    fn test_line_cells_start_at_edge() {
        assert_eq!(line_cells(Direction::Left, 1)[0], (0, 1));
        assert_eq!(line_cells(Direction::Right, 1)[0], (3, 1));
        assert_eq!(line_cells(Direction::Up, 2)[0], (2, 0));
        assert_eq!(line_cells(Direction::Down, 2)[0], (2, 3));
    }

    #[test]
    fn test_slide_left_merges_once() {
        let r = slide(&row([2, 2, 2, 2]), Direction::Left);
        assert_eq!(values(&r.board), [4, 4, 0, 0]);
        assert_eq!(r.gained, 8);
        assert!(r.changed);
    }

    #[test]
    fn test_merged_tile_does_not_merge_again() {
        let r = slide(&row([4, 2, 2, 0]), Direction::Left);
        assert_eq!(values(&r.board), [4, 4, 0, 0]);
        assert_eq!(r.gained, 4);
    }

    #[test]
    fn test_survivor_is_nearest_the_edge() {
        // ids are x + 1: tiles 3 and 4 merge toward the right edge.
        let r = slide(&row([0, 0, 2, 2]), Direction::Right);
        assert_eq!(r.board.tile(3, 0), Some(Tile::merged(4, 4, 3)));

        let r = slide(&row([2, 2, 0, 0]), Direction::Left);
        assert_eq!(r.board.tile(0, 0), Some(Tile::merged(1, 4, 2)));
    }

    #[test]
    fn test_blocked_slide_is_unchanged() {
        let r = slide(&row([2, 4, 8, 16]), Direction::Left);
        assert!(!r.changed);
        assert_eq!(r.gained, 0);
    }

    #[test]
    fn test_slide_clears_stale_merged_id() {
        let board = Board::new().with_cell(0, 0, Some(Tile::merged(1, 4, 9)));
        let r = slide(&board, Direction::Down);
        assert_eq!(r.board.tile(0, 3), Some(Tile::new(1, 4)));
    }

    #[test]
    fn test_new_game_has_two_tiles() {
        let engine = MergeEngine::new(7);
        let state = engine.current_state();
        assert_eq!(state.board().tile_count(), 2);
        assert_eq!(state.score(), 0);
        assert!(state.has_possible_moves());
    }

    #[test]
    fn test_move_spawns_fresh_id() {
        let mut engine = MergeEngine::new(7);
        let before: Vec<u32> = engine
            .current_state()
            .board()
            .tiles()
            .map(|(_, _, t)| t.id)
            .collect();

        let moved = Direction::ALL.iter().any(|&d| engine.apply_move(d));
        assert!(moved);

        let state = engine.current_state();
        let fresh: Vec<u32> = state
            .board()
            .tiles()
            .map(|(_, _, t)| t.id)
            .filter(|id| !before.contains(id))
            .collect();
        assert_eq!(fresh.len(), 1);
        assert!(fresh[0] > *before.iter().max().unwrap());
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = MergeEngine::new(99);
        let mut b = MergeEngine::new(99);
        for d in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
            a.apply_move(d);
            b.apply_move(d);
        }
        assert_eq!(a.current_state(), b.current_state());
    }
}
