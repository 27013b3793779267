//! Board module - the 4x4 tile grid
//!
//! The board is a fixed 4x4 grid where each cell is empty or holds a [`Tile`].
//! Coordinates: (x, y) where x ranges 0..3 (left to right), y ranges 0..3 (top to bottom).
//!
//! Boards are values. Code outside the engine that needs a different board
//! builds a new one with [`Board::with_cell`] or [`Board::map_tiles`] instead of
//! editing a snapshot it was handed.

use arrayvec::ArrayVec;

use crate::types::{Cell, Tile, BOARD_CELLS, BOARD_SIZE};

const N: usize = BOARD_SIZE as usize;

/// The game board - 4 rows of 4 cells, indexed `[y][x]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    rows: [[Cell; N]; N],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            rows: [[None; N]; N],
        }
    }

    /// Build a board from rows (`rows[y][x]`)
    pub fn from_rows(rows: [[Cell; N]; N]) -> Self {
        Self { rows }
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_SIZE
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_SIZE
    }

    #[inline(always)]
    fn in_bounds(x: u8, y: u8) -> bool {
        x < BOARD_SIZE && y < BOARD_SIZE
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: u8, y: u8) -> Option<Cell> {
        if !Self::in_bounds(x, y) {
            return None;
        }
        Some(self.rows[y as usize][x as usize])
    }

    /// Tile at (x, y), if the position is in bounds and occupied
    pub fn tile(&self, x: u8, y: u8) -> Option<Tile> {
        self.get(x, y).flatten()
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: u8, y: u8, cell: Cell) -> bool {
        if !Self::in_bounds(x, y) {
            return false;
        }
        self.rows[y as usize][x as usize] = cell;
        true
    }

    /// Copy of this board with one cell replaced.
    ///
    /// Out-of-bounds positions return an unchanged copy.
    pub fn with_cell(&self, x: u8, y: u8, cell: Cell) -> Board {
        let mut next = *self;
        next.set(x, y, cell);
        next
    }

    /// Copy of this board with `f` applied to every occupied cell
    pub fn map_tiles(&self, mut f: impl FnMut(Tile) -> Tile) -> Board {
        let mut next = *self;
        for row in next.rows.iter_mut() {
            for cell in row.iter_mut() {
                if let Some(tile) = cell {
                    *tile = f(*tile);
                }
            }
        }
        next
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: u8, y: u8) -> bool {
        self.tile(x, y).is_some()
    }

    /// Iterate occupied cells as `(x, y, tile)` in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = (u8, u8, Tile)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(x, cell)| cell.map(|t| (x as u8, y as u8, t)))
        })
    }

    /// Empty positions in row-major order
    pub fn empty_cells(&self) -> ArrayVec<(u8, u8), BOARD_CELLS> {
        let mut out = ArrayVec::new();
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                if self.rows[y as usize][x as usize].is_none() {
                    out.push((x, y));
                }
            }
        }
        out
    }

    /// Number of occupied cells
    pub fn tile_count(&self) -> usize {
        self.tiles().count()
    }

    /// Find the position of the tile with this id
    pub fn position_of(&self, id: u32) -> Option<(u8, u8)> {
        self.tiles().find(|&(_, _, t)| t.id == id).map(|(x, y, _)| (x, y))
    }

    /// Whether any slide could change the board: an empty cell exists, or two
    /// orthogonal neighbours hold equal values.
    pub fn has_possible_moves(&self) -> bool {
        for y in 0..N {
            for x in 0..N {
                let Some(tile) = self.rows[y][x] else {
                    return true;
                };
                if x + 1 < N && self.rows[y][x + 1].map(|t| t.value) == Some(tile.value) {
                    return true;
                }
                if y + 1 < N && self.rows[y + 1][x].map(|t| t.value) == Some(tile.value) {
                    return true;
                }
            }
        }
        false
    }

    /// Borrow the rows (`rows[y][x]`)
    pub fn rows(&self) -> &[[Cell; N]; N] {
        &self.rows
    }

    /// Largest tile value on the board (0 when empty)
    pub fn max_value(&self) -> u32 {
        self.tiles().map(|(_, _, t)| t.value).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_bounds() {
        let board = Board::new();
        assert_eq!(board.get(0, 0), Some(None));
        assert_eq!(board.get(3, 3), Some(None));
        assert_eq!(board.get(4, 0), None);
        assert_eq!(board.get(0, 4), None);
    }

    #[test]
    fn test_with_cell_leaves_original_untouched() {
        let board = Board::new().with_cell(1, 2, Some(Tile::new(1, 2)));
        let changed = board.with_cell(1, 2, None);

        assert_eq!(board.tile(1, 2), Some(Tile::new(1, 2)));
        assert_eq!(changed.tile(1, 2), None);
    }

    #[test]
    fn test_empty_cells_row_major() {
        let mut board = Board::new();
        for y in 0..4 {
            for x in 0..4 {
                board.set(x, y, Some(Tile::new((y * 4 + x) as u32, 2)));
            }
        }
        board.set(2, 1, None);
        board.set(0, 3, None);
        assert_eq!(board.empty_cells().as_slice(), &[(2, 1), (0, 3)]);
    }

    #[test]
    fn test_full_board_without_pairs_is_stuck() {
        let mut board = Board::new();
        let mut id = 0;
        for y in 0..4u8 {
            for x in 0..4u8 {
                id += 1;
                // Checkerboard of 2/4 has no equal neighbours.
                let value = if (x + y) % 2 == 0 { 2 } else { 4 };
                board.set(x, y, Some(Tile::new(id, value)));
            }
        }
        assert!(!board.has_possible_moves());

        let paired = board.with_cell(1, 0, Some(Tile::new(99, 2)));
        assert!(paired.has_possible_moves());
    }
}
