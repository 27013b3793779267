//! Animation reconciliation between two board snapshots
//!
//! The engine only hands out whole boards. To animate a move we infer, from the
//! board before and the board after, which old tile travelled to which new
//! cell:
//!
//! - an old tile whose id equals a new tile's id slid there;
//! - an old tile whose id equals a new tile's `merged_id` was absorbed there.
//!
//! Every match yields one [`Motion`] keyed by the old cell, so a merge produces
//! two motions converging on the same destination. New tiles with no match were
//! spawned by the move and get no motion.
//!
//! Matching is best effort: ids are assumed unique per board and
//! are not re-validated. A duplicated id only produces extra motions.

use crate::types::BOARD_SIZE;
use crate::Board;

/// Displacement of one old tile toward its destination cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Motion {
    /// Cell in the old board
    pub from: (u8, u8),
    /// Cell in the new board
    pub to: (u8, u8),
}

impl Motion {
    /// Horizontal displacement in grid units
    pub fn dx(&self) -> i8 {
        self.to.0 as i8 - self.from.0 as i8
    }

    /// Vertical displacement in grid units
    pub fn dy(&self) -> i8 {
        self.to.1 as i8 - self.from.1 as i8
    }

    /// Displacement scaled by the on-screen width of one tile
    pub fn scaled(&self, tile_width: f32) -> (f32, f32) {
        (
            tile_width * f32::from(self.dx()),
            tile_width * f32::from(self.dy()),
        )
    }

    pub fn is_still(&self) -> bool {
        self.from == self.to
    }
}

/// All motions inferred for one move
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    motions: Vec<Motion>,
}

impl Reconciliation {
    pub fn motions(&self) -> &[Motion] {
        &self.motions
    }

    pub fn len(&self) -> usize {
        self.motions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.motions.is_empty()
    }

    /// Motion applied to the tile that sat at `(x, y)` in the old board.
    ///
    /// When several motions target the same old cell the last one wins.
    pub fn motion_from(&self, x: u8, y: u8) -> Option<Motion> {
        self.motions.iter().rev().find(|m| m.from == (x, y)).copied()
    }

    /// Motions converging on `(x, y)` in the new board
    pub fn motions_into(&self, x: u8, y: u8) -> impl Iterator<Item = &Motion> + '_ {
        self.motions.iter().filter(move |m| m.to == (x, y))
    }
}

/// Infer tile motions from `old` to `new`.
///
/// Scans every occupied cell of `new` against every occupied cell of `old`
/// (16x16 at most). Pure: depends only on the two boards.
pub fn reconcile(old: &Board, new: &Board) -> Reconciliation {
    let mut motions = Vec::with_capacity(BOARD_SIZE as usize * BOARD_SIZE as usize);

    for (x, y, new_tile) in new.tiles() {
        for (nx, ny, old_tile) in old.tiles() {
            let moved = old_tile.id == new_tile.id;
            let absorbed = new_tile.merged_id == Some(old_tile.id);
            if moved || absorbed {
                motions.push(Motion {
                    from: (nx, ny),
                    to: (x, y),
                });
            }
        }
    }

    Reconciliation { motions }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Tile;

    #[test]
    fn test_motion_deltas_and_scale() {
        let m = Motion {
            from: (3, 1),
            to: (0, 2),
        };
        assert_eq!(m.dx(), -3);
        assert_eq!(m.dy(), 1);
        assert_eq!(m.scaled(2.0), (-6.0, 2.0));
        assert!(!m.is_still());
    }

    #[test]
    fn test_spawned_tile_has_no_motion() {
        let old = Board::new().with_cell(0, 0, Some(Tile::new(1, 2)));
        let new = old.with_cell(3, 3, Some(Tile::new(2, 2)));

        let r = reconcile(&old, &new);
        assert_eq!(r.len(), 1);
        assert_eq!(r.motions_into(3, 3).count(), 0);
        assert!(r.motion_from(0, 0).unwrap().is_still());
    }

    #[test]
    fn test_last_motion_wins_for_shared_source() {
        // Duplicate ids in the new board: degraded, but no panic.
        let old = Board::new().with_cell(0, 0, Some(Tile::new(5, 2)));
        let new = Board::new()
            .with_cell(1, 0, Some(Tile::new(5, 2)))
            .with_cell(2, 0, Some(Tile::new(5, 2)));

        let r = reconcile(&old, &new);
        assert_eq!(r.len(), 2);
        assert_eq!(r.motion_from(0, 0).unwrap().to, (2, 0));
    }
}
