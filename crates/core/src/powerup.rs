//! Powerup catalog
//!
//! Powerups are one-shot effects unlocked by player level. The catalog is fixed
//! and ordered: position in [`POWERUPS`] is both display order and the identity
//! used to track which entries were spent in a round.
//!
//! Two kinds exist:
//!
//! - **Simple**: fires as soon as the entry is clicked, `GameState -> GameState`.
//! - **Targeted**: needs a board cell, `(GameState, x, y) -> GameState`.
//!
//! Effects are pure. They return a new [`GameState`] and never touch the one
//! they were given.

use crate::GameState;

/// Effect that needs no target
pub type SimpleEffect = fn(&GameState) -> GameState;

/// Effect applied to one cell
pub type TargetedEffect = fn(&GameState, u8, u8) -> GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerupKind {
    Simple,
    Targeted,
}

#[derive(Debug, Clone, Copy)]
pub enum PowerupEffect {
    Simple(SimpleEffect),
    Targeted(TargetedEffect),
}

/// A catalog entry
#[derive(Debug, Clone, Copy)]
pub struct Powerup {
    pub name: &'static str,
    pub min_level: u32,
    pub effect: PowerupEffect,
}

impl Powerup {
    pub const fn simple(name: &'static str, min_level: u32, effect: SimpleEffect) -> Self {
        Self {
            name,
            min_level,
            effect: PowerupEffect::Simple(effect),
        }
    }

    pub const fn targeted(name: &'static str, min_level: u32, effect: TargetedEffect) -> Self {
        Self {
            name,
            min_level,
            effect: PowerupEffect::Targeted(effect),
        }
    }

    pub fn kind(&self) -> PowerupKind {
        match self.effect {
            PowerupEffect::Simple(_) => PowerupKind::Simple,
            PowerupEffect::Targeted(_) => PowerupKind::Targeted,
        }
    }

    /// Whether `level` is high enough to use this powerup
    pub fn unlocked_at(&self, level: u32) -> bool {
        level >= self.min_level
    }
}

/// The built-in catalog, in display order
pub static POWERUPS: [Powerup; 3] = [
    Powerup::targeted("Remove tile", 2, remove_tile),
    Powerup::targeted("Double tile", 4, double_tile),
    Powerup::simple("Double all tiles", 6, double_all_tiles),
];

/// Empty the target cell.
pub fn remove_tile(state: &GameState, x: u8, y: u8) -> GameState {
    state.with_board(state.board().with_cell(x, y, None))
}

/// Double the value of the tile on the target cell. An empty cell is left as is.
pub fn double_tile(state: &GameState, x: u8, y: u8) -> GameState {
    match state.board().tile(x, y) {
        Some(tile) => state.with_board(
            state
                .board()
                .with_cell(x, y, Some(tile.with_value(tile.value * 2))),
        ),
        None => *state,
    }
}

/// Double every tile on the board.
pub fn double_all_tiles(state: &GameState) -> GameState {
    state.with_board(state.board().map_tiles(|t| t.with_value(t.value * 2)))
}
