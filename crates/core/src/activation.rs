//! Round-local powerup activation
//!
//! Tracks which catalog entries were spent this round and which targeted
//! effect, if any, is armed and waiting for a tile.
//!
//! Per entry, the state is derived on demand:
//!
//! | State | Condition |
//! |-------|-----------|
//! | `Locked` | `level < min_level` |
//! | `Spent` | used (or armed) this round |
//! | `Available` | otherwise |
//!
//! Clicks outside the contract (locked, spent, unknown index, tile with nothing
//! armed) are ignored rather than reported.

use std::collections::BTreeSet;

use crate::powerup::{Powerup, PowerupEffect, TargetedEffect};
use crate::GameState;

/// Per-render state of one catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerupState {
    Locked,
    Available,
    Spent,
}

/// Result of clicking a catalog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// Click had no effect
    Ignored,
    /// A simple effect fired; the caller adopts this state as current
    Applied(GameState),
    /// A targeted effect is now waiting for a tile
    Armed { index: usize },
}

#[derive(Debug, Clone, Copy)]
struct ArmedEffect {
    index: usize,
    effect: TargetedEffect,
}

/// Spent set plus the armed targeted effect for the current round
#[derive(Debug, Clone, Default)]
pub struct PowerupActivation {
    spent: BTreeSet<usize>,
    armed: Option<ArmedEffect>,
}

impl PowerupActivation {
    pub fn new() -> Self {
        Self::default()
    }

    /// State of catalog entry `index` at `level`
    pub fn state_of(&self, catalog: &[Powerup], index: usize, level: u32) -> PowerupState {
        match catalog.get(index) {
            Some(p) if !p.unlocked_at(level) => PowerupState::Locked,
            Some(_) if self.spent.contains(&index) => PowerupState::Spent,
            Some(_) => PowerupState::Available,
            None => PowerupState::Locked,
        }
    }

    /// Click catalog entry `index`.
    ///
    /// A simple effect runs against `state` immediately. A targeted effect is
    /// marked spent right away and armed; nothing changes until a tile is
    /// clicked.
    pub fn activate(
        &mut self,
        catalog: &[Powerup],
        index: usize,
        level: u32,
        state: &GameState,
    ) -> Activation {
        if self.state_of(catalog, index, level) != PowerupState::Available {
            return Activation::Ignored;
        }

        match catalog[index].effect {
            PowerupEffect::Simple(effect) => {
                self.spent.insert(index);
                Activation::Applied(effect(state))
            }
            PowerupEffect::Targeted(effect) => {
                // A newly armed entry supersedes any armed one; the earlier
                // entry stays spent for the round.
                self.spent.insert(index);
                self.armed = Some(ArmedEffect { index, effect });
                Activation::Armed { index }
            }
        }
    }

    /// Fire the armed effect at `(x, y)` and disarm.
    ///
    /// Returns `None` when nothing is armed.
    pub fn target(&mut self, state: &GameState, x: u8, y: u8) -> Option<GameState> {
        let armed = self.armed.take()?;
        Some((armed.effect)(state, x, y))
    }

    /// Catalog index of the armed effect
    pub fn armed(&self) -> Option<usize> {
        self.armed.map(|a| a.index)
    }

    pub fn is_spent(&self, index: usize) -> bool {
        self.spent.contains(&index)
    }

    /// Clear spent marks and any armed effect (new round)
    pub fn reset(&mut self) {
        self.spent.clear();
        self.armed = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::powerup::POWERUPS;
    use crate::types::Tile;
    use crate::Board;

    fn state() -> GameState {
        GameState::new(Board::new().with_cell(1, 1, Some(Tile::new(1, 2))), 0)
    }

    #[test]
    fn test_unknown_index_is_ignored() {
        let mut a = PowerupActivation::new();
        assert_eq!(a.activate(&POWERUPS, 99, 10, &state()), Activation::Ignored);
        assert_eq!(a.state_of(&POWERUPS, 99, 10), PowerupState::Locked);
    }

    #[test]
    fn test_arming_marks_spent_before_target() {
        let mut a = PowerupActivation::new();
        assert_eq!(
            a.activate(&POWERUPS, 0, 2, &state()),
            Activation::Armed { index: 0 }
        );
        assert_eq!(a.state_of(&POWERUPS, 0, 2), PowerupState::Spent);
        assert_eq!(a.armed(), Some(0));
        assert_eq!(a.activate(&POWERUPS, 0, 2, &state()), Activation::Ignored);
    }

    #[test]
    fn test_reset_clears_spent_and_armed() {
        let mut a = PowerupActivation::new();
        a.activate(&POWERUPS, 1, 5, &state());
        a.reset();
        assert_eq!(a.armed(), None);
        assert!(!a.is_spent(1));
        assert_eq!(a.state_of(&POWERUPS, 1, 5), PowerupState::Available);
    }
}
