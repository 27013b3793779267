//! Engine module - the tile-merging rules behind a trait.
//!
//! The session layer treats the engine as an opaque collaborator: it asks for
//! a fresh game, requests moves, and reads back whole [`GameState`] snapshots.
//! [`Engine`] captures that contract so the session can be driven by any
//! implementation; [`MergeEngine`] is the built-in one.

pub mod merge;

pub use tui_2060_core as core;
pub use tui_2060_types as types;

pub use merge::{slide, MergeEngine, SlideResult};

use crate::core::GameState;
use crate::types::Direction;

/// Contract of the game engine.
pub trait Engine {
    /// Start a fresh game and return its first snapshot.
    fn create_game(&mut self) -> &GameState;

    /// Slide the board. Returns true if the board changed.
    fn apply_move(&mut self, direction: Direction) -> bool;

    /// Most recent snapshot.
    fn current_state(&self) -> &GameState;

    /// Adopt `state` as the current snapshot (powerup effects).
    fn replace_state(&mut self, state: GameState);
}
