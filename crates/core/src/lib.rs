//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the session-independent rules of 2060: board and
//! snapshot shapes, the animation reconciler, the powerup catalog and its
//! per-round activation state, and level/XP math.
//! It has **zero dependencies** on UI, persistence, or I/O, making it:
//!
//! - **Deterministic**: Same inputs always produce the same outputs
//! - **Testable**: Every rule is a plain function or small state machine
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: 4x4 grid of tiles, value semantics
//! - [`game_state`]: One immutable snapshot (board, score, status)
//! - [`reconcile`]: Infers per-tile motions between two snapshots
//! - [`powerup`]: Static, level-gated powerup catalog
//! - [`activation`]: Round-local spent set and armed targeted effect
//! - [`progression`]: Banking score into XP and levels
//! - [`rng`]: Seeded LCG used by the engine to spawn tiles
//!
//! # Example
//!
//! ```
//! use tui_2060_core::{reconcile, Board, GameState, PowerupActivation, POWERUPS};
//! use tui_2060_types::Tile;
//!
//! let before = Board::new().with_cell(0, 0, Some(Tile::new(1, 2)));
//! let after = Board::new().with_cell(3, 0, Some(Tile::new(1, 2)));
//!
//! let motions = reconcile(&before, &after);
//! assert_eq!(motions.motion_from(0, 0).unwrap().dx(), 3);
//!
//! // "Remove tile" unlocks at level 2 and needs a target.
//! let state = GameState::new(after, 0);
//! let mut powerups = PowerupActivation::new();
//! powerups.activate(&POWERUPS, 0, 2, &state);
//! let next = powerups.target(&state, 3, 0).unwrap();
//! assert_eq!(next.board().tile_count(), 0);
//! ```

pub mod activation;
pub mod board;
pub mod game_state;
pub mod powerup;
pub mod progression;
pub mod reconcile;
pub mod rng;

pub use tui_2060_types as types;

// Re-export commonly used types for convenience
pub use activation::{Activation, PowerupActivation, PowerupState};
pub use board::Board;
pub use game_state::{GameState, GameStatus};
pub use powerup::{Powerup, PowerupEffect, PowerupKind, SimpleEffect, TargetedEffect, POWERUPS};
pub use progression::Progression;
pub use reconcile::{reconcile, Motion, Reconciliation};
pub use rng::SimpleRng;
