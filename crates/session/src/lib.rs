//! Session layer - round lifecycle, powerup interaction, and persistence.
//!
//! This crate wires the pure pieces of `tui-2060-core` to an [`Engine`] and a
//! [`SaveStore`]. It stays synchronous: the caller owns the loop and passes
//! monotonic time in.
//!
//! # Module Structure
//!
//! - [`session`]: The controller owning the current game and round state
//! - [`clock`]: Round countdown and the single-slot presentation timer
//! - [`store`]: Key/value persistence (`FileStore`, `MemoryStore`)
//! - [`config`]: `SessionConfig` with environment overrides
//!
//! # Example
//!
//! ```
//! use tui_2060_session::{MemoryStore, Session, SessionConfig};
//! use tui_2060_engine::MergeEngine;
//! use tui_2060_types::Direction;
//!
//! let mut session = Session::new(MergeEngine::new(1), MemoryStore::new(), SessionConfig::default(), 0);
//! session.handle_move(Direction::Left, 10);
//! session.tick(200);
//! assert!(!session.is_animating());
//! assert_eq!(session.seconds_left(), 60);
//! ```
//!
//! [`Engine`]: tui_2060_engine::Engine

pub mod clock;
pub mod config;
pub mod session;
pub mod store;

pub use tui_2060_core as core;
pub use tui_2060_engine as engine;
pub use tui_2060_types as types;

pub use clock::{RoundClock, Timeout};
pub use config::SessionConfig;
pub use session::{
    load_progression, Animation, Frame, MoveOutcome, RoundEnd, RoundSummary, Session,
};
pub use store::{FileStore, MemoryStore, SaveStore, StoreError};
