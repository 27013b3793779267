//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key and mouse events into [`crate::types::GameAction`].
//! Resolving a click to a tile or a powerup entry is left to the view, which
//! knows the layout.

pub mod map;

pub use tui_2060_types as types;

pub use map::{handle_key_event, handle_mouse_event, should_quit};
