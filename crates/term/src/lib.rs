//! Terminal rendering for 2060.
//!
//! A small, game-oriented rendering layer: the session scene is drawn into a
//! plain framebuffer, which is then diffed and flushed to the terminal.
//! No widget toolkit is involved.
//!
//! - [`fb`]: styled character cells
//! - [`game_view`]: board, HUD and powerup panel layout plus click hit-testing
//! - [`renderer`]: crossterm output with row-run diffing

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2060_core as core;
pub use tui_2060_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{tile_color, GameView, Hit, HudView, PowerupRow, Scene, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
