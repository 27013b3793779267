//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, session orchestration, terminal rendering).
//!
//! # Board Dimensions
//!
//! The playfield is a fixed 4x4 grid:
//!
//! - **x**: columns 0-3, left to right
//! - **y**: rows 0-3, top to bottom
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds unless noted otherwise:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `ROUND_SECS` | 60 | Round length in seconds |
//! | `ROUND_TICK_MS` | 1000 | Round countdown granularity |
//! | `ANIMATION_DURATION_MS` | 100 | Delay before a move's result is presented |
//! | `MESSAGE_DURATION_MS` | 1000 | How long a transient message stays visible |
//!
//! # Progression
//!
//! [`LEVEL_THRESHOLDS`] holds the XP needed to leave each level. A level past
//! the end of the table has no threshold and can never be left.
//!
//! # Examples
//!
//! ```
//! use tui_2060_types::{Direction, Tile, BOARD_SIZE};
//!
//! assert_eq!(Direction::from_str("up"), Some(Direction::Up));
//! assert_eq!(Direction::Left.delta(), (-1, 0));
//!
//! let tile = Tile::new(1, 2);
//! assert_eq!(tile.merged_id, None);
//!
//! assert_eq!(BOARD_SIZE, 4);
//! ```

/// Board width and height in cells (4x4)
pub const BOARD_SIZE: u8 = 4;

/// Total number of cells on the board
pub const BOARD_CELLS: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// Round length in seconds
pub const ROUND_SECS: u32 = 60;

/// Round countdown tick (one second)
pub const ROUND_TICK_MS: u64 = 1000;

/// Animation settle delay after a move, before the new board is presented
pub const ANIMATION_DURATION_MS: u64 = 100;

/// Lifetime of a transient on-screen message
pub const MESSAGE_DURATION_MS: u64 = 1000;

/// Persistence key holding `"<level>:<xp>"`
pub const SAVE_KEY: &str = "2060__save";

/// XP required to advance past each level.
///
/// Index 0 = level 0. Levels beyond the table never advance.
pub const LEVEL_THRESHOLDS: [u32; 10] = [
    500, 1_000, 1_500, 2_500, 4_000, 6_000, 9_000, 13_000, 18_000, 25_000,
];

/// User-facing string table.
pub mod strings {
    /// Shown when a round ends because no move is possible.
    pub const GAME_OVER_NO_XP: &str = "No moves left! No XP this round";
    /// Shown when the timer ends a round without leveling up.
    pub const ROUND_COMPLETE: &str = "Time's up!";
    /// Shown when the timer ends a round and at least one level was gained.
    pub const LEVEL_UP: &str = "Level up!";
    /// Powerup panel header.
    pub const POWERUPS_HEADER: &str = "Powerups";
    /// Hint shown while a targeted powerup waits for a tile.
    pub const PICK_TILE: &str = "Click a tile";
}


/// The four move directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in a stable order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse direction from string (case-insensitive)
    ///
    /// Accepts full names or single letters: "up" | "u", "down" | "d",
    /// "left" | "l", "right" | "r"
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2060_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("LEFT"), Some(Direction::Left));
    /// assert_eq!(Direction::from_str("r"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Unit step `(dx, dy)` in grid coordinates (y grows downward)
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// A numbered tile on the board
///
/// Tiles are plain values. `id` is unique among the tiles of one board and is
/// never reused for another tile. `merged_id` is set only on the tile that
/// survived a merge during the move that produced the board, and names the
/// tile it absorbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub id: u32,
    pub value: u32,
    pub merged_id: Option<u32>,
}

impl Tile {
    /// Create an unmerged tile
    pub const fn new(id: u32, value: u32) -> Self {
        Self {
            id,
            value,
            merged_id: None,
        }
    }

    /// Create a tile that absorbed `merged_id` this move
    pub const fn merged(id: u32, value: u32, merged_id: u32) -> Self {
        Self {
            id,
            value,
            merged_id: Some(merged_id),
        }
    }

    /// Same tile with a different value (identity preserved)
    pub const fn with_value(self, value: u32) -> Self {
        Self { value, ..self }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Tile)`: Occupied cell
pub type Cell = Option<Tile>;

/// Player intents produced by the input layer
///
/// `Click` carries raw terminal coordinates; the view resolves it to a tile
/// or a powerup entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide the board
    Move(Direction),
    /// Click the powerup at this catalog position
    Powerup(usize),
    /// Pointer click at terminal column/row
    Click { column: u16, row: u16 },
}
