//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, event journal).
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn pivot**: (5, 0), rotation North
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Default frame interval (~60 FPS) |
//! | `BASE_DROP_MS` | 1000 | Gravity interval at level 1 |
//! | `DROP_INTERVAL_STEP_MS` | 100 | Gravity speed-up per level |
//! | `DROP_INTERVAL_MIN_MS` | 100 | Fastest gravity interval |
//!
//! # Examples
//!
//! ```
//! use tui_blockfall_types::{PieceKind, Rotation, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! assert_eq!(PieceKind::ALL.len(), 7);
//!
//! let rotated = Rotation::North.rotate_cw();
//! assert_eq!(rotated, Rotation::East);
//! assert_eq!(rotated.index(), 1);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Default frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval at level 1 (1000ms = 1 second per row)
pub const BASE_DROP_MS: u32 = 1000;

/// Gravity gets this much faster with every level gained
pub const DROP_INTERVAL_STEP_MS: u32 = 100;

/// Gravity never gets faster than this
pub const DROP_INTERVAL_MIN_MS: u32 = 100;

/// Points per cleared row, multiplied by the row count and the level
pub const LINE_CLEAR_POINTS: u32 = 100;

/// Clearing events needed per level (threshold is `level * LINES_PER_LEVEL`)
pub const LINES_PER_LEVEL: u32 = 10;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    /// All kinds, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];
}

/// Rotation states, cyclic. North is the spawn orientation (state 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Map a rotation state in `0..=3` to its variant.
    ///
    /// # Panics
    ///
    /// Panics if `index > 3`. Callers normalize with `% 4` first.
    pub fn from_index(index: u8) -> Self {
        match index {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            3 => Rotation::West,
            _ => panic!("rotation state out of range: {index}"),
        }
    }

    /// Rotation state in `0..=3`.
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Next state clockwise (one 90° step)
    pub fn rotate_cw(&self) -> Self {
        Self::from_index((self.index() + 1) % 4)
    }
}

/// Color of a piece, picked at creation independently of its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceColor {
    Cyan,
    Yellow,
    Magenta,
    Red,
    Green,
    Blue,
    Orange,
}

impl PieceColor {
    pub const ALL: [PieceColor; 7] = [
        PieceColor::Cyan,
        PieceColor::Yellow,
        PieceColor::Magenta,
        PieceColor::Red,
        PieceColor::Green,
        PieceColor::Blue,
        PieceColor::Orange,
    ];
}

/// Game actions fed into the core, one at a time.
///
/// Quitting is not an action: the frontend handles it before the core sees input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    HardDrop,
    Rotate,
    Pause,
}

/// Cell on the board (None = empty, Some = locked with a piece color)
pub type Cell = Option<PieceColor>;
