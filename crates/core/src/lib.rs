//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, terminal or file I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical piece sequences
//! - **Testable**: Unit tests for every rule
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid of locked cells, collision queries and row compaction
//! - [`pieces`]: the shape catalog and the 90° rotation transform
//! - [`rng`]: uniform random piece kind and color
//! - [`scoring`]: score, level and gravity progression
//! - [`game_state`]: active piece, lock sequence and the gravity/input loop controller
//! - [`snapshot`]: read-only copy of the state for renderers
//!
//! # Game Rules
//!
//! - Pieces spawn at the horizontal center of the top row, rotation North
//! - Moves and rotations that would collide are rejected outright (no wall kicks)
//! - Down performs a hard drop; a piece that cannot fall on a gravity step locks
//! - Each clearing lock scores `rows * 100 * level`
//! - The game is over when a freshly spawned piece collides
//!
//! # Example
//!
//! ```
//! use tui_blockfall_core::GameState;
//! use tui_blockfall_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! // Four cells were locked, nothing could be cleared yet.
//! assert_eq!(game.board().filled_count(), 4);
//! assert_eq!(game.score(), 0);
//! ```
//!
//! # Timing
//!
//! Gravity is a tick accumulator: call [`GameState::tick`](game_state::GameState::tick)
//! once per frame with the elapsed milliseconds. When the accumulated time reaches the
//! level's drop interval the piece falls one row (or locks).

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use tui_blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{GameEvent, GamePhase, GameState, Tetromino};
pub use pieces::{base_shape, get_shape, rotate_offset};
pub use rng::PieceGenerator;
pub use scoring::{drop_interval_ms, line_clear_score, ClearOutcome, ScoreTracker};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
