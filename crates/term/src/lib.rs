//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. The game view
//! renders a [`GameSnapshot`](crate::core::GameSnapshot) into a framebuffer of
//! styled characters, and the terminal renderer flushes only the cells that
//! changed since the previous frame.
//!
//! - Keep `core` deterministic and testable
//! - Keep the view pure (no I/O) so frames can be asserted in tests
//! - Cells are 2 chars wide to compensate for terminal glyph aspect ratio

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_blockfall_core as core;
pub use tui_blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{color_rgb, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, restore_terminal, TerminalRenderer};
