//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`], one press at a time.
//! Quit never reaches the core; callers check [`should_quit`] first.

pub mod map;

pub use tui_blockfall_types as types;

pub use map::{handle_key_event, is_press, should_quit};
