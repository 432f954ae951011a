//! Terminal falling-block game (workspace facade crate).
//!
//! The game itself lives in dedicated crates under `crates/`; this package
//! re-exports them as `tui_blockfall::{core,input,term,types}` and adds the
//! pieces only the binary needs: command-line configuration and the event journal.

pub use tui_blockfall_core as core;
pub use tui_blockfall_input as input;
pub use tui_blockfall_term as term;
pub use tui_blockfall_types as types;

pub mod config;
pub mod journal;
