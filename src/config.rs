//! Run configuration: command-line arguments with environment fallbacks.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::types::TICK_MS;

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Seed for the piece sequence, given as a 64-bit integer.
    /// The same seed always deals the same pieces and colors.
    /// Example: `tui-blockfall --seed=42` or `tui-blockfall -s 42`.
    #[arg(short, long, env = "BLOCKFALL_SEED")]
    pub seed: Option<u64>,

    /// Milliseconds per frame (render, input poll and gravity check).
    #[arg(
        long,
        env = "BLOCKFALL_FRAME_MS",
        default_value_t = TICK_MS,
        value_parser = clap::value_parser!(u32).range(1..=1000)
    )]
    pub frame_ms: u32,

    /// Append game events as JSON lines to this file.
    #[arg(long, env = "BLOCKFALL_LOG_PATH")]
    pub log_path: Option<PathBuf>,
}

/// Resolved configuration for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub seed: u64,
    pub frame: Duration,
    pub log_path: Option<PathBuf>,
}

impl RunConfig {
    /// Resolve arguments; a missing seed is drawn at random.
    pub fn from_args(args: Args) -> Self {
        Self {
            seed: args.seed.unwrap_or_else(rand::random),
            frame: Duration::from_millis(args.frame_ms as u64),
            log_path: args
                .log_path
                .filter(|p| !p.as_os_str().is_empty()),
        }
    }
}
