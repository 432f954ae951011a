//! Event journal: game events appended as JSON lines.
//!
//! The terminal is in raw mode while playing, so nothing is logged to stdout or
//! stderr. When a log path is configured every drained [`GameEvent`] becomes one
//! line in the file.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::{GameEvent, GameState};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum JournalEntry {
    SessionStart {
        seed: u64,
    },
    Locked {
        rows_cleared: u32,
        points: u32,
        score: u32,
        level: u32,
        lines: u32,
    },
    LevelUp {
        level: u32,
        drop_interval_ms: u32,
    },
    Paused {
        paused: bool,
    },
    GameOver {
        score: u32,
        level: u32,
        lines: u32,
    },
    SessionEnd {
        score: u32,
        level: u32,
        lines: u32,
    },
}

impl JournalEntry {
    /// Entry for a core event, with totals taken from the state it was drained from.
    pub fn from_event(event: &GameEvent, state: &GameState) -> Self {
        match *event {
            GameEvent::Locked {
                rows_cleared,
                points,
            } => JournalEntry::Locked {
                rows_cleared,
                points,
                score: state.score(),
                level: state.level(),
                lines: state.lines(),
            },
            GameEvent::LevelUp { level } => JournalEntry::LevelUp {
                level,
                drop_interval_ms: state.drop_interval_ms(),
            },
            GameEvent::Paused(paused) => JournalEntry::Paused { paused },
            GameEvent::GameOver { score } => JournalEntry::GameOver {
                score,
                level: state.level(),
                lines: state.lines(),
            },
        }
    }

    pub fn session_end(state: &GameState) -> Self {
        JournalEntry::SessionEnd {
            score: state.score(),
            level: state.level(),
            lines: state.lines(),
        }
    }
}

/// One journal line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalRecord {
    /// RFC 3339 timestamp
    pub ts: String,
    #[serde(flatten)]
    pub entry: JournalEntry,
}

pub struct EventJournal<W: Write> {
    out: W,
}

pub type FileJournal = EventJournal<BufWriter<File>>;

impl EventJournal<BufWriter<File>> {
    /// Open `path` for appending, creating it if needed.
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open event log {}", path.display()))?;
        Ok(Self::from_writer(BufWriter::new(file)))
    }
}

impl<W: Write> EventJournal<W> {
    pub fn from_writer(out: W) -> Self {
        Self { out }
    }

    pub fn record(&mut self, entry: JournalEntry) -> Result<()> {
        let record = JournalRecord {
            ts: chrono::Local::now().to_rfc3339(),
            entry,
        };
        serde_json::to_writer(&mut self.out, &record)?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }

    /// Drain the state's queued events into the journal.
    pub fn record_events(&mut self, state: &mut GameState) -> Result<()> {
        for event in state.take_events() {
            self.record(JournalEntry::from_event(&event, state))?;
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
