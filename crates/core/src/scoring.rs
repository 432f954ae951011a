//! Scoring module - score, level and gravity progression
//!
//! Level progression counts clearing lock events, not rows: a lock that clears
//! four rows advances the line counter by one, same as a single. Scoring does use
//! the row count.

use crate::types::{
    BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_INTERVAL_STEP_MS, LINES_PER_LEVEL, LINE_CLEAR_POINTS,
};

/// Points for clearing `rows` rows in one lock at `level`
pub fn line_clear_score(rows: u32, level: u32) -> u32 {
    rows.saturating_mul(LINE_CLEAR_POINTS).saturating_mul(level)
}

/// Gravity interval for a level (level 1 = 1000ms, 100ms faster per level, floor 100ms)
pub fn drop_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(DROP_INTERVAL_STEP_MS);
    BASE_DROP_MS
        .saturating_sub(speedup)
        .max(DROP_INTERVAL_MIN_MS)
}

/// Line counter value at which `level` advances
pub fn level_threshold(level: u32) -> u32 {
    level.saturating_mul(LINES_PER_LEVEL)
}

/// Result of recording one lock event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClearOutcome {
    pub rows: u32,
    pub points: u32,
    pub leveled_up: bool,
}

/// Score/level state derived from lock events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoreTracker {
    score: u32,
    level: u32,
    lines: u32,
    drop_interval_ms: u32,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self {
            score: 0,
            level: 1,
            lines: 0,
            drop_interval_ms: drop_interval_ms(1),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Number of lock events that cleared at least one row
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    /// Record a lock event that cleared `rows` rows.
    pub fn record_clear(&mut self, rows: u32) -> ClearOutcome {
        if rows == 0 {
            return ClearOutcome::default();
        }

        let points = line_clear_score(rows, self.level);
        self.score = self.score.saturating_add(points);
        self.lines += 1;

        let leveled_up = self.lines >= level_threshold(self.level);
        if leveled_up {
            self.level += 1;
            self.drop_interval_ms = drop_interval_ms(self.level);
        }

        ClearOutcome {
            rows,
            points,
            leveled_up,
        }
    }
}

impl Default for ScoreTracker {
    fn default() -> Self {
        Self::new()
    }
}
