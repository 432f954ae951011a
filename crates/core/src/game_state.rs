//! Game state module - manages the complete game state
//!
//! This module ties together all core components: board, pieces, RNG, and scoring.
//! It handles gravity timing, piece movement, rotation, locking, line clears and the
//! Running / Paused / Over lifecycle.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::pieces::{get_shape, PieceShape, SPAWN_POSITION};
use crate::rng::PieceGenerator;
use crate::scoring::ScoreTracker;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameAction, PieceColor, PieceKind, Rotation};

/// Maximum number of undrained events kept by [`GameState`].
pub const EVENT_QUEUE_CAPACITY: usize = 8;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub color: PieceColor,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Create a new tetromino at spawn position
    pub fn new(kind: PieceKind, color: PieceColor) -> Self {
        Self {
            kind,
            color,
            rotation: Rotation::North,
            x: SPAWN_POSITION.0,
            y: SPAWN_POSITION.1,
        }
    }

    /// Get the shape (mino offsets) for current rotation
    pub fn shape(&self) -> PieceShape {
        get_shape(self.kind, self.rotation)
    }

    /// Absolute board coordinates of the four minos
    pub fn cells(&self) -> [(i8, i8); 4] {
        self.shape().map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Check whether any mino overlaps a wall, the floor or a locked cell
    pub fn collides(&self, board: &Board) -> bool {
        self.cells()
            .iter()
            .any(|&(x, y)| board.is_occupied(x, y))
    }

    fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    fn rotated(&self) -> Self {
        Self {
            rotation: self.rotation.rotate_cw(),
            ..*self
        }
    }
}

/// Lifecycle of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    Running,
    Paused,
    /// Terminal: nothing mutates the board or the piece any more.
    Over,
}

/// Something that happened inside the core, drained by the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEvent {
    /// A piece became part of the board.
    Locked { rows_cleared: u32, points: u32 },
    /// The level went up; `level` is the new level.
    LevelUp { level: u32 },
    /// Pause was toggled; `true` means now paused.
    Paused(bool),
    /// A new piece could not spawn.
    GameOver { score: u32 },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Tetromino,
    generator: PieceGenerator,
    tracker: ScoreTracker,
    drop_timer_ms: u32,
    paused: bool,
    game_over: bool,
    events: ArrayVec<GameEvent, EVENT_QUEUE_CAPACITY>,
}

impl GameState {
    /// Create a new game with the given RNG seed and spawn the first piece
    pub fn new(seed: u64) -> Self {
        Self::with_board(seed, Board::new())
    }

    /// Create a game on a prepared board.
    ///
    /// The first piece spawns immediately, so a blocked spawn area ends the game at once.
    pub fn with_board(seed: u64, board: Board) -> Self {
        let mut generator = PieceGenerator::new(seed);
        let (kind, color) = generator.next_piece();

        let mut state = Self {
            board,
            active: Tetromino::new(kind, color),
            generator,
            tracker: ScoreTracker::new(),
            drop_timer_ms: 0,
            paused: false,
            game_over: false,
            events: ArrayVec::new(),
        };
        state.check_spawn();
        state
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn phase(&self) -> GamePhase {
        if self.game_over {
            GamePhase::Over
        } else if self.paused {
            GamePhase::Paused
        } else {
            GamePhase::Running
        }
    }

    pub fn score(&self) -> u32 {
        self.tracker.score()
    }

    pub fn level(&self) -> u32 {
        self.tracker.level()
    }

    /// Clearing lock events so far (drives level progression)
    pub fn lines(&self) -> u32 {
        self.tracker.lines()
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.tracker.drop_interval_ms()
    }

    /// Milliseconds accumulated toward the next gravity step
    pub fn drop_timer_ms(&self) -> u32 {
        self.drop_timer_ms
    }

    pub fn seed(&self) -> u64 {
        self.generator.seed()
    }

    pub fn active(&self) -> Tetromino {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replace the active piece, e.g. to set up a position.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if the piece overlaps a wall, the floor or a locked
    /// cell. Release builds take the piece as given, and locking it later panics
    /// in [`Board::lock`] if a mino sits beside or below the board.
    pub fn set_active(&mut self, piece: Tetromino) {
        debug_assert!(
            !piece.collides(&self.board),
            "active piece {piece:?} collides with the board"
        );
        self.active = piece;
    }

    /// Take all events queued since the last call, oldest first.
    pub fn take_events(&mut self) -> ArrayVec<GameEvent, EVENT_QUEUE_CAPACITY> {
        std::mem::take(&mut self.events)
    }

    fn push_event(&mut self, event: GameEvent) {
        if self.events.is_full() {
            self.events.remove(0);
        }
        self.events.push(event);
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board = *self.board.rows();
        out.active = ActiveSnapshot::from(self.active);
        out.score = self.score();
        out.level = self.level();
        out.lines = self.lines();
        out.paused = self.paused;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::new(ActiveSnapshot::from(self.active));
        self.snapshot_into(&mut s);
        s
    }

    /// Spawn a new piece from the generator
    fn spawn_piece(&mut self) {
        let (kind, color) = self.generator.next_piece();
        self.active = Tetromino::new(kind, color);
        self.check_spawn();
    }

    fn check_spawn(&mut self) {
        if self.active.collides(&self.board) {
            self.game_over = true;
            let score = self.score();
            self.push_event(GameEvent::GameOver { score });
        }
    }

    /// Try to move the active piece. A colliding move leaves the piece untouched.
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if self.game_over {
            return false;
        }
        let candidate = self.active.shifted(dx, dy);
        if candidate.collides(&self.board) {
            return false;
        }
        self.active = candidate;
        true
    }

    /// Try to rotate the active piece one step clockwise. No kicks are attempted.
    pub fn try_rotate(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let candidate = self.active.rotated();
        if candidate.collides(&self.board) {
            return false;
        }
        self.active = candidate;
        true
    }

    /// Lowest non-colliding row for the active piece
    pub fn landing_y(&self) -> i8 {
        let mut resting = self.active;
        loop {
            let below = resting.shifted(0, 1);
            if below.collides(&self.board) {
                return resting.y;
            }
            resting = below;
        }
    }

    /// Hard drop the active piece to the bottom and lock it.
    ///
    /// Returns the number of rows the piece fell; 0 once the game is over.
    pub fn hard_drop(&mut self) -> u32 {
        if self.game_over {
            return 0;
        }
        let landing_y = self.landing_y();
        let distance = (landing_y - self.active.y).max(0) as u32;
        self.active.y = landing_y;
        self.lock_piece();
        distance
    }

    /// Lock the active piece onto the board, clear rows, score, and spawn the next piece
    fn lock_piece(&mut self) {
        let color = self.active.color;
        let cells = self.active.cells().map(|(x, y)| (x, y, color));
        self.board.lock(&cells);

        let rows = self.board.clear_full_rows() as u32;
        let outcome = self.tracker.record_clear(rows);

        self.push_event(GameEvent::Locked {
            rows_cleared: rows,
            points: outcome.points,
        });
        if outcome.leveled_up {
            let level = self.level();
            self.push_event(GameEvent::LevelUp { level });
        }

        self.spawn_piece();
    }

    /// Advance gravity by `elapsed_ms`.
    ///
    /// Returns true when a gravity step ran (the piece fell or locked).
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.phase() != GamePhase::Running {
            return false;
        }

        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms < self.drop_interval_ms() {
            return false;
        }

        if !self.try_move(0, 1) {
            self.lock_piece();
        }
        self.drop_timer_ms = 0;
        true
    }

    fn toggle_pause(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        self.paused = !self.paused;
        let paused = self.paused;
        self.push_event(GameEvent::Paused(paused));
        true
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Pause => self.toggle_pause(),
            _ if self.phase() != GamePhase::Running => false,
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::Rotate => self.try_rotate(),
            GameAction::HardDrop => {
                self.hard_drop();
                true
            }
        }
    }
}
