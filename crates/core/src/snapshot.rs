use crate::board::{Row, EMPTY_ROW};
use crate::game_state::Tetromino;
use crate::types::{PieceColor, PieceKind, Rotation, BOARD_HEIGHT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub color: PieceColor,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
    /// Absolute board cells; some may have y < 0.
    pub cells: [(i8, i8); 4],
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind,
            color: value.color,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
            cells: value.cells(),
        }
    }
}

/// Everything a renderer reads for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [Row; BOARD_HEIGHT as usize],
    pub active: ActiveSnapshot,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub paused: bool,
    pub game_over: bool,
}

impl GameSnapshot {
    /// Empty-board snapshot around the given active piece
    pub fn new(active: ActiveSnapshot) -> Self {
        Self {
            board: [EMPTY_ROW; BOARD_HEIGHT as usize],
            active,
            score: 0,
            level: 1,
            lines: 0,
            paused: false,
            game_over: false,
        }
    }

    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }
}
