//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or holds the color of a locked piece.
//! Storage is an array of rows so line clears can move whole rows by index.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//! Rows above the board (y < 0) are open space; the floor and the side walls are solid.

use crate::types::{Cell, PieceColor, BOARD_HEIGHT, BOARD_WIDTH};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// One board row, left to right
pub type Row = [Cell; WIDTH];

/// A row with no locked cells
pub const EMPTY_ROW: Row = [None; WIDTH];

/// The game board - 10 columns x 20 rows, row 0 at the top
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    rows: [Row; HEIGHT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            rows: [EMPTY_ROW; HEIGHT],
        }
    }

    /// Build a board from explicit rows (top to bottom).
    pub fn from_rows(rows: [Row; HEIGHT]) -> Self {
        Self { rows }
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    #[inline(always)]
    fn in_bounds(x: i8, y: i8) -> bool {
        x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::in_bounds(x, y).then(|| self.rows[y as usize][x as usize])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        if !Self::in_bounds(x, y) {
            return false;
        }
        self.rows[y as usize][x as usize] = cell;
        true
    }

    /// Check whether a piece cell may not be at (x, y).
    ///
    /// Walls (x outside 0..W) and the floor (y >= H) always count as occupied.
    /// Space above the board (y < 0) never does, whatever is below it.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return true;
        }
        if y < 0 {
            return false;
        }
        self.rows[y as usize][x as usize].is_some()
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.rows
            .get(y)
            .is_some_and(|row| row.iter().all(|cell| cell.is_some()))
    }

    /// Write piece cells into the grid.
    ///
    /// Cells above the board (y < 0) are dropped. Returns the number of cells written.
    ///
    /// # Panics
    ///
    /// Panics if a cell lies beside or below the board; locking always follows a
    /// successful collision check, so that is a caller bug.
    pub fn lock(&mut self, cells: &[(i8, i8, PieceColor)]) -> usize {
        let mut written = 0;
        for &(x, y, color) in cells {
            assert!(
                x >= 0 && x < BOARD_WIDTH as i8 && y < BOARD_HEIGHT as i8,
                "locked cell ({x}, {y}) is outside the board"
            );
            if y < 0 {
                continue;
            }
            self.rows[y as usize][x as usize] = Some(color);
            written += 1;
        }
        written
    }

    /// Clear all full rows and return how many were cleared.
    ///
    /// Scans top to bottom. Each full row is removed and a fresh empty row is
    /// inserted at the top, so everything above it shifts down one row. Rows
    /// below the scan position never move, so no row is skipped.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut cleared = 0;
        for y in 0..HEIGHT {
            if self.is_row_full(y) {
                self.rows.copy_within(0..y, 1);
                self.rows[0] = EMPTY_ROW;
                cleared += 1;
            }
        }
        cleared
    }

    /// Number of non-empty cells on the board
    pub fn filled_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| cell.is_some())
            .count()
    }

    /// Rows of the board, top to bottom
    pub fn rows(&self) -> &[Row; HEIGHT] {
        &self.rows
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.rows = [EMPTY_ROW; HEIGHT];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_row(color: PieceColor) -> Row {
        [Some(color); WIDTH]
    }

    #[test]
    fn test_in_bounds() {
        assert!(Board::in_bounds(0, 0));
        assert!(Board::in_bounds(9, 19));
        assert!(!Board::in_bounds(-1, 0));
        assert!(!Board::in_bounds(10, 0));
        assert!(!Board::in_bounds(0, 20));
        assert!(!Board::in_bounds(0, -1));
    }

    #[test]
    fn test_single_full_row_at_top() {
        let mut rows = [EMPTY_ROW; HEIGHT];
        rows[0] = full_row(PieceColor::Red);
        let mut board = Board::from_rows(rows);

        assert_eq!(board.clear_full_rows(), 1);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_adjacent_full_rows_are_both_cleared() {
        let mut rows = [EMPTY_ROW; HEIGHT];
        rows[17][4] = Some(PieceColor::Blue);
        rows[18] = full_row(PieceColor::Red);
        rows[19] = full_row(PieceColor::Green);
        let mut board = Board::from_rows(rows);

        assert_eq!(board.clear_full_rows(), 2);
        assert_eq!(board.get(4, 19), Some(Some(PieceColor::Blue)));
        assert_eq!(board.filled_count(), 1);
    }

    #[test]
    fn test_lock_drops_cells_above_board() {
        let mut board = Board::new();
        let written = board.lock(&[
            (4, -1, PieceColor::Cyan),
            (4, 0, PieceColor::Cyan),
            (5, 0, PieceColor::Cyan),
            (5, -2, PieceColor::Cyan),
        ]);
        assert_eq!(written, 2);
        assert_eq!(board.filled_count(), 2);
    }

    #[test]
    #[should_panic(expected = "outside the board")]
    fn test_lock_rejects_wall_cells() {
        let mut board = Board::new();
        board.lock(&[(10, 3, PieceColor::Cyan)]);
    }
}
