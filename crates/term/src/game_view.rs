//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceColor, BOARD_HEIGHT, BOARD_WIDTH};

const BACKGROUND: Rgb = Rgb::new(40, 44, 52);
const WHITE: Rgb = Rgb::new(255, 255, 255);
const BLOCK: char = '█';

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Terminal color for a piece color.
pub fn color_rgb(color: PieceColor) -> Rgb {
    match color {
        PieceColor::Cyan => Rgb::new(78, 201, 176),
        PieceColor::Yellow => Rgb::new(242, 201, 76),
        PieceColor::Magenta => Rgb::new(184, 61, 186),
        PieceColor::Red => Rgb::new(217, 87, 99),
        PieceColor::Green => Rgb::new(89, 196, 114),
        PieceColor::Blue => Rgb::new(69, 177, 232),
        PieceColor::Orange => Rgb::new(239, 149, 72),
    }
}

/// Board frame placement inside the viewport
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the snapshot into a fresh framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Render the snapshot into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let w = (BOARD_WIDTH as u16) * self.cell_w + 2;
        let h = (BOARD_HEIGHT as u16) * self.cell_h + 2;
        let frame = Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        };

        self.draw_border(fb, frame);

        // Locked cells.
        for (y, row) in snap.board.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                if let Some(color) = cell {
                    self.draw_block(fb, frame, x as i8, y as i8, *color);
                }
            }
        }

        // Active piece; minos above the board are not visible.
        for &(x, y) in snap.active.cells.iter() {
            self.draw_block(fb, frame, x, y, snap.active.color);
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.game_over {
            self.draw_overlay_text(fb, frame, "GAME OVER");
        } else if snap.paused {
            self.draw_overlay_text(fb, frame, "PAUSED");
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, f: Frame) {
        let style = CellStyle::new(WHITE, BACKGROUND);

        fb.put_char(f.x, f.y, '┌', style);
        fb.put_char(f.x + f.w - 1, f.y, '┐', style);
        fb.put_char(f.x, f.y + f.h - 1, '└', style);
        fb.put_char(f.x + f.w - 1, f.y + f.h - 1, '┘', style);

        for dx in 1..f.w - 1 {
            fb.put_char(f.x + dx, f.y, '─', style);
            fb.put_char(f.x + dx, f.y + f.h - 1, '─', style);
        }
        for dy in 1..f.h - 1 {
            fb.put_char(f.x, f.y + dy, '│', style);
            fb.put_char(f.x + f.w - 1, f.y + dy, '│', style);
        }
    }

    fn draw_block(&self, fb: &mut FrameBuffer, f: Frame, x: i8, y: i8, color: PieceColor) {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return;
        }
        let px = f.x + 1 + (x as u16) * self.cell_w;
        let py = f.y + 1 + (y as u16) * self.cell_h;
        let style = CellStyle::new(color_rgb(color), BACKGROUND);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, BLOCK, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, f: Frame) {
        let panel_x = f.x.saturating_add(f.w).saturating_add(2);
        if panel_x.saturating_add(10) > viewport.width {
            return;
        }

        let label = CellStyle::new(WHITE, BACKGROUND).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), BACKGROUND);

        let rows = [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
        ];
        let mut y = f.y.saturating_add(1);
        for (name, n) in rows {
            fb.put_str(panel_x, y, name, label);
            fb.put_str(panel_x, y + 1, &n.to_string(), value);
            y = y.saturating_add(3);
        }

        if snap.paused && !snap.game_over {
            fb.put_str(panel_x, y, "PAUSED", label);
        }

        let help = CellStyle::new(Rgb::new(140, 140, 150), BACKGROUND).dim();
        let bottom = f.y + f.h - 1;
        for (i, line) in ["←→ move  ↑ rotate", "↓ drop  p pause", "q quit"]
            .iter()
            .enumerate()
        {
            let ly = bottom.saturating_sub(2 - i as u16);
            fb.put_str(panel_x, ly, line, help);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, f: Frame, text: &str) {
        let mid_y = f.y.saturating_add(f.h / 2);
        let text_w = text.chars().count() as u16;
        let x = f.x.saturating_add(f.w.saturating_sub(text_w) / 2);
        fb.put_str(x, mid_y, text, CellStyle::new(WHITE, Rgb::new(0, 0, 0)).bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameState, Tetromino};
    use crate::types::{PieceKind, Rotation};

    fn snapshot_with_piece(x: i8, y: i8) -> GameSnapshot {
        let mut state = GameState::new(1);
        state.set_active(Tetromino {
            kind: PieceKind::O,
            color: PieceColor::Yellow,
            rotation: Rotation::North,
            x,
            y,
        });
        state.snapshot()
    }

    #[test]
    fn active_piece_is_drawn_in_its_color() {
        let snap = snapshot_with_piece(0, 0);
        let fb = GameView::default().render(&snap, Viewport::new(22, 22));

        let cell = fb.get(1, 1).unwrap();
        assert_eq!(cell.ch, BLOCK);
        assert_eq!(cell.style.fg, color_rgb(PieceColor::Yellow));
        // Second half of the 2-wide cell, then the neighbor column.
        assert_eq!(fb.get(2, 1).unwrap().ch, BLOCK);
        assert_eq!(fb.get(3, 1).unwrap().ch, BLOCK);
        assert_eq!(fb.get(5, 1).unwrap().ch, ' ');
    }

    #[test]
    fn minos_above_board_are_hidden() {
        let snap = snapshot_with_piece(0, -1);
        let fb = GameView::default().render(&snap, Viewport::new(22, 22));

        // Only the lower row of the O is on the board, at y = 0.
        assert_eq!(fb.get(1, 1).unwrap().ch, BLOCK);
        assert_eq!(fb.get(1, 2).unwrap().ch, ' ');
        assert_eq!(fb.get(1, 0).unwrap().ch, '─');
    }

    #[test]
    fn single_column_cells_shrink_the_frame() {
        let snap = snapshot_with_piece(0, 0);
        // 10x20 board, 1x1 cells, plus border => 12x22
        let fb = GameView::new(1, 1).render(&snap, Viewport::new(12, 22));

        assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
        assert_eq!(fb.get(11, 0).unwrap().ch, '┐');
        assert_eq!(fb.get(11, 21).unwrap().ch, '┘');
        // O at the left edge covers board columns 0 and 1.
        assert_eq!(fb.get(1, 1).unwrap().ch, BLOCK);
        assert_eq!(fb.get(2, 1).unwrap().ch, BLOCK);
        assert_eq!(fb.get(3, 1).unwrap().ch, ' ');
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let snap = snapshot_with_piece(4, 4);
        let fb = GameView::default().render(&snap, Viewport::new(5, 3));
        assert_eq!((fb.width(), fb.height()), (5, 3));
    }
}
