//! Pixel-space render surface backed by the terminal framebuffer.
//!
//! The engine draws in canvas pixels (`BLOCK_SIZE` px per board cell); this
//! view scales those down to character cells, one board cell becoming a 2x1
//! run of glyphs to compensate for the terminal glyph aspect ratio. It also
//! acts as the score sink, writing a text panel beside the playfield.

use crate::core::{RenderSurface, ScoreSink};
use crate::fb::{CellStyle, FrameBuffer};
use crate::types::{Color, BLOCK_SIZE};

/// Terminal columns per board cell.
const CELL_W: u16 = 2;
/// Terminal rows per board cell.
const CELL_H: u16 = 1;
/// Width reserved for the score panel, border excluded.
const PANEL_W: u16 = 12;

const PLAYFIELD_BG: Color = Color::new(30, 30, 40);

/// Maps the engine's pixel-space draw calls onto a [`FrameBuffer`].
pub struct BoardView {
    fb: FrameBuffer,
    /// Board width in cells, derived from the last `clear` call.
    cols: u16,
    rows: u16,
}

impl BoardView {
    pub fn new() -> Self {
        Self {
            fb: FrameBuffer::new(0, 0),
            cols: 0,
            rows: 0,
        }
    }

    /// The framebuffer holding the last rendered frame.
    pub fn frame(&self) -> &FrameBuffer {
        &self.fb
    }

    /// Top-left glyph of a board cell, inside the border.
    fn cell_origin(cx: u16, cy: u16) -> (u16, u16) {
        (1 + cx * CELL_W, 1 + cy * CELL_H)
    }

    fn draw_border(&mut self) {
        let style = CellStyle {
            fg: Color::new(200, 200, 200),
            ..CellStyle::default()
        };
        let w = self.cols * CELL_W + 2;
        let h = self.rows * CELL_H + 2;

        self.fb.put_char(0, 0, '┌', style);
        self.fb.put_char(w - 1, 0, '┐', style);
        self.fb.put_char(0, h - 1, '└', style);
        self.fb.put_char(w - 1, h - 1, '┘', style);
        for x in 1..w - 1 {
            self.fb.put_char(x, 0, '─', style);
            self.fb.put_char(x, h - 1, '─', style);
        }
        for y in 1..h - 1 {
            self.fb.put_char(0, y, '│', style);
            self.fb.put_char(w - 1, y, '│', style);
        }
    }
}

impl Default for BoardView {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSurface for BoardView {
    fn clear(&mut self, width_px: u32, height_px: u32) {
        self.cols = (width_px / BLOCK_SIZE) as u16;
        self.rows = (height_px / BLOCK_SIZE) as u16;

        let frame_w = self.cols * CELL_W + 2;
        let frame_h = self.rows * CELL_H + 2;
        self.fb.resize(frame_w + 1 + PANEL_W, frame_h);
        self.fb.fill(CellStyle::default().into_cell(' '));

        // Empty playfield: dim grid dots on the play-area background.
        let dots = CellStyle {
            fg: Color::new(90, 90, 100),
            bg: PLAYFIELD_BG,
            bold: false,
            dim: true,
        };
        for cy in 0..self.rows {
            for cx in 0..self.cols {
                let (x, y) = Self::cell_origin(cx, cy);
                self.fb.fill_rect(x, y, CELL_W, CELL_H, '·', dots);
            }
        }

        self.draw_border();
    }

    fn fill_rect(&mut self, x_px: u32, y_px: u32, w_px: u32, h_px: u32, color: Color) {
        let cx = (x_px / BLOCK_SIZE) as u16;
        let cy = (y_px / BLOCK_SIZE) as u16;
        let cw = (w_px / BLOCK_SIZE).max(1) as u16;
        let ch = (h_px / BLOCK_SIZE).max(1) as u16;

        let style = CellStyle {
            fg: color,
            bg: PLAYFIELD_BG,
            bold: true,
            dim: false,
        };
        let (x, y) = Self::cell_origin(cx, cy);
        self.fb.fill_rect(x, y, cw * CELL_W, ch * CELL_H, '█', style);
    }
}

impl ScoreSink for BoardView {
    fn show_score(&mut self, score: u32) {
        let panel_x = self.cols * CELL_W + 3;
        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        self.fb.put_str(panel_x, 1, "SCORE", label);
        self.fb.put_str(panel_x, 2, &score.to_string(), CellStyle::default());
    }
}

trait IntoCell {
    fn into_cell(self, ch: char) -> crate::fb::Cell;
}

impl IntoCell for CellStyle {
    fn into_cell(self, ch: char) -> crate::fb::Cell {
        crate::fb::Cell { ch, style: self }
    }
}
