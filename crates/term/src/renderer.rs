//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The frame is small and redraws happen at most a few times per second, so
//! every draw repaints the full frame; style changes are still coalesced into
//! runs to keep the escape-sequence output short.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Enter raw mode and the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    /// Restore the terminal. Safe to call after a failed run.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Repaint the full frame at the top-left of the screen.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        self.buf.queue(cursor::MoveTo(0, 0))?;

        let mut current: Option<CellStyle> = None;
        for y in 0..fb.height() {
            if y > 0 {
                self.buf.queue(cursor::MoveTo(0, y))?;
            }
            for x in 0..fb.width() {
                let cell = fb.get(x, y).unwrap_or_default();
                if current != Some(cell.style) {
                    apply_style(&mut self.buf, cell.style)?;
                    current = Some(cell.style);
                }
                self.buf.queue(Print(cell.ch))?;
            }
        }

        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn apply_style(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(to_term_color(style.fg)))?;
    out.queue(SetBackgroundColor(to_term_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn to_term_color(color: crate::types::Color) -> Color {
    Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::Cell;

    // Terminal I/O itself is not unit-testable; exercise the command encoding.
    #[test]
    fn style_encoding_does_not_fail() {
        let mut out = Vec::new();
        let style = CellStyle::default();
        apply_style(&mut out, style).unwrap();
        assert!(!out.is_empty());
    }

    #[test]
    fn color_conversion_is_lossless() {
        let c = crate::types::Color::new(12, 34, 56);
        assert_eq!(to_term_color(c), Color::Rgb { r: 12, g: 34, b: 56 });
    }

    #[test]
    fn default_cell_is_a_blank() {
        assert_eq!(Cell::default().ch, ' ');
    }
}
