//! Crossterm implementation of the draw surface
//!
//! Keeps a floating-point RGB framebuffer at cell resolution and
//! presents it as runs of 24-bit background color. Terminal cells are
//! roughly twice as tall as wide, so world space maps to cells with a
//! 2:1 vertical scale to keep circles round. The fade veil is what
//! produces motion trails: the buffer is never cleared, only darkened.

use std::io::{self, Write};

use crossterm::QueueableCommand;
use crossterm::cursor::MoveTo;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor};
use glam::Vec2;

use super::Surface;
use crate::sim::Hsl;

/// World units covered by one cell horizontally
pub const CELL_WIDTH: f32 = 4.0;
/// World units covered by one cell vertically (2:1 aspect compensation)
pub const CELL_HEIGHT: f32 = 8.0;

/// Anti-alias band around a circle edge, in world units
const EDGE_SOFTNESS: f32 = CELL_WIDTH;

pub struct TerminalSurface {
    cols: u16,
    rows: u16,
    /// Row-major linear RGB, one entry per cell
    cells: Vec<[f32; 3]>,
}

impl TerminalSurface {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            cells: vec![[0.0; 3]; cols as usize * rows as usize],
        }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// World-space dimensions of the drawable field
    pub fn world_size(&self) -> (f32, f32) {
        (
            f32::from(self.cols) * CELL_WIDTH,
            f32::from(self.rows) * CELL_HEIGHT,
        )
    }

    /// World coordinates at the center of a cell (for mouse input)
    pub fn cell_center(&self, col: u16, row: u16) -> Vec2 {
        Vec2::new(
            (f32::from(col) + 0.5) * CELL_WIDTH,
            (f32::from(row) + 0.5) * CELL_HEIGHT,
        )
    }

    fn cell(&mut self, col: usize, row: usize) -> &mut [f32; 3] {
        &mut self.cells[row * self.cols as usize + col]
    }

    /// Queue the whole frame to `out` as background-color runs.
    /// The caller owns cursor state and flushing.
    pub fn present(&self, out: &mut impl Write) -> io::Result<()> {
        for row in 0..self.rows {
            out.queue(MoveTo(0, row))?;
            let mut run_color: Option<(u8, u8, u8)> = None;
            let mut run_len = 0usize;
            for col in 0..self.cols {
                let [r, g, b] = self.cells[row as usize * self.cols as usize + col as usize];
                let rgb = (quantize(r), quantize(g), quantize(b));
                match run_color {
                    Some(current) if current == rgb => run_len += 1,
                    Some(current) => {
                        flush_run(out, current, run_len)?;
                        run_color = Some(rgb);
                        run_len = 1;
                    }
                    None => {
                        run_color = Some(rgb);
                        run_len = 1;
                    }
                }
            }
            if let Some(current) = run_color {
                flush_run(out, current, run_len)?;
            }
        }
        out.queue(ResetColor)?;
        Ok(())
    }
}

fn quantize(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn flush_run(out: &mut impl Write, (r, g, b): (u8, u8, u8), len: usize) -> io::Result<()> {
    out.queue(SetBackgroundColor(Color::Rgb { r, g, b }))?;
    out.queue(Print(" ".repeat(len)))?;
    Ok(())
}

impl Surface for TerminalSurface {
    fn fade(&mut self, alpha: f32) {
        let keep = 1.0 - alpha;
        for cell in &mut self.cells {
            for channel in cell {
                *channel *= keep;
            }
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Hsl, alpha: f32) {
        if alpha <= 0.0 {
            return;
        }
        let rgb = color.to_rgb();

        let min_col = (((center.x - radius) / CELL_WIDTH).floor()).max(0.0) as usize;
        let max_col =
            ((((center.x + radius) / CELL_WIDTH).ceil()) as usize).min(self.cols as usize - 1);
        let min_row = (((center.y - radius) / CELL_HEIGHT).floor()).max(0.0) as usize;
        let max_row =
            ((((center.y + radius) / CELL_HEIGHT).ceil()) as usize).min(self.rows as usize - 1);
        if min_col > max_col || min_row > max_row {
            return;
        }

        for row in min_row..=max_row {
            for col in min_col..=max_col {
                let sample = Vec2::new(
                    (col as f32 + 0.5) * CELL_WIDTH,
                    (row as f32 + 0.5) * CELL_HEIGHT,
                );
                // Signed distance to the circle edge drives coverage
                let sd = sample.distance(center) - radius;
                let coverage = (0.5 - sd / EDGE_SOFTNESS).clamp(0.0, 1.0);
                if coverage <= 0.0 {
                    continue;
                }
                let a = coverage * alpha;
                let cell = self.cell(col, row);
                for (channel, target) in cell.iter_mut().zip(rgb) {
                    *channel += (target - *channel) * a;
                }
            }
        }
    }
}
