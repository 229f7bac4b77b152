//! Text-cell rasteriser for the watch render queue
//!
//! Watch-face coordinates map onto terminal cells: one row per console line
//! and half a font size per column. Images are drawn as short glyphs.

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use std::collections::HashMap;
use std::io::{self, Write};
use watchterm_core::{Assets, ConsoleLayout, ImageId, RenderInstruction, Vec2, CROSS_ICON};

const UNKNOWN_IMAGE_GLYPH: &str = "?";

pub struct Screen {
    cell_width: f32,
    cell_height: f32,
    columns: u16,
    glyphs: HashMap<ImageId, &'static str>,
    last_queue: Option<Vec<RenderInstruction>>,
}

impl Screen {
    pub fn new(layout: &ConsoleLayout, assets: &Assets, columns: u16) -> Self {
        let mut glyphs = HashMap::new();
        if let Ok(cross) = assets.icon(CROSS_ICON) {
            glyphs.insert(cross, "[x]");
        }
        Self {
            cell_width: positive_or(layout.font_size / 2.0, 1.0),
            cell_height: positive_or(layout.line_height, 1.0),
            columns,
            glyphs,
            last_queue: None,
        }
    }

    /// Watch-space point at the top-left of a terminal cell
    pub fn cell_to_watch(&self, column: u16, row: u16) -> Vec2 {
        Vec2::new(
            f32::from(column) * self.cell_width,
            f32::from(row) * self.cell_height,
        )
    }

    fn watch_to_cell(&self, position: Vec2) -> (u16, u16) {
        let column = (position.x / self.cell_width).floor().clamp(0.0, f32::from(u16::MAX));
        let row = (position.y / self.cell_height).floor().clamp(0.0, f32::from(u16::MAX));
        (column as u16, row as u16)
    }

    /// Terminal was resized; force a full redraw
    pub fn resize(&mut self, columns: u16) {
        self.columns = columns;
        self.last_queue = None;
    }

    /// Draw a frame's render queue, skipping unchanged frames
    pub fn draw(&mut self, out: &mut impl Write, queue: &[RenderInstruction]) -> io::Result<()> {
        if self.last_queue.as_deref() == Some(queue) {
            return Ok(());
        }

        queue!(out, Clear(ClearType::All))?;
        for instruction in queue {
            match instruction {
                RenderInstruction::Image { image, position } => {
                    let glyph = self.glyphs.get(image).copied().unwrap_or(UNKNOWN_IMAGE_GLYPH);
                    self.print_at(out, *position, glyph, Color::Reset)?;
                }
                RenderInstruction::Text {
                    text,
                    position,
                    color,
                    ..
                } => {
                    self.print_at(out, *position, text, rgb(*color))?;
                }
            }
        }
        queue!(out, ResetColor)?;
        out.flush()?;

        self.last_queue = Some(queue.to_vec());
        Ok(())
    }

    fn print_at(&self, out: &mut impl Write, position: Vec2, text: &str, color: Color) -> io::Result<()> {
        let (column, row) = self.watch_to_cell(position);
        let room = usize::from(self.columns.saturating_sub(column));
        let visible: String = text.chars().take(room).collect();
        queue!(out, MoveTo(column, row), SetForegroundColor(color), Print(visible))
    }
}

fn positive_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}

fn rgb(color: u32) -> Color {
    Color::Rgb {
        r: (color >> 16) as u8,
        g: (color >> 8) as u8,
        b: color as u8,
    }
}
