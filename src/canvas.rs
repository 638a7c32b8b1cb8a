use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::rasterizer::LineRasterizer;

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct Cell {
    pub glyph: char,
    pub fg: Color,
}

impl Cell {
    pub fn new(glyph: char, fg: Color) -> Self {
        Self { glyph, fg }
    }

    pub fn blank() -> Self {
        Self {
            glyph: ' ',
            fg: Color::Reset,
        }
    }
}

/// a fixed size grid of cells that lines get plotted onto.
/// pixels that fall outside the grid are dropped here, the rasterizer never clips.
#[derive(Clone, Debug)]
pub struct Canvas {
    pub width: u16,
    pub height: u16,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::blank(); width as usize * height as usize],
        }
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        0 <= x && x < self.width as i32 && 0 <= y && y < self.height as i32
    }

    // get a reference to a cell of the canvas
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if !self.in_bounds(x as i32, y as i32) {
            return None;
        }
        self.cells.get(coords_to_idx(x, y, self.width))
    }

    /// sets a single cell. returns false if the pixel is off the canvas.
    pub fn plot(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        let idx = coords_to_idx(x as u16, y as u16, self.width);
        self.cells[idx] = cell;
        true
    }

    /// rasterizes the line from start to end with the given rasterizer and plots every
    /// fragment. the rasterizer is re-initialized, so one instance can be reused for
    /// every line. returns how many fragments landed on the canvas.
    pub fn draw_line(
        &mut self,
        rasterizer: &mut LineRasterizer,
        start: (i32, i32),
        end: (i32, i32),
        cell: Cell,
    ) -> usize {
        rasterizer.init(start.0, start.1, end.0, end.1);

        let mut plotted = 0;
        while let Ok((x, y)) = rasterizer.pixel() {
            if self.plot(x, y, cell) {
                plotted += 1;
            }
            rasterizer.next_fragment();
        }
        plotted
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::blank());
    }
}

pub fn coords_to_idx(x: u16, y: u16, width: u16) -> usize {
    x as usize + y as usize * width as usize
}
