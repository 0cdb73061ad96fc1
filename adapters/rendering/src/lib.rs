#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Text rendering for mazes and their solutions.
//!
//! A [`Canvas`] draws the maze inside a border with an opening on the left of
//! the first row and on the right of the last row. Cells are spaced one
//! column apart so the picture reads roughly square on a terminal.

mod glyphs;

use std::fmt;

use mopsolver_core::{CellCoord, CellState, Grid, SearchOutcome};

pub use glyphs::{GlyphError, Glyphs};

const BLANK: char = ' ';

/// Character buffer holding the picture of one maze.
///
/// The buffer is `2 * columns + 3` characters wide and `rows + 2` lines tall.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    glyphs: Glyphs,
    pixels: Vec<char>,
}

impl Canvas {
    /// Draws the border and every cell of `grid`.
    #[must_use]
    pub fn new(grid: &Grid, glyphs: Glyphs) -> Self {
        let columns = usize::try_from(grid.columns()).unwrap_or(0);
        let rows = usize::try_from(grid.rows()).unwrap_or(0);
        let width = 2 * columns + 3;
        let height = rows + 2;

        let mut canvas = Self {
            width,
            height,
            glyphs,
            pixels: vec![BLANK; width * height],
        };
        canvas.draw_border();

        for (row, cells) in grid.iter_rows().enumerate() {
            for (column, state) in cells.iter().enumerate() {
                let glyph = match state {
                    CellState::Open => glyphs.open,
                    CellState::Blocked => glyphs.blocked,
                };
                canvas.set(2 * column + 2, row + 1, glyph);
            }
        }

        canvas
    }

    /// Marks every cell of `path` with the path glyph.
    ///
    /// Cells outside the drawn maze are ignored.
    pub fn overlay_path(&mut self, path: &[CellCoord]) {
        for cell in path {
            let column = usize::try_from(cell.column()).unwrap_or(usize::MAX);
            let row = usize::try_from(cell.row()).unwrap_or(usize::MAX);
            let x = column.saturating_mul(2).saturating_add(2);
            let y = row.saturating_add(1);
            if x < self.width - 1 && y < self.height - 1 {
                self.set(x, y, self.glyphs.path);
            }
        }
    }

    /// Width of the picture in characters.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the picture in lines.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Character drawn at the provided position, if it lies on the canvas.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        if x >= self.width || y >= self.height {
            return None;
        }

        self.pixels.get(y * self.width + x).copied()
    }

    /// Iterator over the lines of the picture from top to bottom.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.height()).map(move |y| {
            (0..self.width())
                .filter_map(|x| self.get(x, y))
                .collect()
        })
    }

    fn draw_border(&mut self) {
        let last_x = self.width - 1;
        let last_y = self.height - 1;

        for y in 0..self.height {
            for x in 0..self.width {
                let mut glyph = BLANK;
                if y == 0 || y == last_y {
                    glyph = self.glyphs.horizontal_wall;
                }
                if x == 0 || x == last_x {
                    glyph = self.glyphs.vertical_wall;
                }
                // Entrance beside the first row, exit beside the last row.
                if (x == 0 && y == 1) || (x == last_x && y + 1 == last_y) {
                    glyph = BLANK;
                }
                self.set(x, y, glyph);
            }
        }
    }

    fn set(&mut self, x: usize, y: usize, glyph: char) {
        let index = y * self.width + x;
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = glyph;
        }
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Draws the maze without any overlay.
#[must_use]
pub fn render_maze(grid: &Grid, glyphs: Glyphs) -> Canvas {
    Canvas::new(grid, glyphs)
}

/// Draws the maze and, when the search succeeded, its path.
#[must_use]
pub fn render_solution(grid: &Grid, outcome: &SearchOutcome, glyphs: Glyphs) -> Canvas {
    let mut canvas = Canvas::new(grid, glyphs);
    if let Some(solution) = outcome.solution() {
        canvas.overlay_path(solution.path());
    }
    canvas
}

/// One-line summary of a search outcome.
#[derive(Clone, Copy, Debug)]
pub struct StepReport<'a> {
    outcome: &'a SearchOutcome,
}

impl<'a> StepReport<'a> {
    /// Wraps the outcome to be summarised.
    #[must_use]
    pub const fn new(outcome: &'a SearchOutcome) -> Self {
        Self { outcome }
    }
}

impl fmt::Display for StepReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome.step_count() {
            Some(steps) => write!(f, "Solution in {steps} steps."),
            None => write!(f, "No solution."),
        }
    }
}
