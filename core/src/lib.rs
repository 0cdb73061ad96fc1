#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the maze solver.
//!
//! This crate defines the data that flows between the solver's pieces. The
//! text adapter produces an immutable [`Grid`], the search system borrows the
//! grid and reports a [`SearchOutcome`], and renderers consume both to draw
//! the maze and the solution overlay. Nothing in here performs a search.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Character that marks an open cell in maze text.
pub const OPEN_CELL: char = '0';
/// Character conventionally used for a blocked cell in maze text.
///
/// Any character other than [`OPEN_CELL`] is read as blocked.
pub const BLOCKED_CELL: char = '1';

/// Location of a single grid cell expressed as column and row coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    column: u32,
    row: u32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Adjacent coordinate one step toward `direction`.
    ///
    /// Returns `None` when the step would leave the non-negative quadrant.
    /// Upper bounds depend on the grid and are checked by the caller.
    #[must_use]
    pub fn neighbor(self, direction: Direction) -> Option<CellCoord> {
        match direction {
            Direction::North => self.row.checked_sub(1).map(|row| Self::new(self.column, row)),
            Direction::South => self.row.checked_add(1).map(|row| Self::new(self.column, row)),
            Direction::West => self
                .column
                .checked_sub(1)
                .map(|column| Self::new(column, self.row)),
            Direction::East => self
                .column
                .checked_add(1)
                .map(|column| Self::new(column, self.row)),
        }
    }

    /// Computes the Manhattan distance between two cell coordinates.
    #[must_use]
    pub fn manhattan_distance(self, other: CellCoord) -> u32 {
        self.column().abs_diff(other.column()) + self.row().abs_diff(other.row())
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// Cardinal movement directions within the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Movement toward decreasing row indices.
    North,
    /// Movement toward increasing column indices.
    East,
    /// Movement toward increasing row indices.
    South,
    /// Movement toward decreasing column indices.
    West,
}

/// State of a single maze cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    /// The cell can be walked through.
    Open,
    /// The cell is a wall.
    Blocked,
}

impl CellState {
    /// Maps a maze text character onto a cell state.
    ///
    /// Only [`OPEN_CELL`] is open; everything else is a wall.
    #[must_use]
    pub const fn from_char(value: char) -> Self {
        match value {
            OPEN_CELL => Self::Open,
            _ => Self::Blocked,
        }
    }

    /// Reports whether the cell can be walked through.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Immutable rectangular maze stored in row-major order.
///
/// A grid always holds at least one cell. The search treats the upper-left
/// cell as the source and the lower-right cell as the destination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    columns: u32,
    rows: u32,
    cells: Vec<CellState>,
}

impl Grid {
    /// Creates a grid from row-major cell states.
    pub fn new(columns: u32, rows: u32, cells: Vec<CellState>) -> Result<Self, GridError> {
        if columns == 0 || rows == 0 {
            return Err(GridError::Empty);
        }

        let expected = usize::try_from(u64::from(columns) * u64::from(rows))
            .map_err(|_| GridError::TooLarge)?;
        if cells.len() != expected {
            return Err(GridError::DimensionMismatch {
                expected,
                found: cells.len(),
            });
        }

        Ok(Self {
            columns,
            rows,
            cells,
        })
    }

    /// Parses maze text into a grid.
    ///
    /// Each non-blank line is one row. `'0'` marks an open cell and any other
    /// character a blocked one; spaces inside a line are ignored.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let mut cells = Vec::new();
        let mut width: Option<usize> = None;
        let mut rows = 0_usize;

        for (line_index, line) in text.lines().enumerate() {
            let line_number = line_index + 1;
            let row_start = cells.len();

            cells.extend(
                line.chars()
                    .filter(|value| *value != ' ' && *value != '\r')
                    .map(CellState::from_char),
            );

            let found = cells.len() - row_start;
            if found == 0 {
                continue;
            }

            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(GridError::RaggedRow {
                        line: line_number,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            rows += 1;
        }

        let Some(width) = width else {
            return Err(GridError::Empty);
        };

        let columns = u32::try_from(width).map_err(|_| GridError::TooLarge)?;
        let rows = u32::try_from(rows).map_err(|_| GridError::TooLarge)?;
        Self::new(columns, rows, cells)
    }

    /// Number of columns contained in the grid.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of rows contained in the grid.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Total number of cells in the grid.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Upper-left cell where every search starts.
    #[must_use]
    pub const fn source(&self) -> CellCoord {
        CellCoord::new(0, 0)
    }

    /// Lower-right cell every search tries to reach.
    #[must_use]
    pub const fn destination(&self) -> CellCoord {
        CellCoord::new(self.columns - 1, self.rows - 1)
    }

    /// Reports whether the coordinate lies within the grid.
    #[must_use]
    pub const fn contains(&self, cell: CellCoord) -> bool {
        cell.column() < self.columns && cell.row() < self.rows
    }

    /// State of the provided cell, if it lies within the grid.
    #[must_use]
    pub fn cell(&self, cell: CellCoord) -> Option<CellState> {
        self.index(cell)
            .and_then(|index| self.cells.get(index).copied())
    }

    /// Reports whether the cell exists and is open.
    #[must_use]
    pub fn is_open(&self, cell: CellCoord) -> bool {
        self.cell(cell).is_some_and(CellState::is_open)
    }

    /// Row-major offset of the cell, if it lies within the grid.
    #[must_use]
    pub fn index(&self, cell: CellCoord) -> Option<usize> {
        if !self.contains(cell) {
            return None;
        }

        let row = usize::try_from(cell.row()).ok()?;
        let column = usize::try_from(cell.column()).ok()?;
        let width = usize::try_from(self.columns).ok()?;
        row.checked_mul(width)?.checked_add(column)
    }

    /// Iterator over the rows of the grid from top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[CellState]> {
        // Grid::new guarantees a non-zero column count.
        let width = usize::try_from(self.columns).unwrap_or(usize::MAX);
        self.cells.chunks(width)
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Errors raised while constructing a [`Grid`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// The maze contained no cells.
    #[error("maze contains no cells")]
    Empty,
    /// A row did not match the width of the first row.
    #[error("line {line} has {found} cells but the maze is {expected} cells wide")]
    RaggedRow {
        /// One-based line number of the offending row.
        line: usize,
        /// Width established by the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
    /// The number of cells did not match the declared dimensions.
    #[error("expected {expected} cells but received {found}")]
    DimensionMismatch {
        /// Cell count implied by the dimensions.
        expected: usize,
        /// Cell count actually provided.
        found: usize,
    },
    /// The maze dimensions do not fit the coordinate space.
    #[error("maze dimensions exceed the supported coordinate range")]
    TooLarge,
}

/// Shortest path discovered by a successful search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    path: Vec<CellCoord>,
    frontier: Vec<CellCoord>,
}

impl Solution {
    /// Creates a solution from the reconstructed path and the final frontier.
    #[must_use]
    pub fn new(path: Vec<CellCoord>, frontier: Vec<CellCoord>) -> Self {
        Self { path, frontier }
    }

    /// Cells from the source to the destination, both inclusive.
    #[must_use]
    pub fn path(&self) -> &[CellCoord] {
        &self.path
    }

    /// Number of cells on the path, counting the source and the destination.
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.path.len()
    }

    /// Frontier queue contents at the moment the destination was reached.
    ///
    /// The destination is always the last entry.
    #[must_use]
    pub fn frontier(&self) -> &[CellCoord] {
        &self.frontier
    }
}

/// Terminal result of a maze search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchOutcome {
    /// The destination cannot be reached from the source.
    NoSolution,
    /// The destination was reached.
    Solved(Solution),
}

impl SearchOutcome {
    /// Returns the solution, if the search reached the destination.
    #[must_use]
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            Self::Solved(solution) => Some(solution),
            Self::NoSolution => None,
        }
    }

    /// Number of path cells, if the search reached the destination.
    #[must_use]
    pub fn step_count(&self) -> Option<usize> {
        self.solution().map(Solution::step_count)
    }
}
