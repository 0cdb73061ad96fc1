//! Dense visited-cell record used by the breadth-first search.

use mopsolver_core::{CellCoord, Grid};

use crate::SearchError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Visit {
    Unvisited,
    Origin,
    From(CellCoord),
}

/// Every cell that has been placed on the frontier during one search.
///
/// Membership is stored in a row-major slot per grid cell, so lookups and
/// inserts are constant time. Each slot also remembers the cell it was
/// discovered from, which lets the search walk back from the destination.
/// Entries are never removed.
#[derive(Clone, Debug)]
pub struct VisitedSet {
    columns: u32,
    rows: u32,
    slots: Vec<Visit>,
    len: usize,
}

impl VisitedSet {
    /// Creates an empty set covering a `columns` by `rows` grid.
    #[must_use]
    pub fn new(columns: u32, rows: u32) -> Self {
        let width = usize::try_from(columns).unwrap_or(0);
        let height = usize::try_from(rows).unwrap_or(0);
        let cell_count = width.checked_mul(height).unwrap_or(0);

        Self {
            columns,
            rows,
            slots: vec![Visit::Unvisited; cell_count],
            len: 0,
        }
    }

    /// Creates an empty set matching the dimensions of `grid`.
    #[must_use]
    pub fn for_grid(grid: &Grid) -> Self {
        Self::new(grid.columns(), grid.rows())
    }

    /// Reports whether the cell has been added before.
    #[must_use]
    pub fn contains(&self, cell: CellCoord) -> bool {
        self.slot(cell)
            .is_some_and(|slot| self.slots[slot] != Visit::Unvisited)
    }

    /// Marks the cell as visited.
    ///
    /// `discovered_from` is the cell whose expansion found this one, or `None`
    /// for the search origin.
    pub fn add(
        &mut self,
        cell: CellCoord,
        discovered_from: Option<CellCoord>,
    ) -> Result<(), SearchError> {
        let slot = self.slot(cell).ok_or(SearchError::OutOfBounds(cell))?;
        if self.slots[slot] != Visit::Unvisited {
            return Err(SearchError::DuplicateVisit(cell));
        }

        self.slots[slot] = match discovered_from {
            Some(previous) => Visit::From(previous),
            None => Visit::Origin,
        };
        self.len += 1;
        Ok(())
    }

    /// Cell whose expansion discovered `cell`.
    ///
    /// Returns `None` for the origin and for cells that were never visited.
    #[must_use]
    pub fn discovered_from(&self, cell: CellCoord) -> Option<CellCoord> {
        match self.slots[self.slot(cell)?] {
            Visit::From(previous) => Some(previous),
            Visit::Origin | Visit::Unvisited => None,
        }
    }

    /// Number of visited cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Reports whether no cell has been visited yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn slot(&self, cell: CellCoord) -> Option<usize> {
        if cell.column() >= self.columns || cell.row() >= self.rows {
            return None;
        }

        let width = usize::try_from(self.columns).ok()?;
        let column = usize::try_from(cell.column()).ok()?;
        let row = usize::try_from(cell.row()).ok()?;
        row.checked_mul(width)?.checked_add(column)
    }
}
