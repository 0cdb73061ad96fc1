//! First-in first-out queue of cells awaiting expansion.

use std::collections::VecDeque;

use mopsolver_core::CellCoord;

use crate::SearchError;

/// Cells discovered by the search but not yet expanded.
///
/// Draining the queue in insertion order is what makes the search visit the
/// grid layer by layer.
#[derive(Clone, Debug, Default)]
pub struct FrontierQueue {
    cells: VecDeque<CellCoord>,
}

impl FrontierQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty queue that can hold `capacity` cells without
    /// reallocating.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: VecDeque::with_capacity(capacity),
        }
    }

    /// Appends a cell to the tail.
    pub fn enqueue(&mut self, cell: CellCoord) {
        self.cells.push_back(cell);
    }

    /// Removes and returns the head of the queue.
    pub fn dequeue(&mut self) -> Result<CellCoord, SearchError> {
        self.cells.pop_front().ok_or(SearchError::EmptyQueue)
    }

    /// Reports whether the queue holds no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of cells the queue can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cells.capacity()
    }

    /// Number of queued cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Snapshot of the queued cells from head to tail.
    #[must_use]
    pub fn contents(&self) -> Vec<CellCoord> {
        self.cells.iter().copied().collect()
    }
}
