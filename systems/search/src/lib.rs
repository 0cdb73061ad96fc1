#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Breadth-first search that decides whether a maze can be crossed.
//!
//! The search starts in the upper-left cell of a [`Grid`] and stops as soon as
//! it dequeues the lower-right cell. Neighbors are always checked in
//! [`EXPANSION_ORDER`], so ties between equally short paths are broken the
//! same way on every run.

mod frontier;
mod visited;

use log::{debug, trace};
use mopsolver_core::{CellCoord, Direction, Grid, SearchOutcome, Solution};
use thiserror::Error;

pub use frontier::FrontierQueue;
pub use visited::VisitedSet;

/// Order in which the neighbors of an expanded cell are checked: up, down,
/// left, right.
pub const EXPANSION_ORDER: [Direction; 4] = [
    Direction::North,
    Direction::South,
    Direction::West,
    Direction::East,
];

/// Runs a complete search over `grid`.
pub fn solve(grid: &Grid) -> Result<SearchOutcome, SearchError> {
    BreadthFirstSearch::new(grid).finish()
}

/// Lifecycle of a [`BreadthFirstSearch`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SearchState {
    /// The search has not touched the grid yet.
    Idle,
    /// Cells remain on the frontier.
    Running,
    /// The destination was dequeued.
    Solved,
    /// The frontier drained, or the source is blocked.
    Unsolved,
}

impl SearchState {
    /// Reports whether the search can make no further progress.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Solved | Self::Unsolved)
    }
}

/// Invariant violations raised by the search containers.
///
/// A search driven through [`BreadthFirstSearch::step`] checks before it
/// acts, so none of these are produced for any grid.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
pub enum SearchError {
    /// A cell was dequeued from an empty frontier.
    #[error("dequeued from an empty frontier")]
    EmptyQueue,
    /// A cell was added to the visited set twice.
    #[error("cell {0} was already visited")]
    DuplicateVisit(CellCoord),
    /// A cell outside the grid reached the visited set.
    #[error("cell {0} lies outside the grid")]
    OutOfBounds(CellCoord),
}

/// Incremental breadth-first search over a borrowed grid.
///
/// The visited set and the frontier belong to the search value and are
/// released with it.
#[derive(Debug)]
pub struct BreadthFirstSearch<'grid> {
    grid: &'grid Grid,
    visited: VisitedSet,
    frontier: FrontierQueue,
    state: SearchState,
}

impl<'grid> BreadthFirstSearch<'grid> {
    /// Prepares an idle search over `grid`.
    #[must_use]
    pub fn new(grid: &'grid Grid) -> Self {
        Self {
            grid,
            visited: VisitedSet::for_grid(grid),
            frontier: FrontierQueue::with_capacity(grid.cell_count()),
            state: SearchState::Idle,
        }
    }

    /// Drives the search to a terminal state and reports the outcome.
    pub fn finish(mut self) -> Result<SearchOutcome, SearchError> {
        loop {
            match self.step()? {
                SearchState::Solved => return Ok(SearchOutcome::Solved(self.solution())),
                SearchState::Unsolved => return Ok(SearchOutcome::NoSolution),
                SearchState::Idle | SearchState::Running => {}
            }
        }
    }

    /// Performs a single transition and returns the resulting state.
    ///
    /// From [`SearchState::Idle`] this seeds the frontier with the source;
    /// while [`SearchState::Running`] it expands one cell. Terminal states are
    /// returned unchanged.
    pub fn step(&mut self) -> Result<SearchState, SearchError> {
        match self.state {
            SearchState::Idle => self.start()?,
            SearchState::Running => self.expand_next()?,
            SearchState::Solved | SearchState::Unsolved => {}
        }

        Ok(self.state)
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Cells placed on the frontier so far.
    #[must_use]
    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    /// Cells awaiting expansion.
    #[must_use]
    pub fn frontier(&self) -> &FrontierQueue {
        &self.frontier
    }

    fn start(&mut self) -> Result<(), SearchError> {
        let source = self.grid.source();
        if !self.grid.is_open(source) {
            debug!("source {source} is blocked");
            self.state = SearchState::Unsolved;
            return Ok(());
        }

        self.visited.add(source, None)?;
        self.frontier.enqueue(source);
        self.state = SearchState::Running;
        Ok(())
    }

    fn expand_next(&mut self) -> Result<(), SearchError> {
        if self.frontier.is_empty() {
            debug!(
                "frontier drained after visiting {} cells",
                self.visited.len()
            );
            self.state = SearchState::Unsolved;
            return Ok(());
        }

        let current = self.frontier.dequeue()?;
        if current == self.grid.destination() {
            // The destination goes back on the queue so the final frontier
            // still ends with it.
            self.frontier.enqueue(current);
            debug!(
                "reached {current} after visiting {} cells",
                self.visited.len()
            );
            self.state = SearchState::Solved;
            return Ok(());
        }

        trace!("expanding {current}");
        for neighbor in open_neighbors(self.grid, current) {
            if self.visited.contains(neighbor) {
                continue;
            }

            self.visited.add(neighbor, Some(current))?;
            self.frontier.enqueue(neighbor);
        }

        Ok(())
    }

    fn solution(&self) -> Solution {
        let destination = self.grid.destination();
        let mut path = vec![destination];
        let mut cursor = destination;

        // Every predecessor was visited strictly before its successor, so the
        // walk ends at the source.
        while let Some(previous) = self.visited.discovered_from(cursor) {
            path.push(previous);
            cursor = previous;
        }
        path.reverse();

        Solution::new(path, self.frontier.contents())
    }
}

fn open_neighbors(grid: &Grid, cell: CellCoord) -> impl Iterator<Item = CellCoord> + '_ {
    EXPANSION_ORDER
        .into_iter()
        .filter_map(move |direction| cell.neighbor(direction))
        .filter(move |candidate| grid.is_open(*candidate))
}
