//! Connected-component labeling of filled grid modules.

use std::collections::VecDeque;

use log::debug;

use crate::grid::{Cell, Grid};

/// A maximal 4-connected set of filled cells.
///
/// Components partition the filled cells of a grid exactly: every filled
/// cell belongs to one component, and no two components are 4-adjacent.
/// Cells sharing only a corner belong to different components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    cells: Vec<Cell>,
}

impl Component {
    pub(crate) fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Returns the cells in BFS discovery order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns the number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the component holds no cells. Never true for components
    /// produced by [`components`].
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Partitions the filled cells of `grid` into maximal 4-connected
/// components via breadth-first flood fill.
///
/// Cells are scanned row-major, so discovery order is deterministic
/// (top-left component first), though callers must not rely on it. An
/// all-empty grid yields an empty vector; there are no failure modes.
pub fn components(grid: &Grid) -> Vec<Component> {
    let n = grid.size();
    let mut visited = vec![false; n * n];
    let mut components = Vec::new();

    for row in 0..n {
        for col in 0..n {
            if !grid.filled(row, col) || visited[row * n + col] {
                continue;
            }

            // Flood-fill to collect every module of this component.
            let mut cells = Vec::new();
            let mut queue = VecDeque::from([Cell::new(row, col)]);
            visited[row * n + col] = true;

            while let Some(cell) = queue.pop_front() {
                cells.push(cell);
                for (nr, nc) in neighbors(cell, n) {
                    if grid.filled(nr, nc) && !visited[nr * n + nc] {
                        visited[nr * n + nc] = true;
                        queue.push_back(Cell::new(nr, nc));
                    }
                }
            }

            components.push(Component::new(cells));
        }
    }

    debug!(components = components.len(); "Labeled filled regions");
    components
}

/// In-bounds 4-neighbors of a cell.
fn neighbors(cell: Cell, n: usize) -> impl Iterator<Item = (usize, usize)> {
    const OFFSETS: [(i32, i32); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];
    let (row, col) = (cell.row() as i32, cell.col() as i32);
    OFFSETS.into_iter().filter_map(move |(dr, dc)| {
        let (nr, nc) = (row + dr, col + dc);
        (nr >= 0 && nc >= 0 && (nr as usize) < n && (nc as usize) < n)
            .then_some((nr as usize, nc as usize))
    })
}
