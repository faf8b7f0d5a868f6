use crate::ca_trait::CellularAutomaton;
use crate::grid::Grid;
use ahash::AHashSet;
use std::collections::VecDeque;

type Cell = (usize, usize);

/// FIFO of live-cell coordinates, processed once per generation.
///
/// Invariant between updates: the queue holds exactly the live cells of
/// the grid, each once, and nothing else.
struct ActiveQueue {
    cells: VecDeque<Cell>,
}

impl ActiveQueue {
    fn new() -> Self {
        Self {
            cells: VecDeque::new(),
        }
    }

    fn len(&self) -> usize {
        self.cells.len()
    }

    fn pop(&mut self) -> Option<Cell> {
        self.cells.pop_front()
    }

    fn push(&mut self, cell: Cell) {
        self.cells.push_back(cell);
    }

    fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Refill from a full row-major grid scan, dropping whatever was queued.
    fn rebuild(&mut self, grid: &Grid) {
        self.cells.clear();
        self.cells.extend(grid.live_cells());
    }
}

/// Engine that only visits the neighborhoods of currently-live cells.
///
/// A dead cell needs three live neighbors to be born, so any cell that
/// can change state next generation lies within one step of a live cell.
/// Scanning the 3x3 neighborhood of each queued cell therefore covers
/// every possible transition, without touching the rest of the grid.
pub struct ConwayField {
    grid: Grid,
    active: ActiveQueue,
    stale: bool,
    births: Vec<Cell>,
    deaths: Vec<Cell>,
    birth_seen: AHashSet<Cell>,
}

impl ConwayField {
    /// Cells currently tracked as alive, in queue order.
    pub fn active_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.active.iter()
    }

    /// External writes bypass the queue; rescan the grid before the
    /// next generation so the invariant holds again.
    fn resync(&mut self) {
        if self.stale {
            self.active.rebuild(&self.grid);
            self.stale = false;
        }
    }

    fn step(&mut self) {
        self.births.clear();
        self.deaths.clear();
        self.birth_seen.clear();

        // Every count below reads the generation being left behind;
        // grid writes are held back until the pass is over, otherwise an
        // early death would be invisible to its neighbors' counts.
        let pending = self.active.len();
        for _ in 0..pending {
            let (row, col) = self.active.pop().expect("active queue drained early");
            let neighbors = self.grid.live_neighbors(row, col);
            if neighbors == 2 || neighbors == 3 {
                self.active.push((row, col));
            } else {
                self.deaths.push((row, col));
            }
            for (r, c) in self.grid.neighbors(row, col) {
                // Dead neighbors of queued cells are the only birth
                // candidates; each is examined at most once per pass.
                if self.grid.get(r, c) || !self.birth_seen.insert((r, c)) {
                    continue;
                }
                if self.grid.live_neighbors(r, c) == 3 {
                    self.births.push((r, c));
                }
            }
        }

        for &(row, col) in &self.deaths {
            self.grid.set(row, col, false);
        }
        for &(row, col) in &self.births {
            self.grid.set(row, col, true);
            self.active.push((row, col));
        }
    }
}

impl CellularAutomaton for ConwayField {
    fn id<'a>() -> &'a str {
        "life_queue"
    }

    fn blank(rows: usize, cols: usize) -> Self {
        Self {
            grid: Grid::new(rows, cols),
            active: ActiveQueue::new(),
            stale: false,
            births: Vec::new(),
            deaths: Vec::new(),
            birth_seen: AHashSet::new(),
        }
    }

    fn size(&self) -> (usize, usize) {
        self.grid.size()
    }

    fn get_cell(&self, row: usize, col: usize) -> bool {
        self.grid.get(row, col)
    }

    fn get_cells(&self) -> Vec<bool> {
        self.grid.as_slice().to_vec()
    }

    fn set_cell(&mut self, row: usize, col: usize, state: bool) {
        self.grid.set(row, col, state);
        self.stale = true;
    }

    fn set_cells(&mut self, states: &[bool]) {
        self.grid.copy_from(states);
        self.stale = true;
    }

    fn update(&mut self, iters: usize) {
        self.resync();
        for _ in 0..iters {
            self.step();
        }
    }

    fn population(&self) -> usize {
        if self.stale {
            self.grid.live_cells().count()
        } else {
            self.active.len()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_scan_is_row_major() {
        let mut field = ConwayField::blank(3, 3);
        for (row, col) in [(2, 0), (0, 2), (1, 1)] {
            field.set_cell(row, col, true);
        }
        field.update(0);
        let tracked = field.active_cells().collect::<Vec<_>>();
        assert_eq!(tracked, vec![(0, 2), (1, 1), (2, 0)]);
    }

    #[test]
    fn birth_is_enqueued_once() {
        // All three cells of the tromino border (1, 1); the block it
        // closes into must contain (1, 1) exactly once.
        let mut field = ConwayField::blank(4, 4);
        for (row, col) in [(0, 0), (0, 1), (1, 0)] {
            field.set_cell(row, col, true);
        }
        field.update(1);
        assert!(field.get_cell(1, 1));
        assert_eq!(field.population(), 4);
        assert_eq!(field.active_cells().count(), 4);
    }

    #[test]
    fn queue_resyncs_after_external_writes() {
        let mut field = ConwayField::blank(4, 4);
        for (row, col) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
            field.set_cell(row, col, true);
        }
        field.update(1);
        field.set_cell(0, 0, false);
        field.update(1);
        let mut tracked = field.active_cells().collect::<Vec<_>>();
        tracked.sort_unstable();
        let alive = field.grid.live_cells().collect::<Vec<_>>();
        assert_eq!(tracked, alive);
    }
}
