use crate::ca_trait::CellularAutomaton;
use crate::grid::Grid;

/// Reference engine: double-buffered full-grid scan.
///
/// Slow and obvious on purpose; the queue engine is tested against it.
pub struct ConwayField {
    curr: Grid,
    next: Grid,
}

impl CellularAutomaton for ConwayField {
    fn id<'a>() -> &'a str {
        "life_naive"
    }

    fn blank(rows: usize, cols: usize) -> Self {
        Self {
            curr: Grid::new(rows, cols),
            next: Grid::new(rows, cols),
        }
    }

    fn size(&self) -> (usize, usize) {
        self.curr.size()
    }

    fn get_cell(&self, row: usize, col: usize) -> bool {
        self.curr.get(row, col)
    }

    fn get_cells(&self) -> Vec<bool> {
        self.curr.as_slice().to_vec()
    }

    fn set_cell(&mut self, row: usize, col: usize, state: bool) {
        self.curr.set(row, col, state);
    }

    fn set_cells(&mut self, states: &[bool]) {
        self.curr.copy_from(states);
    }

    fn update(&mut self, iters: usize) {
        let (rows, cols) = self.curr.size();
        for _ in 0..iters {
            for row in 0..rows {
                for col in 0..cols {
                    let neighbors = self.curr.live_neighbors(row, col);
                    let state = matches!(
                        (self.curr.get(row, col), neighbors),
                        (true, 2) | (true, 3) | (false, 3)
                    );
                    self.next.set(row, col, state);
                }
            }
            std::mem::swap(&mut self.curr, &mut self.next);
        }
    }
}
