pub trait CellularAutomaton: Sized {
    /// Name that is used in benchmarks
    fn id<'a>() -> &'a str;
    /// Creates a field filled with dead cells
    fn blank(rows: usize, cols: usize) -> Self;
    /// [`(rows, cols)`] of the field
    fn size(&self) -> (usize, usize);
    fn get_cell(&self, row: usize, col: usize) -> bool;
    fn get_cells(&self) -> Vec<bool>;
    fn set_cell(&mut self, row: usize, col: usize, state: bool);
    fn set_cells(&mut self, states: &[bool]);
    /// Advances the field `iters` generations
    fn update(&mut self, iters: usize);

    /// Fills the field with random cells
    fn randomize(&mut self, seed: Option<u64>, fill_rate: f64) {
        use rand::{Rng, SeedableRng};

        let mut rng = if let Some(x) = seed {
            rand_chacha::ChaCha8Rng::seed_from_u64(x)
        } else {
            rand_chacha::ChaCha8Rng::from_entropy()
        };
        let (rows, cols) = self.size();
        let states = (0..rows * cols)
            .map(|_| rng.gen_bool(fill_rate))
            .collect::<Vec<_>>();
        self.set_cells(&states);
    }

    /// Number of live cells in the field
    fn population(&self) -> usize {
        self.get_cells().iter().filter(|&&alive| alive).count()
    }
}
