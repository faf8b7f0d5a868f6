pub struct Config;

impl Config {
    pub const ROWS: usize = 20;
    pub const COLS: usize = 20;

    /// One generation every 100 ms.
    pub const MAX_FPS: f64 = 10.;

    /// Seeded cells are alive or dead with equal probability.
    pub const FILL_RATE: f64 = 0.5;
}
