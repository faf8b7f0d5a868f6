use std::io;
use termlife::{CellularAutomaton, Config, DefaultEngine, FrameLimiter, Renderer, Theme};

fn main() -> io::Result<()> {
    let mut life = DefaultEngine::blank(Config::ROWS, Config::COLS);
    life.randomize(None, Config::FILL_RATE);

    let mut renderer = Renderer::new(io::stdout(), Theme::default());
    renderer.init()?;

    let mut limiter = FrameLimiter::new(Config::MAX_FPS);
    let mut generation: u64 = 0;
    loop {
        renderer.draw(&life, generation, limiter.fps())?;
        life.update(1);
        generation += 1;
        limiter.delay();
    }
}
