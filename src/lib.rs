#![warn(clippy::all)]

mod ca_trait;
mod config;
mod fps_limit;
mod grid;
pub mod life_naive;
pub mod life_queue;
mod renderer;

pub use ca_trait::CellularAutomaton;
pub use config::Config;
pub use fps_limit::FrameLimiter;
pub use grid::Grid;
pub use renderer::{Renderer, Theme};

pub type DefaultEngine = life_queue::ConwayField;
