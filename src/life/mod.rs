//! Game of Life core: cell storage, generation step and random seeding

pub mod engine;
pub mod grid;
pub mod seeder;

pub use engine::advance;
pub use grid::{Cell, Grid, GridResult};
pub use seeder::seed;
