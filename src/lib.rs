//! Sparse Game of Life processor
//!
//! This library advances Conway's Game of Life (or any Life-like rule) over a
//! bounded grid, storing only the live cells, and converts states to and from
//! a compact `x`/`o` text format.

pub mod config;
pub mod error;
pub mod game_of_life;
pub mod utils;

pub use config::Settings;
pub use error::{ProcessorError, Result};
pub use game_of_life::{
    classic_rule, entries, next_generation, parse, seed, stringify, GameRule, GameState, Grid,
    ParseOptions, Population,
};

use game_of_life::{seed_with, RngSource};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Seed a random state sized by the settings, reproducibly when `rng_seed` is set
pub fn seed_from_settings(settings: &Settings) -> GameState {
    let (rows, cols) = (settings.simulation.rows, settings.simulation.cols);
    match settings.seed.rng_seed {
        Some(rng_seed) => seed_with(rows, cols, &mut RngSource(StdRng::seed_from_u64(rng_seed))),
        None => seed(rows, cols),
    }
}

/// Main entry point: run the configured number of generations from `initial`
pub fn simulate(initial: &GameState, settings: &Settings) -> Result<GameState> {
    game_of_life::evolve(initial, &settings.simulation.rule, settings.simulation.generations)
}
