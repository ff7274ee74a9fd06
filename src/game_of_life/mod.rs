//! Game of Life simulation core

pub mod analysis;
pub mod generation;
pub mod grid;
pub mod io;
pub mod patterns;
pub mod rules;
pub mod seed;

pub use analysis::{classify, survey, PatternKind, SurveyEntry};
pub use generation::{evolution_path, evolve, next_generation};
pub use grid::{entries, Coord, GameState, Grid, Population};
pub use io::{load_state_from_file, parse, stringify, ParseOptions};
pub use patterns::Pattern;
pub use rules::{classic_rule, GameRule, LifeLikeRule, MAX_NEIGHBORS};
pub use seed::{seed, seed_with, RandomSource, RngSource, SEED_THRESHOLD};
