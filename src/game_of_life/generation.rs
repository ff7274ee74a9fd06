//! Sparse generation engine
//!
//! Only live cells and the dead cells touching them are evaluated, so the cost
//! of a step follows the population rather than the grid area.

use super::{Coord, GameRule, GameState, Grid, Population};
use crate::error::Result;
use std::collections::HashSet;

/// Moore neighborhood offsets
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Neighbor lookups against one generation snapshot
struct Neighborhood<'a> {
    grid: Grid,
    population: &'a Population,
}

impl<'a> Neighborhood<'a> {
    fn new(state: &'a GameState) -> Self {
        Self {
            grid: state.grid,
            population: &state.population,
        }
    }

    /// In-bounds neighbors of a cell. Off-grid space is never considered.
    fn neighbors(&self, cell: Coord) -> impl Iterator<Item = Coord> + '_ {
        let grid = self.grid;
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(move |&offset| grid.offset(cell, offset))
    }

    fn live_neighbors(&self, cell: Coord) -> i32 {
        self.neighbors(cell)
            .filter(|&(row, col)| self.population.contains(row, col))
            .count() as i32
    }

    /// Dead in-bounds cells adjacent to at least one live cell
    fn surrounding_spaces(&self) -> HashSet<Coord> {
        self.population
            .iter()
            .flat_map(|cell| self.neighbors(cell))
            .filter(|&(row, col)| !self.population.contains(row, col))
            .collect()
    }
}

/// Compute the next generation under `rule`.
///
/// Every decision reads the current snapshot only. A rule error aborts the
/// whole step.
pub fn next_generation<R: GameRule + ?Sized>(state: &GameState, rule: &R) -> Result<GameState> {
    let neighborhood = Neighborhood::new(state);
    let mut next = Population::new();

    for cell in neighborhood.surrounding_spaces() {
        if rule.evaluate(false, neighborhood.live_neighbors(cell))? {
            next.insert(cell.0, cell.1);
        }
    }

    for cell in state.population.iter() {
        if !state.grid.contains(cell) {
            log::warn!("dropping live cell {:?} outside {:?}", cell, state.grid);
            continue;
        }
        if rule.evaluate(true, neighborhood.live_neighbors(cell))? {
            next.insert(cell.0, cell.1);
        }
    }

    log::trace!("generation step: {} -> {} live cells", state.population.len(), next.len());
    Ok(GameState::new(state.grid, next))
}

/// Advance `generations` steps and return the final state
pub fn evolve<R: GameRule + ?Sized>(
    state: &GameState,
    rule: &R,
    generations: usize,
) -> Result<GameState> {
    let mut current = state.clone();
    for _ in 0..generations {
        current = next_generation(&current, rule)?;
    }
    Ok(current)
}

/// Every state from `state` through `generations` steps later
pub fn evolution_path<R: GameRule + ?Sized>(
    state: &GameState,
    rule: &R,
    generations: usize,
) -> Result<Vec<GameState>> {
    let mut path = Vec::with_capacity(generations + 1);
    path.push(state.clone());
    for _ in 0..generations {
        let next = next_generation(path.last().unwrap_or(state), rule)?;
        path.push(next);
    }
    Ok(path)
}
