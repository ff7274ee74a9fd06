//! Sparse game state representation

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use super::io::{parse, stringify, ParseOptions};
use crate::error::ProcessorError;

/// A `(row, col)` cell coordinate
pub type Coord = (usize, usize);

/// Fixed rectangular bounds of a simulation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    pub rows: usize,
    pub cols: usize,
}

impl Grid {
    /// Create bounds of `rows` x `cols`
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Check whether a coordinate lies inside the bounds
    #[inline]
    pub fn contains(&self, (row, col): Coord) -> bool {
        row < self.rows && col < self.cols
    }

    /// Move a coordinate by a signed offset, returning `None` when it leaves the grid
    #[inline]
    pub fn offset(&self, (row, col): Coord, (dr, dc): (isize, isize)) -> Option<Coord> {
        let target = (row.checked_add_signed(dr)?, col.checked_add_signed(dc)?);
        self.contains(target).then_some(target)
    }

    /// Total number of cells in the grid, `None` when it does not fit in `usize`
    pub fn area(&self) -> Option<usize> {
        self.rows.checked_mul(self.cols)
    }
}

/// Set of live cells. Absence means dead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Coord>", into = "Vec<Coord>")]
pub struct Population {
    cells: HashSet<Coord>,
}

impl Population {
    /// An empty population
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a cell alive. Returns false if it already was.
    pub fn insert(&mut self, row: usize, col: usize) -> bool {
        self.cells.insert((row, col))
    }

    /// Check whether a cell is alive
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells.contains(&(row, col))
    }

    /// Number of live cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when no cell is alive
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate live cells in no particular order
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().copied()
    }

    /// Live cells ordered by row, then column
    pub fn entries(&self) -> Vec<Coord> {
        self.cells.iter().copied().sorted().collect()
    }

    /// Smallest row and column holding a live cell
    pub fn min_corner(&self) -> Option<Coord> {
        let min_row = self.cells.iter().map(|&(r, _)| r).min()?;
        let min_col = self.cells.iter().map(|&(_, c)| c).min()?;
        Some((min_row, min_col))
    }
}

impl FromIterator<Coord> for Population {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl Extend<Coord> for Population {
    fn extend<I: IntoIterator<Item = Coord>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}

impl From<Vec<Coord>> for Population {
    fn from(cells: Vec<Coord>) -> Self {
        cells.into_iter().collect()
    }
}

impl From<Population> for Vec<Coord> {
    fn from(population: Population) -> Self {
        population.entries()
    }
}

/// Flatten a population into `(row, col)` pairs for a renderer.
///
/// Ordered by row ascending, then column ascending.
pub fn entries(population: &Population) -> Vec<Coord> {
    population.entries()
}

/// One generation snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub grid: Grid,
    pub population: Population,
}

impl GameState {
    /// Create a state from bounds and live cells
    pub fn new(grid: Grid, population: Population) -> Self {
        Self { grid, population }
    }

    /// A state with no live cells
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self::new(Grid::new(rows, cols), Population::new())
    }

    /// Count live cells
    pub fn living_count(&self) -> usize {
        self.population.len()
    }

    /// Share of the grid that is alive, 0.0 for an empty grid
    pub fn density(&self) -> f64 {
        let area = self.grid.rows as f64 * self.grid.cols as f64;
        if area == 0.0 {
            0.0
        } else {
            self.population.len() as f64 / area
        }
    }

    /// Check whether the cell at `(row, col)` is alive
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.population.contains(row, col)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&stringify(self))
    }
}

impl FromStr for GameState {
    type Err = ProcessorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s, &ParseOptions::default())
    }
}
