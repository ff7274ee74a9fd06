//! Random initial states

use super::{GameState, Grid, Population};
use rand::Rng;

/// A cell is alive when `1 - draw` reaches this value, i.e. with probability 0.7
pub const SEED_THRESHOLD: f64 = 0.3;

/// Source of uniform draws in `[0, 1)`.
///
/// Closures returning `f64` are sources, which keeps tests deterministic.
pub trait RandomSource {
    fn draw(&mut self) -> f64;
}

impl<F> RandomSource for F
where
    F: FnMut() -> f64,
{
    fn draw(&mut self) -> f64 {
        self()
    }
}

/// Adapts any `rand` generator into a [`RandomSource`]
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn draw(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

/// Seed a `rows` x `cols` state from the thread-local generator
pub fn seed(rows: usize, cols: usize) -> GameState {
    seed_with(rows, cols, &mut RngSource(rand::thread_rng()))
}

/// Seed a `rows` x `cols` state from the given source, one draw per cell
pub fn seed_with<S: RandomSource + ?Sized>(rows: usize, cols: usize, source: &mut S) -> GameState {
    let mut population = Population::new();
    for row in 0..rows {
        for col in 0..cols {
            if 1.0 - source.draw() >= SEED_THRESHOLD {
                population.insert(row, col);
            }
        }
    }

    log::debug!("seeded {}x{} grid with {} live cells", rows, cols, population.len());
    GameState::new(Grid::new(rows, cols), population)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_seed_bounds() {
        let state = seed(12, 7);
        assert_eq!(state.grid, Grid::new(12, 7));
        assert!(state.population.iter().all(|(r, c)| r < 12 && c < 7));
    }

    #[test]
    fn test_alive_draw_fills_grid() {
        let state = seed_with(4, 5, &mut || 0.0);
        assert_eq!(state.living_count(), 20);
    }

    #[test]
    fn test_dead_draw_empties_grid() {
        let state = seed_with(4, 5, &mut || 0.999_999);
        assert_eq!(state.living_count(), 0);
    }

    #[test]
    fn test_threshold_boundary() {
        // 0.7 sits on the alive side of the comparison, anything above it is dead
        assert_eq!(seed_with(1, 1, &mut || 0.7).living_count(), 1);
        assert_eq!(seed_with(1, 1, &mut || 0.700_001).living_count(), 0);
    }

    #[test]
    fn test_one_draw_per_cell_in_row_major_order() {
        let mut draws = [0.0, 0.9, 0.9, 0.0, 0.9, 0.0].into_iter();
        let state = seed_with(2, 3, &mut || draws.next().unwrap());
        assert_eq!(state.population.entries(), vec![(0, 0), (1, 0), (1, 2)]);
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let a = seed_with(20, 20, &mut RngSource(StdRng::seed_from_u64(7)));
        let b = seed_with(20, 20, &mut RngSource(StdRng::seed_from_u64(7)));
        assert_eq!(a, b);
        // 400 cells at probability 0.7
        assert!(a.living_count() > 200 && a.living_count() < 360);
    }

    #[test]
    fn test_empty_dimensions() {
        assert_eq!(seed(0, 10), GameState::empty(0, 10));
    }
}
