//! Behaviour classification for patterns

use super::{next_generation, seed_with, Coord, GameRule, GameState, Population, RngSource};
use crate::error::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Eventual behaviour of a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum PatternKind {
    /// Every cell died at this generation
    Extinct { generation: usize },
    StillLife,
    Oscillator { period: usize },
    /// Same shape recurs shifted by `displacement` every `period` generations
    Spaceship {
        period: usize,
        displacement: (isize, isize),
    },
    /// No repetition within the generation budget
    Unsettled,
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternKind::Extinct { generation } => write!(f, "extinct at generation {}", generation),
            PatternKind::StillLife => write!(f, "still life"),
            PatternKind::Oscillator { period } => write!(f, "oscillator (period {})", period),
            PatternKind::Spaceship {
                period,
                displacement: (dr, dc),
            } => write!(f, "spaceship (period {}, moves {:+},{:+})", period, dr, dc),
            PatternKind::Unsettled => write!(f, "unsettled"),
        }
    }
}

/// Shape of a population with its position factored out
#[derive(PartialEq, Eq)]
struct Shape {
    origin: Coord,
    cells: Vec<Coord>,
}

impl Shape {
    fn of(population: &Population) -> Self {
        let origin = population.min_corner().unwrap_or((0, 0));
        let cells = population
            .entries()
            .into_iter()
            .map(|(r, c)| (r - origin.0, c - origin.1))
            .collect();
        Self { origin, cells }
    }
}

/// Run up to `max_generations` steps and report the first repetition found.
///
/// Each new generation is compared with every earlier one; a recurrence in
/// place is a still life or oscillator, a shifted one a spaceship.
pub fn classify<R: GameRule + ?Sized>(
    state: &GameState,
    rule: &R,
    max_generations: usize,
) -> Result<PatternKind> {
    if state.population.is_empty() {
        return Ok(PatternKind::Extinct { generation: 0 });
    }

    let mut history = vec![Shape::of(&state.population)];
    let mut current = state.clone();

    for generation in 1..=max_generations {
        current = next_generation(&current, rule)?;
        if current.population.is_empty() {
            return Ok(PatternKind::Extinct { generation });
        }

        let shape = Shape::of(&current.population);
        if let Some((index, earlier)) = history
            .iter()
            .enumerate()
            .rev()
            .find(|(_, earlier)| earlier.cells == shape.cells)
        {
            let period = generation - index;
            let displacement = (
                shape.origin.0 as isize - earlier.origin.0 as isize,
                shape.origin.1 as isize - earlier.origin.1 as isize,
            );
            log::debug!("repetition at generation {} with period {}", generation, period);

            return Ok(match (displacement, period) {
                ((0, 0), 1) => PatternKind::StillLife,
                ((0, 0), period) => PatternKind::Oscillator { period },
                (displacement, period) => PatternKind::Spaceship {
                    period,
                    displacement,
                },
            });
        }
        history.push(shape);
    }

    Ok(PatternKind::Unsettled)
}

/// Outcome of one randomly seeded sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyEntry {
    pub rng_seed: u64,
    pub initial_population: usize,
    pub kind: PatternKind,
}

/// Seed `samples` independent grids and classify each in parallel.
///
/// Sample `i` uses `base_seed + i`, so results are reproducible.
pub fn survey<R: GameRule + Sync + ?Sized>(
    rows: usize,
    cols: usize,
    samples: usize,
    base_seed: u64,
    max_generations: usize,
    rule: &R,
) -> Result<Vec<SurveyEntry>> {
    (0..samples as u64)
        .into_par_iter()
        .map(|i| -> Result<SurveyEntry> {
            let rng_seed = base_seed.wrapping_add(i);
            let state = seed_with(rows, cols, &mut RngSource(StdRng::seed_from_u64(rng_seed)));
            Ok(SurveyEntry {
                rng_seed,
                initial_population: state.living_count(),
                kind: classify(&state, rule, max_generations)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::{classic_rule, LifeLikeRule, ParseOptions, Pattern};

    fn classify_pattern(pattern: Pattern, rows: usize, cols: usize) -> PatternKind {
        let state = pattern.state(&ParseOptions::centered(rows, cols)).unwrap();
        classify(&state, &classic_rule, 16).unwrap()
    }

    #[test]
    fn test_still_lifes() {
        for pattern in [Pattern::Block, Pattern::Beehive, Pattern::Loaf, Pattern::Boat, Pattern::Tub] {
            assert_eq!(classify_pattern(pattern, 8, 8), PatternKind::StillLife, "{pattern}");
        }
    }

    #[test]
    fn test_oscillators() {
        assert_eq!(classify_pattern(Pattern::Blinker, 5, 5), PatternKind::Oscillator { period: 2 });
        assert_eq!(classify_pattern(Pattern::Toad, 6, 6), PatternKind::Oscillator { period: 2 });
    }

    #[test]
    fn test_glider_is_spaceship() {
        assert_eq!(
            classify_pattern(Pattern::Glider, 20, 20),
            PatternKind::Spaceship {
                period: 4,
                displacement: (1, 1)
            }
        );
    }

    #[test]
    fn test_extinction() {
        let single = GameState::new(
            crate::game_of_life::Grid::new(3, 3),
            Population::from(vec![(1, 1)]),
        );
        assert_eq!(
            classify(&single, &classic_rule, 4).unwrap(),
            PatternKind::Extinct { generation: 1 }
        );
        assert_eq!(
            classify(&GameState::empty(3, 3), &classic_rule, 4).unwrap(),
            PatternKind::Extinct { generation: 0 }
        );
    }

    #[test]
    fn test_unsettled_within_budget() {
        let glider = Pattern::Glider.state(&ParseOptions::centered(20, 20)).unwrap();
        assert_eq!(classify(&glider, &classic_rule, 3).unwrap(), PatternKind::Unsettled);
    }

    #[test]
    fn test_survey_is_reproducible() {
        let rule = LifeLikeRule::classic();
        let first = survey(8, 8, 6, 42, 30, &rule).unwrap();
        let second = survey(8, 8, 6, 42, 30, &rule).unwrap();
        assert_eq!(first.len(), 6);
        assert_eq!(first, second);
        assert_eq!(
            first.iter().map(|e| e.rng_seed).collect::<Vec<_>>(),
            vec![42, 43, 44, 45, 46, 47]
        );
    }

    #[test]
    fn test_kind_display() {
        let kind = PatternKind::Spaceship {
            period: 4,
            displacement: (1, -1),
        };
        assert_eq!(kind.to_string(), "spaceship (period 4, moves +1,-1)");
    }
}
