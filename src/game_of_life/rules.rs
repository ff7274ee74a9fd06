//! Birth and survival rules

use crate::error::{ProcessorError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum neighbor count in the Moore neighborhood
pub const MAX_NEIGHBORS: i32 = 8;

/// Decides whether a cell is alive in the next generation.
///
/// Implementations must fail with [`ProcessorError::NegativeNeighbors`] when
/// `neighbors` is negative. Any `Fn(bool, i32) -> Result<bool>` is a rule.
pub trait GameRule {
    fn evaluate(&self, populated: bool, neighbors: i32) -> Result<bool>;
}

impl<F> GameRule for F
where
    F: Fn(bool, i32) -> Result<bool>,
{
    fn evaluate(&self, populated: bool, neighbors: i32) -> Result<bool> {
        self(populated, neighbors)
    }
}

/// Conway's rule: survive on 2 or 3 neighbors, birth on exactly 3
pub fn classic_rule(populated: bool, neighbors: i32) -> Result<bool> {
    if neighbors < 0 {
        return Err(ProcessorError::NegativeNeighbors(neighbors));
    }

    Ok(match neighbors {
        0 | 1 => false,
        2 => populated,
        3 => true,
        _ => false,
    })
}

/// Rule in `B.../S...` notation, e.g. `B3/S23` or HighLife `B36/S23`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LifeLikeRule {
    /// Bit `n` set: a dead cell with `n` neighbors is born
    birth: u16,
    /// Bit `n` set: a live cell with `n` neighbors survives
    survival: u16,
}

impl LifeLikeRule {
    /// Build a rule from birth and survival neighbor counts
    pub fn new(birth: &[u8], survival: &[u8]) -> Result<Self> {
        Ok(Self {
            birth: Self::mask(birth)?,
            survival: Self::mask(survival)?,
        })
    }

    /// B3/S23
    pub fn classic() -> Self {
        Self {
            birth: 1 << 3,
            survival: (1 << 2) | (1 << 3),
        }
    }

    /// B36/S23
    pub fn high_life() -> Self {
        Self {
            birth: (1 << 3) | (1 << 6),
            survival: (1 << 2) | (1 << 3),
        }
    }

    /// Neighbor counts that bring a dead cell to life
    pub fn birth_counts(&self) -> Vec<u8> {
        Self::counts(self.birth)
    }

    /// Neighbor counts that keep a live cell alive
    pub fn survival_counts(&self) -> Vec<u8> {
        Self::counts(self.survival)
    }

    fn mask(counts: &[u8]) -> Result<u16> {
        counts.iter().try_fold(0u16, |mask, &n| {
            if i32::from(n) > MAX_NEIGHBORS {
                Err(ProcessorError::InvalidRule(format!("neighbor count {n}")))
            } else {
                Ok(mask | (1 << n))
            }
        })
    }

    fn counts(mask: u16) -> Vec<u8> {
        (0..=MAX_NEIGHBORS as u8).filter(|&n| mask & (1 << n) != 0).collect()
    }
}

impl Default for LifeLikeRule {
    fn default() -> Self {
        Self::classic()
    }
}

impl GameRule for LifeLikeRule {
    fn evaluate(&self, populated: bool, neighbors: i32) -> Result<bool> {
        if neighbors < 0 {
            return Err(ProcessorError::NegativeNeighbors(neighbors));
        }
        if neighbors > MAX_NEIGHBORS {
            return Ok(false);
        }

        let mask = if populated { self.survival } else { self.birth };
        Ok(mask & (1 << neighbors) != 0)
    }
}

impl FromStr for LifeLikeRule {
    type Err = ProcessorError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ProcessorError::InvalidRule(s.to_string());
        let (birth, survival) = s.trim().split_once('/').ok_or_else(invalid)?;

        let digits = |part: &str, prefix: char| -> Result<Vec<u8>> {
            let mut chars = part.chars();
            if !chars.next().is_some_and(|c| c.eq_ignore_ascii_case(&prefix)) {
                return Err(invalid());
            }
            chars
                .map(|c| c.to_digit(10).map(|d| d as u8).ok_or_else(invalid))
                .collect()
        };

        Self::new(&digits(birth, 'B')?, &digits(survival, 'S')?).map_err(|_| invalid())
    }
}

impl TryFrom<String> for LifeLikeRule {
    type Error = ProcessorError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<LifeLikeRule> for String {
    fn from(rule: LifeLikeRule) -> Self {
        rule.to_string()
    }
}

impl fmt::Display for LifeLikeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B")?;
        for n in self.birth_counts() {
            write!(f, "{n}")?;
        }
        write!(f, "/S")?;
        for n in self.survival_counts() {
            write!(f, "{n}")?;
        }
        Ok(())
    }
}
