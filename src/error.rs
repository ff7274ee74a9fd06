//! Error types for the simulation core

use std::fmt;
use thiserror::Error;

/// Grid axis named in bound errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Rows,
    Cols,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Rows => write!(f, "rows"),
            Axis::Cols => write!(f, "cols"),
        }
    }
}

/// Errors raised by the simulation core.
///
/// None of these are recovered internally; every failing call produces no
/// state at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessorError {
    /// A rule was asked about a negative neighbor count.
    #[error("neighbors must be equal to or greater than 0, got {0}")]
    NegativeNeighbors(i32),

    /// A cell token in pattern text was not `x` or `o`.
    #[error(
        "character must be either x or o with single separating space, \
         found {token:?} at row {row}, column {col}"
    )]
    InvalidCell { token: String, row: usize, col: usize },

    /// A requested grid bound is smaller than the parsed pattern.
    #[error("requested bound smaller than input: {axis} {requested} < {natural}")]
    BoundTooSmall {
        axis: Axis,
        requested: usize,
        natural: usize,
    },

    /// Rule notation could not be understood.
    #[error("invalid rule notation {0:?}, expected something like B3/S23")]
    InvalidRule(String),

    /// No built-in pattern has the given name.
    #[error(
        "unknown pattern {0:?}, expected one of: \
         block, beehive, loaf, boat, tub, blinker, toad, glider"
    )]
    UnknownPattern(String),
}

pub type Result<T> = std::result::Result<T, ProcessorError>;
