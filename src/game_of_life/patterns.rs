//! Well-known patterns in the text format

use super::{parse, GameState, ParseOptions};
use crate::error::{ProcessorError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Built-in patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
    Block,
    Beehive,
    Loaf,
    Boat,
    Tub,
    Blinker,
    Toad,
    Glider,
}

impl Pattern {
    pub const ALL: [Pattern; 8] = [
        Pattern::Block,
        Pattern::Beehive,
        Pattern::Loaf,
        Pattern::Boat,
        Pattern::Tub,
        Pattern::Blinker,
        Pattern::Toad,
        Pattern::Glider,
    ];

    /// Lowercase name used on the command line
    pub fn name(self) -> &'static str {
        match self {
            Pattern::Block => "block",
            Pattern::Beehive => "beehive",
            Pattern::Loaf => "loaf",
            Pattern::Boat => "boat",
            Pattern::Tub => "tub",
            Pattern::Blinker => "blinker",
            Pattern::Toad => "toad",
            Pattern::Glider => "glider",
        }
    }

    /// Pattern in the `x`/`o` text format
    pub fn text(self) -> &'static str {
        match self {
            Pattern::Block => {
                "
                x x x x
                x o o x
                x o o x
                x x x x
                "
            }
            Pattern::Beehive => {
                "
                x o o x
                o x x o
                x o o x
                "
            }
            Pattern::Loaf => {
                "
                x o o x
                o x x o
                x o x o
                x x o x
                "
            }
            Pattern::Boat => {
                "
                o o x
                o x o
                x o x
                "
            }
            Pattern::Tub => {
                "
                x o x
                o x o
                x o x
                "
            }
            Pattern::Blinker => {
                "
                x x x
                o o o
                x x x
                "
            }
            Pattern::Toad => {
                "
                x x x x
                x o o o
                o o o x
                x x x x
                "
            }
            Pattern::Glider => {
                "
                x o x x
                x x o x
                o o o x
                x x x x
                "
            }
        }
    }

    /// Parse the pattern with the given bounds and centering
    pub fn state(self, options: &ParseOptions) -> Result<GameState> {
        parse(self.text(), options)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = ProcessorError;

    fn from_str(s: &str) -> Result<Self> {
        Pattern::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ProcessorError::UnknownPattern(s.to_string()))
    }
}
