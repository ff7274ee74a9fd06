//! Display and output formatting utilities

use crate::config::OutputFormat;
use crate::game_of_life::{entries, Coord, GameState, PatternKind, SurveyEntry};
use anyhow::Result;
use itertools::Itertools;
use std::collections::HashSet;

const LIVE_GLYPH: char = '█';
const DEAD_GLYPH: char = '·';

/// Draws a grid of `rows` x `cols` with the given cells marked
pub struct GridRenderer;

impl GridRenderer {
    /// Render marks in compact form, one character per cell
    pub fn render(rows: usize, cols: usize, marks: &[Coord]) -> String {
        let marked: HashSet<Coord> = marks.iter().copied().collect();
        let capacity = cols
            .checked_mul(LIVE_GLYPH.len_utf8())
            .and_then(|width| width.checked_add(1))
            .and_then(|width| width.checked_mul(rows))
            .unwrap_or(0);
        let mut output = String::with_capacity(capacity);
        for row in 0..rows {
            for col in 0..cols {
                output.push(if marked.contains(&(row, col)) { LIVE_GLYPH } else { DEAD_GLYPH });
            }
            output.push('\n');
        }
        output
    }

    /// Render a game state through its flattened entries
    pub fn render_state(state: &GameState) -> String {
        Self::render(state.grid.rows, state.grid.cols, &entries(&state.population))
    }

    /// Render a state with row and column numbers
    pub fn render_with_coords(state: &GameState) -> String {
        let mut output = String::new();

        output.push_str("   ");
        for col in 0..state.grid.cols {
            output.push_str(&format!("{:2}", col % 10));
        }
        output.push('\n');

        for row in 0..state.grid.rows {
            output.push_str(&format!("{:2} ", row));
            for col in 0..state.grid.cols {
                output.push_str(if state.is_alive(row, col) { "██" } else { "··" });
            }
            output.push('\n');
        }

        output
    }
}

/// Format simulation results for the console
pub struct StateFormatter;

impl StateFormatter {
    /// Format a state in the requested output format
    pub fn format(state: &GameState, format: OutputFormat) -> Result<String> {
        Ok(match format {
            OutputFormat::Text => state.to_string(),
            OutputFormat::Json => serde_json::to_string_pretty(state)?,
            OutputFormat::Visual => GridRenderer::render_with_coords(state),
        })
    }

    /// One-line summary of a generation
    pub fn summary(generation: usize, state: &GameState) -> String {
        format!(
            "Generation {}: {} living cells ({:.1}% of {}x{})",
            generation,
            state.living_count(),
            state.density() * 100.0,
            state.grid.rows,
            state.grid.cols
        )
    }

    /// Tally survey outcomes by behaviour
    pub fn survey_table(results: &[SurveyEntry]) -> String {
        let mut output = String::new();

        output.push_str("Seed       | Initial | Outcome\n");
        output.push_str("-----------|---------|------------------------------\n");
        for entry in results {
            output.push_str(&format!(
                "{:10} | {:7} | {}\n",
                entry.rng_seed, entry.initial_population, entry.kind
            ));
        }

        let counts = results
            .iter()
            .map(|entry| Self::kind_label(&entry.kind))
            .counts();
        output.push_str("\nTotals:\n");
        for (label, count) in counts.into_iter().sorted() {
            output.push_str(&format!("  {:<11} {}\n", label, count));
        }

        output
    }

    fn kind_label(kind: &PatternKind) -> &'static str {
        match kind {
            PatternKind::Extinct { .. } => "extinct",
            PatternKind::StillLife => "still life",
            PatternKind::Oscillator { .. } => "oscillator",
            PatternKind::Spaceship { .. } => "spaceship",
            PatternKind::Unsettled => "unsettled",
        }
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() && std::env::var("TERM").unwrap_or_default() != "dumb"
    }

    /// Green text
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Yellow text
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Blue text
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
