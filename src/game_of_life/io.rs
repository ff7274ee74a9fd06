//! Text format for game states
//!
//! Rows are separated by a line break or by two or more whitespace characters,
//! so indented multi-line literals parse as-is. Cells within a row are
//! separated by a single space and are either `x` (dead) or `o` (alive).

use super::{GameState, Grid, Population};
use crate::error::{Axis, ProcessorError, Result};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEAD: &str = "x";
const ALIVE: &str = "o";

/// Optional adjustments applied while parsing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOptions {
    /// Final row count; must not be smaller than the text's row count
    pub rows: Option<usize>,
    /// Final column count; must not be smaller than the text's column count
    pub cols: Option<usize>,
    /// Center the pattern when both `rows` and `cols` are given
    #[serde(default)]
    pub center: bool,
}

impl ParseOptions {
    /// Pad the pattern to `rows` x `cols`, keeping it in the top-left corner
    pub fn with_bounds(rows: usize, cols: usize) -> Self {
        Self {
            rows: Some(rows),
            cols: Some(cols),
            center: false,
        }
    }

    /// Pad the pattern to `rows` x `cols` and center it
    pub fn centered(rows: usize, cols: usize) -> Self {
        Self {
            center: true,
            ..Self::with_bounds(rows, cols)
        }
    }
}

/// Parse a game state from its text representation
pub fn parse(text: &str, options: &ParseOptions) -> Result<GameState> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(GameState::empty(
            options.rows.unwrap_or(0),
            options.cols.unwrap_or(0),
        ));
    }

    let mut rows = Vec::new();
    for (row_idx, line) in split_rows(text).into_iter().enumerate() {
        let mut row = Vec::new();
        for (col_idx, token) in line.split(' ').enumerate() {
            match token {
                DEAD => row.push(false),
                ALIVE => row.push(true),
                _ => {
                    return Err(ProcessorError::InvalidCell {
                        token: token.to_string(),
                        row: row_idx,
                        col: col_idx,
                    })
                }
            }
        }
        rows.push(row);
    }

    // Jagged input is truncated to the narrowest row
    let natural = Grid::new(
        rows.len(),
        rows.iter().map(Vec::len).min().unwrap_or(0),
    );
    let grid = Grid::new(
        bound(Axis::Rows, options.rows, natural.rows)?,
        bound(Axis::Cols, options.cols, natural.cols)?,
    );

    let (row_shift, col_shift) = match (options.center, options.rows, options.cols) {
        (true, Some(_), Some(_)) => (
            (grid.rows - natural.rows) / 2,
            (grid.cols - natural.cols) / 2,
        ),
        _ => (0, 0),
    };

    let population: Population = rows
        .iter()
        .enumerate()
        .flat_map(|(r, row)| {
            row.iter()
                .take(natural.cols)
                .enumerate()
                .filter(|(_, alive)| **alive)
                .map(move |(c, _)| (r + row_shift, c + col_shift))
        })
        .collect();

    log::trace!(
        "parsed {}x{} pattern into {}x{} grid with {} live cells",
        natural.rows,
        natural.cols,
        grid.rows,
        grid.cols,
        population.len()
    );

    Ok(GameState::new(grid, population))
}

fn bound(axis: Axis, requested: Option<usize>, natural: usize) -> Result<usize> {
    match requested {
        Some(requested) if requested < natural => Err(ProcessorError::BoundTooSmall {
            axis,
            requested,
            natural,
        }),
        Some(requested) => Ok(requested),
        None => Ok(natural),
    }
}

/// Split trimmed text into rows at line breaks and whitespace runs of two or more
fn split_rows(text: &str) -> Vec<&str> {
    let mut rows = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if !ch.is_whitespace() {
            continue;
        }

        let mut end = idx + ch.len_utf8();
        let mut run = 1;
        let mut line_break = matches!(ch, '\n' | '\r');
        while let Some(&(next_idx, next)) = chars.peek() {
            if !next.is_whitespace() {
                break;
            }
            end = next_idx + next.len_utf8();
            run += 1;
            line_break |= matches!(next, '\n' | '\r');
            chars.next();
        }

        if run >= 2 || line_break {
            rows.push(&text[start..idx]);
            start = end;
        }
    }
    rows.push(&text[start..]);

    rows
}

/// Render a game state in the text format.
///
/// Output starts with a newline and terminates every row with one.
pub fn stringify(state: &GameState) -> String {
    let capacity = state
        .grid
        .cols
        .checked_mul(2)
        .and_then(|width| width.checked_add(1))
        .and_then(|width| width.checked_mul(state.grid.rows))
        .unwrap_or(0);
    let mut result = String::with_capacity(capacity.saturating_add(1));
    result.push('\n');

    for row in 0..state.grid.rows {
        for col in 0..state.grid.cols {
            if col > 0 {
                result.push(' ');
            }
            result.push_str(if state.is_alive(row, col) { ALIVE } else { DEAD });
        }
        result.push('\n');
    }

    result
}

/// Load a pattern from a text file
pub fn load_state_from_file<P: AsRef<Path>>(
    path: P,
    options: &ParseOptions,
) -> anyhow::Result<GameState> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read pattern file: {}", path.as_ref().display()))?;

    parse(&content, options)
        .with_context(|| format!("Failed to parse pattern file: {}", path.as_ref().display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn block_state() -> GameState {
        GameState::new(
            Grid::new(4, 4),
            Population::from(vec![(1, 1), (1, 2), (2, 1), (2, 2)]),
        )
    }

    #[test]
    fn test_stringify() {
        let mut state = block_state();
        assert_eq!(
            stringify(&state),
            "\nx x x x\nx o o x\nx o o x\nx x x x\n"
        );

        state.population = Population::from(vec![(0, 1), (0, 2), (1, 0), (1, 3), (2, 1), (2, 2)]);
        assert_eq!(
            stringify(&state),
            "\nx o o x\no x x o\nx o o x\nx x x x\n"
        );
    }

    #[test]
    fn test_stringify_empty_grid() {
        assert_eq!(stringify(&GameState::empty(0, 0)), "\n");
        assert_eq!(stringify(&GameState::empty(2, 0)), "\n\n\n");
    }

    #[test]
    fn test_parse_indented_literal() {
        let text = "
            x x x x
            x o o x
            x o o x
            x x x x
        ";
        assert_eq!(parse(text, &ParseOptions::default()).unwrap(), block_state());

        let text = "
            x o o x
            o x x o
            x o o x
        ";
        let state = parse(text, &ParseOptions::default()).unwrap();
        assert_eq!(state.grid, Grid::new(3, 4));
        assert_eq!(
            state.population.entries(),
            vec![(0, 1), (0, 2), (1, 0), (1, 3), (2, 1), (2, 2)]
        );
    }

    #[test]
    fn test_parse_row_separators() {
        // Unindented lines, wide gaps and CRLF all separate rows
        let expected = GameState::new(Grid::new(2, 2), Population::from(vec![(0, 1), (1, 0)]));
        for text in ["x o\no x", "x o  o x", "x o\r\no x", "x o\t\to x"] {
            assert_eq!(parse(text, &ParseOptions::default()).unwrap(), expected, "{text:?}");
        }
    }

    #[test]
    fn test_parse_wrong_character() {
        let text = "
            - o o -
            o - - o
            - o o -
        ";
        let err = parse(text, &ParseOptions::default()).unwrap_err();
        assert_eq!(
            err,
            ProcessorError::InvalidCell {
                token: "-".to_string(),
                row: 0,
                col: 0
            }
        );

        // A lone tab is not a cell separator
        assert!(parse("x\to", &ParseOptions::default()).is_err());
        assert!(parse("X O", &ParseOptions::default()).is_err());
    }

    #[test]
    fn test_parse_jagged_rows_truncate() {
        let text = "
            o o o
            x o
            o o o o
        ";
        let state = parse(text, &ParseOptions::default()).unwrap();
        assert_eq!(state.grid, Grid::new(3, 2));
        assert_eq!(state.population.entries(), vec![(0, 0), (0, 1), (1, 1), (2, 0), (2, 1)]);
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse("", &ParseOptions::default()).unwrap(), GameState::empty(0, 0));
        assert_eq!(parse("   \n  ", &ParseOptions::default()).unwrap(), GameState::empty(0, 0));

        let options = ParseOptions {
            rows: Some(3),
            ..ParseOptions::default()
        };
        assert_eq!(parse("", &options).unwrap(), GameState::empty(3, 0));
    }

    #[test]
    fn test_parse_bounds() {
        let text = "
            x o x
            x o x
            x o x
        ";
        let too_small = ParseOptions {
            rows: Some(2),
            ..ParseOptions::default()
        };
        assert_eq!(
            parse(text, &too_small).unwrap_err(),
            ProcessorError::BoundTooSmall {
                axis: Axis::Rows,
                requested: 2,
                natural: 3
            }
        );
        assert!(parse(text, &ParseOptions::with_bounds(3, 1)).is_err());

        let widened = parse(text, &ParseOptions::with_bounds(7, 9)).unwrap();
        assert_eq!(widened.grid, Grid::new(7, 9));
        assert_eq!(widened.population.entries(), vec![(0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_parse_centered() {
        let text = "
            x o x
            x o x
            x o x
        ";
        let centered = parse(text, &ParseOptions::centered(8, 10)).unwrap();
        assert_eq!(centered.grid, Grid::new(8, 10));
        // Offsets are floor((8 - 3) / 2) = 2 and floor((10 - 3) / 2) = 3
        assert_eq!(centered.population.entries(), vec![(2, 4), (3, 4), (4, 4)]);

        // Centering needs both bounds
        let rows_only = ParseOptions {
            rows: Some(8),
            center: true,
            ..ParseOptions::default()
        };
        let state = parse(text, &rows_only).unwrap();
        assert_eq!(state.grid, Grid::new(8, 3));
        assert_eq!(state.population.entries(), vec![(0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_round_trip_normalizes_whitespace() {
        let text = "   o x o\n\n     x o x  \t x x o   ";
        let state = parse(text, &ParseOptions::default()).unwrap();
        assert_eq!(stringify(&state), "\no x o\nx o x\nx x o\n");
        assert_eq!(parse(&stringify(&state), &ParseOptions::default()).unwrap(), state);
    }

    #[test]
    fn test_display_and_from_str() {
        let state: GameState = "x o\no o".parse().unwrap();
        assert_eq!(state.to_string(), "\nx o\no o\n");
    }

    #[test]
    fn test_load_state_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "x o x\nx x o\no o o").unwrap();

        let state = load_state_from_file(file.path(), &ParseOptions::default()).unwrap();
        assert_eq!(state.grid, Grid::new(3, 3));
        assert_eq!(state.living_count(), 5);

        let missing = load_state_from_file("does/not/exist.txt", &ParseOptions::default());
        assert!(missing.is_err());
    }
}
