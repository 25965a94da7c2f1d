//! Input output module.
//!
//! Contains the textual grid format, problem and experiment files, and
//! result types exchanged with callers.

use crate::search::state::{Board, BLANK, TILE_COUNT};
use crate::search::{self, Config, SolveStatus};
use crate::types::*;
use crate::SolveFailure;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::path::Path;

mod experiments;
pub mod fs;
pub use experiments::*;

#[cfg(test)]
mod tests;

/// Represents the ways a textual grid can fail validation.
///
/// Detected at the boundary, before any search work begins; the search
/// engine never receives an invalid board.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "type", content = "content")]
pub enum GridError {
    /// Number of tokens is different from the cell count.
    WrongCount(usize),
    /// A token is not an integer in the tile range.
    OutOfRange(String),
    /// A tile value appears more than once.
    DuplicateValue(Tile),
    /// A tile value never appears.
    MissingValue(Tile),
}

impl std::error::Error for GridError {}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            GridError::WrongCount(count) => {
                write!(f, "Expected {} numbers, got {}.", TILE_COUNT, count)
            }
            GridError::OutOfRange(token) => {
                write!(
                    f,
                    "Not an integer in 0..={}: {:?}",
                    TILE_COUNT - 1,
                    token
                )
            }
            GridError::DuplicateValue(tile) => {
                write!(f, "Tile {} appears more than once.", tile)
            }
            GridError::MissingValue(tile) => write!(f, "Tile {} is missing.", tile),
        }
    }
}

/// Parses a textual grid: the tile values in row-major order, separated by
/// whitespace or commas, with `0` denoting the blank. On success the
/// returned board is a permutation of `0..TILE_COUNT` in exactly the given
/// order.
pub fn parse_grid(text: &str) -> Result<Board, GridError> {
    let tokens: Vec<&str> = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .collect();
    if tokens.len() != TILE_COUNT {
        return Err(GridError::WrongCount(tokens.len()));
    }

    let mut cells = [BLANK; TILE_COUNT];
    for (cell, token) in cells.iter_mut().zip(tokens) {
        let value: usize = token
            .parse()
            .map_err(|_| GridError::OutOfRange(token.to_string()))?;
        if value >= TILE_COUNT {
            return Err(GridError::OutOfRange(token.to_string()));
        }
        *cell = value as Tile;
    }

    let mut seen = [false; TILE_COUNT];
    for &tile in cells.iter() {
        if seen[tile as usize] {
            return Err(GridError::DuplicateValue(tile));
        }
        seen[tile as usize] = true;
    }
    // Unreachable when exactly TILE_COUNT in-range tokens contain no
    // duplicate.
    if let Some(missing) = seen.iter().position(|&present| !present) {
        return Err(GridError::MissingValue(missing as Tile));
    }

    Ok(Board::new(cells))
}

/// Formats a board as whitespace-separated tile values in row-major order.
/// The inverse of [`parse_grid`].
pub fn format_grid(board: &Board) -> String {
    board.cells().iter().join(" ")
}

/// Represents a single 24-puzzle problem.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PuzzleProblem {
    pub name: Option<String>,
    /// Tile values in row-major order, separated by whitespace or commas;
    /// 0 is the blank.
    pub grid: String,
    /// Maximum search depth in moves.
    #[serde(rename = "maxDepth")]
    pub max_depth: Option<Depth>,
    /// Memory usage limit in bytes.
    #[serde(rename = "memoryLimit")]
    pub memory_limit: Option<usize>,
}

impl PuzzleProblem {
    pub fn read_from_file<P: AsRef<Path>>(path: P) -> std::io::Result<PuzzleProblem> {
        let content = std::fs::read_to_string(path)?;
        let problem = serde_json::from_str(&content)?;
        Ok(problem)
    }

    /// Prepare this problem before solving: validate the grid and build the
    /// search configuration.
    pub fn prepare(&self) -> Result<(Board, Config), GridError> {
        let board = parse_grid(&self.grid)?;
        let config = Config {
            max_depth: self.max_depth.unwrap_or(Depth::MAX),
            max_memory: self.memory_limit.unwrap_or(usize::MAX),
        };
        Ok((board, config))
    }

    /// Solve this puzzle with breadth-first search.
    pub fn solve_bfs(&self) -> Result<search::Solution, SolveFailure> {
        let (board, config) = self
            .prepare()
            .map_err(|e| SolveFailure::BadInput(format!("Invalid grid: {}", e)))?;
        search::solve_bfs(&board, &Board::GOAL, &config)
    }

    /// Solve this puzzle with the explorer class given by name.
    pub fn solve_custom(&self, explorer: &str) -> Result<search::Solution, SolveFailure> {
        let (board, config) = self
            .prepare()
            .map_err(|e| SolveFailure::BadInput(format!("Invalid grid: {}", e)))?;
        search::solve_custom(&board, &Board::GOAL, &config, explorer)
    }

    /// Run all algorithm variations on this puzzle.
    pub fn benchmark_all(&self) -> Result<Vec<AlgorithmBenchmarkResult>, SolveFailure> {
        let (board, config) = self
            .prepare()
            .map_err(|e| SolveFailure::BadInput(format!("Invalid grid: {}", e)))?;
        Ok(search::benchmark_all(&board, &Board::GOAL, &config))
    }
}

/// Simplified solution struct for storing benchmark-related data.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkResult {
    /// Total time to produce the solution in seconds.
    pub total_time: f64,
    /// Time spent exploring the state space in seconds.
    pub search_time: f64,
    /// Maximum memory usage in bytes.
    pub max_memory: usize,
    /// Outcome of the search.
    pub status: SolveStatus,
    /// Length of the solution in moves; present only when solved.
    pub depth: Option<Depth>,
    /// Number of states dequeued from the frontier and expanded.
    pub expanded: usize,
    /// Number of states ever discovered, including the start state.
    pub visited: usize,
    /// Largest frontier size observed during the search.
    pub max_frontier: usize,
}
