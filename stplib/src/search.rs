//! Uninformed search over sliding-tile puzzle states.
//!
//! The solver explores the graph of board arrangements reachable by moving
//! the blank tile. Expansion order is determined by a pluggable state
//! indexer: the FIFO indexer yields breadth-first search (shortest
//! solutions), the stack indexer yields depth-limited depth-first search.
mod exploration;
mod path;
mod solve_variations;
pub mod state;

pub use exploration::*;
pub use path::*;
pub use solve_variations::*;
use state::indexers::*;
use state::*;

use crate::io;
use crate::types::*;
use crate::SolveFailure;

use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::time::Instant;

#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(test)]
mod integration_tests;

/// Search parameters for a single solve call.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of moves from the start state. States at this depth
    /// are still discovered but never expanded.
    pub max_depth: Depth,
    /// Memory usage limit in bytes.
    pub max_memory: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_depth: Depth::MAX,
            max_memory: usize::MAX,
        }
    }
}

/// Outcome of a search. Both variants are normal results; errors are
/// reported through [`SolveFailure`] instead.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolveStatus {
    /// The goal state was discovered.
    Solved,
    /// The frontier emptied without discovering the goal, either because
    /// the reachable space was exhausted or because of the depth cutoff.
    ExhaustedOrCutoff,
}

/// Stores the solution of a single puzzle search.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
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
    /// Blank moves from the start state to the goal; empty unless solved.
    pub moves: Vec<Move>,

    /// Number of states dequeued from the frontier and expanded.
    pub expanded: usize,
    /// Number of states ever discovered, including the start state.
    pub visited: usize,
    /// Largest frontier size observed during the search.
    pub max_frontier: usize,
}

impl Solution {
    /// Get [`io::BenchmarkResult`].
    pub fn get_benchmark_result(&self) -> io::BenchmarkResult {
        io::BenchmarkResult {
            total_time: self.total_time,
            search_time: self.search_time,
            max_memory: self.max_memory,
            status: self.status,
            depth: self.depth,
            expanded: self.expanded,
            visited: self.visited,
            max_frontier: self.max_frontier,
        }
    }

    /// Convert the solution to a [`io::BenchmarkResult`].
    pub fn to_benchmark_result(self) -> io::BenchmarkResult {
        self.get_benchmark_result()
    }
}

/// Solve a puzzle with the given explorer.
pub fn solve_generic<E: Explorer>(
    start: &Board,
    goal: &Board,
    config: &Config,
) -> Result<Solution, SolveFailure> {
    let start_time = Instant::now();

    let ExploreResult {
        status,
        records,
        goal_index,
        expanded,
        visited,
        max_frontier,
        max_memory,
    } = E::memory_limited_explore(start, goal, config.max_depth, config.max_memory)?;

    let search_time: f64 = start_time.elapsed().as_secs_f64();
    log::info!("Discovered {} states, expanded {}", visited, expanded);

    let moves: Vec<Move> = match goal_index {
        Some(index) => reconstruct_moves(&records, index),
        None => Vec::new(),
    };
    let depth = goal_index.map(|_| moves.len());

    let total_time: f64 = start_time.elapsed().as_secs_f64();

    Ok(Solution {
        total_time,
        search_time,
        max_memory,
        status,
        depth,
        moves,
        expanded,
        visited,
        max_frontier,
    })
}
