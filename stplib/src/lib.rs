//! # Sliding-Tile Puzzle Library
//!
//! Common functionality for the 24-puzzle solver command line interface.

use serde::{Deserialize, Serialize};

pub mod io;
pub mod search;
pub mod types;
pub mod utils;

#[global_allocator]
static ALLOCATOR: cap::Cap<std::alloc::System> = cap::Cap::new(std::alloc::System, usize::MAX);

/// Represents the reasons why a solution attempt might fail.
///
/// Cutoff and exhaustion are normal search outcomes and are not represented
/// here; see [`search::SolveStatus`].
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(tag = "type", content = "content")] // content will be used for BadInput(String)
pub enum SolveFailure {
    BadInput(String),
    OutOfMemory { used: usize, limit: usize },
    /// A state that must contain the blank tile does not. Indicates a bug
    /// upstream of the search; fatal to the current solve call.
    InvariantViolation(String),
}

impl std::error::Error for SolveFailure {}

impl std::fmt::Display for SolveFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            SolveFailure::BadInput(reason) => write!(f, "Bad input: {}", reason),
            SolveFailure::OutOfMemory { used, limit } => {
                write!(f, "Out of memory! Used {} of {}.", used, limit)
            }
            SolveFailure::InvariantViolation(reason) => {
                write!(f, "Invariant violation: {}", reason)
            }
        }
    }
}
