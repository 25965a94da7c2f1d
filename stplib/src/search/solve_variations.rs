//! Variations of solve function
use super::*;

/// Explorer class names accepted by [`solve_custom`].
pub const ALL_EXPLORERS: &[&str] = &[stringify!(BfsExplorer), stringify!(DfsExplorer)];

/// Solve a puzzle with breadth-first search. The returned solution is
/// shortest in move count, up to the depth cutoff in `config`.
pub fn solve_bfs(start: &Board, goal: &Board, config: &Config) -> Result<Solution, SolveFailure> {
    solve_generic::<BfsExplorer>(start, goal, config)
}

/// Solve a puzzle with depth-limited depth-first search. Solutions are not
/// necessarily shortest.
pub fn solve_dfs(start: &Board, goal: &Board, config: &Config) -> Result<Solution, SolveFailure> {
    solve_generic::<DfsExplorer>(start, goal, config)
}

/// Solve a puzzle with the explorer class given by name.
pub fn solve_custom(
    start: &Board,
    goal: &Board,
    config: &Config,
    explorer: &str,
) -> Result<Solution, SolveFailure> {
    if explorer == stringify!(BfsExplorer) {
        solve_bfs(start, goal, config)
    } else if explorer == stringify!(DfsExplorer) {
        solve_dfs(start, goal, config)
    } else {
        Err(SolveFailure::BadInput(format!(
            "Undefined explorer: {}",
            explorer
        )))
    }
}

/// Solve a puzzle with the explorer class given by name and return a
/// [`io::BenchmarkResult`] on success.
pub fn benchmark_custom(
    start: &Board,
    goal: &Board,
    config: &Config,
    explorer: &str,
) -> Result<io::BenchmarkResult, SolveFailure> {
    Ok(solve_custom(start, goal, config, explorer)?.to_benchmark_result())
}

/// All algorithm variations available for experiments.
pub fn all_algorithms() -> Vec<io::AlgorithmInfo> {
    ALL_EXPLORERS
        .iter()
        .map(|explorer| io::AlgorithmInfo {
            explorer: explorer.to_string(),
        })
        .collect()
}

/// Run all algorithm variations on one puzzle.
pub fn benchmark_all(
    start: &Board,
    goal: &Board,
    config: &Config,
) -> Vec<io::AlgorithmBenchmarkResult> {
    all_algorithms()
        .into_iter()
        .map(|algorithm| {
            let result = benchmark_custom(start, goal, config, &algorithm.explorer);
            io::AlgorithmBenchmarkResult { algorithm, result }
        })
        .collect()
}
