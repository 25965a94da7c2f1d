use super::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn depth_config(max_depth: Depth) -> Config {
    Config {
        max_depth,
        ..Default::default()
    }
}

/// Board whose blank has been walked `ups` rows towards the top. The unique
/// shortest solution is the same number of Down moves.
fn blank_walked_up(ups: usize) -> Board {
    let mut board = Board::GOAL;
    for _ in 0..ups {
        board = board.apply(Move::Up).unwrap().unwrap();
    }
    board
}

/// Goal with two non-blank tiles swapped; unreachable on an odd-width
/// board.
fn unsolvable_board() -> Board {
    let mut cells = *Board::GOAL.cells();
    cells.swap(0, 1);
    Board::new(cells)
}

fn assert_replay_reaches_goal(start: &Board, moves: &[Move]) {
    let mut board = *start;
    for &mv in moves {
        board = board
            .apply(mv)
            .unwrap()
            .expect("solution contains an illegal move");
    }
    assert_eq!(board, Board::GOAL);
}

#[test]
fn start_equals_goal() {
    let solution = solve_bfs(&Board::GOAL, &Board::GOAL, &depth_config(0)).unwrap();
    assert_eq!(solution.status, SolveStatus::Solved);
    assert_eq!(solution.depth, Some(0));
    assert!(solution.moves.is_empty());
    assert_eq!(solution.expanded, 0);
    assert_eq!(solution.visited, 1);
    assert_eq!(solution.max_frontier, 0);

    // Any board is its own goal, independent of the depth limit.
    let board = blank_walked_up(3);
    let solution = solve_bfs(&board, &board, &depth_config(40)).unwrap();
    assert_eq!(solution.status, SolveStatus::Solved);
    assert_eq!(solution.depth, Some(0));
}

#[test]
fn single_move_solution() {
    let start = blank_walked_up(1);
    let solution = solve_bfs(&start, &Board::GOAL, &depth_config(10)).unwrap();

    assert_eq!(solution.status, SolveStatus::Solved);
    assert_eq!(solution.depth, Some(1));
    assert_eq!(solution.moves, vec![Move::Down]);
    assert_eq!(solution.expanded, 1);
    assert_eq!(solution.visited, 3);
    assert_eq!(solution.max_frontier, 1);
}

#[test]
fn shortest_solution_is_found() {
    let start = blank_walked_up(4);
    let solution = solve_bfs(&start, &Board::GOAL, &depth_config(10)).unwrap();

    assert_eq!(solution.status, SolveStatus::Solved);
    assert_eq!(solution.depth, Some(4));
    assert_eq!(solution.moves, vec![Move::Down; 4]);
    assert_replay_reaches_goal(&start, &solution.moves);
}

#[test]
fn cutoff_below_solution_depth() {
    let start = blank_walked_up(4);
    let solution = solve_bfs(&start, &Board::GOAL, &depth_config(3)).unwrap();

    assert_eq!(solution.status, SolveStatus::ExhaustedOrCutoff);
    assert_eq!(solution.depth, None);
    assert!(solution.moves.is_empty());
    assert!(solution.expanded > 0);

    // Raising the cutoff to the solution depth solves the instance.
    let solution = solve_bfs(&start, &Board::GOAL, &depth_config(4)).unwrap();
    assert_eq!(solution.status, SolveStatus::Solved);
    assert_eq!(solution.depth, Some(4));
}

#[test]
fn scrambles_replay_to_goal() {
    for seed in [3, 11, 42] {
        let mut rng = StdRng::seed_from_u64(seed);
        let start = Board::scrambled(&mut rng, 10);
        let solution = solve_bfs(&start, &Board::GOAL, &depth_config(10)).unwrap();

        assert_eq!(solution.status, SolveStatus::Solved);
        let depth = solution.depth.unwrap();
        assert!(depth <= 10);
        assert_eq!(solution.moves.len(), depth);
        assert_replay_reaches_goal(&start, &solution.moves);
    }
}

#[test]
fn identical_inputs_give_identical_results() {
    let mut rng = StdRng::seed_from_u64(5);
    let start = Board::scrambled(&mut rng, 8);

    let first = solve_bfs(&start, &Board::GOAL, &depth_config(8)).unwrap();
    let second = solve_bfs(&start, &Board::GOAL, &depth_config(8)).unwrap();

    assert_eq!(first.status, second.status);
    assert_eq!(first.depth, second.depth);
    assert_eq!(first.moves, second.moves);
    assert_eq!(first.expanded, second.expanded);
    assert_eq!(first.visited, second.visited);
    assert_eq!(first.max_frontier, second.max_frontier);
}

#[test]
fn visited_grows_with_the_cutoff() {
    let start = unsolvable_board();
    let mut last_visited = 0;
    for max_depth in 1..=4 {
        let solution = solve_bfs(&start, &Board::GOAL, &depth_config(max_depth)).unwrap();
        assert_eq!(solution.status, SolveStatus::ExhaustedOrCutoff);
        assert!(solution.visited >= last_visited);
        last_visited = solution.visited;
    }
}

#[test]
fn dfs_solves_within_the_limit() {
    let start = blank_walked_up(1);
    let solution = solve_dfs(&start, &Board::GOAL, &depth_config(8)).unwrap();
    assert_eq!(solution.status, SolveStatus::Solved);
    assert_eq!(solution.depth, Some(1));
    assert_eq!(solution.moves, vec![Move::Down]);

    let start = blank_walked_up(2);
    let solution = solve_dfs(&start, &Board::GOAL, &depth_config(10)).unwrap();
    assert_eq!(solution.status, SolveStatus::Solved);
    let depth = solution.depth.unwrap();
    assert!(depth <= 10);
    assert_eq!(solution.moves.len(), depth);
    assert_replay_reaches_goal(&start, &solution.moves);

    // Depth-first results are reproducible as well.
    let second = solve_dfs(&start, &Board::GOAL, &depth_config(10)).unwrap();
    assert_eq!(solution.moves, second.moves);
    assert_eq!(solution.visited, second.visited);
}

#[test]
fn custom_solve_dispatch() {
    let start = blank_walked_up(1);
    let config = depth_config(5);

    let solution = solve_custom(&start, &Board::GOAL, &config, "BfsExplorer").unwrap();
    assert_eq!(solution.depth, Some(1));
    let solution = solve_custom(&start, &Board::GOAL, &config, "DfsExplorer").unwrap();
    assert_eq!(solution.status, SolveStatus::Solved);

    let failure = solve_custom(&start, &Board::GOAL, &config, "AStarExplorer").unwrap_err();
    assert!(matches!(failure, SolveFailure::BadInput(_)));
}

#[test]
fn memory_limit_aborts_the_search() {
    let mut rng = StdRng::seed_from_u64(9);
    let start = Board::scrambled(&mut rng, 60);
    let config = Config {
        max_depth: 60,
        max_memory: 1,
    };

    let result = solve_bfs(&start, &Board::GOAL, &config);
    assert!(matches!(
        result,
        Err(SolveFailure::OutOfMemory { used: _, limit: 1 })
    ));
}

#[test]
fn benchmark_all_covers_every_explorer() {
    let start = blank_walked_up(2);
    let results = benchmark_all(&start, &Board::GOAL, &depth_config(10));

    assert_eq!(results.len(), ALL_EXPLORERS.len());
    for entry in results {
        let benchmark = entry.result.unwrap();
        assert_eq!(benchmark.status, SolveStatus::Solved);
        assert!(benchmark.visited >= 3);
    }
}
