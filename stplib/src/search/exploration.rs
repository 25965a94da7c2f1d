use crate::ALLOCATOR;

use super::*;

/// Bookkeeping for one discovered state. Created exactly once when the
/// state is first discovered and never mutated afterwards.
#[derive(Clone, Debug)]
pub struct SearchRecord {
    /// Index of the state this one was first discovered from, together
    /// with the move that produced it. `None` for the start state.
    pub parent: Option<(StateIndex, Move)>,
    /// Distance from the start state in moves.
    pub depth: Depth,
}

/// Raw outcome of an exploration, before path reconstruction and timing.
pub struct ExploreResult {
    pub status: SolveStatus,
    /// One record per discovered state, in discovery order. Indices match
    /// the state indexer.
    pub records: Vec<SearchRecord>,
    /// Index of the goal state, if it was discovered.
    pub goal_index: Option<StateIndex>,
    /// States dequeued from the frontier and expanded.
    pub expanded: usize,
    /// States ever discovered, including the start state.
    pub visited: usize,
    /// Largest frontier size observed.
    pub max_frontier: usize,
    /// Maximum memory usage in bytes.
    pub max_memory: usize,
}

/// Generic trait for the functions that explore the puzzle state graph.
pub trait Explorer {
    /// Explore the state graph from `start` towards `goal`.
    fn explore(start: &Board, goal: &Board, max_depth: Depth) -> Result<ExploreResult, SolveFailure> {
        Self::memory_limited_explore(start, goal, max_depth, usize::MAX)
    }

    /// Explore the state graph from `start` towards `goal`.
    ///
    /// When the memory usage reported by the global allocator exceeds the
    /// limit, [`SolveFailure::OutOfMemory`] will be returned.
    fn memory_limited_explore(
        start: &Board,
        goal: &Board,
        max_depth: Depth,
        memory_limit: usize,
    ) -> Result<ExploreResult, SolveFailure>;
}

/// Uninformed explorer. No heuristic guidance: the expansion order is
/// determined entirely by the state indexer, and each state is expanded at
/// most once thanks to the indexer's first-discovery-wins rule.
pub struct UninformedExplorer<SI: StateIndexer> {
    /// State indexer; doubles as the frontier.
    states: SI,
    /// Parent link and depth for each discovered state.
    records: Vec<SearchRecord>,
}

/// Breadth-first search. FIFO expansion guarantees the returned solution is
/// shortest in move count, up to the depth cutoff.
pub type BfsExplorer = UninformedExplorer<FifoStateIndexer>;

/// Depth-limited depth-first search. Finds a solution within the depth
/// limit when its expansion order reaches one, not necessarily shortest.
pub type DfsExplorer = UninformedExplorer<StackStateIndexer>;

impl<SI: StateIndexer> UninformedExplorer<SI> {
    /// Index a state and record its parent link. Returns `None` when the
    /// state was already discovered through an earlier path.
    #[inline]
    fn discover(
        &mut self,
        board: Board,
        parent: Option<(StateIndex, Move)>,
        depth: Depth,
    ) -> Option<StateIndex> {
        let known = self.states.get_state_count();
        let index = self.states.index_state(board);
        if index < known {
            return None;
        }
        debug_assert_eq!(index, self.records.len());
        self.records.push(SearchRecord { parent, depth });
        Some(index)
    }
}

impl<SI: StateIndexer> Explorer for UninformedExplorer<SI> {
    fn memory_limited_explore(
        start: &Board,
        goal: &Board,
        max_depth: Depth,
        memory_limit: usize,
    ) -> Result<ExploreResult, SolveFailure> {
        const MEMORY_SAMPLE_PERIOD: usize = 2_usize.pow(15);
        let mut max_memory: usize = 0;

        let mut explorer = UninformedExplorer {
            states: SI::new(),
            records: Vec::new(),
        };
        explorer.discover(*start, None, 0);

        let goal_key = goal.key();
        if start.key() == goal_key {
            return Ok(ExploreResult {
                status: SolveStatus::Solved,
                records: explorer.records,
                goal_index: Some(0),
                expanded: 0,
                visited: 1,
                max_frontier: 0,
                max_memory: ALLOCATOR.allocated(),
            });
        }

        let mut expanded: usize = 0;
        let mut processed: usize = 0;
        let mut max_frontier: usize = 0;

        loop {
            max_frontier = std::cmp::max(max_frontier, explorer.states.frontier_len());
            let (index, board) = match explorer.states.next() {
                Some(x) => x,
                None => break,
            };

            let depth = explorer.records[index].depth;
            if depth < max_depth {
                expanded += 1;
                for (next, mv) in board.neighbors()? {
                    let discovered = explorer.discover(next, Some((index, mv)), depth + 1);
                    if let Some(next_index) = discovered {
                        if next.key() == goal_key {
                            max_memory = std::cmp::max(max_memory, ALLOCATOR.allocated());
                            let visited = explorer.states.get_state_count();
                            return Ok(ExploreResult {
                                status: SolveStatus::Solved,
                                records: explorer.records,
                                goal_index: Some(next_index),
                                expanded,
                                visited,
                                max_frontier,
                                max_memory,
                            });
                        }
                    }
                }
            }

            processed += 1;
            if processed % MEMORY_SAMPLE_PERIOD == 0 {
                let allocated = ALLOCATOR.allocated();
                max_memory = std::cmp::max(max_memory, allocated);
                if allocated > memory_limit {
                    return Err(SolveFailure::OutOfMemory {
                        used: max_memory,
                        limit: memory_limit,
                    });
                }
            }
        }

        let allocated = ALLOCATOR.allocated();
        max_memory = std::cmp::max(max_memory, allocated);

        let visited = explorer.states.get_state_count();
        Ok(ExploreResult {
            status: SolveStatus::ExhaustedOrCutoff,
            records: explorer.records,
            goal_index: None,
            expanded,
            visited,
            max_frontier,
            max_memory,
        })
    }
}
