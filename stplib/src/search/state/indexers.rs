use super::*;

/// A trait for indexing the discovered states of a puzzle search.
///
/// Each StateIndexer also implements an Iterator, which yields the next
/// state to be expanded together with its index. The iteration order is the
/// expansion order of the search; when the frontier is exhausted the
/// iterator ends.
pub trait StateIndexer: Iterator<Item = (StateIndex, Board)> {
    /// New empty state indexer.
    fn new() -> Self;
    /// Get the number of discovered states.
    fn get_state_count(&self) -> usize;
    /// Number of discovered states that still await expansion.
    fn frontier_len(&self) -> usize;
    /// Get the index of the given board, adding it to the hashmap when
    /// necessary. The first discovery of a board wins; rediscoveries return
    /// the original index.
    fn index_state(&mut self, board: Board) -> StateIndex;
}

/// A FIFO state indexer:
/// - New boards are appended to an `Array2` as indexed.
/// - HashMap over packed keys is used as reverse index.
/// - Iteration follows insertion order, which makes this the breadth-first
///   frontier.
pub struct FifoStateIndexer {
    /// Number of states.
    state_count: usize,
    /// States before this one are expanded.
    /// In other words, index of the next state to be expanded.
    expanded_count: usize,
    /// Matrix of boards, one state per row.
    boards: Array2<Tile>,
    /// Reverse index.
    key_to_index: HashMap<StateKey, StateIndex>,
}

/// Rebuild a board from its row in the state matrix.
fn board_at(boards: &Array2<Tile>, index: StateIndex) -> Board {
    let mut cells = [BLANK; TILE_COUNT];
    for (cell, &value) in cells.iter_mut().zip(boards.row(index).iter()) {
        *cell = value;
    }
    Board::new(cells)
}

impl Iterator for FifoStateIndexer {
    type Item = (StateIndex, Board);

    fn next(&mut self) -> Option<Self::Item> {
        if self.expanded_count >= self.state_count {
            None
        } else {
            let index = self.expanded_count;
            self.expanded_count += 1;
            Some((index, board_at(&self.boards, index)))
        }
    }
}

impl StateIndexer for FifoStateIndexer {
    fn new() -> Self {
        FifoStateIndexer {
            state_count: 0,
            expanded_count: 0,
            boards: Array2::default((0, TILE_COUNT)),
            key_to_index: HashMap::new(),
        }
    }

    #[inline]
    fn get_state_count(&self) -> usize {
        self.state_count
    }

    #[inline]
    fn frontier_len(&self) -> usize {
        self.state_count - self.expanded_count
    }

    fn index_state(&mut self, board: Board) -> StateIndex {
        let key = board.key();
        match self.key_to_index.get(&key) {
            Some(i) => *i,
            None => {
                let i = self.state_count;
                self.state_count += 1;
                self.boards
                    .push_row(ndarray::ArrayView::from(board.cells().as_slice()))
                    .unwrap();
                self.key_to_index.insert(key, i);
                i
            }
        }
    }
}

/// A state indexer that uses a stack to keep track of states to be
/// expanded, yielding depth-first expansion order:
/// - New boards are pushed to the stack.
/// - HashMap over packed keys is used as reverse index.
pub struct StackStateIndexer {
    key_to_index: HashMap<StateKey, StateIndex>,
    stack: Vec<(StateIndex, Board)>,
}

impl Iterator for StackStateIndexer {
    type Item = (StateIndex, Board);

    fn next(&mut self) -> Option<Self::Item> {
        self.stack.pop()
    }
}

impl StateIndexer for StackStateIndexer {
    fn new() -> Self {
        StackStateIndexer {
            key_to_index: HashMap::new(),
            stack: Vec::new(),
        }
    }

    #[inline]
    fn get_state_count(&self) -> usize {
        self.key_to_index.len()
    }

    #[inline]
    fn frontier_len(&self) -> usize {
        self.stack.len()
    }

    fn index_state(&mut self, board: Board) -> StateIndex {
        let key = board.key();
        match self.key_to_index.get(&key) {
            Some(i) => *i,
            None => {
                let i = self.key_to_index.len();
                self.stack.push((i, board));
                self.key_to_index.insert(key, i);
                i
            }
        }
    }
}
