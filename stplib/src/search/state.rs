use super::*;

use rand::Rng;
use std::fmt;

pub mod indexers;


/// Width and height of the board.
pub const SIDE: usize = 5;
/// Number of cells on the board.
pub const TILE_COUNT: usize = SIDE * SIDE;
/// Tile value of the blank cell.
pub const BLANK: Tile = 0;

/// Bits per cell in the packed state key. Must hold every value in
/// `0..TILE_COUNT`.
const TILE_BITS: u32 = 5;

/// Direction the blank tile moves, swapping with the tile at the target
/// cell.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// All moves in expansion order. This order is a contract: among equal
    /// length solutions the search returns the one whose move sequence
    /// comes first under it.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// Index of the cell the blank swaps with, if the move is legal from
    /// the given blank position.
    pub fn target(self, blank: CellIndex) -> Option<CellIndex> {
        let (row, col) = row_col(blank);
        match self {
            Move::Up if row > 0 => Some(blank - SIDE),
            Move::Down if row < SIDE - 1 => Some(blank + SIDE),
            Move::Left if col > 0 => Some(blank - 1),
            Move::Right if col < SIDE - 1 => Some(blank + 1),
            _ => None,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Up => "Up",
            Move::Down => "Down",
            Move::Left => "Left",
            Move::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// Row and column of a cell index on the board.
pub fn row_col(index: CellIndex) -> (usize, usize) {
    (index / SIDE, index % SIDE)
}

/// A single arrangement of all tile values on the board, row-major.
///
/// A validated board is always a permutation of `0..TILE_COUNT`; see
/// [`crate::io::parse_grid`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Board {
    cells: [Tile; TILE_COUNT],
}

impl Board {
    /// The goal arrangement: tiles in ascending order with the blank last.
    pub const GOAL: Board = {
        let mut cells = [BLANK; TILE_COUNT];
        let mut i = 0;
        while i < TILE_COUNT - 1 {
            cells[i] = (i + 1) as Tile;
            i += 1;
        }
        Board { cells }
    };

    pub fn new(cells: [Tile; TILE_COUNT]) -> Board {
        Board { cells }
    }

    pub fn cells(&self) -> &[Tile; TILE_COUNT] {
        &self.cells
    }

    /// Packs the cells into a single integer, [`TILE_BITS`] bits each.
    /// This is the visited-set key: cheap to build, collision-free, and
    /// evaluated once per generated neighbor.
    pub fn key(&self) -> StateKey {
        let mut key: StateKey = 0;
        for &tile in self.cells.iter() {
            key = (key << TILE_BITS) | tile as StateKey;
        }
        key
    }

    /// Position of the blank cell.
    pub fn blank_index(&self) -> Result<CellIndex, SolveFailure> {
        self.cells
            .iter()
            .position(|&tile| tile == BLANK)
            .ok_or_else(|| {
                SolveFailure::InvariantViolation("no blank tile on the board".to_string())
            })
    }

    fn swapped(&self, a: CellIndex, b: CellIndex) -> Board {
        let mut cells = self.cells;
        cells.swap(a, b);
        Board { cells }
    }

    /// Apply a single blank move to this board. Returns `Ok(None)` when the
    /// move is not legal from the current blank position.
    pub fn apply(&self, mv: Move) -> Result<Option<Board>, SolveFailure> {
        let blank = self.blank_index()?;
        Ok(mv.target(blank).map(|target| self.swapped(blank, target)))
    }

    /// All boards reachable with one blank move, in [`Move::ALL`] order.
    /// Each neighbor is an independent copy; the board itself is never
    /// mutated.
    pub fn neighbors(&self) -> Result<Neighbors, SolveFailure> {
        let blank = self.blank_index()?;
        Ok(Neighbors {
            board: *self,
            blank,
            next_move: 0,
        })
    }

    /// Random walk of `steps` blank moves from the goal, never undoing the
    /// previous move. The result is always solvable; its shortest solution
    /// may be shorter than `steps`.
    pub fn scrambled<R: Rng>(rng: &mut R, steps: usize) -> Board {
        let mut board = Board::GOAL;
        let mut blank: CellIndex = TILE_COUNT - 1;
        let mut last: Option<Move> = None;
        let mut remaining = steps;
        while remaining > 0 {
            let mv = Move::ALL[rng.gen_range(0..Move::ALL.len())];
            if last == Some(mv.opposite()) {
                continue;
            }
            if let Some(target) = mv.target(blank) {
                board = board.swapped(blank, target);
                blank = target;
                last = Some(mv);
                remaining -= 1;
            }
        }
        board
    }
}

/// Iterator over the legal neighbor boards of a single board.
pub struct Neighbors {
    board: Board,
    blank: CellIndex,
    next_move: usize,
}

impl Iterator for Neighbors {
    type Item = (Board, Move);

    fn next(&mut self) -> Option<Self::Item> {
        while self.next_move < Move::ALL.len() {
            let mv = Move::ALL[self.next_move];
            self.next_move += 1;
            if let Some(target) = mv.target(self.blank) {
                return Some((self.board.swapped(self.blank, target), mv));
            }
        }
        None
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(SIDE) {
            for (i, &tile) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                if tile == BLANK {
                    write!(f, "  ")?;
                } else {
                    write!(f, "{:2}", tile)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
