//! Primitive data types.

/// Data type for tile values. The blank is 0.
pub type Tile = u8;
/// Data type for cell indices on the board.
pub type CellIndex = usize;
/// Data type for state indices.
pub type StateIndex = usize;
/// Data type for measuring search depth in moves.
pub type Depth = usize;
/// Packed representation of a board, used as the visited-set key.
pub type StateKey = u128;
