//! Various utility functions.

use crate::search::state::{Board, BLANK, SIDE};

use itertools::Itertools;
use num_traits::ToPrimitive;

/// Count inversions in the tile sequence, ignoring the blank.
/// An inversion is a pair of tiles where the larger one comes first in
/// row-major order.
pub fn inversion_count(board: &Board) -> usize {
    board
        .cells()
        .iter()
        .filter(|&&tile| tile != BLANK)
        .tuple_combinations()
        .filter(|(a, b)| a > b)
        .count()
}

/// Solvability test for the odd board width: a permutation can reach the
/// goal iff its inversion count is even. Blank moves along a row keep the
/// count, blank moves along a column change it by an even amount.
pub fn is_solvable(board: &Board) -> bool {
    debug_assert_eq!(SIDE % 2, 1);
    inversion_count(board) % 2 == 0
}

/// Human-readable byte formatting.
pub fn fmt_bytes<T: ToPrimitive>(bytes: T) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    let mut value = match bytes.to_f64() {
        Some(value) => value,
        None => return "N/A".to_string(),
    };
    for unit in UNITS.iter().take(UNITS.len() - 1) {
        if value < 1024.0 {
            return format!("{:.1} {}", value, unit);
        }
        value /= 1024.0;
    }
    format!("{:.1} {}", value, UNITS[UNITS.len() - 1])
}

/// Best-effort resident set size of the current process in bytes.
pub fn process_rss() -> Option<u64> {
    use sysinfo::{ProcessExt, System, SystemExt};
    let pid = sysinfo::get_current_pid().ok()?;
    let mut system = System::new();
    system.refresh_process(pid);
    Some(system.process(pid)?.memory())
}
