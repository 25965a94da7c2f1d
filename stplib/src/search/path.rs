use super::*;

/// Walks the parent links backwards from the goal record and returns the
/// move sequence in start-to-goal order.
///
/// Purely read-only; the result length equals the solution depth.
pub fn reconstruct_moves(records: &[SearchRecord], goal_index: StateIndex) -> Vec<Move> {
    let mut moves: Vec<Move> = Vec::new();
    let mut index = goal_index;
    while let Some((parent, mv)) = records[index].parent {
        moves.push(mv);
        index = parent;
    }
    moves.reverse();
    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_back_to_the_start() {
        let records = vec![
            SearchRecord {
                parent: None,
                depth: 0,
            },
            SearchRecord {
                parent: Some((0, Move::Down)),
                depth: 1,
            },
            SearchRecord {
                parent: Some((1, Move::Right)),
                depth: 2,
            },
            SearchRecord {
                parent: Some((0, Move::Up)),
                depth: 1,
            },
        ];

        assert_eq!(reconstruct_moves(&records, 0), vec![]);
        assert_eq!(reconstruct_moves(&records, 1), vec![Move::Down]);
        assert_eq!(reconstruct_moves(&records, 2), vec![Move::Down, Move::Right]);
        assert_eq!(reconstruct_moves(&records, 3), vec![Move::Up]);
    }
}
