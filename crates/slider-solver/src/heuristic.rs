//! Manhattan-distance heuristic for the best-first search.
//!
//! Every move shifts exactly one tile by one cell, so the summed distance
//! never overestimates the remaining moves and changes by at most one per
//! move (admissible and consistent).

use crate::board::Board;
use crate::goal::Goal;

/// Grid distance between two linear indices on an `n`-wide board.
pub fn manhattan_distance(from: usize, to: usize, n: usize) -> u32 {
    let rows = (from / n).abs_diff(to / n);
    let cols = (from % n).abs_diff(to % n);
    (rows + cols) as u32
}

/// Sum of Manhattan distances of every non-blank tile from its goal index.
pub fn manhattan(board: &Board, goal: &Goal) -> u32 {
    let n = board.size();
    board
        .tiles()
        .iter()
        .enumerate()
        .filter(|&(_, &value)| value != 0)
        .map(|(index, &value)| manhattan_distance(index, goal.home_of(value), n))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Move;

    #[test]
    fn test_distance_of_single_tile() {
        assert_eq!(manhattan_distance(0, 8, 3), 4);
        assert_eq!(manhattan_distance(5, 2, 3), 1);
        assert_eq!(manhattan_distance(3, 3, 3), 0);
    }

    #[test]
    fn test_goal_has_zero_cost() {
        let goal = Goal::new(4);
        assert_eq!(manhattan(goal.board(), &goal), 0);
    }

    #[test]
    fn test_blank_is_ignored() {
        // Only tile 1 is displaced; the blank sits one cell away from home too.
        let board = Board::parse("1,0,2,3").unwrap();
        assert_eq!(manhattan(&board, &Goal::new(2)), 1);
    }

    #[test]
    fn test_known_board() {
        let board = Board::parse("1,2,5,3,4,0,6,7,8").unwrap();
        assert_eq!(manhattan(&board, &Goal::new(3)), 3);

        let board = Board::parse("6,1,8,4,0,2,7,3,5").unwrap();
        // 6:2 1:0 8:2 4:1 2:1 7:1 3:2 5:1
        assert_eq!(manhattan(&board, &Goal::new(3)), 10);
    }

    #[test]
    fn test_consistent_across_moves() {
        let board = Board::parse("6,1,8,4,0,2,7,3,5").unwrap();
        let goal = Goal::for_board(&board);
        let h = manhattan(&board, &goal);
        for mv in Move::ALL {
            let child = board.apply(mv).unwrap();
            assert_eq!(manhattan(&child, &goal).abs_diff(h), 1);
        }
    }
}
