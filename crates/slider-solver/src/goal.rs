//! The solved configuration for a given board size.

use crate::board::Board;

/// Target configuration `0, 1, ..., n*n - 1`.
///
/// Built once per search and handed to the goal test and the heuristic.
#[derive(Debug, Clone)]
pub struct Goal {
    board: Board,
    /// `home[v]` is the index tile `v` occupies in the goal.
    home: Vec<usize>,
}

impl Goal {
    pub fn new(n: usize) -> Self {
        let board = Board::solved(n);
        let mut home = vec![0; board.tiles().len()];
        for (index, &value) in board.tiles().iter().enumerate() {
            home[usize::from(value)] = index;
        }
        Self { board, home }
    }

    /// Goal for boards the same size as `board`.
    pub fn for_board(board: &Board) -> Self {
        Self::new(board.size())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Goal index of `value`
    pub fn home_of(&self, value: u16) -> usize {
        self.home[usize::from(value)]
    }

    pub fn is_satisfied(&self, board: &Board) -> bool {
        board.tiles() == self.board.tiles()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_is_identity() {
        let goal = Goal::new(3);
        assert_eq!(goal.board().tiles(), &[0, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(goal.board().blank(), 0);
        for v in 0..9u16 {
            assert_eq!(goal.home_of(v), usize::from(v));
        }
    }

    #[test]
    fn test_is_satisfied() {
        let goal = Goal::new(2);
        assert!(goal.is_satisfied(&Board::parse("0,1,2,3").unwrap()));
        assert!(!goal.is_satisfied(&Board::parse("1,0,2,3").unwrap()));
    }
}
