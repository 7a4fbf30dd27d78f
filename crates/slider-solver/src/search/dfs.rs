//! Depth-first search with an explicit stack.
//!
//! Children are pushed in reverse `Up, Down, Left, Right` order so that the
//! `Up` branch is popped first. A configuration is marked explored when it
//! is pushed, so each one enters the stack at most once.
//!
//! `nodes_expanded` counts every popped node, the goal included, so a
//! solved root reports 1.

use std::collections::HashSet;

use crate::board::Board;
use crate::goal::Goal;
use crate::search::{SearchStats, Solution};
use crate::tree::{Children, SearchTree};

/// First solution reached in depth-first order; not necessarily the shortest.
pub fn solve(root: Board) -> Option<Solution> {
    let goal = Goal::for_board(&root);
    let mut tree = SearchTree::new(root);
    let mut frontier = vec![tree.root()];
    let mut explored: HashSet<Board> = HashSet::from([tree.board(tree.root()).clone()]);
    let mut nodes_expanded = 0;
    let mut max_search_depth = 0;

    while let Some(id) = frontier.pop() {
        let depth = tree.depth(id);
        max_search_depth = max_search_depth.max(depth);
        nodes_expanded += 1;

        if goal.is_satisfied(tree.board(id)) {
            let stats = SearchStats {
                nodes_expanded,
                search_depth: depth,
                max_search_depth,
            };
            return Some(Solution {
                tree,
                goal: id,
                stats,
            });
        }

        let children = Children::from_slice(tree.expand(id));
        for &child in children.iter().rev() {
            let board = tree.board(child);
            if !explored.contains(board) {
                explored.insert(board.clone());
                frontier.push(child);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Move;

    #[test]
    fn test_root_already_solved() {
        let solution = solve(Board::parse("0,1,2,3,4,5,6,7,8").unwrap()).unwrap();
        assert_eq!(solution.cost(), 0);
        assert_eq!(
            solution.stats,
            SearchStats {
                nodes_expanded: 1,
                search_depth: 0,
                max_search_depth: 0,
            }
        );
    }

    #[test]
    fn test_up_branch_is_explored_first() {
        // Blank at the bottom left: legal moves are Up and Right, and the
        // goal is one Up away.
        let solution = solve(Board::parse("2,1,0,3").unwrap()).unwrap();
        assert_eq!(solution.path(), vec![Move::Up]);
        // Root and the Up child are both popped and tested.
        assert_eq!(solution.stats.nodes_expanded, 2);
        assert_eq!(solution.stats.search_depth, 1);
    }

    #[test]
    fn test_solution_is_valid_but_may_be_long() {
        let root = Board::parse("1,2,5,3,4,0,6,7,8").unwrap();
        let solution = solve(root.clone()).unwrap();
        let path = solution.path();

        assert_eq!(path.len() as u32, solution.stats.search_depth);
        assert_eq!(root.apply_path(&path).as_ref(), Some(solution.goal_board()));
        assert!(solution.stats.max_search_depth >= solution.stats.search_depth);
        assert!(path.len() >= 3);
    }

    #[test]
    fn test_unsolvable_board_exhausts() {
        assert!(solve(Board::parse("1,2,0,3").unwrap()).is_none());
    }
}
