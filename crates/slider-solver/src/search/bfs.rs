//! Level-synchronous breadth-first search.
//!
//! Each round drains exactly the nodes queued by the previous round, so the
//! round counter is the depth of everything popped in it. Children are
//! queued without checking the explored set; duplicates are dropped when
//! they are popped, which keeps any configuration from being expanded twice.

use std::collections::{HashSet, VecDeque};

use crate::board::Board;
use crate::goal::Goal;
use crate::search::{SearchStats, Solution};
use crate::tree::{NodeId, SearchTree};

/// Shortest solution by move count, or `None` if the goal is unreachable.
pub fn solve(root: Board) -> Option<Solution> {
    let goal = Goal::for_board(&root);
    let mut tree = SearchTree::new(root);
    let mut frontier: VecDeque<NodeId> = VecDeque::from([tree.root()]);
    let mut explored: HashSet<Board> = HashSet::new();
    let mut level: u32 = 0;

    while !frontier.is_empty() {
        let batch: Vec<NodeId> = frontier.drain(..).collect();

        for id in batch {
            if goal.is_satisfied(tree.board(id)) {
                // Anything still queued belongs to the next level.
                let max_search_depth = if frontier.is_empty() { level } else { level + 1 };
                let stats = SearchStats {
                    nodes_expanded: explored.len(),
                    search_depth: level,
                    max_search_depth,
                };
                return Some(Solution {
                    tree,
                    goal: id,
                    stats,
                });
            }

            if explored.contains(tree.board(id)) {
                continue;
            }
            explored.insert(tree.board(id).clone());
            frontier.extend(tree.expand(id).iter().copied());
        }

        level += 1;
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Move;

    #[test]
    fn test_root_already_solved() {
        let solution = solve(Board::parse("0,1,2,3").unwrap()).unwrap();
        assert!(solution.path().is_empty());
        assert_eq!(
            solution.stats,
            SearchStats {
                nodes_expanded: 0,
                search_depth: 0,
                max_search_depth: 0,
            }
        );
    }

    #[test]
    fn test_three_move_board() {
        let solution = solve(Board::parse("1,2,5,3,4,0,6,7,8").unwrap()).unwrap();
        assert_eq!(solution.path(), vec![Move::Up, Move::Left, Move::Left]);
        assert_eq!(solution.stats.search_depth, 3);
        assert_eq!(solution.stats.max_search_depth, 4);
        assert_eq!(solution.stats.nodes_expanded, 10);
    }

    #[test]
    fn test_one_move_from_goal() {
        let solution = solve(Board::parse("1,0,2,3").unwrap()).unwrap();
        assert_eq!(solution.path(), vec![Move::Left]);
        // The Down child is expanded before the Left child matches.
        assert_eq!(solution.stats.nodes_expanded, 2);
        assert_eq!(solution.stats.search_depth, 1);
        assert_eq!(solution.stats.max_search_depth, 2);
    }

    #[test]
    fn test_unsolvable_board_exhausts() {
        assert!(solve(Board::parse("1,2,0,3").unwrap()).is_none());
    }
}
