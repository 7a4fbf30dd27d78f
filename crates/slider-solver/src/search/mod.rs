//! Search drivers over the sliding-puzzle state space.
//!
//! Each driver takes ownership of a root board, builds its own
//! [`SearchTree`] and returns `None` when the reachable space is exhausted
//! without meeting the goal.
//!
//! `nodes_expanded` is the explored-set size for breadth-first, every popped
//! node (goal included) for depth-first, and popped nodes that were expanded
//! for A*.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::{Board, Move};
use crate::tree::{NodeId, SearchTree};

pub mod astar;
pub mod bfs;
pub mod dfs;

/// Which driver to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Level-synchronous breadth-first search
    Bfs,
    /// Depth-first search with an explicit stack
    Dfs,
    /// A* over Manhattan distance
    Ast,
}

impl Algorithm {
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Ast => "ast",
        }
    }

    /// Run the driver to completion.
    pub fn solve(self, root: Board) -> Option<Solution> {
        log::debug!(
            "starting {} search on {}x{} board",
            self.name(),
            root.size(),
            root.size()
        );
        let solution = match self {
            Algorithm::Bfs => bfs::solve(root),
            Algorithm::Dfs => dfs::solve(root),
            Algorithm::Ast => astar::solve(root),
        };
        match &solution {
            Some(s) => log::debug!(
                "{} found goal at depth {} ({} expanded, {} generated)",
                self.name(),
                s.stats.search_depth,
                s.stats.nodes_expanded,
                s.tree.len()
            ),
            None => log::debug!("{} exhausted the reachable states", self.name()),
        }
        solution
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Traversal counters reported alongside a solution
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    pub nodes_expanded: usize,
    pub search_depth: u32,
    pub max_search_depth: u32,
}

/// A goal node together with the tree that reached it
#[derive(Debug)]
pub struct Solution {
    pub tree: SearchTree,
    pub goal: NodeId,
    pub stats: SearchStats,
}

impl Solution {
    /// Moves from the initial board to the goal.
    pub fn path(&self) -> Vec<Move> {
        self.tree.path_to(self.goal)
    }

    /// Number of moves in [`Solution::path`]
    pub fn cost(&self) -> u32 {
        self.tree.depth(self.goal)
    }

    pub fn goal_board(&self) -> &Board {
        self.tree.board(self.goal)
    }
}
