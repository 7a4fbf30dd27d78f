//! A* search ordered by `f = depth + manhattan`.
//!
//! Uses a `BinaryHeap` with `Reverse` keys for min-heap behavior. Entries
//! with equal `f` pop in insertion order.

use std::cmp::Reverse;
use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap};

use crate::board::Board;
use crate::goal::Goal;
use crate::heuristic::manhattan;
use crate::search::{SearchStats, Solution};
use crate::tree::{Children, NodeId, SearchTree};

/// Frontier ordering key: lowest `f` first, then oldest insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct FrontierKey {
    f_cost: u32,
    sequence: u64,
    node: NodeId,
}

/// Best known path cost for a configuration and whether it has been expanded
#[derive(Debug, Clone, Copy)]
struct Visit {
    g_cost: u32,
    closed: bool,
}

/// Best-first frontier with a sequence counter for FIFO tie-breaking
struct Frontier {
    heap: BinaryHeap<Reverse<FrontierKey>>,
    next_sequence: u64,
}

impl Frontier {
    fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_sequence: 0,
        }
    }

    fn push(&mut self, node: NodeId, f_cost: u32) {
        self.heap.push(Reverse(FrontierKey {
            f_cost,
            sequence: self.next_sequence,
            node,
        }));
        self.next_sequence += 1;
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|Reverse(key)| key.node)
    }
}

/// Shortest solution by move count, or `None` if the goal is unreachable.
///
/// A configuration already waiting on the frontier is queued again only
/// when reached by a strictly shorter path; the older entry is skipped when
/// it surfaces after the configuration was closed.
pub fn solve(root: Board) -> Option<Solution> {
    let goal = Goal::for_board(&root);
    let mut tree = SearchTree::new(root);
    let mut frontier = Frontier::new();
    let mut visits: HashMap<Board, Visit> = HashMap::new();
    let mut nodes_expanded = 0;
    let mut max_search_depth = 0;

    let root = tree.root();
    visits.insert(
        tree.board(root).clone(),
        Visit {
            g_cost: 0,
            closed: false,
        },
    );
    frontier.push(root, 0);

    while let Some(id) = frontier.pop() {
        match visits.get_mut(tree.board(id)) {
            Some(visit) if !visit.closed => visit.closed = true,
            _ => continue,
        }

        let depth = tree.depth(id);
        max_search_depth = max_search_depth.max(depth);

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

        nodes_expanded += 1;
        let children = Children::from_slice(tree.expand(id));
        for child in children {
            let board = tree.board(child);
            let g_cost = tree.depth(child);
            match visits.entry(board.clone()) {
                Entry::Occupied(mut entry) => {
                    let visit = entry.get_mut();
                    if visit.closed || visit.g_cost <= g_cost {
                        continue;
                    }
                    visit.g_cost = g_cost;
                }
                Entry::Vacant(entry) => {
                    entry.insert(Visit {
                        g_cost,
                        closed: false,
                    });
                }
            }
            frontier.push(child, g_cost + manhattan(board, &goal));
        }
    }

    None
}
