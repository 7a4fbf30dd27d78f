//! Arena-backed search tree.
//!
//! The tree owns every node it creates. A child refers to its parent by
//! [`NodeId`] only, which is all path reconstruction needs.

use std::cell::OnceCell;

use smallvec::SmallVec;

use crate::board::{Board, Move};

/// Children of one node; a blank never has more than four moves.
pub type Children = SmallVec<[NodeId; 4]>;

/// Index of a node inside its [`SearchTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// A board together with the way the search reached it
#[derive(Debug)]
pub struct Node {
    board: Board,
    parent: Option<NodeId>,
    action: Option<Move>,
    depth: u32,
    /// Filled by the first [`SearchTree::expand`], read-only afterwards.
    children: OnceCell<Children>,
}

impl Node {
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// `None` for the root
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Move that produced this node; `None` marks the initial state.
    pub fn action(&self) -> Option<Move> {
        self.action
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Children in `Up, Down, Left, Right` order, once expanded.
    pub fn children(&self) -> Option<&[NodeId]> {
        self.children.get().map(|c| c.as_slice())
    }
}

/// Every node generated by one search, rooted at the initial board
#[derive(Debug)]
pub struct SearchTree {
    nodes: Vec<Node>,
}

impl SearchTree {
    pub fn new(root: Board) -> Self {
        Self {
            nodes: vec![Node {
                board: root,
                parent: None,
                action: None,
                depth: 0,
                children: OnceCell::new(),
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn board(&self, id: NodeId) -> &Board {
        &self.nodes[id.0].board
    }

    pub fn depth(&self, id: NodeId) -> u32 {
        self.nodes[id.0].depth
    }

    /// Number of nodes generated so far, root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Generate the children of `id`.
    ///
    /// Idempotent: the first call creates one fresh node per legal move in
    /// `Up, Down, Left, Right` order; later calls return the same ids.
    pub fn expand(&mut self, id: NodeId) -> &[NodeId] {
        let children = match self.nodes[id.0].children.get() {
            Some(_) => None,
            None => Some(self.generate(id)),
        };
        self.nodes[id.0]
            .children
            .get_or_init(|| children.unwrap_or_default())
            .as_slice()
    }

    fn generate(&mut self, id: NodeId) -> Children {
        let parent = &self.nodes[id.0];
        let depth = parent.depth + 1;
        let successors: SmallVec<[(Move, Board); 4]> = parent.board.successors().collect();

        let mut children = Children::new();
        for (mv, board) in successors {
            let child = NodeId(self.nodes.len());
            self.nodes.push(Node {
                board,
                parent: Some(id),
                action: Some(mv),
                depth,
                children: OnceCell::new(),
            });
            children.push(child);
        }
        children
    }

    /// Moves leading from the root to `id`, in order.
    pub fn path_to(&self, id: NodeId) -> Vec<Move> {
        let mut path = Vec::with_capacity(self.depth(id) as usize);
        let mut current = self.node(id);
        while let (Some(mv), Some(parent)) = (current.action, current.parent) {
            path.push(mv);
            current = self.node(parent);
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(tiles: &str) -> SearchTree {
        SearchTree::new(Board::parse(tiles).unwrap())
    }

    #[test]
    fn test_expand_is_memoized() {
        let mut tree = tree("1,2,5,3,4,0,6,7,8");
        let root = tree.root();
        let first: Vec<NodeId> = tree.expand(root).to_vec();
        let generated = tree.len();
        let second: Vec<NodeId> = tree.expand(root).to_vec();

        assert_eq!(first, second);
        assert_eq!(tree.len(), generated, "second expand must not allocate nodes");
        assert_eq!(tree.node(root).children(), Some(first.as_slice()));
    }

    #[test]
    fn test_children_carry_depth_action_and_parent() {
        let mut tree = tree("1,2,3,4,0,5,6,7,8");
        let root = tree.root();
        let children = tree.expand(root).to_vec();

        let actions: Vec<Option<Move>> =
            children.iter().map(|&c| tree.node(c).action()).collect();
        assert_eq!(
            actions,
            Move::ALL.iter().copied().map(Some).collect::<Vec<_>>()
        );
        for &child in &children {
            assert_eq!(tree.depth(child), 1);
            assert_eq!(tree.node(child).parent(), Some(root));
            assert!(tree.node(child).children().is_none());
        }
    }

    #[test]
    fn test_children_differ_by_one_blank_swap() {
        let mut tree = tree("6,1,8,4,0,2,7,3,5");
        let root = tree.root();
        let parent = tree.board(root).clone();
        let children = tree.expand(root).to_vec();
        for child in children {
            let board = tree.board(child);
            let diffs: Vec<usize> = (0..parent.tiles().len())
                .filter(|&i| parent.tiles()[i] != board.tiles()[i])
                .collect();
            assert_eq!(diffs.len(), 2);
            assert!(diffs.contains(&parent.blank()));
            assert!(diffs.contains(&board.blank()));
            let (a, b) = (parent.blank(), board.blank());
            let n = parent.size();
            assert!(a.abs_diff(b) == 1 || a.abs_diff(b) == n);
        }
    }

    #[test]
    fn test_path_to_walks_back_to_root() {
        let mut tree = tree("1,2,5,3,4,0,6,7,8");
        let root = tree.root();
        assert!(tree.path_to(root).is_empty());

        let up = tree.expand(root)[0];
        let grandchildren = tree.expand(up).to_vec();
        let left = grandchildren
            .into_iter()
            .find(|&c| tree.node(c).action() == Some(Move::Left))
            .unwrap();
        assert_eq!(tree.path_to(left), vec![Move::Up, Move::Left]);
        assert_eq!(tree.depth(left), 2);
    }
}
