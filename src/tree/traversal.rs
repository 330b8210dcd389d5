//! Stack-based traversal over the arena tree
//!
//! The tree is unbalanced, so height can reach n. Every walk here keeps an
//! explicit stack instead of recursing.

use crate::process::TimeSum;

use super::node::{NodeArena, NodeId};

/// In-order (ascending vt) iterator over node ids.
#[derive(Debug)]
pub struct InOrder<'a> {
    arena: &'a NodeArena,

    /// Nodes whose left subtree is done but which are not yet yielded
    stack: Vec<NodeId>,
}

impl<'a> InOrder<'a> {
    /// Start an in-order walk of the subtree rooted at `root`.
    pub fn new(arena: &'a NodeArena, root: Option<NodeId>) -> Self {
        let mut walk = Self {
            arena,
            stack: Vec::new(),
        };
        walk.push_left_spine(root);
        walk
    }

    fn push_left_spine(&mut self, mut current: Option<NodeId>) {
        while let Some(id) = current {
            self.stack.push(id);
            current = self.arena[id].left;
        }
    }
}

impl Iterator for InOrder<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.push_left_spine(self.arena[id].right);
        Some(id)
    }
}

/// Sum of vt over the subtree rooted at `root` (0 for an empty subtree).
///
/// Computed on demand: O(size of subtree).
pub fn subtree_time(arena: &NodeArena, root: Option<NodeId>) -> TimeSum {
    let mut total = 0;
    let mut pending: Vec<NodeId> = root.into_iter().collect();

    while let Some(id) = pending.pop() {
        let node = &arena[id];
        total += TimeSum::from(node.process.vt);
        pending.extend(node.left);
        pending.extend(node.right);
    }

    total
}

/// Leftmost (minimum vt) node of the subtree rooted at `start`.
pub fn leftmost(arena: &NodeArena, start: NodeId) -> NodeId {
    let mut current = start;
    while let Some(left) = arena[current].left {
        current = left;
    }
    current
}

/// Height of the subtree rooted at `root` (0 for empty, 1 for a single node).
pub fn height(arena: &NodeArena, root: Option<NodeId>) -> usize {
    let mut deepest = 0;
    let mut pending: Vec<(NodeId, usize)> = root.map(|id| (id, 1)).into_iter().collect();

    while let Some((id, depth)) = pending.pop() {
        deepest = deepest.max(depth);
        let node = &arena[id];
        pending.extend(node.left.map(|child| (child, depth + 1)));
        pending.extend(node.right.map(|child| (child, depth + 1)));
    }

    deepest
}
