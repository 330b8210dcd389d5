//! Binary-search-tree runqueue
//!
//! Unbalanced BST keyed by vt. Ties descend right, so among equal vt the
//! in-order sequence follows insertion order. No rotations are performed:
//! enqueueing in sorted order degenerates the tree into a chain.
//!
//! Every node carries a branch role (root / left child / right child). The
//! role drives the aggregate-time formulas: walking from a node towards the
//! root, each step taken out of a right child adds that parent and its left
//! subtree to the preceding time, and each step out of a left child adds the
//! parent and its right subtree to the succeeding time. Subtree sums are not
//! cached; they are recomputed per query.

mod node;
mod traversal;

pub use node::{BranchRole, NodeArena, NodeId, TreeNode};
pub use traversal::InOrder;

use tracing::{debug, trace};

use crate::process::{Process, TimeSum, Vt};
use crate::queue::{Runqueue, RunqueueKind};

/// Runqueue backed by an unbalanced binary search tree.
#[derive(Debug, Default, Clone)]
pub struct BinarySearchTreeRunqueue {
    arena: NodeArena,
    root: Option<NodeId>,
}

impl BinarySearchTreeRunqueue {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Height of the tree (0 when empty).
    pub fn height(&self) -> usize {
        traversal::height(&self.arena, self.root)
    }

    /// Root node, if any.
    pub fn root(&self) -> Option<&TreeNode> {
        self.root.map(|id| &self.arena[id])
    }

    /// Check every structural invariant of the tree.
    ///
    /// Root has role `Root` and no parent; each child's parent link and role
    /// match the link it hangs from; in-order vt is non-decreasing; the node
    /// count matches the arena.
    pub fn is_well_formed(&self) -> bool {
        if let Some(root) = self.root {
            let node = &self.arena[root];
            if node.role != BranchRole::Root || node.parent.is_some() {
                return false;
            }
        }

        let mut count = 0;
        let mut previous: Option<Vt> = None;
        for id in self.walk() {
            count += 1;
            let node = &self.arena[id];

            if previous.is_some_and(|vt| vt > node.process.vt) {
                return false;
            }
            previous = Some(node.process.vt);

            for side in [BranchRole::LeftChild, BranchRole::RightChild] {
                if let Some(child) = node.child(side) {
                    let child = &self.arena[child];
                    if child.parent != Some(id) || child.role != side {
                        return false;
                    }
                }
            }
        }

        count == self.arena.live()
    }

    fn walk(&self) -> InOrder<'_> {
        InOrder::new(&self.arena, self.root)
    }

    fn find_node(&self, label: &str) -> Option<NodeId> {
        self.walk()
            .find(|&id| self.arena[id].process.has_label(label))
    }

    /// Point whatever link held `node` (parent's child link, or the root) at
    /// `replacement`, which inherits `node`'s parent and role.
    fn replace_in_parent(&mut self, node: NodeId, replacement: Option<NodeId>) {
        let (parent, role) = {
            let n = &self.arena[node];
            (n.parent, n.role)
        };

        match (parent, role) {
            (None, _) => self.root = replacement,
            (Some(p), BranchRole::LeftChild) => self.arena[p].left = replacement,
            (Some(p), BranchRole::RightChild) => self.arena[p].right = replacement,
            (Some(_), BranchRole::Root) => unreachable!("root-tagged node with a parent"),
        }

        if let Some(r) = replacement {
            let promoted = &mut self.arena[r];
            promoted.parent = parent;
            promoted.role = role;
        }
    }

    fn remove_node(&mut self, id: NodeId) -> Process {
        let (left, right) = (self.arena[id].left, self.arena[id].right);

        match (left, right) {
            (None, None) => self.replace_in_parent(id, None),
            (None, Some(r)) => self.replace_in_parent(id, Some(r)),
            (Some(l), None) => self.replace_in_parent(id, Some(l)),
            (Some(l), Some(r)) => {
                let successor = traversal::leftmost(&self.arena, r);

                if successor != r {
                    // Successor is a left child with no left subtree of its own.
                    let orphan = self.arena[successor].right;
                    self.replace_in_parent(successor, orphan);
                    self.arena[successor].right = Some(r);
                    self.arena[r].parent = Some(successor);
                }

                self.arena[successor].left = Some(l);
                self.arena[l].parent = Some(successor);
                self.replace_in_parent(id, Some(successor));

                debug!(
                    removed = %self.arena[id].process,
                    successor = %self.arena[successor].process,
                    "spliced in-order successor into removed slot"
                );
            }
        }

        self.arena.release(id).process
    }
}

impl Runqueue for BinarySearchTreeRunqueue {
    fn enqueue(&mut self, label: &str, vt: Vt) {
        if self.find_node(label).is_some() {
            debug!(label, vt, "duplicate label ignored");
            return;
        }

        let process = Process::new(label, vt);
        let Some(mut current) = self.root else {
            let id = self.arena.alloc(TreeNode::new(process, None, BranchRole::Root));
            self.root = Some(id);
            return;
        };

        loop {
            let node = &self.arena[current];
            let side = if vt < node.process.vt {
                BranchRole::LeftChild
            } else {
                BranchRole::RightChild
            };

            match node.child(side) {
                Some(child) => current = child,
                None => {
                    let id = self
                        .arena
                        .alloc(TreeNode::new(process, Some(current), side));
                    match side {
                        BranchRole::LeftChild => self.arena[current].left = Some(id),
                        _ => self.arena[current].right = Some(id),
                    }
                    trace!(label, vt, ?side, "attached tree node");
                    return;
                }
            }
        }
    }

    fn dequeue(&mut self) -> Option<String> {
        let min = traversal::leftmost(&self.arena, self.root?);
        Some(self.remove_node(min).label)
    }

    fn find_process(&self, label: &str) -> bool {
        self.find_node(label).is_some()
    }

    fn remove_process(&mut self, label: &str) -> bool {
        match self.find_node(label) {
            Some(id) => {
                self.remove_node(id);
                true
            }
            None => false,
        }
    }

    fn preceding_process_time(&self, label: &str) -> Option<TimeSum> {
        let target = self.find_node(label)?;
        let mut time = traversal::subtree_time(&self.arena, self.arena[target].left);

        let mut current = target;
        while let Some(parent) = self.arena[current].parent {
            if self.arena[current].role == BranchRole::RightChild {
                let p = &self.arena[parent];
                time += TimeSum::from(p.process.vt)
                    + traversal::subtree_time(&self.arena, p.left);
            }
            current = parent;
        }

        Some(time)
    }

    fn succeeding_process_time(&self, label: &str) -> Option<TimeSum> {
        let target = self.find_node(label)?;
        let mut time = traversal::subtree_time(&self.arena, self.arena[target].right);

        let mut current = target;
        while let Some(parent) = self.arena[current].parent {
            if self.arena[current].role == BranchRole::LeftChild {
                let p = &self.arena[parent];
                time += TimeSum::from(p.process.vt)
                    + traversal::subtree_time(&self.arena, p.right);
            }
            current = parent;
        }

        Some(time)
    }

    fn len(&self) -> usize {
        self.arena.live()
    }

    fn processes(&self) -> Vec<Process> {
        self.walk()
            .map(|id| self.arena[id].process.clone())
            .collect()
    }

    fn kind(&self) -> RunqueueKind {
        RunqueueKind::Tree
    }

    fn total_time(&self) -> TimeSum {
        traversal::subtree_time(&self.arena, self.root)
    }
}
