//! Tree node representation
//!
//! Nodes never point at each other directly. Links are `NodeId` indices into
//! the tree's `NodeArena`, so parent access is O(1) without a reference cycle.

use std::fmt;

use crate::process::Process;
use crate::util::{Arena, SlotId};

/// Index of a node inside its arena.
pub type NodeId = SlotId;

/// Arena owning every node of one tree.
pub type NodeArena = Arena<TreeNode>;

/// A node's relationship to its own parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BranchRole {
    /// The node is the tree root (no parent).
    Root,

    /// The node hangs off its parent's left link.
    LeftChild,

    /// The node hangs off its parent's right link.
    RightChild,
}

/// A tree node holding one process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// The queued process.
    pub process: Process,

    /// Subtree with strictly smaller vt.
    pub left: Option<NodeId>,

    /// Subtree with greater or equal vt.
    pub right: Option<NodeId>,

    /// Parent link (`None` exactly when `role == Root`).
    pub parent: Option<NodeId>,

    /// Which link of `parent` this node occupies.
    pub role: BranchRole,
}

impl TreeNode {
    /// Create a childless node attached to `parent` in slot `role`.
    pub fn new(process: Process, parent: Option<NodeId>, role: BranchRole) -> Self {
        debug_assert_eq!(parent.is_none(), role == BranchRole::Root);
        Self {
            process,
            left: None,
            right: None,
            parent,
            role,
        }
    }

    /// Check if leaf (no children)
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Child link for the given side.
    #[inline]
    pub fn child(&self, side: BranchRole) -> Option<NodeId> {
        match side {
            BranchRole::LeftChild => self.left,
            BranchRole::RightChild => self.right,
            BranchRole::Root => None,
        }
    }
}

impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let role = match self.role {
            BranchRole::Root => "root",
            BranchRole::LeftChild => "L",
            BranchRole::RightChild => "R",
        };
        write!(f, "{} [{}]", self.process, role)
    }
}
