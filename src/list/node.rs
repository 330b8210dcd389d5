//! Doubly-linked list node

use crate::process::Process;
use crate::util::SlotId;

/// One link of the list: a process plus its neighbours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListNode {
    /// The queued process.
    pub process: Process,

    /// Neighbour with smaller or equal vt (`None` at the head).
    pub prev: Option<SlotId>,

    /// Neighbour with greater or equal vt (`None` at the tail).
    pub next: Option<SlotId>,
}

impl ListNode {
    /// Create a node spliced between `prev` and `next`.
    pub fn new(process: Process, prev: Option<SlotId>, next: Option<SlotId>) -> Self {
        Self {
            process,
            prev,
            next,
        }
    }
}
