//! Ordered doubly-linked-list runqueue
//!
//! Links are kept in vt order: head→tail ascending, tail→head descending.
//! Positional access walks from whichever end is closer, so reaching index
//! `i` costs O(min(i, size - i)).

mod iter;
mod node;

pub use iter::Iter;
pub use node::ListNode;

use tracing::{debug, trace};

use crate::process::{sum_vt, Process, TimeSum, Vt};
use crate::queue::{Runqueue, RunqueueKind};
use crate::util::{Arena, SlotId};

/// Runqueue backed by a sorted doubly-linked list.
#[derive(Debug, Default, Clone)]
pub struct OrderedListRunqueue {
    nodes: Arena<ListNode>,
    head: Option<SlotId>,
    tail: Option<SlotId>,
    size: usize,
}

impl OrderedListRunqueue {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate processes in vt order (reversible).
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.nodes, self.head, self.tail, self.size)
    }

    /// Process at `index` in vt order.
    ///
    /// # Panics
    ///
    /// If `index >= len()`.
    pub fn get(&self, index: usize) -> &Process {
        &self.nodes[self.node_at(index)].process
    }

    /// Node holding `label`, if any.
    fn locate(&self, label: &str) -> Option<SlotId> {
        let mut cursor = self.head;
        while let Some(id) = cursor {
            let node = &self.nodes[id];
            if node.process.has_label(label) {
                return Some(id);
            }
            cursor = node.next;
        }
        None
    }

    /// Index a new process with `vt` takes: after every node with vt <= it.
    fn insert_position(&self, vt: Vt) -> usize {
        self.iter().filter(|p| p.vt <= vt).count()
    }

    /// Node at `index`, walking from the nearer end.
    fn node_at(&self, index: usize) -> SlotId {
        assert!(
            index < self.size,
            "index {index} out of range for list of {} processes",
            self.size
        );

        let missing = || panic!("list links shorter than size {}", self.size);
        if index < self.size / 2 {
            let mut cursor = self.head.unwrap_or_else(missing);
            for _ in 0..index {
                cursor = self.nodes[cursor].next.unwrap_or_else(missing);
            }
            cursor
        } else {
            let mut cursor = self.tail.unwrap_or_else(missing);
            for _ in index + 1..self.size {
                cursor = self.nodes[cursor].prev.unwrap_or_else(missing);
            }
            cursor
        }
    }

    /// Splice `process` in so that it ends up at `index`.
    ///
    /// # Panics
    ///
    /// If `index > len()`.
    fn insert_at(&mut self, index: usize, process: Process) {
        assert!(
            index <= self.size,
            "insert index {index} out of range for list of {} processes",
            self.size
        );

        if index == self.size {
            self.push_back(process);
        } else {
            let successor = self.node_at(index);
            self.insert_before(successor, process);
        }
    }

    fn push_back(&mut self, process: Process) {
        let old_tail = self.tail;
        let id = self.nodes.alloc(ListNode::new(process, old_tail, None));
        match old_tail {
            Some(tail) => self.nodes[tail].next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.size += 1;
    }

    fn insert_before(&mut self, successor: SlotId, process: Process) {
        let predecessor = self.nodes[successor].prev;
        let id = self
            .nodes
            .alloc(ListNode::new(process, predecessor, Some(successor)));
        match predecessor {
            Some(prev) => self.nodes[prev].next = Some(id),
            None => self.head = Some(id),
        }
        self.nodes[successor].prev = Some(id);
        self.size += 1;
    }

    /// Bypass `id` from its neighbours (or head/tail) and free it.
    fn unlink(&mut self, id: SlotId) -> Process {
        let ListNode {
            process,
            prev,
            next,
        } = self.nodes.release(id);

        match prev {
            Some(p) => self.nodes[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.nodes[n].prev = prev,
            None => self.tail = prev,
        }
        self.size -= 1;
        process
    }
}

impl Runqueue for OrderedListRunqueue {
    fn enqueue(&mut self, label: &str, vt: Vt) {
        if self.locate(label).is_some() {
            debug!(label, vt, "duplicate label ignored");
            return;
        }

        let index = self.insert_position(vt);
        self.insert_at(index, Process::new(label, vt));
        trace!(label, vt, index, "spliced into list");
    }

    fn dequeue(&mut self) -> Option<String> {
        let head = self.head?;
        Some(self.unlink(head).label)
    }

    fn find_process(&self, label: &str) -> bool {
        self.locate(label).is_some()
    }

    fn remove_process(&mut self, label: &str) -> bool {
        match self.locate(label) {
            Some(id) => {
                self.unlink(id);
                true
            }
            None => false,
        }
    }

    fn preceding_process_time(&self, label: &str) -> Option<TimeSum> {
        let id = self.locate(label)?;
        let mut time = 0;
        let mut cursor = self.nodes[id].prev;
        while let Some(prev) = cursor {
            time += TimeSum::from(self.nodes[prev].process.vt);
            cursor = self.nodes[prev].prev;
        }
        Some(time)
    }

    fn succeeding_process_time(&self, label: &str) -> Option<TimeSum> {
        let id = self.locate(label)?;
        let mut time = 0;
        let mut cursor = self.nodes[id].next;
        while let Some(next) = cursor {
            time += TimeSum::from(self.nodes[next].process.vt);
            cursor = self.nodes[next].next;
        }
        Some(time)
    }

    fn len(&self) -> usize {
        self.size
    }

    fn processes(&self) -> Vec<Process> {
        self.iter().cloned().collect()
    }

    fn kind(&self) -> RunqueueKind {
        RunqueueKind::List
    }

    fn total_time(&self) -> TimeSum {
        sum_vt(self.iter())
    }
}
