//! Borrowing iterator over list links in either direction.

use crate::process::Process;
use crate::util::{Arena, SlotId};

use super::node::ListNode;

/// Walks the list head→tail with `next()` and tail→head with `next_back()`.
#[derive(Debug)]
pub struct Iter<'a> {
    nodes: &'a Arena<ListNode>,
    front: Option<SlotId>,
    back: Option<SlotId>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(super) fn new(
        nodes: &'a Arena<ListNode>,
        head: Option<SlotId>,
        tail: Option<SlotId>,
        len: usize,
    ) -> Self {
        Self {
            nodes,
            front: head,
            back: tail,
            remaining: len,
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Process;

    fn next(&mut self) -> Option<&'a Process> {
        if self.remaining == 0 {
            return None;
        }
        let nodes = self.nodes;
        let node = &nodes[self.front?];
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.process)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let nodes = self.nodes;
        let node = &nodes[self.back?];
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.process)
    }
}

impl ExactSizeIterator for Iter<'_> {}
