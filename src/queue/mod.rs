//! The runqueue contract shared by all implementations.
//!
//! A runqueue is a set of processes keyed by label and ordered by virtual
//! time. Besides the usual enqueue/dequeue it answers aggregate queries:
//! how much virtual time sits strictly before or after a given process.
//!
//! Partition law (holds for every present process `p`):
//!   preceding(p) + p.vt + succeeding(p) == total_time()

mod kind;

pub use kind::RunqueueKind;

use std::io;

use crate::process::{sum_vt, Process, TimeSum, Vt};

/// Operations every runqueue implementation provides.
///
/// All operations run to completion on the caller's thread. Absent labels
/// and empty queues are ordinary outcomes, reported through `bool` and
/// `Option` rather than errors.
pub trait Runqueue: std::fmt::Debug + Send {
    /// Insert a process, keeping vt order. No-op if `label` is already queued.
    fn enqueue(&mut self, label: &str, vt: Vt);

    /// Remove and return the label with the smallest vt.
    ///
    /// Among equal vt the earliest enqueued process leaves first. Returns
    /// `None` when the queue is empty.
    fn dequeue(&mut self) -> Option<String>;

    /// Membership test by label.
    fn find_process(&self, label: &str) -> bool;

    /// Remove the named process. Returns `true` iff something was removed.
    fn remove_process(&mut self, label: &str) -> bool;

    /// Sum of vt over processes ranked strictly before `label`.
    fn preceding_process_time(&self, label: &str) -> Option<TimeSum>;

    /// Sum of vt over processes ranked strictly after `label`.
    fn succeeding_process_time(&self, label: &str) -> Option<TimeSum>;

    /// Number of queued processes.
    fn len(&self) -> usize;

    /// Snapshot of all processes in vt order.
    fn processes(&self) -> Vec<Process>;

    /// Which implementation backs this queue.
    fn kind(&self) -> RunqueueKind;

    /// `true` if nothing is queued.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of vt over every queued process.
    fn total_time(&self) -> TimeSum {
        sum_vt(&self.processes())
    }

    /// Write labels in ascending vt order, each followed by a space, then a
    /// single line break.
    fn print_all_processes(&self, sink: &mut dyn io::Write) -> io::Result<()> {
        for process in self.processes() {
            write!(sink, "{} ", process.label)?;
        }
        writeln!(sink)
    }
}
