//! Ordered-array runqueue
//!
//! Processes live in a slot array whose occupied slots form a contiguous,
//! vt-sorted prefix; the tail is empty. Insertion drops the new process into
//! the first empty slot and merge sorts the occupied prefix, then grows the
//! array once the slot index crosses the load threshold. This keeps insert at
//! O(n log n) rather than binary search plus shift.

mod merge_sort;

pub use merge_sort::merge_sort_by_key;

use tracing::{debug, trace};

use crate::process::{sum_vt, Process, TimeSum, Vt};
use crate::queue::{Runqueue, RunqueueKind};

/// Default number of slots in a fresh array.
pub const DEFAULT_INITIAL_CAPACITY: usize = 10;
/// Default capacity multiplier on growth.
pub const DEFAULT_GROWTH_FACTOR: f64 = 1.5;
/// Default fraction of capacity at which the array grows.
pub const DEFAULT_LOAD_FACTOR: f64 = 0.8;
/// Largest accepted growth factor.
pub const MAX_GROWTH_FACTOR: f64 = 16.0;

/// Sizing parameters for [`OrderedArrayRunqueue`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthPolicy {
    /// Slots allocated up front (at least 1).
    pub initial_capacity: usize,
    /// Capacity multiplier applied on growth (greater than 1).
    pub growth_factor: f64,
    /// Grow once the last filled slot index reaches this fraction of capacity.
    pub load_factor: f64,
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            growth_factor: DEFAULT_GROWTH_FACTOR,
            load_factor: DEFAULT_LOAD_FACTOR,
        }
    }
}

impl GrowthPolicy {
    /// Capacity after one growth step from `capacity`.
    ///
    /// Always at least +1, and never more than `MAX_GROWTH_FACTOR` times
    /// `capacity`, whatever factor the policy carries.
    pub fn next_capacity(&self, capacity: usize) -> usize {
        let floor = capacity.saturating_add(1);
        let ceiling = capacity
            .saturating_mul(MAX_GROWTH_FACTOR as usize)
            .max(floor);
        let scaled = (capacity as f64 * self.growth_factor) as usize;
        scaled.clamp(floor, ceiling)
    }

    /// Whether filling `slot` in an array of `capacity` should trigger growth.
    ///
    /// The threshold is `capacity * load_factor` truncated to a whole slot.
    pub fn should_grow(&self, slot: usize, capacity: usize) -> bool {
        slot >= (capacity as f64 * self.load_factor) as usize
    }
}

/// Runqueue backed by a sorted slot array.
#[derive(Debug, Clone)]
pub struct OrderedArrayRunqueue {
    slots: Vec<Option<Process>>,
    policy: GrowthPolicy,
    len: usize,
}

impl Default for OrderedArrayRunqueue {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderedArrayRunqueue {
    /// Create an empty array with the default growth policy.
    pub fn new() -> Self {
        Self::with_policy(GrowthPolicy::default())
    }

    /// Create an empty array with a custom growth policy.
    pub fn with_policy(policy: GrowthPolicy) -> Self {
        let capacity = policy.initial_capacity.max(1);
        Self {
            slots: vec![None; capacity],
            policy,
            len: 0,
        }
    }

    /// Number of slots currently allocated.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Process at `index` in vt order.
    ///
    /// # Panics
    ///
    /// If `index >= len()`. Positional access past the occupied prefix is a
    /// bug in the caller.
    pub fn get(&self, index: usize) -> &Process {
        assert!(
            index < self.len,
            "index {index} out of range for runqueue of {} processes",
            self.len
        );
        self.slots[index]
            .as_ref()
            .unwrap_or_else(|| panic!("hole in occupied prefix at slot {index}"))
    }

    /// Physical slot holding `label`, if any.
    fn position(&self, label: &str) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|p| p.has_label(label)))
    }

    fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    fn grow(&mut self) {
        let old = self.slots.len();
        let new = self.policy.next_capacity(old);
        self.slots.resize(new, None);
        debug!(from = old, to = new, "grew runqueue array");
    }
}

impl Runqueue for OrderedArrayRunqueue {
    fn enqueue(&mut self, label: &str, vt: Vt) {
        if self.position(label).is_some() {
            debug!(label, vt, "duplicate label ignored");
            return;
        }

        let slot = match self.first_empty() {
            Some(slot) => slot,
            None => {
                let slot = self.slots.len();
                self.grow();
                slot
            }
        };

        self.slots[slot] = Some(Process::new(label, vt));
        self.len += 1;
        merge_sort_by_key(&mut self.slots[..=slot], &|s: &Option<Process>| {
            s.as_ref().map(|p| p.vt)
        });
        trace!(label, vt, slot, "inserted into array");

        if self.policy.should_grow(slot, self.slots.len()) {
            self.grow();
        }
    }

    fn dequeue(&mut self) -> Option<String> {
        let head = self.slots.first_mut()?.take()?;
        // Shift every remaining slot one step towards the front.
        self.slots.remove(0);
        self.slots.push(None);
        self.len -= 1;
        Some(head.label)
    }

    fn find_process(&self, label: &str) -> bool {
        self.position(label).is_some()
    }

    fn remove_process(&mut self, label: &str) -> bool {
        let Some(index) = self.position(label) else {
            return false;
        };

        self.slots[index] = None;
        for i in index..self.slots.len() - 1 {
            if self.slots[i].is_none() && self.slots[i + 1].is_none() {
                break;
            }
            self.slots[i] = self.slots[i + 1].take();
        }
        self.len -= 1;
        true
    }

    fn preceding_process_time(&self, label: &str) -> Option<TimeSum> {
        let index = self.position(label)?;
        Some(sum_vt(self.slots[..index].iter().flatten()))
    }

    fn succeeding_process_time(&self, label: &str) -> Option<TimeSum> {
        let index = self.position(label)?;
        Some(sum_vt(self.slots[index + 1..].iter().flatten()))
    }

    fn len(&self) -> usize {
        self.len
    }

    fn processes(&self) -> Vec<Process> {
        self.slots.iter().flatten().cloned().collect()
    }

    fn kind(&self) -> RunqueueKind {
        RunqueueKind::Array
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(queue: &OrderedArrayRunqueue) -> Vec<String> {
        queue.processes().into_iter().map(|p| p.label).collect()
    }

    /// Occupied slots must be a contiguous prefix.
    fn assert_compact(queue: &OrderedArrayRunqueue) {
        let occupied = queue.slots.iter().take_while(|s| s.is_some()).count();
        assert_eq!(occupied, queue.len());
        assert!(queue.slots[occupied..].iter().all(Option::is_none));
    }

    #[test]
    fn test_growth_threshold() {
        let mut queue = OrderedArrayRunqueue::new();
        assert_eq!(queue.capacity(), 10);

        for i in 0..8u64 {
            queue.enqueue(&format!("P{i}"), 100 - i);
        }
        // Slot 7 < 8 so no growth yet.
        assert_eq!(queue.capacity(), 10);

        queue.enqueue("P8", 1);
        // Slot 8 >= 10 * 0.8 triggers growth to 15.
        assert_eq!(queue.capacity(), 15);
        assert_compact(&queue);
        assert_eq!(queue.get(0).label, "P8");
    }

    #[test]
    fn test_full_array_grows_before_insert() {
        let policy = GrowthPolicy {
            initial_capacity: 1,
            growth_factor: 1.5,
            load_factor: 1.0,
        };
        let mut queue = OrderedArrayRunqueue::with_policy(policy);
        queue.enqueue("a", 2);
        assert_eq!(queue.capacity(), 1);
        queue.enqueue("b", 1);
        assert_eq!(queue.capacity(), 2);
        assert_eq!(labels(&queue), ["b", "a"]);
    }

    #[test]
    fn test_next_capacity_always_increases() {
        let policy = GrowthPolicy::default();
        assert_eq!(policy.next_capacity(10), 15);
        assert_eq!(policy.next_capacity(1), 2);
        assert_eq!(policy.next_capacity(2), 3);

        let wild = GrowthPolicy {
            growth_factor: 1e300,
            ..GrowthPolicy::default()
        };
        assert_eq!(wild.next_capacity(10), 160);
        assert_eq!(wild.next_capacity(0), 1);
    }

    #[test]
    fn test_growth_threshold_truncates() {
        let policy = GrowthPolicy::default();
        // 22 * 0.8 = 17.6, truncated to 17.
        assert!(!policy.should_grow(16, 22));
        assert!(policy.should_grow(17, 22));
        // 15 * 0.8 = 12.
        assert!(!policy.should_grow(11, 15));
        assert!(policy.should_grow(12, 15));
    }

    #[test]
    fn test_growth_sequence_from_default() {
        let mut queue = OrderedArrayRunqueue::new();
        let mut seen = vec![queue.capacity()];
        for i in 0..20u64 {
            queue.enqueue(&format!("P{i}"), i);
            if seen.last() != Some(&queue.capacity()) {
                seen.push(queue.capacity());
            }
        }
        // Grows on slot 8 (of 10), 12 (of 15) and 17 (of 22).
        assert_eq!(seen, [10, 15, 22, 33]);
        assert_eq!(queue.len(), 20);
    }

    #[test]
    fn test_ties_insert_after_equals() {
        let mut queue = OrderedArrayRunqueue::new();
        queue.enqueue("a", 5);
        queue.enqueue("b", 3);
        queue.enqueue("c", 5);
        queue.enqueue("d", 3);
        assert_eq!(labels(&queue), ["b", "d", "a", "c"]);
    }

    #[test]
    fn test_dequeue_shifts_left() {
        let mut queue = OrderedArrayRunqueue::new();
        queue.enqueue("a", 3);
        queue.enqueue("b", 1);
        queue.enqueue("c", 2);
        assert_eq!(queue.dequeue().as_deref(), Some("b"));
        assert_compact(&queue);
        assert_eq!(queue.get(0).label, "c");
        assert_eq!(queue.capacity(), 10);
    }

    #[test]
    fn test_remove_compacts() {
        let mut queue = OrderedArrayRunqueue::new();
        for (label, vt) in [("a", 1), ("b", 2), ("c", 3), ("d", 4)] {
            queue.enqueue(label, vt);
        }
        assert!(queue.remove_process("b"));
        assert_compact(&queue);
        assert_eq!(labels(&queue), ["a", "c", "d"]);

        assert!(queue.remove_process("d"));
        assert_compact(&queue);
        assert!(!queue.remove_process("d"));
        assert_eq!(queue.preceding_process_time("c"), Some(1));
        assert_eq!(queue.succeeding_process_time("c"), Some(0));
    }

    #[test]
    fn test_remove_last_physical_slot() {
        let policy = GrowthPolicy {
            initial_capacity: 2,
            growth_factor: 2.0,
            load_factor: 1.0,
        };
        let mut queue = OrderedArrayRunqueue::with_policy(policy);
        queue.enqueue("a", 1);
        queue.enqueue("b", 2);
        assert_eq!(queue.capacity(), 2);
        assert!(queue.remove_process("b"));
        assert_compact(&queue);
        assert!(queue.remove_process("a"));
        assert!(queue.is_empty());
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_get_out_of_range_panics() {
        let mut queue = OrderedArrayRunqueue::new();
        queue.enqueue("a", 1);
        queue.get(1);
    }
}
