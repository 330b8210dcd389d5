//! Stable top-down merge sort over a slot range.
//!
//! Elements are moved, never cloned: each merge takes the halves out into
//! scratch buffers (leaving `T::default()` behind) and writes them back in
//! order. Equal keys keep their relative order.

use std::mem;

/// Sort `items` by `key`, stably.
pub fn merge_sort_by_key<T, K, F>(items: &mut [T], key: &F)
where
    T: Default,
    K: Ord,
    F: Fn(&T) -> K,
{
    if items.len() <= 1 {
        return;
    }

    let mid = items.len() / 2;
    {
        let (left, right) = items.split_at_mut(mid);
        merge_sort_by_key(left, key);
        merge_sort_by_key(right, key);
    }
    merge(items, mid, key);
}

/// Merge the sorted runs `items[..mid]` and `items[mid..]`.
fn merge<T, K, F>(items: &mut [T], mid: usize, key: &F)
where
    T: Default,
    K: Ord,
    F: Fn(&T) -> K,
{
    let left: Vec<T> = items[..mid].iter_mut().map(mem::take).collect();
    let right: Vec<T> = items[mid..].iter_mut().map(mem::take).collect();
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    for slot in items.iter_mut() {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => key(l) <= key(r),
            (Some(_), None) => true,
            (None, _) => false,
        };
        let next = if take_left { left.next() } else { right.next() };
        *slot = next.unwrap_or_default();
    }
}
