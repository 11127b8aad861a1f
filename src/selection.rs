//! Heap-backed top-K selection.
//!
//! Selects the K largest elements of a sequence in O(n log K) by keeping a
//! bounded min-heap of the best K seen so far, then draining it — which
//! yields the survivors in ascending order by the heap invariant. The full
//! input is never sorted.

use crate::collections::ArrayHeap;

/// Return the `k` largest elements of `items` in ascending order.
///
/// `k == 0` returns an empty vector; `k` at or above the sequence length
/// returns every element, fully sorted ascending. (A negative `k` is
/// unrepresentable: the parameter is unsigned by construction.)
pub fn top_k_sort<T: Ord>(k: usize, items: impl IntoIterator<Item = T>) -> Vec<T> {
    if k == 0 {
        return Vec::new();
    }

    let mut heap = ArrayHeap::with_capacity(k);
    for item in items {
        if heap.len() < k {
            heap.insert(item);
        } else if let Ok(min) = heap.peek_min() {
            // The heap is full; only a value beating the current minimum
            // belongs in the top K.
            if item > *min {
                heap.remove_min().ok();
                heap.insert(item);
            }
        }
    }

    let mut sorted = Vec::with_capacity(heap.len());
    while let Ok(value) = heap.remove_min() {
        sorted.push(value);
    }
    sorted
}
