use std::cmp::Ordering;

/// Priority queue entry keyed by an `f64` cost.
///
/// Wrap in `std::cmp::Reverse` to use `BinaryHeap` as a min-heap. Entries
/// with equal cost come out in push order (`sequence`), which keeps the
/// algorithms deterministic.
#[derive(Debug, Clone)]
pub struct HeapEntry<V> {
    pub cost: f64,
    pub sequence: u64,
    pub item: V,
}

impl<V> HeapEntry<V> {
    pub fn new(cost: f64, sequence: u64, item: V) -> Self {
        HeapEntry {
            cost,
            sequence,
            item,
        }
    }
}

impl<V> PartialEq for HeapEntry<V> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V> Eq for HeapEntry<V> {}

impl<V> PartialOrd for HeapEntry<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V> Ord for HeapEntry<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}
