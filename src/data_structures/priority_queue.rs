use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A min-first wrapper around BinaryHeap for lazy-deletion Dijkstra
///
/// Stale entries are not removed on decrease-key; callers skip them on pop by
/// comparing against the current best priority.
#[derive(Debug)]
pub struct BinaryHeapWrapper<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<(P, V)>>,
}

impl<V, P> BinaryHeapWrapper<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        BinaryHeapWrapper {
            heap: BinaryHeap::new(),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the priority queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes an element with the given priority into the priority queue
    pub fn push(&mut self, vertex: V, priority: P) {
        self.heap.push(Reverse((priority, vertex)));
    }

    /// Removes the element with the smallest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|Reverse((priority, vertex))| (vertex, priority))
    }
}

impl<V, P> Default for BinaryHeapWrapper<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordered_float::OrderedFloat;

    #[test]
    fn pops_smallest_priority_first() {
        let mut heap = BinaryHeapWrapper::new();
        heap.push(1usize, OrderedFloat(3.0));
        heap.push(2, OrderedFloat(-1.0));
        heap.push(3, OrderedFloat(2.0));
        assert_eq!(heap.len(), 3);

        assert_eq!(heap.pop(), Some((2, OrderedFloat(-1.0))));
        assert_eq!(heap.pop(), Some((3, OrderedFloat(2.0))));
        assert_eq!(heap.pop(), Some((1, OrderedFloat(3.0))));
        assert!(heap.is_empty());
    }
}
