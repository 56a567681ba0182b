use std::collections::VecDeque;

/// A first-in-first-out queue of vertices that holds each vertex at most once
///
/// Pairs the queue with a per-vertex on-queue marker: pushing a vertex that
/// is already waiting is a no-op, and popping clears its marker so it can be
/// queued again later.
#[derive(Debug, Clone)]
pub struct VertexQueue {
    queue: VecDeque<usize>,
    on_queue: Vec<bool>,
}

impl VertexQueue {
    /// Creates an empty queue for vertices in `[0, vertex_count)`
    pub fn new(vertex_count: usize) -> Self {
        VertexQueue {
            queue: VecDeque::new(),
            on_queue: vec![false; vertex_count],
        }
    }

    /// Returns true if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Returns the number of waiting vertices
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Appends `vertex` unless it is already waiting; returns whether it was added
    pub fn push(&mut self, vertex: usize) -> bool {
        if self.on_queue[vertex] {
            return false;
        }
        self.on_queue[vertex] = true;
        self.queue.push_back(vertex);
        true
    }

    /// Removes the vertex that has waited longest
    pub fn pop(&mut self) -> Option<usize> {
        let vertex = self.queue.pop_front()?;
        self.on_queue[vertex] = false;
        Some(vertex)
    }

    pub fn contains(&self, vertex: usize) -> bool {
        self.on_queue.get(vertex).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_insertion_order() {
        let mut q = VertexQueue::new(4);
        q.push(2);
        q.push(0);
        q.push(3);
        assert_eq!(q.pop(), Some(2));
        assert_eq!(q.pop(), Some(0));
        assert_eq!(q.pop(), Some(3));
        assert_eq!(q.pop(), None);
    }

    #[test]
    fn ignores_duplicates_while_waiting() {
        let mut q = VertexQueue::new(3);
        assert!(q.push(1));
        assert!(!q.push(1));
        assert_eq!(q.len(), 1);
        assert!(q.contains(1));

        assert_eq!(q.pop(), Some(1));
        assert!(!q.contains(1));
        assert!(q.push(1));
        assert!(!q.is_empty());
    }
}
