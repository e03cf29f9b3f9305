//! Growable linked queue

use super::node_arena::{NodeArena, NodeHandle};
use super::SequenceContainer;

/// FIFO queue over a singly-linked chain with front and rear handles.
///
/// # Examples
///
/// ```rust
/// use sortlab::containers::{LinkedQueue, SequenceContainer};
///
/// let mut queue = LinkedQueue::new();
/// queue.enqueue(5);
/// queue.enqueue(6);
/// assert_eq!(queue.dequeue(), Some(5));
/// assert_eq!(queue.to_sequence(), vec![6]);
/// ```
#[derive(Debug, Default)]
pub struct LinkedQueue {
    nodes: NodeArena,
    front: Option<NodeHandle>,
    rear: Option<NodeHandle>,
    len: usize,
}

impl LinkedQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value at the rear
    pub fn enqueue(&mut self, value: i64) {
        let node = self.nodes.alloc(value);
        match self.rear {
            Some(rear) => self.nodes.set_next(rear, Some(node)),
            None => self.front = Some(node),
        }
        self.rear = Some(node);
        self.len += 1;
    }

    /// Remove and return the front value, `None` when empty
    pub fn dequeue(&mut self) -> Option<i64> {
        let front = self.front?;
        let (value, next) = self.nodes.release(front)?;
        self.front = next;
        if self.front.is_none() {
            self.rear = None;
        }
        self.len -= 1;
        Some(value)
    }

    /// Front value without removing it
    pub fn peek(&self) -> Option<i64> {
        self.front.and_then(|h| self.nodes.value(h))
    }

    /// Drop every node
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.front = None;
        self.rear = None;
        self.len = 0;
    }
}

impl SequenceContainer for LinkedQueue {
    fn to_sequence(&self) -> Vec<i64> {
        let mut out = Vec::with_capacity(self.len);
        out.extend(self.nodes.iter_from(self.front));
        out
    }

    fn from_sequence(&mut self, seq: &[i64]) {
        self.clear();
        for &value in seq {
            self.enqueue(value);
        }
    }

    #[inline]
    fn size(&self) -> usize {
        self.len
    }
}
