//! Growable singly-linked list with O(1) append

use super::node_arena::{NodeArena, NodeHandle};
use super::SequenceContainer;

/// Singly-linked list of `i64` that tracks its tail.
///
/// Appending never walks the chain. Nodes are owned by an internal
/// [`NodeArena`], so `from_sequence` and `clear` release every node at once.
///
/// # Examples
///
/// ```rust
/// use sortlab::containers::{LinkedList, SequenceContainer};
///
/// let mut list = LinkedList::new();
/// list.add(3);
/// list.add(1);
/// assert_eq!(list.to_sequence(), vec![3, 1]);
/// ```
#[derive(Debug, Default)]
pub struct LinkedList {
    nodes: NodeArena,
    head: Option<NodeHandle>,
    tail: Option<NodeHandle>,
    len: usize,
}

impl LinkedList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value at the tail
    pub fn add(&mut self, value: i64) {
        let node = self.nodes.alloc(value);
        match self.tail {
            Some(tail) => self.nodes.set_next(tail, Some(node)),
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Remove and return the head value
    pub fn remove_first(&mut self) -> Option<i64> {
        let head = self.head?;
        let (value, next) = self.nodes.release(head)?;
        self.head = next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Some(value)
    }

    /// First value
    pub fn first(&self) -> Option<i64> {
        self.head.and_then(|h| self.nodes.value(h))
    }

    /// Last value
    pub fn last(&self) -> Option<i64> {
        self.tail.and_then(|t| self.nodes.value(t))
    }

    /// Iterate head to tail
    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.nodes.iter_from(self.head)
    }

    /// Drop every node
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }
}

impl SequenceContainer for LinkedList {
    fn to_sequence(&self) -> Vec<i64> {
        let mut out = Vec::with_capacity(self.len);
        out.extend(self.iter());
        out
    }

    fn from_sequence(&mut self, seq: &[i64]) {
        self.clear();
        for &value in seq {
            self.add(value);
        }
    }

    #[inline]
    fn size(&self) -> usize {
        self.len
    }
}
