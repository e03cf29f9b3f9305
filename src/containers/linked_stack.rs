//! Growable linked stack
//!
//! Each node owns the rest of the chain through a `Box`. Dropping and
//! formatting never walk the chain recursively, so a stack of millions of
//! nodes does not recurse once per node.

use super::SequenceContainer;
use std::fmt;

struct Node {
    value: i64,
    next: Option<Box<Node>>,
}

/// LIFO stack over an owned chain of boxed nodes.
///
/// # Examples
///
/// ```rust
/// use sortlab::containers::{LinkedStack, SequenceContainer};
///
/// let mut stack = LinkedStack::new();
/// stack.from_sequence(&[1, 2, 3]);
/// assert_eq!(stack.to_sequence(), vec![3, 2, 1]);
/// assert_eq!(stack.pop(), Some(3));
/// assert_eq!(stack.size(), 2);
/// ```
#[derive(Default)]
pub struct LinkedStack {
    top: Option<Box<Node>>,
    len: usize,
}

impl LinkedStack {
    /// Create an empty stack
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a value on top
    pub fn push(&mut self, value: i64) {
        let next = self.top.take();
        self.top = Some(Box::new(Node { value, next }));
        self.len += 1;
    }

    /// Pop the top value, `None` when empty
    pub fn pop(&mut self) -> Option<i64> {
        self.top.take().map(|node| {
            let node = *node;
            self.top = node.next;
            self.len -= 1;
            node.value
        })
    }

    /// Top value without removing it
    pub fn peek(&self) -> Option<i64> {
        self.top.as_ref().map(|node| node.value)
    }

    /// Iterate top to bottom
    pub fn iter(&self) -> Iter<'_> {
        Iter { next: self.top.as_deref() }
    }

    /// Drop every node
    pub fn clear(&mut self) {
        let mut cursor = self.top.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
        self.len = 0;
    }
}

impl fmt::Debug for LinkedStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedStack")
            .field("len", &self.len)
            .field("top", &self.peek())
            .finish()
    }
}

impl Drop for LinkedStack {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Top-to-bottom iterator over a [`LinkedStack`]
pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl fmt::Debug for Iter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("next", &self.next.map(|node| node.value))
            .finish()
    }
}

impl Iterator for Iter<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            node.value
        })
    }
}

impl SequenceContainer for LinkedStack {
    fn to_sequence(&self) -> Vec<i64> {
        let mut out = Vec::with_capacity(self.len);
        out.extend(self.iter());
        out
    }

    fn from_sequence(&mut self, seq: &[i64]) {
        self.clear();
        for &value in seq {
            self.push(value);
        }
    }

    #[inline]
    fn size(&self) -> usize {
        self.len
    }

}
