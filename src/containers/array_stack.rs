//! Fixed-capacity array stack

use super::SequenceContainer;
use std::fmt;

/// Stack over a contiguous buffer with a capacity fixed at construction.
///
/// `to_sequence` reports top to bottom, so the most recently pushed value
/// comes first.
///
/// # Examples
///
/// ```rust
/// use sortlab::containers::{ArrayStack, SequenceContainer};
///
/// let mut stack = ArrayStack::with_capacity(3);
/// stack.from_sequence(&[1, 2, 3]);
/// assert_eq!(stack.to_sequence(), vec![3, 2, 1]);
/// assert_eq!(stack.pop(), Some(3));
/// ```
pub struct ArrayStack {
    data: Box<[i64]>,
    /// Number of occupied slots; the top lives at `len - 1`
    len: usize,
}

impl ArrayStack {
    /// Create an empty stack holding at most `capacity` values
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: vec![0; capacity].into_boxed_slice(),
            len: 0,
        }
    }

    /// Push a value. Returns `false` if the stack is full.
    #[inline]
    pub fn push(&mut self, value: i64) -> bool {
        if self.len >= self.data.len() {
            return false;
        }
        self.data[self.len] = value;
        self.len += 1;
        true
    }

    /// Pop the top value, `None` when empty
    #[inline]
    pub fn pop(&mut self) -> Option<i64> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(self.data[self.len])
    }

    /// Top value without removing it
    #[inline]
    pub fn peek(&self) -> Option<i64> {
        self.len.checked_sub(1).map(|top| self.data[top])
    }

    /// Returns true if no more values fit
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.data.len()
    }

    /// Logically empty the stack; the buffer is kept
    pub fn clear(&mut self) {
        self.len = 0;
    }
}

impl SequenceContainer for ArrayStack {
    fn to_sequence(&self) -> Vec<i64> {
        self.data[..self.len].iter().rev().copied().collect()
    }

    fn from_sequence(&mut self, seq: &[i64]) {
        self.clear();
        for &value in seq {
            if !self.push(value) {
                break;
            }
        }
    }

    #[inline]
    fn size(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> Option<usize> {
        Some(self.data.len())
    }
}

impl fmt::Debug for ArrayStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayStack")
            .field("len", &self.len)
            .field("capacity", &self.data.len())
            .field("top", &self.peek())
            .finish()
    }
}
