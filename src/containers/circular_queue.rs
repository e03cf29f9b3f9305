//! Fixed-capacity circular queue
//!
//! A ring buffer with wrapping `front` and `rear` indices. `rear` starts one
//! slot before `front` (at `capacity - 1`), so the first enqueue lands at
//! index 0 and `front..=rear` always spans the live elements modulo capacity.

use super::SequenceContainer;
use std::fmt;

/// Fixed-size circular queue over `i64`
///
/// # Performance Characteristics
///
/// - **O(1) enqueue/dequeue** with no allocation after construction
/// - **Silent overflow** - enqueue on a full queue is dropped
///
/// # Examples
///
/// ```rust
/// use sortlab::containers::{CircularQueue, SequenceContainer};
///
/// let mut queue = CircularQueue::with_capacity(2);
/// queue.enqueue(1);
/// queue.enqueue(2);
/// assert_eq!(queue.dequeue(), Some(1));
/// queue.enqueue(3);
/// assert_eq!(queue.to_sequence(), vec![2, 3]);
/// ```
pub struct CircularQueue {
    /// Ring buffer storage
    data: Box<[i64]>,
    /// Read position
    front: usize,
    /// Position of the most recently enqueued value
    rear: usize,
    /// Current number of elements
    len: usize,
}

impl CircularQueue {
    /// Create an empty queue holding at most `capacity` values
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: vec![0; capacity].into_boxed_slice(),
            front: 0,
            rear: capacity.saturating_sub(1),
            len: 0,
        }
    }

    /// Returns the capacity of the queue
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the queue is full
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.data.len()
    }

    /// Add a value at the rear. Returns `false` if the queue is full.
    #[inline]
    pub fn enqueue(&mut self, value: i64) -> bool {
        if self.is_full() {
            return false;
        }
        self.rear = (self.rear + 1) % self.data.len();
        self.data[self.rear] = value;
        self.len += 1;
        true
    }

    /// Remove and return the front value, `None` when empty
    #[inline]
    pub fn dequeue(&mut self) -> Option<i64> {
        if self.len == 0 {
            return None;
        }
        let value = self.data[self.front];
        self.front = (self.front + 1) % self.data.len();
        self.len -= 1;
        Some(value)
    }

    /// Front value without removing it
    pub fn peek(&self) -> Option<i64> {
        if self.len == 0 {
            None
        } else {
            Some(self.data[self.front])
        }
    }

    /// Reset indices; the buffer is kept
    pub fn clear(&mut self) {
        self.front = 0;
        self.rear = self.data.len().saturating_sub(1);
        self.len = 0;
    }

    /// Iterate front to rear
    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        let cap = self.data.len();
        (0..self.len).map(move |i| self.data[(self.front + i) % cap])
    }
}

impl SequenceContainer for CircularQueue {
    fn to_sequence(&self) -> Vec<i64> {
        self.iter().collect()
    }

    fn from_sequence(&mut self, seq: &[i64]) {
        self.clear();
        for &value in seq {
            if !self.enqueue(value) {
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

impl fmt::Debug for CircularQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircularQueue")
            .field("len", &self.len)
            .field("capacity", &self.data.len())
            .field("front", &self.front)
            .field("rear", &self.rear)
            .finish()
    }
}
