//! Fixed-capacity array list

use super::SequenceContainer;
use std::fmt;

/// Contiguous list with a capacity fixed at construction.
///
/// The buffer is allocated once; `add` past capacity is dropped and
/// reported by returning `false`.
///
/// # Examples
///
/// ```rust
/// use sortlab::containers::{ArrayList, SequenceContainer};
///
/// let mut list = ArrayList::with_capacity(2);
/// assert!(list.add(4));
/// assert!(list.add(8));
/// assert!(!list.add(15));
/// assert_eq!(list.to_sequence(), vec![4, 8]);
/// ```
pub struct ArrayList {
    data: Box<[i64]>,
    len: usize,
}

impl ArrayList {
    /// Create an empty list holding at most `capacity` values
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: vec![0; capacity].into_boxed_slice(),
            len: 0,
        }
    }

    /// Append a value. Returns `false` if the list is full.
    #[inline]
    pub fn add(&mut self, value: i64) -> bool {
        if self.len >= self.data.len() {
            return false;
        }
        self.data[self.len] = value;
        self.len += 1;
        true
    }

    /// Value at `index`, if present
    #[inline]
    pub fn get(&self, index: usize) -> Option<i64> {
        self.as_slice().get(index).copied()
    }

    /// Remove and return the last value
    pub fn remove_last(&mut self) -> Option<i64> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(self.data[self.len])
    }

    /// Stored values in storage order
    #[inline]
    pub fn as_slice(&self) -> &[i64] {
        &self.data[..self.len]
    }

    /// Returns true if no more values fit
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.data.len()
    }

    /// Logically empty the list; the buffer is kept
    pub fn clear(&mut self) {
        self.len = 0;
    }
}

impl SequenceContainer for ArrayList {
    fn to_sequence(&self) -> Vec<i64> {
        self.as_slice().to_vec()
    }

    fn from_sequence(&mut self, seq: &[i64]) {
        self.clear();
        for &value in seq {
            if !self.add(value) {
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

impl fmt::Debug for ArrayList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayList")
            .field("len", &self.len)
            .field("capacity", &self.data.len())
            .field("data", &self.as_slice())
            .finish()
    }
}
