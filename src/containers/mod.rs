//! Integer containers used as sort sources and sinks
//!
//! Six elementary containers, array-backed and linked variants of a list, a
//! queue and a stack, all implementing [`SequenceContainer`]. The sort layer
//! only ever talks to that trait: unload to a sequence, sort it, load it back.
//!
//! ## Array-backed (fixed capacity)
//!
//! - **[`ArrayList`]** - contiguous buffer filled front to back
//! - **[`CircularQueue`]** - ring buffer with wrapping `front`/`rear`
//! - **[`ArrayStack`]** - contiguous buffer with a moving top
//!
//! Insertions beyond capacity are silently dropped.
//!
//! ## Linked (growable)
//!
//! - **[`LinkedList`]** - singly-linked chain with a maintained tail
//! - **[`LinkedQueue`]** - singly-linked chain with front and rear
//! - **[`LinkedStack`]** - singly-owned chain of boxed nodes
//!
//! # Examples
//!
//! ```rust
//! use sortlab::containers::{CircularQueue, SequenceContainer};
//!
//! let mut queue = CircularQueue::with_capacity(3);
//! queue.from_sequence(&[5, 6, 7, 9]);
//! assert_eq!(queue.size(), 3);
//! assert_eq!(queue.to_sequence(), vec![5, 6, 7]);
//! ```

mod array_list;
mod array_stack;
mod circular_queue;
mod linked_list;
mod linked_queue;
mod linked_stack;
mod node_arena;

pub use array_list::ArrayList;
pub use array_stack::ArrayStack;
pub use circular_queue::CircularQueue;
pub use linked_list::LinkedList;
pub use linked_queue::LinkedQueue;
pub use linked_stack::LinkedStack;
pub use node_arena::{NodeArena, NodeHandle};

use crate::error::{Result, SortlabError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Capability contract shared by every container variant.
///
/// `from_sequence` always discards the previous contents first, so a
/// container can be reused across benchmark iterations without leaking.
pub trait SequenceContainer: fmt::Debug + Send {
    /// Copy every stored value out in the container's natural traversal order
    fn to_sequence(&self) -> Vec<i64>;

    /// Replace the contents with `seq`, inserted in order
    fn from_sequence(&mut self, seq: &[i64]);

    /// Number of logically present elements
    fn size(&self) -> usize;

    /// Returns true if the container holds no elements
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Capacity limit, `None` for growable variants
    fn capacity(&self) -> Option<usize> {
        None
    }
}

/// Tag for the six container variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerKind {
    /// [`ArrayList`]
    ArrayList,
    /// [`LinkedList`]
    LinkedList,
    /// [`CircularQueue`]
    CircularQueue,
    /// [`LinkedQueue`]
    LinkedQueue,
    /// [`ArrayStack`]
    ArrayStack,
    /// [`LinkedStack`]
    LinkedStack,
}

impl ContainerKind {
    /// All variants in report order
    pub const ALL: [ContainerKind; 6] = [
        ContainerKind::ArrayList,
        ContainerKind::LinkedList,
        ContainerKind::CircularQueue,
        ContainerKind::LinkedQueue,
        ContainerKind::ArrayStack,
        ContainerKind::LinkedStack,
    ];

    /// Human readable structure name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::ArrayList => "Array List",
            Self::LinkedList => "Linked List",
            Self::CircularQueue => "Circular Queue",
            Self::LinkedQueue => "Linked Queue",
            Self::ArrayStack => "Array Stack",
            Self::LinkedStack => "Linked Stack",
        }
    }

    /// Short identifier, also accepted by [`FromStr`]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ArrayList => "array_list",
            Self::LinkedList => "linked_list",
            Self::CircularQueue => "circular_queue",
            Self::LinkedQueue => "linked_queue",
            Self::ArrayStack => "array_stack",
            Self::LinkedStack => "linked_stack",
        }
    }

    /// Whether the variant has a fixed capacity
    pub fn is_fixed_capacity(&self) -> bool {
        matches!(self, Self::ArrayList | Self::CircularQueue | Self::ArrayStack)
    }

    /// Storage family label used in reports ("linear" or "dynamic")
    pub fn storage_label(&self) -> &'static str {
        if self.is_fixed_capacity() {
            "linear"
        } else {
            "dynamic"
        }
    }

    /// Build an empty container of this kind.
    ///
    /// `capacity` only applies to fixed-capacity variants.
    pub fn create(&self, capacity: usize) -> Box<dyn SequenceContainer> {
        match self {
            Self::ArrayList => Box::new(ArrayList::with_capacity(capacity)),
            Self::LinkedList => Box::new(LinkedList::new()),
            Self::CircularQueue => Box::new(CircularQueue::with_capacity(capacity)),
            Self::LinkedQueue => Box::new(LinkedQueue::new()),
            Self::ArrayStack => Box::new(ArrayStack::with_capacity(capacity)),
            Self::LinkedStack => Box::new(LinkedStack::new()),
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ContainerKind {
    type Err = SortlabError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| SortlabError::configuration(format!("unknown container kind '{}'", s)))
    }
}
