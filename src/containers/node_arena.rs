//! Handle-indexed node storage for the linked containers
//!
//! Nodes live in a `Vec` of slots and link to each other by [`NodeHandle`]
//! rather than by pointer. A container owns its arena outright, so clearing
//! the arena drops every node at once and nothing can outlive the container.
//! Released slots go onto an intrusive free list and are reused by the next
//! allocation.

/// Index of a node inside a [`NodeArena`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle(usize);

impl NodeHandle {
    /// Raw slot index
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug)]
struct Node {
    value: i64,
    next: Option<NodeHandle>,
}

#[derive(Debug)]
enum Slot {
    Occupied(Node),
    Vacant { next_free: Option<NodeHandle> },
}

/// Slab of singly-linked integer nodes
#[derive(Debug, Default)]
pub struct NodeArena {
    slots: Vec<Slot>,
    free_head: Option<NodeHandle>,
    live: usize,
}

impl NodeArena {
    /// Create an empty arena
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an arena with room for `capacity` nodes before reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            live: 0,
        }
    }

    /// Number of live nodes
    #[inline]
    pub fn len(&self) -> usize {
        self.live
    }

    /// Returns true if no node is live
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Allocate an unlinked node holding `value`
    pub fn alloc(&mut self, value: i64) -> NodeHandle {
        let node = Node { value, next: None };
        self.live += 1;

        match self.free_head {
            Some(handle) => {
                let slot = &mut self.slots[handle.0];
                self.free_head = match slot {
                    Slot::Vacant { next_free } => *next_free,
                    Slot::Occupied(_) => unreachable!("free list points at an occupied slot"),
                };
                *slot = Slot::Occupied(node);
                handle
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                NodeHandle(self.slots.len() - 1)
            }
        }
    }

    /// Release a node, returning its value and its successor link.
    ///
    /// Returns `None` if the handle does not name a live node.
    pub fn release(&mut self, handle: NodeHandle) -> Option<(i64, Option<NodeHandle>)> {
        let slot = self.slots.get_mut(handle.0)?;
        if matches!(slot, Slot::Vacant { .. }) {
            return None;
        }

        let old = std::mem::replace(slot, Slot::Vacant { next_free: self.free_head });
        self.free_head = Some(handle);
        self.live -= 1;

        match old {
            Slot::Occupied(node) => Some((node.value, node.next)),
            Slot::Vacant { .. } => None,
        }
    }

    /// Value stored at `handle`
    #[inline]
    pub fn value(&self, handle: NodeHandle) -> Option<i64> {
        match self.slots.get(handle.0) {
            Some(Slot::Occupied(node)) => Some(node.value),
            _ => None,
        }
    }

    /// Successor of `handle`
    #[inline]
    pub fn next(&self, handle: NodeHandle) -> Option<NodeHandle> {
        match self.slots.get(handle.0) {
            Some(Slot::Occupied(node)) => node.next,
            _ => None,
        }
    }

    /// Point `handle` at `next`. No-op on a vacant handle.
    #[inline]
    pub fn set_next(&mut self, handle: NodeHandle, next: Option<NodeHandle>) {
        if let Some(Slot::Occupied(node)) = self.slots.get_mut(handle.0) {
            node.next = next;
        }
    }

    /// Walk the chain starting at `head`
    pub fn iter_from(&self, head: Option<NodeHandle>) -> ChainIter<'_> {
        ChainIter { arena: self, cursor: head }
    }

    /// Drop every node and forget the free list
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.live = 0;
    }
}

/// Iterator over the values of a chain in link order
#[derive(Debug)]
pub struct ChainIter<'a> {
    arena: &'a NodeArena,
    cursor: Option<NodeHandle>,
}

impl Iterator for ChainIter<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let handle = self.cursor?;
        self.cursor = self.arena.next(handle);
        self.arena.value(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_and_link() {
        let mut arena = NodeArena::new();
        let a = arena.alloc(1);
        let b = arena.alloc(2);
        let c = arena.alloc(3);
        arena.set_next(a, Some(b));
        arena.set_next(b, Some(c));

        assert_eq!(arena.len(), 3);
        assert_eq!(arena.iter_from(Some(a)).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(arena.iter_from(None).count(), 0);
    }

    #[test]
    fn test_release_reuses_slot() {
        let mut arena = NodeArena::new();
        let a = arena.alloc(10);
        let b = arena.alloc(20);
        arena.set_next(a, Some(b));

        assert_eq!(arena.release(a), Some((10, Some(b))));
        assert_eq!(arena.len(), 1);
        assert_eq!(arena.value(a), None);
        assert_eq!(arena.release(a), None);

        let c = arena.alloc(30);
        assert_eq!(c, a);
        assert_eq!(arena.value(c), Some(30));
        assert_eq!(arena.next(c), None);
    }

    #[test]
    fn test_clear_drops_everything() {
        let mut arena = NodeArena::with_capacity(4);
        for v in 0..4 {
            arena.alloc(v);
        }
        arena.clear();
        assert!(arena.is_empty());
        assert_eq!(arena.alloc(7).index(), 0);
    }
}
