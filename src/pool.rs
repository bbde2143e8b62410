//! Pool: node arena that recycles released slots.
//!
//! Storage is a `SlotMap`. Released slots go onto the map's internal free
//! list and the most recently released one is handed out first, so churn
//! at a steady size never touches the allocator. When no free slot exists
//! the backing vector grows geometrically.

use crate::node::{Node, NodeKey};
use slotmap::SlotMap;

/// Capacity used when a structure creates its pool lazily.
pub const DEFAULT_CAPACITY: usize = 16;

pub struct Pool<T> {
    nodes: SlotMap<NodeKey, Node<T>>,
}

impl<T> Pool<T> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: SlotMap::with_capacity_and_key(capacity),
        }
    }

    /// Number of nodes the arena holds without reallocating.
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Number of acquired (live) nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Hands out a node holding `value` with both links absent.
    pub fn acquire(&mut self, value: T) -> NodeKey {
        self.nodes.insert(Node::new(value))
    }

    /// Returns the node's slot to the free list and yields its value.
    /// A key that is not live is ignored.
    pub fn release(&mut self, key: NodeKey) -> Option<T> {
        self.nodes.remove(key).map(Node::into_value)
    }

    #[inline]
    pub fn get(&self, key: NodeKey) -> Option<&Node<T>> {
        self.nodes.get(key)
    }

    #[inline]
    pub fn get_mut(&mut self, key: NodeKey) -> Option<&mut Node<T>> {
        self.nodes.get_mut(key)
    }
}

impl<T> Default for Pool<T> {
    fn default() -> Self {
        Self::new()
    }
}
