//! Chain: a circular doubly linked sequence anchored at a root sentinel,
//! with its nodes drawn from a `Pool`.
//!
//! Every node operation takes an `Option` receiver and is a no-op (or
//! returns `None`) when the receiver is absent or does not resolve. Callers
//! thread `Option<Link>` through navigation without checking each step.
//!
//! States of the root:
//! - uninitialized: both links absent, no pool may exist yet;
//! - empty: both links point at `Link::Root`;
//! - populated: `next` is the first node, `prev` the last.

use crate::iter::{Cursor, Direction};
use crate::node::{Link, Links, Node, NodeKey};
use crate::pool::Pool;
use core::mem;

pub struct Chain<T> {
    root: Links,
    pool: Option<Pool<T>>,
}

impl<T> Chain<T> {
    /// An uninitialized chain without a pool.
    pub const fn new() -> Self {
        Self {
            root: Links::detached(),
            pool: None,
        }
    }

    /// An uninitialized chain whose pool is reserved up front.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            root: Links::detached(),
            pool: Some(Pool::with_capacity(capacity)),
        }
    }

    /// Pool capacity, 0 before the pool exists.
    pub fn capacity(&self) -> usize {
        self.pool.as_ref().map_or(0, Pool::capacity)
    }

    /// Number of data nodes in the chain.
    pub fn len(&self) -> usize {
        self.pool.as_ref().map_or(0, Pool::len)
    }

    pub fn is_empty(&self) -> bool {
        self.pool.as_ref().map_or(true, Pool::is_empty)
    }

    /// Creates the pool if missing and makes an uninitialized root
    /// self-referential. Idempotent.
    pub fn lazy_init(&mut self) {
        self.pool.get_or_insert_with(Pool::new);
        if self.root.next.is_none() {
            self.root = Links::self_referential();
        }
    }

    fn node(&self, key: NodeKey) -> Option<&Node<T>> {
        self.pool.as_ref()?.get(key)
    }

    fn node_mut(&mut self, key: NodeKey) -> Option<&mut Node<T>> {
        self.pool.as_mut()?.get_mut(key)
    }

    fn links(&self, at: Option<Link>) -> Option<&Links> {
        match at? {
            Link::Root => Some(&self.root),
            Link::Node(k) => self.node(k).map(Node::links),
        }
    }

    fn links_mut(&mut self, at: Option<Link>) -> Option<&mut Links> {
        match at? {
            Link::Root => Some(&mut self.root),
            Link::Node(k) => self.node_mut(k).map(Node::links_mut),
        }
    }

    /// Value at `at`; `None` for an absent link or the root.
    pub fn value(&self, at: Option<Link>) -> Option<&T> {
        self.node(at?.node()?).map(Node::value)
    }

    pub fn value_mut(&mut self, at: Option<Link>) -> Option<&mut T> {
        self.node_mut(at?.node()?).map(Node::value_mut)
    }

    /// Replaces the value at `at` and returns the previous one. When `at`
    /// does not resolve to a node, `value` is dropped and `None` returned.
    pub fn set_value(&mut self, at: Option<Link>, value: T) -> Option<T> {
        self.value_mut(at).map(|slot| mem::replace(slot, value))
    }

    pub fn next(&self, at: Option<Link>) -> Option<Link> {
        self.links(at)?.next
    }

    pub fn prev(&self, at: Option<Link>) -> Option<Link> {
        self.links(at)?.prev
    }

    pub fn set_next(&mut self, at: Option<Link>, next: Option<Link>) {
        if let Some(links) = self.links_mut(at) {
            links.next = next;
        }
    }

    pub fn set_prev(&mut self, at: Option<Link>, prev: Option<Link>) {
        if let Some(links) = self.links_mut(at) {
            links.prev = prev;
        }
    }

    /// First node, or the root itself when empty.
    pub fn first(&self) -> Option<Link> {
        self.root.next
    }

    /// Last node, or the root itself when empty.
    pub fn last(&self) -> Option<Link> {
        self.root.prev
    }

    /// Splices `node` between `at` and its current successor. `at` must
    /// already sit in a circular chain so that its successor exists.
    pub fn insert_after(&mut self, at: Option<Link>, node: NodeKey) {
        let Some(next) = self.next(at) else {
            return;
        };
        let new = Some(Link::Node(node));
        self.set_prev(new, at);
        self.set_next(new, Some(next));
        self.set_prev(Some(next), new);
        self.set_next(at, new);
        debug_assert_eq!(self.prev(self.next(new)), new);
    }

    /// Bridges the neighbors of `node` over it. The node's own links are
    /// left as they were.
    pub fn unlink(&mut self, node: Option<NodeKey>) {
        let at = node.map(Link::Node);
        let Some(&Links { next, prev }) = self.links(at) else {
            return;
        };
        self.set_prev(next, prev);
        self.set_next(prev, next);
    }

    /// Acquires a node for `value` and splices it after `at`. Nothing is
    /// inserted when `at` is absent or not yet part of a chain.
    pub fn insert(&mut self, at: Option<Link>, value: T) -> Option<NodeKey> {
        self.next(at)?;
        let node = self.pool.as_mut()?.acquire(value);
        self.insert_after(at, node);
        Some(node)
    }

    /// Unlinks `node` and releases it to the pool, yielding its value.
    pub fn remove(&mut self, node: Option<NodeKey>) -> Option<T> {
        let key = node?;
        self.node(key)?;
        self.unlink(Some(key));
        self.pool.as_mut()?.release(key)
    }

    pub fn push_front(&mut self, value: T) -> Option<NodeKey> {
        self.lazy_init();
        self.insert(Some(Link::Root), value)
    }

    pub fn push_back(&mut self, value: T) -> Option<NodeKey> {
        self.lazy_init();
        let tail = self.last();
        self.insert(tail, value)
    }

    /// Node at position `i`, walking from whichever end is closer.
    pub fn get(&self, i: usize) -> Option<NodeKey> {
        let len = self.len();
        if i >= len {
            return None;
        }
        let mut at;
        if i <= len / 2 {
            at = self.first();
            for _ in 0..i {
                at = self.next(at);
            }
        } else {
            at = self.last();
            for _ in 0..len - 1 - i {
                at = self.prev(at);
            }
        }
        at?.node()
    }

    /// Borrowing traversal in the given direction.
    pub fn values(&self, dir: Direction) -> impl Iterator<Item = &T> + '_ {
        let mut cursor = Cursor::new(dir);
        core::iter::from_fn(move || {
            if cursor.advance(self) {
                cursor.value(self)
            } else {
                None
            }
        })
    }

    /// Walks the chain forward and checks that every step is mirrored by
    /// the reverse link and that exactly `len()` nodes are visited.
    #[cfg(test)]
    pub fn is_consistent(&self) -> bool {
        let Some(mut at) = self.first() else {
            return self.last().is_none() && self.is_empty();
        };
        let mut seen = 0usize;
        while at != Link::Root {
            match self.next(Some(at)) {
                Some(next) if self.prev(Some(next)) == Some(at) => {
                    seen += 1;
                    if seen > self.len() {
                        return false;
                    }
                    at = next;
                }
                _ => return false,
            }
        }
        self.prev(self.first()) == Some(Link::Root) && seen == self.len()
    }
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Self::new()
    }
}
