//! List: a positional doubly linked list behind a reader-writer lock.
//!
//! Each public call takes the lock once: reads in shared mode, mutations
//! exclusively. Calls do not compose into transactions.

use crate::chain::Chain;
use crate::iter::Direction;
use crate::node::Link;
use core::fmt;
use parking_lot::{RwLock, RwLockReadGuard};

pub use crate::iter::Iter;

/// A doubly linked list whose nodes are recycled through a pool.
///
/// `List::new()` allocates nothing; the pool (default capacity 16) and the
/// root sentinel are created by the first push. `List::with_capacity(n)`
/// reserves room for `n` nodes up front.
///
/// Out-of-range positions are not errors: reads return `None` and
/// positional mutations do nothing.
pub struct List<T> {
    chain: RwLock<Chain<T>>,
}

impl<T> List<T> {
    pub fn new() -> Self {
        Self {
            chain: RwLock::new(Chain::new()),
        }
    }

    /// A list whose pool has room for `capacity` nodes before it grows.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            chain: RwLock::new(Chain::with_capacity(capacity)),
        }
    }

    pub fn len(&self) -> usize {
        self.chain.read_recursive().len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.read_recursive().is_empty()
    }

    /// Pool capacity; 0 for a lazily constructed list that was never pushed to.
    pub fn capacity(&self) -> usize {
        self.chain.read_recursive().capacity()
    }

    /// Front-to-back iterator. Holds the read lock until dropped, so do not
    /// mutate this list from the same thread while it is alive. Reads are fine.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(
            RwLockReadGuard::map(self.chain.read_recursive(), |c| c),
            Direction::Forward,
        )
    }

    /// Back-to-front iterator, same locking rules as [`List::iter`].
    pub fn riter(&self) -> Iter<'_, T> {
        Iter::new(
            RwLockReadGuard::map(self.chain.read_recursive(), |c| c),
            Direction::Reverse,
        )
    }

    pub fn push_front(&self, value: T) {
        self.chain.write().push_front(value);
    }

    pub fn push_back(&self, value: T) {
        self.chain.write().push_back(value);
    }

    /// Inserts after the element at `i`. No-op when `i >= len()`.
    pub fn push_after(&self, i: usize, value: T) {
        let mut chain = self.chain.write();
        let at = chain.get(i).map(Link::Node);
        chain.insert(at, value);
    }

    /// Inserts before the element at `i`. No-op when `i >= len()`.
    pub fn push_before(&self, i: usize, value: T) {
        let mut chain = self.chain.write();
        let at = chain.get(i).map(Link::Node);
        let before = chain.prev(at);
        chain.insert(before, value);
    }

    pub fn pop_front(&self) -> Option<T> {
        let mut chain = self.chain.write();
        let first = chain.first().and_then(Link::node);
        chain.remove(first)
    }

    pub fn pop_back(&self) -> Option<T> {
        let mut chain = self.chain.write();
        let last = chain.last().and_then(Link::node);
        chain.remove(last)
    }

    /// Replaces the element at `i` and returns the previous value; `value`
    /// is dropped when `i >= len()`.
    pub fn set(&self, i: usize, value: T) -> Option<T> {
        let mut chain = self.chain.write();
        let at = chain.get(i).map(Link::Node);
        chain.set_value(at, value)
    }

    /// Removes and returns the element at `i`; `None` when `i >= len()`.
    pub fn remove(&self, i: usize) -> Option<T> {
        let mut chain = self.chain.write();
        let at = chain.get(i);
        chain.remove(at)
    }
}

impl<T: Clone> List<T> {
    pub fn front(&self) -> Option<T> {
        let chain = self.chain.read_recursive();
        chain.value(chain.first()).cloned()
    }

    pub fn back(&self) -> Option<T> {
        let chain = self.chain.read_recursive();
        chain.value(chain.last()).cloned()
    }

    /// Element at `i`, walking from whichever end is closer.
    pub fn get(&self, i: usize) -> Option<T> {
        let chain = self.chain.read_recursive();
        chain.value(chain.get(i).map(Link::Node)).cloned()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chain = self.chain.read_recursive();
        f.debug_list()
            .entries(chain.values(Direction::Forward))
            .finish()
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let chain = self.chain.get_mut();
        for value in iter {
            chain.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}
