//! OrderedMap: hash index over a pooled chain that remembers insertion order.
//!
//! The index is a `HashTable<NodeKey>`; keys and their precomputed hashes
//! live in the chained entries. Rehashing always uses the stored hash, and
//! the caller's key is hashed before the lock is taken, so `K: Hash` never
//! runs inside the critical section. `K: Eq` does run under the lock during
//! probing.

use crate::chain::Chain;
use crate::iter::{self, Direction};
use crate::node::{Link, NodeKey};
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::mem;
use hashbrown::hash_table::Entry as TableEntry;
use hashbrown::HashTable;
use parking_lot::{RwLock, RwLockReadGuard};
use std::collections::hash_map::RandomState;

#[derive(Debug)]
pub(crate) struct Entry<K, V> {
    key: K,
    value: V,
    hash: u64,
}

struct Inner<K, V> {
    index: HashTable<NodeKey>,
    chain: Chain<Entry<K, V>>,
}

impl<K, V> Inner<K, V> {
    fn entry(&self, node: NodeKey) -> Option<&Entry<K, V>> {
        self.chain.value(Some(Link::Node(node)))
    }

    fn find<Q>(&self, hash: u64, q: &Q) -> Option<NodeKey>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        self.index
            .find(hash, |&k| self.entry(k).is_some_and(|e| e.key.borrow() == q))
            .copied()
    }

    /// Overwrites in place when the key exists (order unchanged), otherwise
    /// appends a new node at the tail.
    fn store(&mut self, hash: u64, key: K, value: V) -> Option<V>
    where
        K: Eq,
    {
        let Inner { index, chain } = self;
        chain.lazy_init();
        let probe = index.entry(
            hash,
            |&k| {
                chain
                    .value(Some(Link::Node(k)))
                    .is_some_and(|e| e.key == key)
            },
            |&k| chain.value(Some(Link::Node(k))).map_or(0, |e| e.hash),
        );
        let prev = match probe {
            TableEntry::Occupied(o) => {
                let at = Some(Link::Node(*o.get()));
                chain
                    .value_mut(at)
                    .map(|e| mem::replace(&mut e.value, value))
            }
            TableEntry::Vacant(v) => {
                let tail = chain.last();
                if let Some(node) = chain.insert(tail, Entry { key, value, hash }) {
                    v.insert(node);
                }
                None
            }
        };
        debug_assert_eq!(index.len(), chain.len());
        prev
    }

    fn delete<Q>(&mut self, hash: u64, q: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        let Inner { index, chain } = self;
        let found = index
            .find_entry(hash, |&k| {
                chain
                    .value(Some(Link::Node(k)))
                    .is_some_and(|e| e.key.borrow() == q)
            })
            .ok()?;
        let (node, _) = found.remove();
        let removed = chain.remove(Some(node)).map(|e| e.value);
        debug_assert_eq!(index.len(), chain.len());
        removed
    }
}

/// A hash map that iterates in insertion order.
///
/// Point operations are O(1) on average; iteration walks a linked chain of
/// pooled nodes. Storing an existing key replaces its value and keeps its
/// original position. Deleting releases the node back to the pool so a
/// later store can reuse it.
pub struct OrderedMap<K, V, S = RandomState> {
    hasher: S,
    inner: RwLock<Inner<K, V>>,
}

impl<K, V> OrderedMap<K, V>
where
    K: Eq + Hash,
{
    /// An empty map; the pool is created by the first store.
    pub fn new() -> Self {
        Self::with_hasher(Default::default())
    }

    /// A map with index and pool room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, Default::default())
    }
}

impl<K, V> Default for OrderedMap<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> OrderedMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            hasher,
            inner: RwLock::new(Inner {
                index: HashTable::new(),
                chain: Chain::new(),
            }),
        }
    }

    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            hasher,
            inner: RwLock::new(Inner {
                index: HashTable::with_capacity(capacity),
                chain: Chain::with_capacity(capacity),
            }),
        }
    }

    fn make_hash<Q>(&self, q: &Q) -> u64
    where
        Q: ?Sized + Hash,
    {
        self.hasher.hash_one(q)
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.inner.read_recursive().index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pool capacity; 0 for a lazily constructed map that was never stored to.
    pub fn capacity(&self) -> usize {
        self.inner.read_recursive().chain.capacity()
    }

    /// Stores `value` under `key`. A new key goes to the end of the
    /// iteration order; an existing key keeps its position and the
    /// previous value is returned.
    pub fn store(&self, key: K, value: V) -> Option<V> {
        let hash = self.make_hash(&key);
        self.inner.write().store(hash, key, value)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let hash = self.make_hash(key);
        self.inner.read_recursive().find(hash, key).is_some()
    }

    /// Removes `key` and returns its value; no-op when absent.
    pub fn delete<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let hash = self.make_hash(key);
        self.inner.write().delete(hash, key)
    }

    /// Oldest-to-newest iterator. Holds the read lock until dropped, so do
    /// not mutate this map from the same thread while it is alive. Reads are
    /// fine.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.iter_in(Direction::Forward)
    }

    /// Newest-to-oldest iterator, same locking rules as [`OrderedMap::iter`].
    pub fn riter(&self) -> Iter<'_, K, V> {
        self.iter_in(Direction::Reverse)
    }

    fn iter_in(&self, dir: Direction) -> Iter<'_, K, V> {
        let chain = RwLockReadGuard::map(self.inner.read_recursive(), |i| &i.chain);
        Iter {
            inner: iter::Iter::new(chain, dir),
        }
    }
}

impl<K, V, S> OrderedMap<K, V, S>
where
    K: Eq + Hash,
    V: Clone,
    S: BuildHasher,
{
    /// Value stored under `key`, if any.
    pub fn load<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let hash = self.make_hash(key);
        let inner = self.inner.read_recursive();
        let node = inner.find(hash, key)?;
        inner.entry(node).map(|e| e.value.clone())
    }
}

/// Insertion-order iterator over an [`OrderedMap`].
///
/// Same protocol as [`crate::list::Iter`]: call `advance()` before reading
/// `key()`/`value()`.
pub struct Iter<'a, K, V> {
    inner: iter::Iter<'a, Entry<K, V>>,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub fn advance(&mut self) -> bool {
        self.inner.advance()
    }

    pub fn key(&self) -> Option<&K> {
        self.inner.value().map(|e| &e.key)
    }

    pub fn value(&self) -> Option<&V> {
        self.inner.value().map(|e| &e.value)
    }
}

impl<'a, K, V: Clone> Iterator for Iter<'a, K, V> {
    type Item = V;

    fn next(&mut self) -> Option<V> {
        if self.advance() {
            self.value().cloned()
        } else {
            None
        }
    }
}

impl<K, V, S> fmt::Debug for OrderedMap<K, V, S>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.read_recursive();
        f.debug_map()
            .entries(
                inner
                    .chain
                    .values(Direction::Forward)
                    .map(|e| (&e.key, &e.value)),
            )
            .finish()
    }
}

impl<K, V, S> Extend<(K, V)> for OrderedMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            let hash = self.make_hash(&key);
            self.inner.get_mut().store(hash, key, value);
        }
    }
}

impl<K, V, S> FromIterator<(K, V)> for OrderedMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = OrderedMap::with_hasher(S::default());
        map.extend(iter);
        map
    }
}
