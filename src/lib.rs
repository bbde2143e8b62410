//! pooled-collections: a doubly linked list and an insertion-ordered map
//! that share one node-recycling allocator.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: linked containers without per-operation heap churn. Nodes are
//!   drawn from an arena and returned to it on removal, so a structure at a
//!   steady size never reallocates.
//! - Layers:
//!   - Node: one value plus `next`/`prev` links. A link names either the
//!     root sentinel or an arena slot (`Link::Root` / `Link::Node`).
//!   - Pool: the arena (`SlotMap`) with LIFO reuse of released slots.
//!   - Chain: a circular chain anchored at a root sentinel that is never a
//!     data node. Empty means the root points at itself.
//!   - Iter: a cursor that walks the chain once in either direction.
//!   - List<T> and OrderedMap<K, V, S>: public structures, each a chain
//!     behind one `parking_lot::RwLock`.
//!
//! Constraints
//! - One lock per structure, held for exactly one public call. Readers
//!   (`front`, `back`, `get`, `load`, `len`) share it; writers are exclusive.
//! - Iterators hold the read lock for their whole lifetime. Mutating the
//!   same structure from the thread that owns a live iterator deadlocks.
//! - Shared-mode calls take the lock recursively, so reading the same
//!   structure while iterating it is safe even with a writer queued.
//! - Nothing here fails: out-of-range positions and absent keys read as
//!   `None` and make mutations no-ops.
//!
//! Absent links
//! - Node operations in the chain take `Option<Link>` receivers and do
//!   nothing (or return `None`) on `None`, so navigation composes without
//!   presence checks at every step.
//!
//! Lazy initialization
//! - `new()` allocates nothing. The first mutation creates the default
//!   pool (16 nodes) and makes the root self-referential.
//!   `with_capacity(n)` reserves the pool up front.
//!
//! Duplicate keys
//! - `OrderedMap::store` on an existing key replaces the value in the
//!   existing node and keeps its position. Every indexed key owns exactly
//!   one chained node and vice versa.
//!
//! Hashing
//! - Each map entry stores its precomputed `u64` hash; index growth uses the
//!   stored hash. Caller keys are hashed before the lock is taken.

mod chain;
#[cfg(test)]
mod chain_proptest;
pub mod iter;
pub mod list;
mod node;
pub mod ordered_map;

#[cfg(feature = "bench_internal")]
pub mod pool;
#[cfg(not(feature = "bench_internal"))]
mod pool;

// Public surface
pub use iter::Direction;
pub use list::List;
pub use ordered_map::OrderedMap;
