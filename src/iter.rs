//! Single-pass bidirectional traversal of a chain.
//!
//! The protocol is cursor style: `advance()` moves to the next element and
//! reports whether one existed, then `value()` reads it. A fresh iterator
//! sits on the root sentinel, so the first `advance()` moves onto the first
//! element. Once a full cycle is completed the iterator is exhausted for good.

use crate::chain::Chain;
use crate::node::Link;
use parking_lot::MappedRwLockReadGuard;

/// Direction of travel around the chain.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    /// Front to back (insertion order for maps).
    Forward,
    /// Back to front.
    Reverse,
}

/// Position within a chain plus the stop condition. Holds no borrow; the
/// chain is passed in on each step.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Cursor {
    dir: Direction,
    current: Link,
    stop: Link,
}

impl Cursor {
    /// A cursor parked on the root sentinel.
    pub(crate) fn new(dir: Direction) -> Self {
        Self {
            dir,
            current: Link::Root,
            stop: Link::Root,
        }
    }

    /// Moves one step. Stays put and returns false when the neighbor is
    /// absent or is the sentinel the traversal started from.
    pub(crate) fn advance<T>(&mut self, chain: &Chain<T>) -> bool {
        let at = Some(self.current);
        let next = match self.dir {
            Direction::Forward => chain.next(at),
            Direction::Reverse => chain.prev(at),
        };
        match next {
            Some(next) if next != self.stop => {
                self.current = next;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn value<'c, T>(&self, chain: &'c Chain<T>) -> Option<&'c T> {
        chain.value(Some(self.current))
    }
}

/// Iterator over a locked chain.
///
/// The structure's read lock is held until the iterator is dropped. Other
/// threads can keep reading; writers wait. Read-only calls on the same
/// structure are fine while the iterator is alive, but calling a mutating
/// method from the thread holding it deadlocks.
pub struct Iter<'a, T> {
    chain: MappedRwLockReadGuard<'a, Chain<T>>,
    cursor: Cursor,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(chain: MappedRwLockReadGuard<'a, Chain<T>>, dir: Direction) -> Self {
        Self {
            chain,
            cursor: Cursor::new(dir),
        }
    }

    /// Moves to the next element; false once the traversal is complete.
    pub fn advance(&mut self) -> bool {
        self.cursor.advance(&*self.chain)
    }

    /// Value at the current position. `None` until `advance()` has
    /// returned true.
    pub fn value(&self) -> Option<&T> {
        self.cursor.value(&*self.chain)
    }
}

impl<'a, T: Clone> Iterator for Iter<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.advance() {
            self.value().cloned()
        } else {
            None
        }
    }
}
