//! Node: the linkage unit every chain in the crate is built from.

use slotmap::new_key_type;

new_key_type! {
    /// Arena slot of a data-bearing node.
    pub struct NodeKey;
}

/// Target of a link. The root sentinel lives outside the arena, so a link
/// names either the root of its chain or a pooled node.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Link {
    Root,
    Node(NodeKey),
}

impl Link {
    /// The arena key behind this link, `None` for the root.
    #[inline]
    pub fn node(self) -> Option<NodeKey> {
        match self {
            Link::Root => None,
            Link::Node(k) => Some(k),
        }
    }
}

/// Neighbor references. Both sides are absent on a freshly acquired node
/// and on a root that has not been initialized yet.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Links {
    pub next: Option<Link>,
    pub prev: Option<Link>,
}

impl Links {
    /// Links of an empty but initialized root: both sides point back at it.
    pub const fn self_referential() -> Self {
        Self {
            next: Some(Link::Root),
            prev: Some(Link::Root),
        }
    }

    pub const fn detached() -> Self {
        Self {
            next: None,
            prev: None,
        }
    }
}

#[derive(Debug)]
pub struct Node<T> {
    value: T,
    links: Links,
}

impl<T> Node<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            links: Links::detached(),
        }
    }

    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    #[inline]
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    #[inline]
    pub fn links(&self) -> &Links {
        &self.links
    }

    #[inline]
    pub fn links_mut(&mut self) -> &mut Links {
        &mut self.links
    }

    pub fn into_value(self) -> T {
        self.value
    }
}
